//! Interprets renderer markup into styled lines.
//!
//! The dialect is the small HTML-like subset produced by [`super::convert`]
//! plus the `<font color>` tag used by the document footer. Bold and italic
//! are independent counters rather than a tag stack, so the crossing tags
//! that unbalanced emphasis markers produce (`<b>a<i>b</b>c</i>`) are legal.
//!
//! A `<` or `&` that does not form tag or entity syntax is kept as literal
//! text. Syntax that is well formed but not understood is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::color::Rgb;

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<(/?)([A-Za-z][A-Za-z0-9]*)((?:\s+[^<>]*?)?)\s*(/?)>").expect("tag pattern is valid")
});

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(#[0-9]{1,7}|#[xX][0-9A-Fa-f]{1,6}|[A-Za-z][A-Za-z0-9]*);")
        .expect("entity pattern is valid")
});

static COLOR_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bcolor\s*=\s*["']?([^"'\s>]+)["']?"#).expect("color pattern is valid")
});

/// Errors raised while interpreting markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("unknown tag <{0}>")]
    UnknownTag(String),

    #[error("unknown entity &{0};")]
    UnknownEntity(String),

    #[error("closing tag </{0}> has no matching opening tag")]
    UnbalancedClose(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid character reference &{0};")]
    InvalidCodePoint(String),
}

/// Visual style of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    /// Overrides the paragraph color when set.
    pub color: Option<Rgb>,
}

#[cfg(test)]
impl TextStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }
}

/// A maximal stretch of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: TextStyle,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One hard line of a paragraph (ended by `<br/>` or the end of input).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkupLine {
    pub runs: Vec<StyledRun>,
}

#[cfg(test)]
impl MarkupLine {
    /// Concatenated text of every run.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }
}

/// Parses markup into hard lines of styled runs.
///
/// Always yields at least one (possibly empty) line. Runs of breakable
/// whitespace collapse to a single space and are trimmed at line starts.
pub fn parse_markup(markup: &str) -> Result<Vec<MarkupLine>, MarkupError> {
    let mut interpreter = Interpreter::default();
    let mut rest = markup;

    while let Some(c) = rest.chars().next() {
        if c == '<' {
            if let Some(caps) = TAG.captures(rest) {
                let closing = !caps[1].is_empty();
                let name = caps[2].to_ascii_lowercase();
                let attrs = caps.get(3).map_or("", |m| m.as_str());
                interpreter.apply_tag(closing, &name, attrs)?;
                rest = &rest[caps[0].len()..];
                continue;
            }
        } else if c == '&' {
            if let Some(caps) = ENTITY.captures(rest) {
                interpreter.push_char(decode_entity(&caps[1])?);
                rest = &rest[caps[0].len()..];
                continue;
            }
        }

        interpreter.push_char(c);
        rest = &rest[c.len_utf8()..];
    }

    Ok(interpreter.finish())
}

#[derive(Default)]
struct Interpreter {
    lines: Vec<MarkupLine>,
    current: MarkupLine,
    buffer: String,
    bold_depth: u32,
    italic_depth: u32,
    colors: Vec<Option<Rgb>>,
    last_char: Option<char>,
}

impl Interpreter {
    fn style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold_depth > 0,
            italic: self.italic_depth > 0,
            color: self.colors.last().copied().flatten(),
        }
    }

    fn push_char(&mut self, c: char) {
        if is_breakable_space(c) {
            if matches!(self.last_char, None | Some(' ')) {
                return;
            }
            self.buffer.push(' ');
            self.last_char = Some(' ');
        } else {
            self.buffer.push(c);
            self.last_char = Some(c);
        }
    }

    /// Moves buffered text into a run carrying the style in force.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        let style = self.style();
        match self.current.runs.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.current.runs.push(StyledRun::new(text, style)),
        }
    }

    fn break_line(&mut self) {
        self.flush();
        self.lines.push(std::mem::take(&mut self.current));
        self.last_char = None;
    }

    fn apply_tag(&mut self, closing: bool, name: &str, attrs: &str) -> Result<(), MarkupError> {
        match name {
            "br" => self.break_line(),
            "b" | "strong" => {
                self.flush();
                adjust_depth(&mut self.bold_depth, closing, name)?;
            }
            "i" | "em" => {
                self.flush();
                adjust_depth(&mut self.italic_depth, closing, name)?;
            }
            "font" => {
                self.flush();
                if closing {
                    self.colors
                        .pop()
                        .ok_or_else(|| MarkupError::UnbalancedClose(name.to_string()))?;
                } else {
                    let color = match COLOR_ATTR.captures(attrs) {
                        Some(caps) => Some(
                            Rgb::from_hex(&caps[1])
                                .ok_or_else(|| MarkupError::InvalidColor(caps[1].to_string()))?,
                        ),
                        None => self.colors.last().copied().flatten(),
                    };
                    self.colors.push(color);
                }
            }
            other => return Err(MarkupError::UnknownTag(other.to_string())),
        }
        Ok(())
    }

    fn finish(mut self) -> Vec<MarkupLine> {
        self.break_line();
        for line in &mut self.lines {
            trim_line_end(line);
        }
        self.lines
    }
}

fn adjust_depth(depth: &mut u32, closing: bool, name: &str) -> Result<(), MarkupError> {
    if closing {
        *depth = depth
            .checked_sub(1)
            .ok_or_else(|| MarkupError::UnbalancedClose(name.to_string()))?;
    } else {
        *depth += 1;
    }
    Ok(())
}

fn trim_line_end(line: &mut MarkupLine) {
    while let Some(last) = line.runs.last_mut() {
        let trimmed_len = last.text.trim_end_matches(' ').len();
        last.text.truncate(trimmed_len);
        if last.text.is_empty() {
            line.runs.pop();
        } else {
            break;
        }
    }
}

/// Whitespace that may collapse and wrap; the no-break space is kept as is.
fn is_breakable_space(c: char) -> bool {
    c.is_whitespace() && c != '\u{a0}'
}

fn decode_entity(body: &str) -> Result<char, MarkupError> {
    if let Some(code) = body.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse::<u32>().ok(),
        };
        return value
            .and_then(char::from_u32)
            .ok_or_else(|| MarkupError::InvalidCodePoint(body.to_string()));
    }

    let c = match body {
        "bull" => '•',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        other => return Err(MarkupError::UnknownEntity(other.to_string())),
    };
    Ok(c)
}
