//! Greedy line breaking of styled markup lines into visual lines.

use super::font_metrics::{text_width, FontFace};
use crate::domain::markup::{MarkupLine, TextStyle};
use crate::domain::Rgb;

/// Tolerance for floating-point width comparisons, in points.
const WIDTH_EPSILON: f32 = 0.01;

/// Contiguous text drawn with one face and one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub face: FontFace,
    /// `None` means the enclosing paragraph color.
    pub color: Option<Rgb>,
}

/// One line as it will be placed on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualLine {
    pub fragments: Vec<Fragment>,
    pub width: f32,
}

impl VisualLine {
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    fn push(&mut self, text: &str, style: &TextStyle, size: f32) {
        if text.is_empty() {
            return;
        }
        let face = FontFace::for_style(style.bold, style.italic);
        self.width += text_width(text, face, size);
        match self.fragments.last_mut() {
            Some(last) if last.face == face && last.color == style.color => {
                last.text.push_str(text);
            }
            _ => self.fragments.push(Fragment {
                text: text.to_string(),
                face,
                color: style.color,
            }),
        }
    }
}

/// A run of non-space text, possibly spanning several styles.
#[derive(Debug, Default)]
struct Word {
    segments: Vec<(String, TextStyle)>,
    /// Style of the space preceding the word, if any.
    leading_space: Option<TextStyle>,
}

impl Word {
    fn width(&self, size: f32) -> f32 {
        self.segments
            .iter()
            .map(|(text, style)| text_width(text, FontFace::for_style(style.bold, style.italic), size))
            .sum()
    }
}

fn space_width(style: &TextStyle, size: f32) -> f32 {
    text_width(" ", FontFace::for_style(style.bold, style.italic), size)
}

fn split_words(line: &MarkupLine) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();
    let mut pending_space: Option<TextStyle> = None;

    for run in &line.runs {
        for (index, piece) in run.text.split(' ').enumerate() {
            if index > 0 {
                if !current.segments.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                pending_space = Some(run.style);
            }
            if piece.is_empty() {
                continue;
            }
            if current.segments.is_empty() {
                current.leading_space = pending_space.take();
            }
            current.segments.push((piece.to_string(), run.style));
        }
    }
    if !current.segments.is_empty() {
        words.push(current);
    }
    words
}

/// Breaks each markup line so no visual line exceeds `max_width`.
///
/// Lines break at spaces; a word wider than the whole line is split
/// between characters. An empty markup line yields one empty visual line.
pub fn wrap_lines(lines: &[MarkupLine], max_width: f32, size: f32) -> Vec<VisualLine> {
    let mut out = Vec::new();
    for line in lines {
        let words = split_words(line);
        if words.is_empty() {
            out.push(VisualLine::default());
            continue;
        }

        let mut current = VisualLine::default();
        for word in words {
            let word_width = word.width(size);
            let gap = match (&word.leading_space, current.is_empty()) {
                (Some(style), false) => space_width(style, size),
                _ => 0.0,
            };

            if current.width + gap + word_width <= max_width + WIDTH_EPSILON {
                if let (Some(style), false) = (&word.leading_space, current.is_empty()) {
                    current.push(" ", style, size);
                }
                for (text, style) in &word.segments {
                    current.push(text, style, size);
                }
                continue;
            }

            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            if word_width <= max_width + WIDTH_EPSILON {
                for (text, style) in &word.segments {
                    current.push(text, style, size);
                }
            } else {
                break_word(&word, max_width, size, &mut current, &mut out);
            }
        }
        out.push(current);
    }
    out
}

fn break_word(
    word: &Word,
    max_width: f32,
    size: f32,
    current: &mut VisualLine,
    out: &mut Vec<VisualLine>,
) {
    let mut buf = [0u8; 4];
    for (text, style) in &word.segments {
        let face = FontFace::for_style(style.bold, style.italic);
        for c in text.chars() {
            let glyph = c.encode_utf8(&mut buf);
            let width = text_width(glyph, face, size);
            if !current.is_empty() && current.width + width > max_width + WIDTH_EPSILON {
                out.push(std::mem::take(current));
            }
            current.push(glyph, style, size);
        }
    }
}
