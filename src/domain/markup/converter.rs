//! Lightweight emphasis dialect to renderer markup.
//!
//! Rules run in a fixed order over an immutable input:
//!
//! 1. `**X**` becomes `<b>X</b>`
//! 2. `*X*` becomes `<i>X</i>`
//! 3. every `\n` becomes `<br/>`
//! 4. every `•` becomes `&bull;`
//!
//! Bold runs first so that its delimiters are consumed before single
//! asterisks are paired. Spans are matched leftmost-first and non-greedy and
//! never cross a line break, so a `* ` bullet on each line stays literal.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern is valid"));

static ITALIC_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic span pattern is valid"));

/// Explicit line-break tag understood by the markup interpreter.
pub const LINE_BREAK_TAG: &str = "<br/>";

/// Named entity standing in for the bullet glyph.
pub const BULLET_ENTITY: &str = "&bull;";

/// Bullet glyph as typed by the model.
pub const BULLET_GLYPH: char = '•';

/// Converts summary text into markup for the paragraph engine.
///
/// Never fails: unbalanced markers are left to the natural pairing of the
/// span patterns, and whatever is left over stays literal.
pub fn convert(text: &str) -> String {
    let bold = BOLD_SPAN.replace_all(text, "<b>${1}</b>");
    let italic = ITALIC_SPAN.replace_all(&bold, "<i>${1}</i>");

    italic
        .replace('\n', LINE_BREAK_TAG)
        .replace(BULLET_GLYPH, BULLET_ENTITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn converts_bold_span() {
        assert_eq!(convert("a **b** c"), "a <b>b</b> c");
    }

    #[test]
    fn converts_italic_span() {
        assert_eq!(convert("a *b* c"), "a <i>b</i> c");
    }

    #[test]
    fn empty_spans_are_still_wrapped() {
        assert_eq!(convert("****"), "<b></b>");
        assert_eq!(convert("**"), "<i></i>");
    }

    #[test]
    fn single_line_break_becomes_one_tag() {
        let out = convert("a\nb");
        assert_eq!(out, "a<br/>b");
        assert_eq!(out.matches(LINE_BREAK_TAG).count(), 1);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn bullet_becomes_entity() {
        let out = convert("• item");
        assert_eq!(out, "&bull; item");
        assert!(!out.contains(BULLET_GLYPH));
    }

    #[test]
    fn bold_span_stops_at_a_line_break() {
        let out = convert("**a\nb**");
        assert!(!out.contains("<b>"));
        assert_eq!(out, "<i></i>a<br/>b<i></i>");
    }

    #[test]
    fn asterisk_bullet_list_stays_literal() {
        assert_eq!(convert("* a\n* b\n* c"), "* a<br/>* b<br/>* c");
        assert_eq!(
            convert("* Point one\n* Point two\n* Point three"),
            "* Point one<br/>* Point two<br/>* Point three"
        );
    }

    #[test]
    fn asterisk_bullets_keep_bold_labels() {
        assert_eq!(
            convert("* **Revenue**: up\n* Costs flat"),
            "* <b>Revenue</b>: up<br/>* Costs flat"
        );
    }

    #[test]
    fn bold_spans_are_non_greedy() {
        assert_eq!(convert("**a** and **b**"), "<b>a</b> and <b>b</b>");
    }

    #[test]
    fn leftover_single_asterisk_stays_literal() {
        assert_eq!(convert("5 * 3 = 15"), "5 * 3 = 15");
        assert_eq!(convert("**bold** *"), "<b>bold</b> *");
    }

    #[test]
    fn unbalanced_markers_pair_leftmost_first() {
        // Bold consumes "**a*b**", the trailing "*" then pairs with the
        // one left inside the bold span, producing crossing tags.
        assert_eq!(convert("**a*b**c*"), "<b>a<i>b</b>c</i>");
    }

    #[test]
    fn odd_double_marker_falls_back_to_italic_pairs() {
        assert_eq!(convert("**a"), "<i></i>a");
    }

    #[test]
    fn mixed_scenario_converts_every_rule() {
        let out = convert("**Key Point**: growth *accelerated* in Q2.\n• Revenue up");
        assert_eq!(
            out,
            "<b>Key Point</b>: growth <i>accelerated</i> in Q2.<br/>&bull; Revenue up"
        );
    }

    #[test]
    fn conversion_is_deterministic() {
        let text = "*x* **y**\n•";
        assert_eq!(convert(text), convert(text));
    }

    proptest! {
        #[test]
        fn plain_text_is_unchanged(text in "[^*\n•]{0,80}") {
            prop_assert_eq!(convert(&text), text);
        }

        #[test]
        fn double_asterisks_wrap_in_bold(inner in "[^*\n•]{0,40}") {
            let out = convert(&format!("**{inner}**"));
            prop_assert_eq!(&out, &format!("<b>{inner}</b>"));
            prop_assert!(!out.contains("**"));
        }

        #[test]
        fn single_asterisks_wrap_in_italic(inner in "[^*\n•]{0,40}") {
            let out = convert(&format!("*{inner}*"));
            prop_assert_eq!(out, format!("<i>{inner}</i>"));
        }

        #[test]
        fn never_leaves_newlines_or_bullets(text in "(?s).{0,80}") {
            let out = convert(&text);
            prop_assert!(!out.contains('\n'));
            prop_assert!(!out.contains(BULLET_GLYPH));
        }
    }
}
