//! Ordered content blocks describing one summary document.

use chrono::NaiveDateTime;

use super::theme::{CardStyle, DocumentTheme, HeaderBarStyle, PageGeometry, ParagraphStyle};
use crate::domain::markup::convert;
use crate::domain::SummaryText;

/// Human-readable capture time shown in the footer.
pub const FOOTER_TIME_FORMAT: &str = "%B %d, %Y - %I:%M %p";

/// One structural unit of the document, laid out top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// Full-width bar with a left- and a right-aligned bold cell.
    HeaderBar {
        left: String,
        right: String,
        style: HeaderBarStyle,
    },
    /// Vertical gap.
    Spacer { height: f32 },
    /// Flowing paragraph of markup.
    Paragraph { markup: String, style: ParagraphStyle },
    /// Paragraph of markup inside a bordered, tinted box.
    Card { markup: String, style: CardStyle },
}

impl ContentBlock {
    /// Short name of the block kind, for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::HeaderBar { .. } => "header_bar",
            ContentBlock::Spacer { .. } => "spacer",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Card { .. } => "card",
        }
    }
}

/// Document-level metadata written alongside the pages.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    pub title: String,
    pub created_at: NaiveDateTime,
}

/// A complete, engine-neutral description of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub geometry: PageGeometry,
    pub metadata: DocumentMetadata,
    pub blocks: Vec<ContentBlock>,
}

impl DocumentLayout {
    /// Assembles the seven summary blocks for a capture instant.
    ///
    /// The card receives the converted summary; the footer word count is
    /// taken from the raw text.
    pub fn for_summary(
        summary: &SummaryText,
        captured_at: NaiveDateTime,
        theme: &DocumentTheme,
    ) -> Self {
        let footer = format!(
            "<b>Generated on:</b> {}  |  <b>Word Count:</b> {}<br/><font color='{}'>{}</font>",
            captured_at.format(FOOTER_TIME_FORMAT),
            summary.word_count(),
            theme.attribution_color,
            theme.attribution_text,
        );

        let blocks = vec![
            ContentBlock::HeaderBar {
                left: theme.header_left.to_string(),
                right: theme.header_right.to_string(),
                style: theme.header,
            },
            ContentBlock::Spacer {
                height: theme.gap_after_header,
            },
            ContentBlock::Paragraph {
                markup: theme.title_text.to_string(),
                style: theme.title,
            },
            ContentBlock::Paragraph {
                markup: theme.tagline_markup.to_string(),
                style: theme.tagline,
            },
            ContentBlock::Card {
                markup: convert(summary.as_str()),
                style: theme.card,
            },
            ContentBlock::Spacer {
                height: theme.gap_after_card,
            },
            ContentBlock::Paragraph {
                markup: footer,
                style: theme.footer,
            },
        ];

        Self {
            geometry: theme.geometry,
            metadata: DocumentMetadata {
                title: theme.title_text.to_string(),
                created_at: captured_at,
            },
            blocks,
        }
    }

    /// Markup of the footer paragraph (the last block).
    pub fn footer_markup(&self) -> Option<&str> {
        match self.blocks.last() {
            Some(ContentBlock::Paragraph { markup, .. }) => Some(markup),
            _ => None,
        }
    }

    /// Markup inside the card block.
    pub fn card_markup(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            ContentBlock::Card { markup, .. } => Some(markup.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap()
    }

    fn layout(text: &str) -> DocumentLayout {
        DocumentLayout::for_summary(&SummaryText::new(text), instant(), &DocumentTheme::default())
    }

    #[test]
    fn blocks_appear_in_fixed_order() {
        let kinds: Vec<_> = layout("hello").blocks.iter().map(ContentBlock::kind).collect();
        assert_eq!(
            kinds,
            vec!["header_bar", "spacer", "paragraph", "paragraph", "card", "spacer", "paragraph"]
        );
    }

    #[test]
    fn card_holds_converted_summary() {
        let layout = layout("**a** *b*\n• c");
        assert_eq!(layout.card_markup(), Some("<b>a</b> <i>b</i><br/>&bull; c"));
    }

    #[test]
    fn footer_states_time_and_raw_word_count() {
        let layout = layout("Hello   world\nfoo");
        let footer = layout.footer_markup().unwrap();
        assert!(footer.contains("<b>Generated on:</b> March 05, 2024 - 02:07 PM"));
        assert!(footer.contains("<b>Word Count:</b> 3<br/>"));
        assert!(footer.contains("<font color='#9CA3AF'>"));
    }

    #[test]
    fn footer_counts_tokens_before_conversion() {
        let layout = layout("**Key Point**: growth *accelerated* in Q2.\n• Revenue up");
        assert!(layout.footer_markup().unwrap().contains("<b>Word Count:</b> 9<br/>"));
    }

    #[test]
    fn metadata_carries_capture_time() {
        let layout = layout("x");
        assert_eq!(layout.metadata.created_at, instant());
        assert_eq!(layout.metadata.title, "Executive Summary");
    }

    #[test]
    fn empty_summary_still_builds_every_block() {
        let layout = layout("");
        assert_eq!(layout.blocks.len(), 7);
        assert_eq!(layout.card_markup(), Some(""));
        assert!(layout.footer_markup().unwrap().contains("<b>Word Count:</b> 0"));
    }
}
