//! Page geometry and the fixed visual design of the summary document.
//!
//! All lengths are PDF points (1/72 inch).

use crate::domain::color::Rgb;

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Horizontal placement of a line inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Page size and margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// ISO A4 portrait.
    pub const A4_WIDTH: f32 = 595.2756;
    pub const A4_HEIGHT: f32 = 841.8898;

    /// A4 with the summary margins: narrow sides, room for the header on top.
    pub fn a4() -> Self {
        Self {
            width: Self::A4_WIDTH,
            height: Self::A4_HEIGHT,
            margin_left: 60.0,
            margin_right: 60.0,
            margin_top: 80.0,
            margin_bottom: 60.0,
        }
    }

    /// Width available to content between the side margins.
    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height available to content between the top and bottom margins.
    pub fn frame_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Y coordinate of the top of the content frame (origin bottom-left).
    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Typography of a flowing paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub leading: f32,
    pub alignment: Alignment,
    pub color: Rgb,
    pub space_after: f32,
}

/// Solid two-cell bar across the top of the first page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderBarStyle {
    pub background: Rgb,
    pub text_color: Rgb,
    pub font_size: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
}

impl HeaderBarStyle {
    /// Total bar height: one line of text plus vertical padding.
    pub fn height(&self) -> f32 {
        self.font_size * 1.2 + 2.0 * self.padding_vertical
    }
}

/// Bordered, tinted single-cell box around a paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub width: f32,
    pub background: Rgb,
    pub border_color: Rgb,
    pub border_width: f32,
    pub padding: f32,
    pub body: ParagraphStyle,
}

/// Every design constant of the summary document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentTheme {
    pub geometry: PageGeometry,
    pub header: HeaderBarStyle,
    pub header_left: &'static str,
    pub header_right: &'static str,
    pub gap_after_header: f32,
    pub title: ParagraphStyle,
    pub title_text: &'static str,
    pub tagline: ParagraphStyle,
    pub tagline_markup: &'static str,
    pub card: CardStyle,
    pub gap_after_card: f32,
    pub footer: ParagraphStyle,
    pub attribution_color: Rgb,
    pub attribution_text: &'static str,
}

impl Default for DocumentTheme {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            header: HeaderBarStyle {
                background: Rgb::new(0x25, 0x63, 0xEB),
                text_color: Rgb::WHITE,
                font_size: 13.0,
                padding_vertical: 8.0,
                padding_horizontal: 6.0,
            },
            header_left: "AI Text Summarizer",
            header_right: "Gemini 2.5 Pro | AI Generated Summary",
            gap_after_header: 0.35 * INCH,
            title: ParagraphStyle {
                font_size: 22.0,
                leading: 26.0,
                alignment: Alignment::Center,
                color: Rgb::new(0x1E, 0x3A, 0x8A),
                space_after: 12.0,
            },
            title_text: "Executive Summary",
            tagline: ParagraphStyle {
                font_size: 13.0,
                leading: 18.0,
                alignment: Alignment::Center,
                color: Rgb::new(0x33, 0x41, 0x55),
                space_after: 18.0,
            },
            tagline_markup: "Clean &bull; Concise &bull; Insightful",
            card: CardStyle {
                width: 6.0 * INCH,
                background: Rgb::new(0xEF, 0xF6, 0xFF),
                border_color: Rgb::new(0x93, 0xC5, 0xFD),
                border_width: 0.75,
                padding: 14.0,
                body: ParagraphStyle {
                    font_size: 12.0,
                    leading: 18.0,
                    alignment: Alignment::Left,
                    color: Rgb::new(0x0F, 0x17, 0x2A),
                    space_after: 0.0,
                },
            },
            gap_after_card: 0.4 * INCH,
            footer: ParagraphStyle {
                font_size: 9.0,
                leading: 12.0,
                alignment: Alignment::Center,
                color: Rgb::new(0x6B, 0x72, 0x80),
                space_after: 0.0,
            },
            attribution_color: Rgb::new(0x9C, 0xA3, 0xAF),
            attribution_text: "Made with Rust &amp; Gemini",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_frame_leaves_margins() {
        let page = PageGeometry::a4();
        assert!((page.frame_width() - (PageGeometry::A4_WIDTH - 120.0)).abs() < 1e-3);
        assert!((page.frame_height() - (PageGeometry::A4_HEIGHT - 140.0)).abs() < 1e-3);
        assert!((page.frame_top() - (PageGeometry::A4_HEIGHT - 80.0)).abs() < 1e-3);
    }

    #[test]
    fn header_height_includes_padding() {
        let theme = DocumentTheme::default();
        assert!((theme.header.height() - 31.6).abs() < 1e-3);
    }

    #[test]
    fn card_fits_inside_frame() {
        let theme = DocumentTheme::default();
        assert!(theme.card.width <= theme.geometry.frame_width());
    }
}
