//! PDF composition using the pdf-writer crate.
//!
//! Implements the `PageComposer` port by flowing layout blocks down A4
//! pages with the standard Helvetica faces. No font files are embedded, so
//! the composer has no environment requirements.

use chrono::{Datelike, Timelike};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use super::font_metrics::{encode_win_ansi, text_width, FontFace};
use super::text_flow::{wrap_lines, Fragment, VisualLine};
use crate::domain::document::{
    Alignment, CardStyle, ContentBlock, DocumentLayout, DocumentMetadata, HeaderBarStyle,
    PageGeometry, ParagraphStyle,
};
use crate::domain::markup::parse_markup;
use crate::domain::Rgb;
use crate::ports::{ComposeError, ComposedDocument, PageComposer};

const PRODUCER: &str = "text-summarizer";

/// PDF implementation of the page composer.
#[derive(Debug, Clone, Default)]
pub struct PdfPageComposer;

impl PdfPageComposer {
    pub fn new() -> Self {
        Self
    }
}

impl PageComposer for PdfPageComposer {
    fn compose(&self, layout: &DocumentLayout) -> Result<ComposedDocument, ComposeError> {
        let geometry = layout.geometry;
        if geometry.frame_width() <= 0.0 || geometry.frame_height() <= 0.0 {
            return Err(ComposeError::layout("page margins leave no room for content"));
        }

        let mut canvas = Canvas::new(geometry);
        for block in &layout.blocks {
            match block {
                ContentBlock::HeaderBar { left, right, style } => {
                    canvas.header_bar(left, right, style)
                }
                ContentBlock::Spacer { height } => canvas.spacer(*height),
                ContentBlock::Paragraph { markup, style } => canvas.paragraph(markup, style)?,
                ContentBlock::Card { markup, style } => canvas.card(markup, style)?,
            }
        }

        let pages = canvas.into_pages();
        let page_count = pages.len();
        let bytes = write_document(pages, geometry, &layout.metadata);
        Ok(ComposedDocument { bytes, page_count })
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "pdf-writer"
    }
}

/// Baseline of a line of text whose line box starts at `line_top`.
fn baseline(line_top: f32, leading: f32, font_size: f32) -> f32 {
    line_top - leading * 0.5 - font_size * 0.3
}

/// Running state of the flow: finished page contents and the cursor.
struct Canvas {
    geometry: PageGeometry,
    pages: Vec<Content>,
    /// Top of the free area on the current page.
    cursor: f32,
}

impl Canvas {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: vec![Content::new()],
            cursor: geometry.frame_top(),
        }
    }

    fn new_page(&mut self) {
        self.pages.push(Content::new());
        self.cursor = self.geometry.frame_top();
    }

    fn content(&mut self) -> &mut Content {
        if self.pages.is_empty() {
            self.pages.push(Content::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.geometry.margin_bottom
    }

    fn at_page_top(&self) -> bool {
        (self.cursor - self.geometry.frame_top()).abs() < 0.01
    }

    /// Moves to a fresh page unless `height` fits or the page is untouched.
    fn ensure_space(&mut self, height: f32) {
        if height > self.remaining() + 0.01 && !self.at_page_top() {
            self.new_page();
        }
    }

    fn advance(&mut self, height: f32) {
        self.cursor = (self.cursor - height).max(self.geometry.margin_bottom);
    }

    fn header_bar(&mut self, left: &str, right: &str, style: &HeaderBarStyle) {
        let height = style.height();
        self.ensure_space(height);

        let x = self.geometry.margin_left;
        let width = self.geometry.frame_width();
        let top = self.cursor;
        let line_top = top - style.padding_vertical;
        let leading = style.font_size * 1.2;
        let base = baseline(line_top, leading, style.font_size);

        let left_line = single_line(left, FontFace::Bold, style.font_size);
        let right_line = single_line(right, FontFace::Bold, style.font_size);
        let right_x = x + width - style.padding_horizontal - right_line.width;

        let content = self.content();
        fill_rect(content, x, top - height, width, height, style.background);
        draw_line(content, &left_line, x + style.padding_horizontal, base, style.font_size, style.text_color);
        draw_line(content, &right_line, right_x, base, style.font_size, style.text_color);

        self.advance(height);
    }

    fn spacer(&mut self, height: f32) {
        if height >= self.remaining() {
            // A gap reaching the page bottom is absorbed by the break.
            self.new_page();
        } else {
            self.advance(height);
        }
    }

    fn paragraph(&mut self, markup: &str, style: &ParagraphStyle) -> Result<(), ComposeError> {
        let lines = parse_markup(markup)?;
        let frame_width = self.geometry.frame_width();
        let x = self.geometry.margin_left;

        for line in wrap_lines(&lines, frame_width, style.font_size) {
            self.ensure_space(style.leading);
            let line_x = aligned_x(x, frame_width, line.width, style.alignment);
            let base = baseline(self.cursor, style.leading, style.font_size);
            let (size, color) = (style.font_size, style.color);
            draw_line(self.content(), &line, line_x, base, size, color);
            self.advance(style.leading);
        }
        self.advance(style.space_after);
        Ok(())
    }

    /// Draws a bordered box around wrapped markup, splitting it into one
    /// segment per page when it does not fit.
    fn card(&mut self, markup: &str, style: &CardStyle) -> Result<(), ComposeError> {
        let lines = parse_markup(markup)?;
        let frame_width = self.geometry.frame_width();
        let width = style.width.min(frame_width);
        let inner_width = width - 2.0 * style.padding;
        if inner_width <= 0.0 {
            return Err(ComposeError::layout("card padding leaves no room for text"));
        }
        let leading = style.body.leading;
        let min_segment = 2.0 * style.padding + leading;
        if min_segment > self.geometry.frame_height() {
            return Err(ComposeError::layout("card line does not fit on a page"));
        }

        let x = self.geometry.margin_left + (frame_width - width) / 2.0;
        let visual = wrap_lines(&lines, inner_width, style.body.font_size);

        self.ensure_space(min_segment);
        let mut rest: &[VisualLine] = &visual;
        loop {
            let available = self.remaining() - 2.0 * style.padding;
            let fit = ((available + 0.01) / leading).floor().max(1.0) as usize;
            let take = fit.min(rest.len()).max(1);
            let (segment, tail) = rest.split_at(take.min(rest.len()));

            let rows = segment.len().max(1) as f32;
            let height = 2.0 * style.padding + rows * leading;
            let top = self.cursor;
            let (size, color, align) = (style.body.font_size, style.body.color, style.body.alignment);

            let content = self.content();
            framed_rect(content, x, top - height, width, height, style);
            let mut line_top = top - style.padding;
            for line in segment {
                let line_x = aligned_x(x + style.padding, inner_width, line.width, align);
                draw_line(content, line, line_x, baseline(line_top, leading, size), size, color);
                line_top -= leading;
            }
            self.advance(height);

            if tail.is_empty() {
                break;
            }
            rest = tail;
            self.new_page();
        }
        self.advance(style.body.space_after);
        Ok(())
    }

    fn into_pages(self) -> Vec<Content> {
        self.pages
    }
}

fn single_line(text: &str, face: FontFace, size: f32) -> VisualLine {
    if text.is_empty() {
        return VisualLine::default();
    }
    VisualLine {
        fragments: vec![Fragment {
            text: text.to_string(),
            face,
            color: None,
        }],
        width: text_width(text, face, size),
    }
}

fn aligned_x(left: f32, box_width: f32, line_width: f32, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Left => left,
        Alignment::Center => left + (box_width - line_width) / 2.0,
        Alignment::Right => left + box_width - line_width,
    }
}

fn fill_rect(content: &mut Content, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
    let (r, g, b) = color.to_unit();
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(x, y, width, height);
    content.fill_nonzero();
    content.restore_state();
}

fn framed_rect(content: &mut Content, x: f32, y: f32, width: f32, height: f32, style: &CardStyle) {
    let (fr, fg, fb) = style.background.to_unit();
    let (sr, sg, sb) = style.border_color.to_unit();
    content.save_state();
    content.set_fill_rgb(fr, fg, fb);
    content.set_stroke_rgb(sr, sg, sb);
    content.set_line_width(style.border_width);
    content.rect(x, y, width, height);
    content.fill_nonzero_and_stroke();
    content.restore_state();
}

fn draw_line(content: &mut Content, line: &VisualLine, x: f32, baseline: f32, size: f32, color: Rgb) {
    if line.is_empty() {
        return;
    }
    content.begin_text();
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, baseline]);
    for fragment in &line.fragments {
        let (r, g, b) = fragment.color.unwrap_or(color).to_unit();
        content.set_font(Name(fragment.face.resource_name()), size);
        content.set_fill_rgb(r, g, b);
        content.show(Str(&encode_win_ansi(&fragment.text)));
    }
    content.end_text();
}

fn pdf_date(metadata: &DocumentMetadata) -> Date {
    let at = metadata.created_at;
    Date::new(u16::try_from(at.year()).unwrap_or(0))
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
}

fn write_document(pages: Vec<Content>, geometry: PageGeometry, metadata: &DocumentMetadata) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let tree_id = alloc.bump();
    let info_id = alloc.bump();
    let font_ids: Vec<(FontFace, Ref)> = FontFace::ALL.iter().map(|face| (*face, alloc.bump())).collect();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc.bump(), alloc.bump())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    let media_box = Rect::new(0.0, 0.0, geometry.width, geometry.height);
    for (content, (page_id, content_id)) in pages.into_iter().zip(page_ids.iter().copied()) {
        let mut page = pdf.page(page_id);
        page.media_box(media_box);
        page.parent(tree_id);
        page.contents(content_id);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for (face, font_id) in &font_ids {
            fonts.pair(Name(face.resource_name()), *font_id);
        }
        fonts.finish();
        resources.finish();
        page.finish();

        pdf.stream(content_id, &content.finish());
    }

    for (face, font_id) in &font_ids {
        pdf.type1_font(*font_id)
            .base_font(Name(face.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let mut info = pdf.document_info(info_id);
    info.title(TextStr(&metadata.title));
    info.producer(TextStr(PRODUCER));
    info.creation_date(pdf_date(metadata));
    info.finish();

    pdf.finish()
}
