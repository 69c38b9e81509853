//! Base-14 Helvetica faces: resource names, WinAnsi encoding and advance
//! widths (units of 1/1000 em, from the Adobe core font metrics).

/// One face of the Helvetica family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl FontFace {
    pub const ALL: [FontFace; 4] = [
        FontFace::Regular,
        FontFace::Bold,
        FontFace::Oblique,
        FontFace::BoldOblique,
    ];

    pub fn for_style(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontFace::Regular,
            (true, false) => FontFace::Bold,
            (false, true) => FontFace::Oblique,
            (true, true) => FontFace::BoldOblique,
        }
    }

    /// PostScript name of the standard font.
    pub fn base_font(self) -> &'static [u8] {
        match self {
            FontFace::Regular => b"Helvetica",
            FontFace::Bold => b"Helvetica-Bold",
            FontFace::Oblique => b"Helvetica-Oblique",
            FontFace::BoldOblique => b"Helvetica-BoldOblique",
        }
    }

    /// Name under which the face is registered in page resources.
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            FontFace::Regular => b"F1",
            FontFace::Bold => b"F2",
            FontFace::Oblique => b"F3",
            FontFace::BoldOblique => b"F4",
        }
    }

    fn is_bold(self) -> bool {
        matches!(self, FontFace::Bold | FontFace::BoldOblique)
    }
}

// Printable ASCII, 0x20..=0x7E. Oblique faces share the upright widths.
#[rustfmt::skip]
const REGULAR_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Advance width of one WinAnsi byte.
fn glyph_width(byte: u8, face: FontFace) -> u16 {
    let bold = face.is_bold();
    match byte {
        0x20..=0x7E => {
            let index = usize::from(byte - 0x20);
            if bold {
                BOLD_ASCII[index]
            } else {
                REGULAR_ASCII[index]
            }
        }
        0x95 => 350,
        0x85 | 0x97 | 0x89 => 1000,
        0x91 | 0x92 => {
            if bold {
                278
            } else {
                222
            }
        }
        0x93 | 0x94 => {
            if bold {
                500
            } else {
                333
            }
        }
        0xA0 => 278,
        _ => 556,
    }
}

/// Encodes text as WinAnsi bytes; unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Width of `text` set in `face` at `size` points.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| u32::from(glyph_width(win_ansi_byte(c), face)))
        .sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_follow_style_flags() {
        assert_eq!(FontFace::for_style(false, false), FontFace::Regular);
        assert_eq!(FontFace::for_style(true, true), FontFace::BoldOblique);
        assert_eq!(FontFace::Oblique.base_font(), b"Helvetica-Oblique");
    }

    #[test]
    fn ascii_and_bullet_encode_directly() {
        assert_eq!(encode_win_ansi("Ab •"), vec![b'A', b'b', b' ', 0x95]);
    }

    #[test]
    fn latin1_passes_through_and_others_become_question_marks() {
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("🧠漢"), vec![b'?', b'?']);
    }

    #[test]
    fn widths_match_core_metrics() {
        // "Hi" regular: H=722, i=222
        assert!((text_width("Hi", FontFace::Regular, 10.0) - 9.44).abs() < 1e-4);
        // bold i is wider
        assert!(text_width("i", FontFace::Bold, 10.0) > text_width("i", FontFace::Regular, 10.0));
        assert_eq!(text_width("", FontFace::Regular, 12.0), 0.0);
    }
}
