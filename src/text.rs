//! Text measurement and auto-fit sizing
//!
//! Badges use the standard-14 Helvetica fonts, so we can measure text with
//! the published AFM glyph widths instead of shaping against an embedded
//! font file. Widths are in 1/1000ths of the em square.

/// Font faces available on a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    /// PDF BaseFont name
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }
}

/// Largest font size tried for attendee names
pub const MAX_NAME_FONT_SIZE: u32 = 28;

/// Helvetica widths for ASCII 32-126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // A..P
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // Q..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // a..p
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // q..z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold widths for ASCII 32-126
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, // A..P
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // Q..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, // a..p
    611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // q..z
    389, 280, 389, 584, // {..~
];

/// Glyph width for one character in 1/1000ths of the em
fn char_width(c: char, face: FontFace) -> u16 {
    let table = match face {
        FontFace::Helvetica => &HELVETICA_WIDTHS,
        FontFace::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
    };
    let code = c as u32;
    if (32..=126).contains(&code) {
        table[(code - 32) as usize]
    } else {
        // Accented Latin glyphs share the base glyph's advance closely
        // enough for fitting purposes; fall back to the digit width.
        556
    }
}

/// Measured width of `text` at `size` points
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, face) as u32).sum();
    units as f32 * size / 1000.0
}

/// Largest integral font size, starting from [`MAX_NAME_FONT_SIZE`], at
/// which `text` measures no wider than `max_width`
///
/// Text width is monotonically non-decreasing in the size, so a linear
/// downward scan finds the answer. The result is clamped to 1 so callers
/// never draw or measure at a zero size.
pub fn fit_font_size(text: &str, face: FontFace, max_width: f32) -> u32 {
    let mut size = MAX_NAME_FONT_SIZE;
    while size > 1 && text_width(text, face, size as f32) > max_width {
        size -= 1;
    }
    size
}
