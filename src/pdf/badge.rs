//! Badge composition as PDF content-stream operators
//!
//! One badge is a pure function of its rectangle, the attendee name, and a
//! normalized logo. The caller owns page assembly and resource
//! registration; raster logos reference an image XObject by the resource
//! name the caller assigned.

use std::fmt::Write;

use crate::layout::{fit_scale, BadgeRect, INCH};
use crate::logo::{Logo, RasterLogo, VectorLogo};
use crate::text::{fit_font_size, text_width, FontFace};

/// Fixed badge title, first line
pub const TITLE_LINE_1: &str = "Philadelphia Open";
/// Fixed badge title, second line
pub const TITLE_LINE_2: &str = "Innovation Tournament";
/// Title font size in points
pub const TITLE_FONT_SIZE: f32 = 16.0;

/// Emit the operators for one badge into `content`
///
/// For raster logos, `image_resource` names the XObject already registered
/// in the page's resources; it is unused for vector logos.
pub fn render_badge(
    content: &mut String,
    rect: BadgeRect,
    name: &str,
    logo: &Logo,
    image_resource: Option<&str>,
) {
    // Opaque white badge background
    let _ = writeln!(content, "1 g");
    let _ = writeln!(
        content,
        "{} {} {} {} re f",
        rect.x, rect.y, rect.width, rect.height
    );

    // Two-line event title, constant text, centered
    let _ = writeln!(content, "0 g");
    draw_centered_text(
        content,
        TITLE_LINE_1,
        FontFace::Helvetica,
        TITLE_FONT_SIZE,
        rect.x + rect.width / 2.0,
        rect.y + rect.height - 0.5 * INCH,
    );
    draw_centered_text(
        content,
        TITLE_LINE_2,
        FontFace::Helvetica,
        TITLE_FONT_SIZE,
        rect.x + rect.width / 2.0,
        rect.y + rect.height - 0.8 * INCH,
    );

    // Attendee name, auto-shrunk to the width budget
    let name_size = fit_font_size(name, FontFace::HelveticaBold, rect.name_width_budget());
    draw_centered_text(
        content,
        name,
        FontFace::HelveticaBold,
        name_size as f32,
        rect.x + rect.width / 2.0,
        rect.y + rect.height / 2.0 + 0.75 * INCH,
    );

    // Logo, fitted into its box
    let (bx, by, bw, bh) = rect.logo_box();
    match logo {
        Logo::Vector(vector) => draw_vector_logo(content, vector, bx, by, bw, bh),
        Logo::Raster(raster) => {
            if let Some(resource) = image_resource {
                draw_raster_logo(content, raster, resource, bx, by, bw, bh);
            }
        }
    }
}

/// Draw a single line of text centered on `center_x` with its baseline at `y`
fn draw_centered_text(
    content: &mut String,
    text: &str,
    face: FontFace,
    size: f32,
    center_x: f32,
    y: f32,
) {
    let x = center_x - text_width(text, face, size) / 2.0;
    let _ = writeln!(content, "BT");
    let _ = writeln!(content, "/{} {} Tf", face.resource_name(), size);
    let _ = writeln!(content, "1 0 0 1 {} {} Tm", x, y);
    let _ = writeln!(content, "({}) Tj", escape_pdf_string(text));
    let _ = writeln!(content, "ET");
}

/// Escape a string for a PDF literal, mapping non-ASCII to WinAnsi octal
/// escapes so the content stream stays pure ASCII
pub fn escape_pdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            c if (c as u32) < 128 => out.push(c),
            c if (c as u32) <= 255 => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            // Outside WinAnsi; substitute rather than emit broken bytes
            _ => out.push('?'),
        }
    }
    out
}

/// Place a raster logo's XObject centered in the target box, aspect kept
fn draw_raster_logo(
    content: &mut String,
    raster: &RasterLogo,
    resource: &str,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) {
    let scale = fit_scale(raster.width as f32, raster.height as f32, bw, bh);
    let w = raster.width as f32 * scale;
    let h = raster.height as f32 * scale;
    let x = bx + (bw - w) / 2.0;
    let y = by + (bh - h) / 2.0;

    let _ = writeln!(content, "q");
    let _ = writeln!(content, "{} 0 0 {} {} {} cm", w, h, x, y);
    let _ = writeln!(content, "/{} Do", resource);
    let _ = writeln!(content, "Q");
}

/// Draw a vector logo's shape tree, scaled to fit and centered in the box
///
/// SVG coordinates grow downward, so the transform flips y while mapping
/// the logo's viewport into the box.
fn draw_vector_logo(content: &mut String, logo: &VectorLogo, bx: f32, by: f32, bw: f32, bh: f32) {
    if logo.width <= 0.0 || logo.height <= 0.0 {
        return;
    }
    let scale = fit_scale(logo.width, logo.height, bw, bh);
    let w = logo.width * scale;
    let h = logo.height * scale;
    let x = bx + (bw - w) / 2.0;
    let y = by + (bh - h) / 2.0;

    let _ = writeln!(content, "q");
    let _ = writeln!(content, "{} 0 0 {} {} {} cm", scale, -scale, x, y + h);
    logo.for_each_shape(|shape| {
        if let Some(stroke) = shape.stroke {
            let _ = writeln!(
                content,
                "{} {} {} RG",
                stroke.color.r, stroke.color.g, stroke.color.b
            );
            let _ = writeln!(content, "{} w", stroke.width);
        }
        if let Some(fill) = shape.fill {
            let _ = writeln!(content, "{} {} {} rg", fill.color.r, fill.color.g, fill.color.b);
        }
        emit_path(content, &shape.data);
        let paint_op = match (shape.fill, shape.stroke) {
            (Some(fill), Some(_)) => {
                if fill.even_odd {
                    "B*"
                } else {
                    "B"
                }
            }
            (Some(fill), None) => {
                if fill.even_odd {
                    "f*"
                } else {
                    "f"
                }
            }
            (None, Some(_)) => "S",
            (None, None) => "n",
        };
        let _ = writeln!(content, "{}", paint_op);
    });
    let _ = writeln!(content, "Q");
}

/// Translate path segments into PDF path-construction operators
///
/// Quadratic segments are elevated to cubics since PDF has no quad
/// operator.
fn emit_path(content: &mut String, path: &tiny_skia_path::Path) {
    use tiny_skia_path::PathSegment;

    let mut current = (0.0f32, 0.0f32);
    let mut start = current;
    for segment in path.segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                let _ = writeln!(content, "{} {} m", p.x, p.y);
                current = (p.x, p.y);
                start = current;
            }
            PathSegment::LineTo(p) => {
                let _ = writeln!(content, "{} {} l", p.x, p.y);
                current = (p.x, p.y);
            }
            PathSegment::QuadTo(q, p) => {
                let c1 = (
                    current.0 + 2.0 / 3.0 * (q.x - current.0),
                    current.1 + 2.0 / 3.0 * (q.y - current.1),
                );
                let c2 = (p.x + 2.0 / 3.0 * (q.x - p.x), p.y + 2.0 / 3.0 * (q.y - p.y));
                let _ = writeln!(
                    content,
                    "{} {} {} {} {} {} c",
                    c1.0, c1.1, c2.0, c2.1, p.x, p.y
                );
                current = (p.x, p.y);
            }
            PathSegment::CubicTo(c1, c2, p) => {
                let _ = writeln!(
                    content,
                    "{} {} {} {} {} {} c",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                );
                current = (p.x, p.y);
            }
            PathSegment::Close => {
                let _ = writeln!(content, "h");
                current = start;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::slot_rect;
    use crate::logo::vector::{Fill, PathShape, Rgb, Shape};
    use tiny_skia_path::PathBuilder;

    fn test_logo() -> Logo {
        let mut builder = PathBuilder::new();
        builder.push_rect(tiny_skia_path::Rect::from_xywh(0.0, 0.0, 40.0, 20.0).unwrap());
        let data = builder.finish().unwrap();
        Logo::Vector(VectorLogo {
            shapes: vec![Shape::Path(PathShape {
                fill: Some(Fill { color: Rgb::new(0.2, 0.2, 0.2), even_odd: false }),
                stroke: None,
                data,
            })],
            width: 40.0,
            height: 20.0,
        })
    }

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(escape_pdf_string("Alice (Bob)"), "Alice \\(Bob\\)");
        assert_eq!(escape_pdf_string("a\\b"), "a\\\\b");
        assert_eq!(escape_pdf_string("Müller"), "M\\374ller");
        assert!(escape_pdf_string("日本").contains('?'));
    }

    #[test]
    fn test_badge_ops_contain_background_title_and_name() {
        let mut content = String::new();
        render_badge(&mut content, slot_rect(0), "Ada Lovelace", &test_logo(), None);

        assert!(content.contains("re f"));
        assert!(content.contains(&format!("({}) Tj", TITLE_LINE_1)));
        assert!(content.contains(&format!("({}) Tj", TITLE_LINE_2)));
        assert!(content.contains("(Ada Lovelace) Tj"));
        // Short name keeps the maximum size, in the bold face
        assert!(content.contains("/F2 28 Tf"));
    }

    #[test]
    fn test_vector_logo_emits_path_ops() {
        let mut content = String::new();
        render_badge(&mut content, slot_rect(1), "X", &test_logo(), None);
        assert!(content.contains(" m\n"));
        assert!(content.contains("f\n"));
        // Group wrapped in graphics state save/restore
        assert!(content.contains("q\n"));
        assert!(content.contains("Q\n"));
    }

    #[test]
    fn test_raster_logo_invokes_named_xobject() {
        let raster = RasterLogo::from_image(image::DynamicImage::ImageRgb8(
            image::RgbImage::new(8, 4),
        ));
        let mut content = String::new();
        render_badge(
            &mut content,
            slot_rect(0),
            "X",
            &Logo::Raster(raster),
            Some("Im0"),
        );
        assert!(content.contains("/Im0 Do"));
    }
}
