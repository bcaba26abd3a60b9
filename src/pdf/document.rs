//! Badge document assembly using lopdf
//!
//! Pages are built two badges at a time: adding a badge to an even index
//! opens a fresh page with cut guides, the odd index fills the second
//! slot. An odd attendee count leaves the final page's second slot blank.

use std::path::Path;

use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::error::Result;
use crate::layout::{
    page_and_slot, slot_rect, BADGE_HEIGHT, BADGE_WIDTH, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::logo::Logo;
use crate::pdf::badge::render_badge;

/// Light grey used for the cut guides
const GUIDE_GREY: f32 = 0.827;

struct PageInProgress {
    content: String,
    /// (resource name, XObject id) for raster logos on this page
    images: Vec<(String, ObjectId)>,
}

/// An output badge document under construction
pub struct BadgeDocument {
    doc: Document,
    pages_id: ObjectId,
    font_regular_id: ObjectId,
    font_bold_id: ObjectId,
    page_ids: Vec<ObjectId>,
    current: Option<PageInProgress>,
    badge_count: usize,
    image_count: usize,
}

impl BadgeDocument {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        // The standard-14 Helvetica faces need no embedded font program
        let font_regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let font_bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });

        Self {
            doc,
            pages_id,
            font_regular_id,
            font_bold_id,
            page_ids: Vec::new(),
            current: None,
            badge_count: 0,
            image_count: 0,
        }
    }

    /// Number of badges added so far
    pub fn badge_count(&self) -> usize {
        self.badge_count
    }

    /// Add one badge, starting a new page when the previous one is full
    pub fn add_badge(&mut self, name: &str, logo: &Logo) -> Result<()> {
        let (_page, slot) = page_and_slot(self.badge_count);
        if slot == 0 {
            self.finish_page()?;
            self.start_page();
        }

        let page = self.current.as_mut().expect("page started for slot 0");

        // Raster logos need an image XObject registered on this page
        let image_resource = match logo {
            Logo::Raster(raster) => {
                let stream = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => raster.width as i64,
                        "Height" => raster.height as i64,
                        "ColorSpace" => "DeviceRGB",
                        "BitsPerComponent" => 8,
                    },
                    raster.raw_rgb().to_vec(),
                );
                let id = self.doc.add_object(Object::Stream(stream));
                let name = format!("Im{}", self.image_count);
                self.image_count += 1;
                page.images.push((name.clone(), id));
                Some(name)
            }
            Logo::Vector(_) => None,
        };

        render_badge(
            &mut page.content,
            slot_rect(slot),
            name,
            logo,
            image_resource.as_deref(),
        );
        self.badge_count += 1;
        Ok(())
    }

    /// Open a fresh page: white fill plus the two cut guides that split
    /// the page into badge-sized regions
    fn start_page(&mut self) {
        use std::fmt::Write;

        let mut content = String::new();
        let _ = writeln!(content, "1 g");
        let _ = writeln!(content, "0 0 {} {} re f", PAGE_WIDTH, PAGE_HEIGHT);

        let _ = writeln!(content, "{g} {g} {g} RG", g = GUIDE_GREY);
        let _ = writeln!(content, "{x} 0 m {x} {top} l S", x = BADGE_WIDTH, top = PAGE_HEIGHT);
        let _ = writeln!(
            content,
            "0 {y} m {right} {y} l S",
            y = PAGE_HEIGHT - BADGE_HEIGHT,
            right = PAGE_WIDTH
        );

        self.current = Some(PageInProgress {
            content,
            images: Vec::new(),
        });
    }

    /// Flush the in-progress page into the document, if any
    fn finish_page(&mut self) -> Result<()> {
        let Some(page) = self.current.take() else {
            return Ok(());
        };

        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, page.content.into_bytes()));

        let mut resources = dictionary! {
            "Font" => dictionary! {
                "F1" => self.font_regular_id,
                "F2" => self.font_bold_id,
            },
        };
        if !page.images.is_empty() {
            let mut xobjects = lopdf::Dictionary::new();
            for (name, id) in page.images {
                xobjects.set(name, Object::Reference(id));
            }
            resources.set("XObject", Object::Dictionary(xobjects));
        }

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH),
                Object::Real(PAGE_HEIGHT),
            ],
            "Resources" => resources,
            "Contents" => content_id,
        });
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Finalize the page tree and write the document to disk
    pub fn save(mut self, output: &Path) -> Result<()> {
        self.finish_page()?;

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| id.into()).collect();
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Count" => kids.len() as i64,
                "Kids" => kids,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        self.doc.compress();
        self.doc.save(output)?;
        Ok(())
    }
}

impl Default for BadgeDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logo::vector::{Fill, PathShape, Rgb, Shape};
    use crate::logo::VectorLogo;
    use crate::pdf::metadata::count_pages;
    use tiny_skia_path::PathBuilder;

    fn test_logo() -> Logo {
        let mut builder = PathBuilder::new();
        builder.push_rect(tiny_skia_path::Rect::from_xywh(0.0, 0.0, 30.0, 30.0).unwrap());
        Logo::Vector(VectorLogo {
            shapes: vec![Shape::Path(PathShape {
                fill: Some(Fill { color: Rgb::new(0.1, 0.1, 0.1), even_odd: false }),
                stroke: None,
                data: builder.finish().unwrap(),
            })],
            width: 30.0,
            height: 30.0,
        })
    }

    fn build(badges: usize) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        let mut doc = BadgeDocument::new();
        let logo = test_logo();
        for i in 0..badges {
            doc.add_badge(&format!("Attendee {}", i), &logo).unwrap();
        }
        doc.save(file.path()).unwrap();
        file
    }

    #[test]
    fn test_page_count_is_half_rounded_up() {
        for (badges, pages) in [(1usize, 1usize), (2, 1), (3, 2), (4, 2), (5, 3)] {
            let file = build(badges);
            assert_eq!(count_pages(file.path()).unwrap(), pages, "badges={}", badges);
        }
    }

    #[test]
    fn test_empty_document_has_zero_pages() {
        let file = tempfile::NamedTempFile::with_suffix(".pdf").unwrap();
        BadgeDocument::new().save(file.path()).unwrap();

        let doc = Document::load(file.path()).unwrap();
        assert!(doc.get_pages().is_empty());
    }

    #[test]
    fn test_odd_count_leaves_last_slot_blank() {
        // Three badges, two pages, document loads cleanly
        let file = build(3);
        let doc = Document::load(file.path()).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
