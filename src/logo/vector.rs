//! Vector logo assets
//!
//! SVG files are parsed with usvg and converted into an owned shape tree of
//! filled/stroked paths and nested groups. The style pipeline (greyscale,
//! then inversion when the asset reads as mostly white) runs over that tree
//! with an explicit work stack, so arbitrarily nested input cannot blow the
//! call stack.

use tiny_skia_path::Path as SkPath;

use crate::error::Result;

/// An RGB color with components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Luminance-preserving grey: the plain channel average, applied to
    /// fill and stroke independently by the callers
    pub fn to_grey(self) -> Self {
        let grey = (self.r + self.g + self.b) / 3.0;
        Self::new(grey, grey, grey)
    }

    /// Photometric inverse of every channel
    pub fn inverted(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    /// Perceptual luminance with the standard Rec. 601 weights
    pub fn luminance(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }
}

/// Fill style of a leaf shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    /// Even-odd winding instead of the default non-zero rule
    pub even_odd: bool,
}

/// Stroke style of a leaf shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    /// Stroke width in the logo's own coordinate units
    pub width: f32,
}

/// A drawable leaf: one path with optional fill and stroke
///
/// Geometry is stored with the node's absolute SVG transform already baked
/// in, so coordinates are in the logo's viewport space (y down).
#[derive(Debug, Clone)]
pub struct PathShape {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub data: SkPath,
}

/// One node of the logo's shape tree
#[derive(Debug, Clone)]
pub enum Shape {
    Path(PathShape),
    Group(Vec<Shape>),
}

/// A parsed vector logo: shape tree plus intrinsic viewport size
#[derive(Debug, Clone)]
pub struct VectorLogo {
    pub shapes: Vec<Shape>,
    pub width: f32,
    pub height: f32,
}

/// Threshold above which the mean fill luminance classifies an asset as
/// "mostly white". Kept at the historical value; assets dominated by small
/// white accents over little colored area can still be misclassified, which
/// is an accepted limitation of the heuristic.
pub const MOSTLY_WHITE_THRESHOLD: f32 = 0.7;

impl VectorLogo {
    /// Parse an SVG document into a shape tree
    pub fn from_svg(data: &[u8]) -> Result<Self> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
        let size = tree.size();
        Ok(Self {
            shapes: convert_children(tree.root()),
            width: size.width(),
            height: size.height(),
        })
    }

    /// Visit every leaf shape mutably, flattening nested groups
    pub fn for_each_shape_mut(&mut self, mut f: impl FnMut(&mut PathShape)) {
        let mut stack: Vec<&mut Shape> = self.shapes.iter_mut().collect();
        while let Some(shape) = stack.pop() {
            match shape {
                Shape::Path(path) => f(path),
                Shape::Group(children) => stack.extend(children.iter_mut()),
            }
        }
    }

    /// Visit every leaf shape immutably, flattening nested groups
    pub fn for_each_shape(&self, mut f: impl FnMut(&PathShape)) {
        let mut stack: Vec<&Shape> = self.shapes.iter().collect();
        while let Some(shape) = stack.pop() {
            match shape {
                Shape::Path(path) => f(path),
                Shape::Group(children) => stack.extend(children.iter()),
            }
        }
    }

    /// Replace every fill and stroke color with its grey equivalent
    pub fn to_greyscale(&mut self) {
        self.for_each_shape_mut(|shape| {
            if let Some(fill) = shape.fill.as_mut() {
                fill.color = fill.color.to_grey();
            }
            if let Some(stroke) = shape.stroke.as_mut() {
                stroke.color = stroke.color.to_grey();
            }
        });
    }

    /// Invert every fill and stroke color
    pub fn invert(&mut self) {
        self.for_each_shape_mut(|shape| {
            if let Some(fill) = shape.fill.as_mut() {
                fill.color = fill.color.inverted();
            }
            if let Some(stroke) = shape.stroke.as_mut() {
                stroke.color = stroke.color.inverted();
            }
        });
    }

    /// Mean perceptual luminance across filled shapes, or None when the
    /// tree has no fills at all
    pub fn mean_fill_luminance(&self) -> Option<f32> {
        let mut total = 0.0;
        let mut count = 0usize;
        self.for_each_shape(|shape| {
            if let Some(fill) = shape.fill {
                total += fill.color.luminance();
                count += 1;
            }
        });
        (count > 0).then(|| total / count as f32)
    }

    /// Whether the asset would vanish on a white badge background
    pub fn is_mostly_white(&self) -> bool {
        self.mean_fill_luminance()
            .is_some_and(|mean| mean > MOSTLY_WHITE_THRESHOLD)
    }

    /// Apply the full style pipeline: greyscale, then invert when the
    /// result is mostly white
    pub fn normalize_style(&mut self) {
        self.to_greyscale();
        if self.is_mostly_white() {
            self.invert();
        }
    }
}

/// Convert a usvg group's children into our shape tree without recursing
fn convert_children(group: &usvg::Group) -> Vec<Shape> {
    let mut stack = vec![(group.children().iter(), Vec::new())];
    loop {
        let (iter, out) = stack.last_mut().expect("stack never empty mid-loop");
        match iter.next() {
            Some(usvg::Node::Group(child)) => {
                stack.push((child.children().iter(), Vec::new()));
            }
            Some(usvg::Node::Path(path)) => {
                if let Some(shape) = convert_path(path) {
                    out.push(Shape::Path(shape));
                }
            }
            // Embedded raster images and un-converted text are not part of
            // the badge aesthetic; drop them.
            Some(_) => {}
            None => {
                let (_, done) = stack.pop().expect("stack never empty mid-loop");
                match stack.last_mut() {
                    Some((_, parent)) => parent.push(Shape::Group(done)),
                    None => return done,
                }
            }
        }
    }
}

fn convert_path(path: &usvg::Path) -> Option<PathShape> {
    let transform = path.abs_transform();
    let data = path.data().clone().transform(transform)?;

    let fill = path.fill().and_then(|fill| {
        paint_color(fill.paint()).map(|color| Fill {
            color,
            even_odd: matches!(fill.rule(), usvg::FillRule::EvenOdd),
        })
    });
    let stroke = path.stroke().and_then(|stroke| {
        paint_color(stroke.paint()).map(|color| Stroke {
            color,
            // Approximate the transform's effect on the stroke width with
            // the mean axis scale.
            width: stroke.width().get()
                * (transform.sx.hypot(transform.kx) + transform.sy.hypot(transform.ky))
                / 2.0,
        })
    });

    if fill.is_none() && stroke.is_none() {
        return None;
    }
    Some(PathShape { fill, stroke, data })
}

/// Solid paint color, if the paint is a plain color
fn paint_color(paint: &usvg::Paint) -> Option<Rgb> {
    match paint {
        usvg::Paint::Color(color) => Some(Rgb::from_u8(color.red, color.green, color.blue)),
        _ => None,
    }
}
