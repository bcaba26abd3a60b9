//! Logo asset loading, normalization, and selection

pub mod raster;
pub mod vector;

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};

pub use raster::RasterLogo;
pub use vector::VectorLogo;

/// File extensions accepted as logo assets (matched case-insensitively)
pub const LOGO_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "svg"];

/// A loaded logo asset, tagged by kind
///
/// Vector and raster logos are drawn with different PDF primitives, so the
/// renderer dispatches on this tag rather than sniffing the payload.
#[derive(Debug, Clone)]
pub enum Logo {
    Vector(VectorLogo),
    Raster(RasterLogo),
}

impl Logo {
    /// Load a logo from disk, choosing the vector or raster path by
    /// extension, and apply the style normalization for vector assets
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| Error::UnsupportedLogoFormat(path.to_path_buf()))?;

        match extension.as_str() {
            "svg" => {
                let data = std::fs::read(path)?;
                let mut logo = VectorLogo::from_svg(&data)?;
                logo.normalize_style();
                Ok(Logo::Vector(logo))
            }
            ext if LOGO_EXTENSIONS.contains(&ext) => Ok(Logo::Raster(RasterLogo::open(path)?)),
            _ => Err(Error::UnsupportedLogoFormat(path.to_path_buf())),
        }
    }

    /// Intrinsic size in the asset's own units
    pub fn intrinsic_size(&self) -> (f32, f32) {
        match self {
            Logo::Vector(v) => (v.width, v.height),
            Logo::Raster(r) => (r.width as f32, r.height as f32),
        }
    }
}

/// Enumerate logo files in a folder (non-recursive), sorted by filename
///
/// Sorting keeps the index space stable so a seeded picker assigns the
/// same logos across runs regardless of directory iteration order.
pub fn scan_logo_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(Error::FileNotFound(folder.to_path_buf()));
    }

    let mut logos: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| {
                        LOGO_EXTENSIONS
                            .iter()
                            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
                    })
        })
        .collect();
    logos.sort();

    if logos.is_empty() {
        return Err(Error::EmptyLogoFolder(folder.to_path_buf()));
    }
    Ok(logos)
}

/// Uniform random logo selection with an injectable seed
///
/// Each pick is independent; the same logo may appear on many badges.
pub struct LogoPicker {
    paths: Vec<PathBuf>,
    rng: StdRng,
}

impl LogoPicker {
    /// Build a picker over a scanned folder. A seed makes the assignment
    /// reproducible; otherwise the picker draws from OS entropy.
    pub fn new(paths: Vec<PathBuf>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { paths, rng }
    }

    /// Draw one logo path uniformly at random
    pub fn pick(&mut self) -> &Path {
        let index = self.rng.gen_range(0..self.paths.len());
        &self.paths[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("create fixture file");
    }

    #[test]
    fn test_scan_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.SVG");
        touch(dir.path(), "c.jpeg");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "d.pdf");

        let logos = scan_logo_folder(dir.path()).unwrap();
        let names: Vec<_> = logos
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.png", "b.SVG", "c.jpeg"]);
    }

    #[test]
    fn test_empty_folder_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "readme.md");
        let result = scan_logo_folder(dir.path());
        assert!(matches!(result.unwrap_err(), Error::EmptyLogoFolder(_)));
    }

    #[test]
    fn test_missing_folder_is_fatal() {
        let result = scan_logo_folder(Path::new("no-such-folder"));
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_seeded_picker_is_deterministic() {
        let paths: Vec<PathBuf> = (0..5).map(|i| PathBuf::from(format!("{}.png", i))).collect();

        let mut first = LogoPicker::new(paths.clone(), Some(42));
        let mut second = LogoPicker::new(paths, Some(42));
        for _ in 0..20 {
            assert_eq!(first.pick(), second.pick());
        }
    }

    #[test]
    fn test_picker_repeats_allowed() {
        // With a single asset every badge gets the same logo
        let mut picker = LogoPicker::new(vec![PathBuf::from("only.svg")], Some(7));
        for _ in 0..3 {
            assert_eq!(picker.pick(), Path::new("only.svg"));
        }
    }
}
