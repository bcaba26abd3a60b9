//! PDF merging using lopdf
//!
//! Based on the lopdf merge example:
//! https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lopdf::{dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};

/// Default output filename for directory combines
pub const DEFAULT_COMBINED_NAME: &str = "combined.pdf";

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// Merge PDF files into a single PDF, preserving input order
///
/// Zero inputs produce a valid zero-page document rather than an error. A
/// missing, unreadable, or corrupt input aborts the whole merge before
/// anything is written.
pub fn merge_pdfs(options: &MergeOptions) -> Result<()> {
    // Validate all input files exist before loading anything
    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    let mut documents: Vec<Document> = Vec::new();
    for path in &options.input_paths {
        let doc = Document::load(path)?;
        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }
        documents.push(doc);
    }

    // Renumber every document into one shared id space and pool the objects
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        let pages = doc.get_pages();
        page_ids.extend(pages.into_values());
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);

    // Keep new_object_id() clear of the ids we just imported
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();
    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => page_ids.len() as i64,
            "Kids" => kids,
        }),
    );

    let catalog_id = merged.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    merged.trailer.set("Root", catalog_id);

    // Re-parent all pages under the new Pages node
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(ref mut dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    merged.compress();
    merged.save(&options.output_path)?;
    Ok(())
}

/// Combine every PDF in a directory into `directory/output_name`
///
/// Inputs are the directory's immediate `.pdf` files (case-insensitive
/// extension match) in ascending filename order, excluding a pre-existing
/// file with the output's name. Returns the resolved output path.
pub fn combine_directory(directory: &Path, output_name: &str) -> Result<PathBuf> {
    if !directory.is_dir() {
        return Err(Error::FileNotFound(directory.to_path_buf()));
    }

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(directory)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
                && path.file_name().and_then(|name| name.to_str()) != Some(output_name)
        })
        .collect();
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let output_path = directory.join(output_name);
    merge_pdfs(&MergeOptions {
        input_paths: inputs,
        output_path: output_path.clone(),
    })?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_options_creation() {
        let options = MergeOptions {
            input_paths: vec![PathBuf::from("test1.pdf"), PathBuf::from("test2.pdf")],
            output_path: PathBuf::from("merged.pdf"),
        };

        assert_eq!(options.input_paths.len(), 2);
        assert_eq!(options.output_path, Path::new("merged.pdf"));
    }

    #[test]
    fn test_merge_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let options = MergeOptions {
            input_paths: vec![dir.path().join("absent.pdf")],
            output_path: dir.path().join("out.pdf"),
        };
        let result = merge_pdfs(&options);
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
        assert!(!options.output_path.exists());
    }

    // Ordering and zero-input behavior are covered with real documents in
    // tests/integration.rs
}
