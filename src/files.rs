// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTML file discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::dom::{parse_single, parse_with, Document, Element, ParseConfig};
use crate::error::{ErrorContext, Result};

/// List the `.html` files directly inside a directory
///
/// The extension match is exact (`index.HTML` and `page.htm` are skipped).
/// Paths are returned sorted.
pub fn list_html_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    let label = dir.display().to_string();
    for entry in fs::read_dir(dir).with_label(&label)? {
        let path = entry.with_label(&label)?.path();
        if path.extension().is_some_and(|ext| ext == "html") {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "listed HTML files");
    Ok(files)
}

/// Read and parse an HTML file
pub fn read_html_file(path: impl AsRef<Path>, config: &ParseConfig) -> Result<Document> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let html = fs::read_to_string(path).with_label(&label)?;
    parse_with(&html, config).with_label(&label)
}

/// Read a file that must hold exactly one top-level element
pub fn read_html_single(path: impl AsRef<Path>) -> Result<Element> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let html = fs::read_to_string(path).with_label(&label)?;
    parse_single(&html, Some(&label))
}
