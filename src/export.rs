//! Site export.
//!
//! A rendered portfolio is one self-contained document, so export is one
//! file: `index.html` in the output directory, ready to be dropped on any
//! static host or packed into an archive by whatever delivers the download.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `html` as `index.html` under `output_dir`, creating the directory
/// if needed. Returns the written path.
pub fn export_site(html: &str, output_dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, html)?;
    Ok(path)
}
