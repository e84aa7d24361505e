use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use quotes_core::{export_json, Quote};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

pub const EXPORT_FILENAME: &str = "quotes.json";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes the pretty-printed list as `quotes.json` inside `dir`.
pub fn export_quotes(dir: &Path, quotes: &[Quote]) -> Result<PathBuf, ExportError> {
    let writer = AtomicFileWriter::new(dir.to_path_buf());
    let path = writer.write(EXPORT_FILENAME, &export_json(quotes))?;
    Ok(path)
}

/// Reads a user-chosen import file as text.
pub fn read_import_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
