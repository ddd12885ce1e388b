//! JSON export of extracted documents.
//!
//! One document becomes one JSON object; [`dump_json`] stores it as
//! `<packageName>.json`, replacing any previous file of that name.

use crate::{document::Document, errors::ExportError};
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Encode a document as pretty-printed JSON
pub fn export_json(document: &Document) -> Result<String, ExportError> {
    serde_json::to_string_pretty(document)
        .map_err(|e| ExportError::Serialization(PathBuf::from(&document.package_name), e))
}

/// File name a document is written to
pub fn output_file_name(document: &Document) -> Result<String, ExportError> {
    if document.package_name.is_empty() {
        return Err(ExportError::MissingPackageName);
    }
    Ok(format!("{}.json", document.package_name))
}

/// Write a document to `<dir>/<packageName>.json`, overwriting an existing file
///
/// Returns the path that was written.
pub fn dump_json(document: &Document, dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(output_file_name(document)?);

    let file = File::create(&path).map_err(|e| ExportError::Io(path.clone(), e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| ExportError::Serialization(path.clone(), e))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| ExportError::Io(path.clone(), e))?;

    debug!(
        "wrote {} ({} declarations)",
        path.display(),
        document.declaration_count()
    );
    Ok(path)
}
