use std::path::Path;

use crate::errors::Result;
use crate::export::bundle::ExportBundle;
use crate::utils::fs::write_atomic;

/// Serializes the bundle as two-space indented JSON.
pub fn document_json(bundle: &ExportBundle) -> Result<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Writes the geometry document to `path`, replacing any previous file.
pub fn write_document(bundle: &ExportBundle, path: &Path) -> Result<()> {
    let mut json = document_json(bundle)?;
    json.push('\n');
    write_atomic(path, json.as_bytes())?;
    log::info!("Wrote {} ({} records)", path.display(), bundle.len());
    Ok(())
}
