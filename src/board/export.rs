//! Download of the last fetched batch.

use crate::users::UserRecord;

pub const EXPORT_FILE_NAME: &str = "users_data.json";

/// A file offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub contents: String,
}

/// Serialize `batch` as indented JSON. An empty batch exports nothing.
///
/// # Errors
///
/// Returns the serializer error if a record cannot be encoded.
pub fn export_last_batch(batch: &[UserRecord]) -> Result<Option<ExportFile>, serde_json::Error> {
    if batch.is_empty() {
        return Ok(None);
    }
    let contents = serde_json::to_string_pretty(batch)?;
    Ok(Some(ExportFile { file_name: EXPORT_FILE_NAME, contents }))
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
