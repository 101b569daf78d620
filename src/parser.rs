//! JSON loader for Pixels backup exports.

use std::path::Path;

use tracing::debug;

use crate::cleaning::types::RawRecord;
use crate::error::LoadError;

/// Reads the export at `path` and decodes it into one [`RawRecord`] per entry.
///
/// The file handle is opened and released inside this call.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Json`] if its content is not a list of daily records.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = bytes.len(), "Export read, decoding");
    parse_records(&bytes)
}

/// Decodes a JSON array of daily records from raw bytes.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if the bytes are not a JSON array of objects
/// with a string `date`, numeric `scores` and string `notes`.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<RawRecord>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_array() {
        let records = parse_records(b"[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_full_record() {
        let json = br#"[{"date": "2024-01-01", "type": "Mood", "scores": [3, 5], "notes": "a b c", "tags": []}]"#;
        let records = parse_records(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2024-01-01");
        assert_eq!(records[0].scores, vec![3.0, 5.0]);
        assert_eq!(records[0].notes.as_deref(), Some("a b c"));
    }

    #[test]
    fn test_parse_missing_and_null_optionals() {
        let json = br#"[{"date": "2024-01-01"}, {"date": "2024-01-02", "scores": null, "notes": null}]"#;
        let records = parse_records(json).unwrap();

        assert!(records[0].scores.is_empty());
        assert!(records[0].notes.is_none());
        assert!(records[1].scores.is_empty());
        assert!(records[1].notes.is_none());
    }

    #[test]
    fn test_parse_missing_date_fails() {
        let result = parse_records(br#"[{"scores": [1]}]"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_parse_non_numeric_score_fails() {
        let result = parse_records(br#"[{"date": "2024-01-01", "scores": ["high"]}]"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_parse_non_string_notes_fails() {
        let result = parse_records(br#"[{"date": "2024-01-01", "notes": 5}]"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_parse_object_top_level_fails() {
        let result = parse_records(br#"{"date": "2024-01-01"}"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_records(Path::new("/nonexistent/pixels_backup.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
