use serde_json::Value;
use thiserror::Error;

use crate::Quote;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Error reading file: {0}")]
    Parse(String),
    #[error("Invalid JSON format. Expected an array.")]
    NotAnArray,
    #[error("Invalid quote at position {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

/// Pretty-printed JSON for the whole list (two-space indent).
pub fn export_json(quotes: &[Quote]) -> String {
    serde_json::to_string_pretty(quotes).unwrap_or_else(|_| "[]".to_string())
}

/// Parses an uploaded file body into quotes.
///
/// The top level must be an array and every entry a quote with non-blank
/// fields; the first offending entry rejects the whole import. Fields are
/// trimmed on the way in.
pub fn parse_import(raw: &str) -> Result<Vec<Quote>, ImportError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| ImportError::Parse(err.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let raw: Quote =
                serde_json::from_value(entry).map_err(|err| ImportError::InvalidEntry {
                    index,
                    reason: err.to_string(),
                })?;
            Quote::new(&raw.text, &raw.category).map_err(|err| ImportError::InvalidEntry {
                index,
                reason: err.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::export_json;
    use crate::Quote;

    #[test]
    fn export_uses_two_space_indent() {
        let quotes = vec![Quote::new("Carpe diem", "Life").unwrap()];
        let json = export_json(&quotes);
        assert!(json.starts_with("[\n  {\n    \"text\": \"Carpe diem\""));
        assert!(json.contains("\"category\": \"Life\""));
    }

    #[test]
    fn export_of_empty_list_is_empty_array() {
        assert_eq!(export_json(&[]), "[]");
    }
}
