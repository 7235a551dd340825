//! Print submission wire types

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Inbound print job description
///
/// Missing JSON fields deserialize to empty strings and are rejected by
/// validation afterwards, so a partial body produces per-field errors
/// instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PrintRequest {
    /// Base64-encoded document bytes
    pub document: String,
    /// Original file name, extension included
    pub file_name: String,
    /// Target printer display name (free text, not checked against devices)
    pub printer_name: String,
    /// Submitting user (free text)
    pub username: String,
}

/// Wire field keys - fixed external contract, not localizable
pub mod fields {
    pub const PRINT_REQUEST: &str = "printRequest";
    pub const DOCUMENT: &str = "Document";
    pub const FILE_NAME: &str = "FileName";
    pub const PRINTER_NAME: &str = "PrinterName";
    pub const USERNAME: &str = "Username";
    pub const CONVERT_BASE64: &str = "ConvertBase64";
    pub const WRITE_FILE: &str = "WriteAllBytesAsync";
}

/// Single field violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered set of field violations
///
/// Serializes to the wire shape `{"Field": ["message", ...], ...}` keeping
/// first-seen field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Violated field keys, first-seen order, deduplicated
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        for entry in &self.entries {
            if !fields.contains(&entry.field) {
                fields.push(entry.field);
            }
        }
        fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|entry| entry.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.fields();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for field in fields {
            let messages: Vec<&str> = self
                .entries
                .iter()
                .filter(|entry| entry.field == field)
                .map(|entry| entry.message.as_str())
                .collect();
            map.serialize_entry(field, &messages)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_serialize_to_field_message_map() {
        let mut errors = FieldErrors::new();
        errors.push(fields::DOCUMENT, "document missing");
        errors.push(fields::FILE_NAME, "file name missing");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(
            json,
            r#"{"Document":["document missing"],"FileName":["file name missing"]}"#
        );
    }

    #[test]
    fn test_field_errors_group_repeated_fields() {
        let mut errors = FieldErrors::new();
        errors.push(fields::DOCUMENT, "first");
        errors.push(fields::DOCUMENT, "second");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"Document":["first","second"]}"#);
    }

    #[test]
    fn test_print_request_defaults_missing_fields_to_empty() {
        let request: PrintRequest = serde_json::from_str(r#"{"FileName":"a.pdf"}"#).unwrap();
        assert_eq!(request.file_name, "a.pdf");
        assert!(request.document.is_empty());
        assert!(request.printer_name.is_empty());
        assert!(request.username.is_empty());
    }
}
