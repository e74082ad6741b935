use serde_json::Value;

use crate::ContributorRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: &'static str },
    #[error("array element is not a contributor record: {0}")]
    InvalidRecord(String),
}

/// Decode a contributors response body: JSON array -> records, in order.
///
/// Anything other than an array of objects carrying `login`, `html_url` and
/// `contributions` is rejected.
pub fn decode_contributors(bytes: &[u8]) -> Result<Vec<ContributorRecord>, DecodeError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;
    if !value.is_array() {
        return Err(DecodeError::NotAnArray {
            found: json_kind(&value),
        });
    }
    serde_json::from_value(value).map_err(|err| DecodeError::InvalidRecord(err.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_contributors, DecodeError};

    #[test]
    fn decodes_records_in_order_and_ignores_extra_fields() {
        let body = br#"[
            {"login":"octocat","html_url":"https://github.com/octocat","contributions":42,"type":"User"},
            {"login":"hubot","html_url":"https://github.com/hubot","contributions":7,"site_admin":false}
        ]"#;

        let records = decode_contributors(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].login, "octocat");
        assert_eq!(records[0].contributions, 42);
        assert_eq!(records[1].html_url, "https://github.com/hubot");
    }

    #[test]
    fn empty_array_is_a_valid_empty_list() {
        assert_eq!(decode_contributors(b"[]").unwrap(), Vec::new());
    }

    #[test]
    fn error_object_is_not_an_array() {
        let body = br#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
        assert_eq!(
            decode_contributors(body).unwrap_err(),
            DecodeError::NotAnArray { found: "object" }
        );
    }

    #[test]
    fn empty_body_is_invalid_json() {
        assert!(matches!(
            decode_contributors(b""),
            Err(DecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn element_missing_fields_is_rejected() {
        let body = br#"[{"login":"octocat"}]"#;
        assert!(matches!(
            decode_contributors(body),
            Err(DecodeError::InvalidRecord(_))
        ));
    }

    #[test]
    fn negative_contribution_count_is_rejected() {
        let body = br#"[{"login":"x","html_url":"https://github.com/x","contributions":-1}]"#;
        assert!(matches!(
            decode_contributors(body),
            Err(DecodeError::InvalidRecord(_))
        ));
    }
}
