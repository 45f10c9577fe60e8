//! JSON parsing placeholder.
//!
//! Nothing here parses JSON. [`parse_json`] keeps the historical contract of
//! handing back an empty object for any input and logs a warning each time;
//! [`try_parse_json`] reports the gap as [`Error::NotImplemented`]. Callers
//! that need real parsing should use `serde_json` directly.

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};

/// Always returns an empty object, whatever `text` contains.
pub fn parse_json(text: &str) -> Map<String, Value> {
    warn!(
        input_len = text.len(),
        "parse_json is not implemented; returning an empty object"
    );
    Map::new()
}

/// Always fails with [`Error::NotImplemented`].
pub fn try_parse_json(_text: &str) -> Result<Map<String, Value>> {
    Err(Error::NotImplemented("JSON parsing".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_is_always_empty() {
        for input in ["", "{}", r#"{"name": "utilkit", "n": 1}"#, "not json at all", "[1,2,3]"] {
            assert!(parse_json(input).is_empty());
        }
    }

    #[test]
    fn test_try_parse_json_reports_not_implemented() {
        let err = try_parse_json(r#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, Error::NotImplemented(_)));
        assert_eq!(err.to_string(), "Not implemented: JSON parsing");
    }
}
