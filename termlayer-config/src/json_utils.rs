//! Typed field extraction from JSON objects.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Read `key` from `json` into `target`.
///
/// - key absent: `target` is untouched and `Ok(false)` is returned
/// - key present with `null`: `target` is cleared back to "not set"
/// - key present with a well-formed value: `target` is overwritten
/// - key present with a malformed value: [`ConfigError::InvalidValue`]
///
/// Returns `Ok(true)` whenever the key was present.
pub fn get_value_for_key<T: DeserializeOwned>(
    json: &Value,
    key: &str,
    target: &mut Option<T>,
) -> Result<bool> {
    let Some(value) = json.get(key) else {
        return Ok(false);
    };

    if value.is_null() {
        *target = None;
        return Ok(true);
    }

    let parsed = T::deserialize(value).map_err(|source| ConfigError::InvalidValue {
        key: key.to_string(),
        source,
    })?;
    *target = Some(parsed);
    Ok(true)
}

/// Like [`get_value_for_key`] for fields that are never "unset".
///
/// `null` is treated as a malformed value.
pub fn get_required_value_for_key<T: DeserializeOwned>(
    json: &Value,
    key: &str,
    target: &mut T,
) -> Result<bool> {
    let Some(value) = json.get(key) else {
        return Ok(false);
    };

    *target = T::deserialize(value).map_err(|source| ConfigError::InvalidValue {
        key: key.to_string(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_key_leaves_target() {
        let mut target = Some(5);
        assert!(!get_value_for_key(&json!({}), "rows", &mut target).unwrap());
        assert_eq!(target, Some(5));
    }

    #[test]
    fn test_present_key_overwrites() {
        let mut target: Option<i32> = None;
        assert!(get_value_for_key(&json!({"rows": 40}), "rows", &mut target).unwrap());
        assert_eq!(target, Some(40));
    }

    #[test]
    fn test_null_clears() {
        let mut target = Some(true);
        assert!(get_value_for_key(&json!({"flag": null}), "flag", &mut target).unwrap());
        assert_eq!(target, None);
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let mut target: Option<bool> = Some(true);
        let err = get_value_for_key(&json!({"flag": "yes"}), "flag", &mut target).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "flag"));
        assert_eq!(target, Some(true));
    }

    #[test]
    fn test_required_rejects_null() {
        let mut target = String::from("keep");
        assert!(get_required_value_for_key(&json!({"name": null}), "name", &mut target).is_err());
        assert_eq!(target, "keep");
    }

    #[test]
    fn test_dotted_keys_are_literal() {
        let mut target: Option<bool> = None;
        let doc = json!({"experimental.rendering.software": true});
        assert!(get_value_for_key(&doc, "experimental.rendering.software", &mut target).unwrap());
        assert_eq!(target, Some(true));
    }
}
