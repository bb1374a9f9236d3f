//! Crate-private helpers for the recursive descent over parsed JSON.
//!
//! Every helper reports failures relative to the object currently being
//! decoded. Enclosing frames prefix their own field or index segment via
//! [`DecodeError::at`] / [`DecodeError::at_index`] as errors bubble up, which
//! is how a deeply nested failure ends up addressed from the payload root.
//!
//! Unknown fields are never inspected and never rejected: the platform adds
//! fields over time and decoding only reads what the schema names.

use serde_json::{Map, Value};

use crate::error::{DecodeError, FieldPath, ValueKind};

/// Require `value` to be a JSON object.
pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::TypeMismatch {
        path: FieldPath::root(),
        expected: "an object",
        found: ValueKind::of(value),
    })
}

/// Require `field` to be present. A present `null` is returned as-is so the
/// typed readers can report what was found; only a missing key is a
/// [`DecodeError::MissingRequiredField`].
pub(crate) fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, DecodeError> {
    object
        .get(field)
        .ok_or_else(|| DecodeError::MissingRequiredField {
            path: FieldPath::field(field),
        })
}

/// A required string field.
pub(crate) fn required_str(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<String, DecodeError> {
    let value = required(object, field)?;
    value
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| type_mismatch(field, "a string", value))
}

/// A required boolean field.
pub(crate) fn required_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<bool, DecodeError> {
    let value = required(object, field)?;
    value
        .as_bool()
        .ok_or_else(|| type_mismatch(field, "a boolean", value))
}

/// A required integral number field. Floats are rejected, not truncated.
pub(crate) fn required_i64(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<i64, DecodeError> {
    let value = required(object, field)?;
    value
        .as_i64()
        .ok_or_else(|| type_mismatch(field, "an integer", value))
}

/// A required object-valued field, cloned as an opaque map.
pub(crate) fn required_object(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Map<String, Value>, DecodeError> {
    let value = required(object, field)?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| type_mismatch(field, "an object", value))
}

/// An optional string field; absent and `null` both decode to `None`.
pub(crate) fn optional_str(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(type_mismatch(field, "a string", other)),
    }
}

/// An optional boolean field; absent and `null` both decode to `None`.
pub(crate) fn optional_bool(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<bool>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(other) => Err(type_mismatch(field, "a boolean", other)),
    }
}

/// A required nested record, decoded by `decode`, with failures prefixed by
/// `field`.
pub(crate) fn required_record<T>(
    object: &Map<String, Value>,
    field: &'static str,
    decode: impl FnOnce(&Value) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    let value = required(object, field)?;
    decode(value).map_err(|err| err.at(field))
}

/// An optional nested record; absent and `null` both decode to `None`.
pub(crate) fn optional_record<T>(
    object: &Map<String, Value>,
    field: &'static str,
    decode: impl FnOnce(&Value) -> Result<T, DecodeError>,
) -> Result<Option<T>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(value).map(Some).map_err(|err| err.at(field)),
    }
}

/// A required array field, decoding every item in input order.
pub(crate) fn required_list<T>(
    object: &Map<String, Value>,
    field: &'static str,
    decode: impl Fn(&Value) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let value = required(object, field)?;
    decode_items(value, decode).map_err(|err| err.at(field))
}

/// An optional array field; absent and `null` both decode to `None`.
pub(crate) fn optional_list<T>(
    object: &Map<String, Value>,
    field: &'static str,
    decode: impl Fn(&Value) -> Result<T, DecodeError>,
) -> Result<Option<Vec<T>>, DecodeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_items(value, decode)
            .map(Some)
            .map_err(|err| err.at(field)),
    }
}

fn decode_items<T>(
    value: &Value,
    decode: impl Fn(&Value) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let Some(items) = value.as_array() else {
        return Err(DecodeError::TypeMismatch {
            path: FieldPath::root(),
            expected: "an array",
            found: ValueKind::of(value),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode(item).map_err(|err| err.at_index(index)))
        .collect()
}

fn type_mismatch(field: &'static str, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        path: FieldPath::field(field),
        expected,
        found: ValueKind::of(value),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().expect("fixture is an object").clone()
    }

    #[test]
    fn test_required_str_reads_string() {
        let obj = object(json!({"id": "T123"}));
        assert_eq!(required_str(&obj, "id").unwrap(), "T123");
    }

    #[test]
    fn test_required_str_rejects_null_as_type_mismatch() {
        let obj = object(json!({"id": null}));
        let err = required_str(&obj, "id").unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                path: FieldPath::field("id"),
                expected: "a string",
                found: ValueKind::Null,
            }
        );
    }

    #[test]
    fn test_required_str_missing_key() {
        let obj = object(json!({}));
        let err = required_str(&obj, "id").unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField {
                path: FieldPath::field("id"),
            }
        );
    }

    #[test]
    fn test_required_i64_rejects_float() {
        let obj = object(json!({"attachment_id": 1.5}));
        let err = required_i64(&obj, "attachment_id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "attachment_id: expected an integer, found a number"
        );
    }

    #[test]
    fn test_optional_str_treats_null_and_absent_alike() {
        let with_null = object(json!({"team_id": null}));
        let without = object(json!({}));
        assert_eq!(optional_str(&with_null, "team_id").unwrap(), None);
        assert_eq!(optional_str(&without, "team_id").unwrap(), None);
    }

    #[test]
    fn test_optional_bool_rejects_wrong_shape() {
        let obj = object(json!({"emoji": "yes"}));
        let err = optional_bool(&obj, "emoji").unwrap_err();
        assert_eq!(err.to_string(), "emoji: expected a boolean, found a string");
    }

    #[test]
    fn test_list_failures_carry_item_index() {
        let obj = object(json!({"items": ["ok", 3, "ok"]}));
        let err = required_list(&obj, "items", |item| {
            item.as_str().map(ToOwned::to_owned).ok_or_else(|| {
                DecodeError::TypeMismatch {
                    path: FieldPath::root(),
                    expected: "a string",
                    found: ValueKind::of(item),
                }
            })
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "items[1]: expected a string, found a number");
    }

    #[test]
    fn test_list_must_be_an_array() {
        let obj = object(json!({"items": {"not": "a list"}}));
        let err = required_list(&obj, "items", |_| {
            Ok::<(), DecodeError>(())
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "items: expected an array, found an object");
    }
}
