//! Field validators shared by every entity record.
//!
//! Input arrives as dynamic JSON (`serde_json::Value`), either from a caller
//! payload or from a row read back out of the store. Each validator takes the
//! value found under a key (`None` when the key is missing) and either returns
//! the typed value or a [`ValidationError`] naming the field.
//!
//! JSON `null` counts as absent wherever absence is allowed, and as a wrong
//! type everywhere else.
//!
//! Numeric fields accept numbers or numeric strings. Strings are trimmed and
//! parsed as a float, then checked for integrality where required, so `"42"`
//! becomes `42` while `"42.42"` and `"forty"` are rejected.

use serde::Serializer;
use serde_json::{Map, Value};

use crate::enums::EntityKind;
use crate::errors::ValidationError;

const INTEGER: &str = "must be an integer";
const POSITIVE_INTEGER: &str = "must be a positive integer";
const OPTIONAL_POSITIVE_INTEGER: &str = "if defined, must be a positive integer";
const NUMBER: &str = "must be a number";
const STRING: &str = "must be a string";
const OPTIONAL_STRING: &str = "if defined, must be a string";
const FLAG: &str = "must be either 1 or 0";
const OBJECT: &str = "must be an object";

/// Borrow the key/value map of an entity payload.
///
/// # Errors
///
/// Returns `ValidationError` if `data` is not a JSON object.
pub fn object(entity: EntityKind, data: &Value) -> Result<&Map<String, Value>, ValidationError> {
    data.as_object()
        .ok_or_else(|| ValidationError::new(entity.label(), OBJECT))
}

/// First non-null value among `keys`, in order.
///
/// Used to accept both the caller-facing and the storage spelling of a key,
/// with the first key winning when both are set.
#[must_use]
pub fn pick<'a>(data: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| data.get(*key).filter(|value| !value.is_null()))
}

/// Coerce a number or numeric string to a finite float.
fn coerce(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Coerce to an integer, rejecting fractions and out-of-range values.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn coerce_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let n = coerce(value)?;
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    (n.fract() == 0.0 && in_range).then_some(n as i64)
}

/// Required integer. Zero and negatives are accepted.
///
/// # Errors
///
/// Returns `ValidationError` for missing, non-numeric, or fractional input.
pub fn integer(field: &'static str, value: Option<&Value>) -> Result<i64, ValidationError> {
    value
        .and_then(coerce_integer)
        .ok_or_else(|| ValidationError::new(field, INTEGER))
}

/// Required row identifier (foreign keys). Must be a positive integer.
///
/// # Errors
///
/// Returns `ValidationError` for missing, non-integral, zero, or negative input.
pub fn identifier(field: &'static str, value: Option<&Value>) -> Result<i64, ValidationError> {
    value
        .and_then(coerce_integer)
        .filter(|id| *id > 0)
        .ok_or_else(|| ValidationError::new(field, POSITIVE_INTEGER))
}

/// Optional row identifier (primary keys before the row is persisted).
///
/// # Errors
///
/// Returns `ValidationError` if a value is present but is not a positive integer.
pub fn optional_identifier(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<i64>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => coerce_integer(v)
            .filter(|id| *id > 0)
            .map(Some)
            .ok_or_else(|| ValidationError::new(field, OPTIONAL_POSITIVE_INTEGER)),
    }
}

/// Required number. Fractions and zero are accepted.
///
/// # Errors
///
/// Returns `ValidationError` for missing, non-numeric, or unparseable input.
pub fn number(field: &'static str, value: Option<&Value>) -> Result<f64, ValidationError> {
    value
        .and_then(coerce)
        .ok_or_else(|| ValidationError::new(field, NUMBER))
}

/// Required text. Empty strings pass; numbers do not.
///
/// # Errors
///
/// Returns `ValidationError` unless the value is a JSON string.
pub fn text(field: &'static str, value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ValidationError::new(field, STRING)),
    }
}

/// Optional text.
///
/// # Errors
///
/// Returns `ValidationError` if a value is present but is not a JSON string.
pub fn optional_text(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::new(field, OPTIONAL_STRING)),
    }
}

/// Two-state flag stored as `0`/`1`. Absence means `1`.
///
/// # Errors
///
/// Returns `ValidationError` for anything other than the numbers 0 or 1.
pub fn flag(field: &'static str, value: Option<&Value>) -> Result<bool, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(true),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v == 1.0 => Ok(true),
            Some(v) if v == 0.0 => Ok(false),
            _ => Err(ValidationError::new(field, FLAG)),
        },
        Some(_) => Err(ValidationError::new(field, FLAG)),
    }
}

/// Serialize a flag back to its `0`/`1` form.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn serialize_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}
