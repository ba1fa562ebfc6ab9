//! Wire field coercion.
//!
//! Type-checks declared field shapes on an inbound payload before the
//! per-field validators run. Each accessor reports exactly one violation:
//! an absent or null field maps to `RequiredFieldMissing`, a wrong primitive
//! type to `TypeMismatch`.

use serde_json::{Map, Value};

use crate::error::{ValidationErrors, Violation};

/// The payload root must be a JSON object.
pub fn object(payload: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    match payload.as_object() {
        Some(map) => Ok(map),
        None => {
            let mut errors = ValidationErrors::new();
            errors.push(
                "non_field_errors",
                Violation::type_mismatch("Invalid data. Expected an object."),
            );
            Err(errors)
        }
    }
}

/// Required text field.
pub fn text(map: &Map<String, Value>, field: &str) -> Result<String, Violation> {
    match map.get(field) {
        None | Some(Value::Null) => Err(Violation::required("This field is required.")),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(Violation::type_mismatch("Not a valid string.")),
    }
}

/// Required integer field.
pub fn integer(map: &Map<String, Value>, field: &str) -> Result<i64, Violation> {
    match map.get(field) {
        None | Some(Value::Null) => Err(Violation::required("This field is required.")),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| Violation::type_mismatch("A valid integer is required.")),
    }
}

/// Required numeric field (integral wire values are accepted too).
pub fn number(map: &Map<String, Value>, field: &str) -> Result<f64, Violation> {
    match map.get(field) {
        None | Some(Value::Null) => Err(Violation::required("This field is required.")),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| Violation::type_mismatch("A valid number is required.")),
    }
}

/// Integer field that may be absent; `Ok(None)` means absent or null.
///
/// Serializers that want an entity-specific required message use this and
/// attach their own violation on `None`.
pub fn optional_integer(map: &Map<String, Value>, field: &str) -> Result<Option<i64>, Violation> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| Violation::type_mismatch("A valid integer is required.")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::ViolationKind;

    fn payload() -> Value {
        json!({
            "name": "Keyboard",
            "quantity": 2,
            "price": 59.9,
            "note": null,
        })
    }

    #[test]
    fn object_rejects_non_object_root() {
        let errors = object(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.field("non_field_errors")[0].kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn text_reads_strings_and_rejects_other_types() {
        let payload = payload();
        let map = payload.as_object().unwrap();

        assert_eq!(text(map, "name").unwrap(), "Keyboard");
        assert_eq!(text(map, "quantity").unwrap_err().kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn missing_and_null_fields_are_required_violations() {
        let payload = payload();
        let map = payload.as_object().unwrap();

        assert_eq!(text(map, "absent").unwrap_err().kind, ViolationKind::RequiredFieldMissing);
        assert_eq!(text(map, "note").unwrap_err().kind, ViolationKind::RequiredFieldMissing);
    }

    #[test]
    fn integer_rejects_fractional_values() {
        let payload = payload();
        let map = payload.as_object().unwrap();

        assert_eq!(integer(map, "quantity").unwrap(), 2);
        assert_eq!(integer(map, "price").unwrap_err().kind, ViolationKind::TypeMismatch);
    }

    #[test]
    fn number_accepts_integral_wire_values() {
        let payload = payload();
        let map = payload.as_object().unwrap();

        assert_eq!(number(map, "price").unwrap(), 59.9);
        assert_eq!(number(map, "quantity").unwrap(), 2.0);
    }

    #[test]
    fn optional_integer_distinguishes_absence_from_mismatch() {
        let payload = payload();
        let map = payload.as_object().unwrap();

        assert_eq!(optional_integer(map, "absent").unwrap(), None);
        assert_eq!(optional_integer(map, "note").unwrap(), None);
        assert_eq!(optional_integer(map, "quantity").unwrap(), Some(2));
        assert!(optional_integer(map, "name").is_err());
    }
}
