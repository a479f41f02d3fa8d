use serde_json::Value as JsonValue;

use super::model::{Candidate, NumericSequence};
use crate::error::{LoadError, LoadResult};

/// The validation gate: every sequence reaching the summarizer or a renderer
/// is built here.
///
/// * `Candidate::Numbers` is already typed and passes through unchanged, so
///   validating a validated sequence yields an equal one.
/// * `Candidate::Dynamic` must be an array; each element is coerced to `f64`
///   (numbers, or strings holding a number). Scalars and mappings are
///   rejected with [`LoadError::Type`].
pub fn validate_sequence(candidate: impl Into<Candidate>) -> LoadResult<NumericSequence> {
    match candidate.into() {
        Candidate::Numbers(values) => Ok(NumericSequence::from_validated(values)),
        Candidate::Dynamic(JsonValue::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| coerce_element(item, i))
            .collect::<LoadResult<Vec<f64>>>()
            .map(NumericSequence::from_validated),
        Candidate::Dynamic(JsonValue::Object(_)) => Err(LoadError::Type(
            "expected a list of numbers, got a mapping".into(),
        )),
        Candidate::Dynamic(other) => Err(LoadError::Type(format!(
            "expected a list of numbers, got a {}",
            kind_of(&other)
        ))),
    }
}

fn coerce_element(item: &JsonValue, index: usize) -> LoadResult<f64> {
    match item {
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| LoadError::Type(format!("element {index}: {n} is not representable"))),
        JsonValue::String(s) => s.trim().parse::<f64>().map_err(|_| {
            LoadError::Type(format!("element {index}: '{s}' cannot be converted to a number"))
        }),
        other => Err(LoadError::Type(format!(
            "element {index}: a {} cannot be converted to a number",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "scalar number",
        JsonValue::String(_) => "scalar string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typed_numbers_pass_through() {
        let seq = validate_sequence(vec![1.0, f64::INFINITY, -2.5]).unwrap();
        assert_eq!(seq.values(), &[1.0, f64::INFINITY, -2.5]);
    }

    #[test]
    fn test_idempotent() {
        let first = validate_sequence(json!([3, "4.5", 6])).unwrap();
        let second = validate_sequence(first.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_dynamic_list_is_coerced() {
        let seq = validate_sequence(json!([1, " 2.5 ", -3e2])).unwrap();
        assert_eq!(seq.values(), &[1.0, 2.5, -300.0]);
    }

    #[test]
    fn test_empty_list_is_valid() {
        let seq = validate_sequence(json!([])).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_scalar_rejected() {
        assert!(matches!(validate_sequence(json!(42)), Err(LoadError::Type(_))));
        assert!(matches!(validate_sequence(json!("1,2,3")), Err(LoadError::Type(_))));
        assert!(matches!(validate_sequence(json!(null)), Err(LoadError::Type(_))));
    }

    #[test]
    fn test_mapping_rejected() {
        let err = validate_sequence(json!({"values": [1, 2]})).unwrap_err();
        assert!(matches!(err, LoadError::Type(ref m) if m.contains("mapping")));
    }

    #[test]
    fn test_uncoercible_element_rejected() {
        let err = validate_sequence(json!([1, true, 3])).unwrap_err();
        assert!(matches!(err, LoadError::Type(ref m) if m.contains("element 1")));

        let err = validate_sequence(json!([1, "abc"])).unwrap_err();
        assert!(matches!(err, LoadError::Type(ref m) if m.contains("'abc'")));

        assert!(validate_sequence(json!([[1, 2]])).is_err());
    }
}
