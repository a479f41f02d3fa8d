use std::fmt;
use std::str::FromStr;

use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// NumericSequence – validated, immutable data handed to the collaborators
// ---------------------------------------------------------------------------

/// An ordered sequence of `f64` values that has passed the validation gate.
///
/// The only constructor is [`crate::data::validate_sequence`]; there is no
/// mutable access, so a sequence is never changed after it is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericSequence {
    values: Vec<f64>,
}

impl NumericSequence {
    pub(crate) fn from_validated(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl AsRef<[f64]> for NumericSequence {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

// ---------------------------------------------------------------------------
// Candidate – anything offered to the validation gate
// ---------------------------------------------------------------------------

/// Input of the validation gate: either data that is already typed as
/// floats, or a dynamically typed value whose shape is not yet known.
#[derive(Debug, Clone)]
pub enum Candidate {
    Numbers(Vec<f64>),
    Dynamic(JsonValue),
}

impl From<Vec<f64>> for Candidate {
    fn from(values: Vec<f64>) -> Self {
        Candidate::Numbers(values)
    }
}

impl From<NumericSequence> for Candidate {
    fn from(seq: NumericSequence) -> Self {
        Candidate::Numbers(seq.into_vec())
    }
}

impl From<JsonValue> for Candidate {
    fn from(value: JsonValue) -> Self {
        Candidate::Dynamic(value)
    }
}

// ---------------------------------------------------------------------------
// SourceChoice – the top-level menu selection
// ---------------------------------------------------------------------------

/// Where the next sequence comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceChoice {
    ManualEntry,
    FileEntry,
    Exit,
}

/// Menu text that matches no [`SourceChoice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedChoice(pub String);

impl fmt::Display for UnrecognizedChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid choice '{}', enter 1, 2 or exit", self.0)
    }
}

impl std::error::Error for UnrecognizedChoice {}

impl FromStr for SourceChoice {
    type Err = UnrecognizedChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        match choice {
            "1" => Ok(SourceChoice::ManualEntry),
            "2" => Ok(SourceChoice::FileEntry),
            _ if choice.eq_ignore_ascii_case("exit") => Ok(SourceChoice::Exit),
            _ => Err(UnrecognizedChoice(choice.to_string())),
        }
    }
}
