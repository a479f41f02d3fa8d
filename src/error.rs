use std::path::PathBuf;

use thiserror::Error;

/// Why a load attempt produced no sequence.
///
/// Every variant is recoverable: the session reports it on one line and
/// returns to the source menu.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {path} ({source})")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("no numbers found in input")]
    EmptyInput,

    #[error("type error: {0}")]
    Type(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

impl LoadError {
    pub(crate) fn bad_token(token: &str, position: usize) -> Self {
        LoadError::Parse(format!("token {position} '{token}' is not a number"))
    }
}

/// Failures of a single calculator evaluation.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivideByZero,

    #[error("math domain error: {0}")]
    Domain(String),

    #[error("'{name}' takes {expected} operand(s), got {got}")]
    Arity {
        name: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_line() {
        let errors = [
            LoadError::Parse("token 1 'x' is not a number".into()),
            LoadError::EmptyInput,
            LoadError::Type("expected a list, got a mapping".into()),
            LoadError::NotFound {
                path: PathBuf::from("missing.txt"),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
        ];
        for e in &errors {
            assert!(!e.to_string().contains('\n'), "{e}");
        }
    }

    #[test]
    fn test_bad_token_names_position() {
        let e = LoadError::bad_token("abc", 3);
        assert_eq!(e.to_string(), "parse error: token 3 'abc' is not a number");
    }
}
