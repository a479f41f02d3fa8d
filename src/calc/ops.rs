use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// The calculator's closed operation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sine,
    Cosine,
    Tangent,
    SquareRoot,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sine,
        Operation::Cosine,
        Operation::Tangent,
        Operation::SquareRoot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sine => "sine",
            Operation::Cosine => "cosine",
            Operation::Tangent => "tangent",
            Operation::SquareRoot => "square_root",
        }
    }

    /// Number of operands the operation takes.
    pub fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => 2,
            Operation::Sine | Operation::Cosine | Operation::Tangent | Operation::SquareRoot => 1,
        }
    }

    /// Evaluate on `args`. Angles are in radians.
    pub fn apply(self, args: &[f64]) -> Result<f64, CalcError> {
        if args.len() != self.arity() {
            return Err(CalcError::Arity {
                name: self.name(),
                expected: self.arity(),
                got: args.len(),
            });
        }
        let a = args[0];
        match self {
            Operation::Add => Ok(a + args[1]),
            Operation::Subtract => Ok(a - args[1]),
            Operation::Multiply => Ok(a * args[1]),
            Operation::Divide => {
                if args[1] == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                Ok(a / args[1])
            }
            Operation::Sine => Ok(a.sin()),
            Operation::Cosine => Ok(a.cos()),
            Operation::Tangent => Ok(a.tan()),
            Operation::SquareRoot => {
                if a < 0.0 {
                    return Err(CalcError::Domain(format!("square_root of negative number {a}")));
                }
                Ok(a.sqrt())
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| CalcError::UnknownOperation(name.to_string()))
    }
}
