//! Console calculator: four arithmetic operations and a few
//! transcendental functions behind a read-eval-print loop.

pub mod ops;
pub mod repl;

pub use ops::Operation;
pub use repl::Calculator;
