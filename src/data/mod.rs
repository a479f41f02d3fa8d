/// Data layer: core types, loading, and validation.
///
/// Architecture:
/// ```text
///  typed text        .txt / .csv / .json / .parquet
///        │                     │
///        ▼                     ▼
///   ┌──────────────────────────────┐
///   │            loader            │  tokenize / decode → Candidate
///   └──────────────────────────────┘
///                  │
///                  ▼
///   ┌──────────────────────────────┐
///   │           validate           │  the single gate → NumericSequence
///   └──────────────────────────────┘
///                  │
///                  ▼
///        summarizer + renderer
/// ```

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_file, load_from_manual_text};
pub use model::{Candidate, NumericSequence, SourceChoice};
pub use validate::validate_sequence;
