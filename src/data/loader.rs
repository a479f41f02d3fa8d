use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::NumericSequence;
use super::validate::validate_sequence;
use crate::error::{LoadError, LoadResult};

// ---------------------------------------------------------------------------
// Manual entry
// ---------------------------------------------------------------------------

/// Parse comma-separated numbers typed by the user.
///
/// Tokens are trimmed and empty tokens skipped, so `"1, ,2,"` is `[1, 2]`.
/// Whitespace alone does not separate numbers here: `"1 2"` is one bad token.
pub fn load_from_manual_text(text: &str) -> LoadResult<NumericSequence> {
    let values = parse_tokens(text.split(',').map(str::trim).filter(|t| !t.is_empty()))?;
    finish(values)
}

// ---------------------------------------------------------------------------
// Public file entry-point
// ---------------------------------------------------------------------------

/// Load a numeric sequence from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` / `.pq` – first numeric column
/// * `.json`            – `[1.5, 2, "3"]`
/// * anything else      – numbers separated by any run of commas, spaces or newlines
///
/// The file handle lives only for the duration of this call.
pub fn load_from_file(path: impl AsRef<Path>) -> LoadResult<NumericSequence> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let result = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        _ => load_delimited(path),
    };

    match &result {
        Ok(seq) => log::debug!("Loaded {} values from {}", seq.len(), path.display()),
        Err(e) => log::warn!("Failed to load {}: {e}", path.display()),
    }
    result
}

/// Only regular files count as openable; a directory is `NotFound` too.
fn open(path: &Path) -> LoadResult<File> {
    let not_found = |source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(not_found)?;
    let meta = file.metadata().map_err(not_found)?;
    if !meta.is_file() {
        return Err(not_found(std::io::Error::other("not a regular file")));
    }
    Ok(file)
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Commas, spaces and newlines form a single delimiter class. The CSV reader
/// splits records and fields; each field is split again on the rest of the
/// class, which collapses delimiter runs and drops edge delimiters. Quotes
/// have no meaning and stay part of the token.
fn load_delimited(path: &Path) -> LoadResult<NumericSequence> {
    let file = open(path)?;
    log::info!("Reading {} as delimited text", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let mut tokens = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::Parse(format!("line {}: {e}", row_no + 1)))?;
        for field in record.iter() {
            tokens.extend(
                field
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(str::to_owned),
            );
        }
    }

    let values = parse_tokens(tokens.iter().map(String::as_str))?;
    finish(values)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON: a top-level array whose elements are numbers or numeric
/// strings. The root value goes through the validation gate as-is, so an
/// object or scalar root is a type error rather than a parse error.
fn load_json(path: &Path) -> LoadResult<NumericSequence> {
    let file = open(path)?;
    log::info!("Reading {} as JSON", path.display());

    let root: JsonValue = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LoadError::Parse(format!("invalid JSON: {e}")))?;

    let seq = validate_sequence(root)?;
    if seq.is_empty() {
        return Err(LoadError::EmptyInput);
    }
    Ok(seq)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Read the first numeric column (Float64, Float32, Int64 or Int32) of a
/// Parquet file, across all record batches. Nulls are a parse error: a
/// sequence with holes is never returned.
fn load_parquet(path: &Path) -> LoadResult<NumericSequence> {
    let file = open(path)?;
    log::info!("Reading {} as Parquet", path.display());

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| LoadError::Parse(format!("reading parquet metadata: {e}")))?;

    let col_idx = builder
        .schema()
        .fields()
        .iter()
        .position(|f| is_numeric(f.data_type()))
        .ok_or_else(|| LoadError::Type("parquet file has no numeric column".into()))?;
    log::debug!(
        "Using parquet column '{}'",
        builder.schema().field(col_idx).name()
    );

    let reader = builder
        .build()
        .map_err(|e| LoadError::Parse(format!("building parquet reader: {e}")))?;

    let mut values = Vec::new();
    for batch_result in reader {
        let batch =
            batch_result.map_err(|e| LoadError::Parse(format!("reading parquet record batch: {e}")))?;
        extend_from_column(&mut values, batch.column(col_idx))?;
    }

    finish(values)
}

fn is_numeric(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32
    )
}

// -- Arrow helpers --

fn extend_from_column(values: &mut Vec<f64>, col: &Arc<dyn Array>) -> LoadResult<()> {
    if col.null_count() > 0 {
        return Err(LoadError::Parse(format!(
            "numeric column has {} null value(s)",
            col.null_count()
        )));
    }

    let any = col.as_any();
    match col.data_type() {
        DataType::Float64 => values.extend(downcast::<Float64Array>(any)?.values().iter().copied()),
        DataType::Float32 => {
            values.extend(downcast::<Float32Array>(any)?.values().iter().map(|&v| v as f64))
        }
        DataType::Int64 => {
            values.extend(downcast::<Int64Array>(any)?.values().iter().map(|&v| v as f64))
        }
        DataType::Int32 => {
            values.extend(downcast::<Int32Array>(any)?.values().iter().map(|&v| v as f64))
        }
        other => return Err(LoadError::Type(format!("column type {other:?} is not numeric"))),
    }
    Ok(())
}

fn downcast<T: 'static>(any: &dyn std::any::Any) -> LoadResult<&T> {
    any.downcast_ref::<T>()
        .ok_or_else(|| LoadError::Type("unexpected arrow array layout".into()))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// All-or-nothing: the first bad token fails the whole load.
fn parse_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> LoadResult<Vec<f64>> {
    tokens
        .enumerate()
        .map(|(i, tok)| tok.parse::<f64>().map_err(|_| LoadError::bad_token(tok, i + 1)))
        .collect()
}

fn finish(values: Vec<f64>) -> LoadResult<NumericSequence> {
    if values.is_empty() {
        return Err(LoadError::EmptyInput);
    }
    validate_sequence(values)
}
