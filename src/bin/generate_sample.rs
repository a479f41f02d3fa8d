use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::Float64Array;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const COUNT: usize = 500;
const MEAN: f64 = 50.0;
const STD_DEV: f64 = 10.0;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Rotate through commas, spaces and newlines so the file exercises every
/// delimiter the loader accepts.
fn write_text(path: &Path, values: &[f64]) -> Result<()> {
    let mut file = std::fs::File::create(path).context("creating text sample")?;
    for (i, v) in values.iter().enumerate() {
        let sep = match i % 10 {
            9 => "\n",
            4 => ",  ",
            _ if i % 2 == 0 => ", ",
            _ => " ",
        };
        write!(file, "{v:.3}{sep}")?;
    }
    Ok(())
}

fn write_json(path: &Path, values: &[f64]) -> Result<()> {
    let file = std::fs::File::create(path).context("creating JSON sample")?;
    serde_json::to_writer_pretty(file, values).context("writing JSON sample")?;
    Ok(())
}

fn write_parquet(path: &Path, values: &[f64]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![Field::new(
        "value",
        DataType::Float64,
        false,
    )]));
    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![Arc::new(Float64Array::from(values.to_vec()))],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet sample")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    let values: Vec<f64> = (0..COUNT).map(|_| rng.gauss(MEAN, STD_DEV)).collect();

    write_text(&out_dir.join("normal.txt"), &values)?;
    write_json(&out_dir.join("normal.json"), &values)?;
    write_parquet(&out_dir.join("normal.parquet"), &values)?;

    println!(
        "Wrote {COUNT} values ~ N({MEAN}, {STD_DEV}) to normal.txt, normal.json and normal.parquet in {}",
        out_dir.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            let x = a.next_f64();
            assert_eq!(x, b.next_f64());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_text_sample_mixes_delimiters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("normal.txt");
        let values: Vec<f64> = (0..20).map(f64::from).collect();
        write_text(&path, &values).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(",  ") && text.contains('\n'));
        let loaded = rusty_stats::data::load_from_file(&path).unwrap();
        assert_eq!(loaded.values(), values.as_slice());
    }
}
