use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Marker colours shared by every renderer.
pub const MEAN_COLOR: Color32 = Color32::from_rgb(220, 40, 40);
pub const MEDIAN_COLOR: Color32 = Color32::from_rgb(40, 80, 220);

/// Generates `n` colours with hues evenly spaced between `from` and `to`
/// degrees.
pub fn generate_palette(n: usize, from: f32, to: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let step = if n > 1 { (to - from) / (n - 1) as f32 } else { 0.0 };
    (0..n)
        .map(|i| hsl_to_color32(from + step * i as f32, 0.65, 0.55))
        .collect()
}

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Bin shading: relative frequency → Color32
// ---------------------------------------------------------------------------

/// Maps bin counts onto a cool-to-warm ramp so taller bars stand out.
#[derive(Debug, Clone)]
pub struct BinShading {
    ramp: Vec<Color32>,
    max_count: usize,
}

impl BinShading {
    const STEPS: usize = 16;

    pub fn new(counts: &[usize]) -> Self {
        BinShading {
            ramp: generate_palette(Self::STEPS, 200.0, 20.0),
            max_count: counts.iter().copied().max().unwrap_or(0),
        }
    }

    /// Colour for a bin holding `count` values.
    pub fn color_for(&self, count: usize) -> Color32 {
        if self.max_count == 0 {
            return self.ramp[0];
        }
        let idx = count.min(self.max_count) * (Self::STEPS - 1) / self.max_count;
        self.ramp[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_len() {
        assert!(generate_palette(0, 0.0, 360.0).is_empty());
        assert_eq!(generate_palette(5, 0.0, 360.0).len(), 5);
        assert_eq!(generate_palette(1, 90.0, 180.0).len(), 1);
    }

    #[test]
    fn test_shading_extremes() {
        let shading = BinShading::new(&[0, 3, 6]);
        assert_ne!(shading.color_for(0), shading.color_for(6));
        assert_eq!(shading.color_for(6), shading.color_for(60));
    }

    #[test]
    fn test_shading_all_zero() {
        let shading = BinShading::new(&[0, 0]);
        assert_eq!(shading.color_for(0), shading.color_for(5));
    }
}
