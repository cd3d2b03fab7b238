use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
/// Used for the per-category share chart.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            hsl_to_color32(Hsl::new(hue, 0.75, 0.55))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Continuous scale: numeric value → Color32
// ---------------------------------------------------------------------------

/// A red→yellow→green scale over a numeric domain, used to colour the
/// per-country mean-salary bars (the choropleth's `RdYlGn` ramp).
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    /// Build the scale from the values it will colour. `None` when there
    /// are no values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(ColorScale { min, max })
    }

    /// Colour for a value: red at the minimum, green at the maximum.
    /// A degenerate single-value domain maps to the midpoint yellow.
    pub fn color_for(&self, value: f64) -> Color32 {
        let range = self.max - self.min;
        let t = if range <= 0.0 {
            0.5
        } else {
            ((value - self.min) / range).clamp(0.0, 1.0)
        };
        // Hue 0° is red, 120° is green; the ramp passes through yellow.
        hsl_to_color32(Hsl::new(t as f32 * 120.0, 0.75, 0.5))
    }
}

fn hsl_to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn scale_endpoints_are_red_and_green() {
        let scale = ColorScale::from_values([10.0, 20.0, 30.0]).unwrap();
        let low = scale.color_for(10.0);
        let high = scale.color_for(30.0);
        assert!(low.r() > low.g());
        assert!(high.g() > high.r());
    }

    #[test]
    fn scale_clamps_out_of_domain_values() {
        let scale = ColorScale::from_values([0.0, 1.0]).unwrap();
        assert_eq!(scale.color_for(-5.0), scale.color_for(0.0));
        assert_eq!(scale.color_for(9.0), scale.color_for(1.0));
    }

    #[test]
    fn degenerate_domain_does_not_divide_by_zero() {
        let scale = ColorScale::from_values([42.0]).unwrap();
        // Midpoint of the ramp; just must not panic or produce nonsense.
        let c = scale.color_for(42.0);
        assert!(c.r() > 0 && c.g() > 0);
    }

    #[test]
    fn empty_domain_yields_no_scale() {
        assert!(ColorScale::from_values([]).is_none());
    }
}
