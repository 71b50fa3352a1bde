use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.7, 0.45).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// SeriesColors: dataset key → Color32
// ---------------------------------------------------------------------------

/// One colour per series key, assigned in key order.
#[derive(Debug, Clone, Default)]
pub struct SeriesColors {
    by_key: BTreeMap<String, Color32>,
}

impl SeriesColors {
    pub fn new<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: Vec<&str> = keys.into_iter().collect();
        let by_key = keys
            .iter()
            .zip(generate_palette(keys.len()))
            .map(|(k, c)| (k.to_string(), c))
            .collect();
        Self { by_key }
    }

    pub fn color_for(&self, key: &str) -> Color32 {
        self.by_key.get(key).copied().unwrap_or(Color32::GRAY)
    }
}
