use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Fixed parameter colours for the log charts
// ---------------------------------------------------------------------------

/// Colour for one of the six thermodynamic parameter charts.
pub fn parameter_color(parameter: &str) -> Color32 {
    match parameter {
        "Temp" => Color32::from_rgb(99, 113, 241),
        "Density" => Color32::from_rgb(222, 96, 70),
        "KinEng" => Color32::from_rgb(91, 200, 154),
        "PotEng" => Color32::from_rgb(160, 106, 242),
        "TotEng" => Color32::from_rgb(243, 164, 103),
        "Volume" => Color32::from_rgb(97, 209, 239),
        _ => Color32::LIGHT_BLUE,
    }
}
