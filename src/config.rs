use crate::models::{FontCandidate, IconSpec, Palette, Rgb};

// Colours from the app
pub const PALETTE: Palette = Palette {
    background: Rgb::from_hex(0xfffefb),
    primary: Rgb::from_hex(0x00668c),
    accent: Rgb::from_hex(0x71c4ef),
    glyph: Rgb::from_hex(0xffffff),
};

pub const GLYPH: char = 'V';

pub const PRIMARY_RADIUS_RATIO: f64 = 0.35;
/// Relative to the primary radius, not the canvas.
pub const ACCENT_RADIUS_RATIO: f64 = 0.65;
pub const FONT_SIZE_RATIO: f64 = 0.5;
pub const GLYPH_LIFT_RATIO: f64 = 0.05;

pub const OUTPUT_DIR: &str = "public";

/// Every artifact the driver writes, in order. The `.ico` entry holds PNG bytes.
pub const ICON_SPECS: [IconSpec; 5] = [
    IconSpec::new(192, "public/pwa-192x192.png"),
    IconSpec::new(512, "public/pwa-512x512.png"),
    IconSpec::new(180, "public/apple-touch-icon.png"),
    IconSpec::new(64, "public/favicon.png"),
    IconSpec::new(32, "public/favicon.ico"),
];

/// Bold face first, regular second; the built-in bitmap font follows implicitly.
#[cfg(target_os = "macos")]
pub const FONT_CANDIDATES: &[FontCandidate] = &[
    FontCandidate::new("Arial Bold", "/System/Library/Fonts/Supplemental/Arial Bold.ttf", 0),
    FontCandidate::new("Helvetica", "/System/Library/Fonts/Helvetica.ttc", 0),
];

#[cfg(not(target_os = "macos"))]
pub const FONT_CANDIDATES: &[FontCandidate] = &[
    FontCandidate::new("DejaVu Sans Bold", "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", 0),
    FontCandidate::new("DejaVu Sans", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", 0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_specs_live_in_output_dir() {
        for spec in ICON_SPECS {
            assert!(spec.path.starts_with(OUTPUT_DIR), "{}", spec.path);
            assert!(spec.size > 0);
        }
        let sizes: Vec<u32> = ICON_SPECS.iter().map(|s| s.size).collect();
        assert_eq!(sizes, vec![192, 512, 180, 64, 32]);
    }
}
