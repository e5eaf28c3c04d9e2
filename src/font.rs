use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::fs;
use tracing::{debug, info};

use crate::models::{FontCandidate, InkBox};

// 5x7 bitmap, MSB is the leftmost column
const BUILTIN_WIDTH: u32 = 5;
const BUILTIN_V: [u8; 7] = [
    0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100,
];

fn builtin_rows(ch: char) -> Option<&'static [u8]> {
    match ch {
        'V' => Some(&BUILTIN_V),
        _ => None,
    }
}

/// Font used for one icon. `Builtin` ignores the requested size.
pub enum GlyphFont {
    Outline {
        font: FontVec,
        scale: PxScale,
        label: &'static str,
    },
    Builtin,
}

impl GlyphFont {
    pub fn label(&self) -> &'static str {
        match self {
            GlyphFont::Outline { label, .. } => *label,
            GlyphFont::Builtin => "built-in",
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, GlyphFont::Builtin)
    }

    /// Measures where `ch` puts ink when drawn at (0, 0). `None` if the font has nothing to draw.
    pub fn ink_box(&self, ch: char) -> Option<InkBox> {
        match self {
            GlyphFont::Outline { font, scale, .. } => {
                // Same placement imageproc uses when drawing: pen at (0, ascent).
                let ascent = font.as_scaled(*scale).ascent();
                let glyph = font
                    .glyph_id(ch)
                    .with_scale_and_position(*scale, point(0.0, ascent));
                let bounds = font.outline_glyph(glyph)?.px_bounds();
                Some(InkBox {
                    min_x: bounds.min.x.round() as i32,
                    min_y: bounds.min.y.round() as i32,
                    width: bounds.width().round() as u32,
                    height: bounds.height().round() as u32,
                })
            }
            GlyphFont::Builtin => builtin_rows(ch).map(|rows| InkBox {
                min_x: 0,
                min_y: 0,
                width: BUILTIN_WIDTH,
                height: rows.len() as u32,
            }),
        }
    }

    pub fn draw(&self, canvas: &mut RgbImage, ch: char, x: i32, y: i32, color: Rgb<u8>) {
        match self {
            GlyphFont::Outline { font, scale, .. } => {
                let mut buf = [0u8; 4];
                draw_text_mut(canvas, color, x, y, *scale, font, ch.encode_utf8(&mut buf));
            }
            GlyphFont::Builtin => {
                let Some(rows) = builtin_rows(ch) else { return };
                let (w, h) = (canvas.width() as i32, canvas.height() as i32);
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..BUILTIN_WIDTH {
                        if bits & (1 << (BUILTIN_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        let px = x + col as i32;
                        let py = y + row as i32;
                        if px >= 0 && py >= 0 && px < w && py < h {
                            canvas.put_pixel(px as u32, py as u32, color);
                        }
                    }
                }
            }
        }
    }
}

/// Walks `candidates` in order and returns the first font that can draw `ch` at
/// `font_size` px. Falls back to the built-in bitmap font, so this never fails.
pub fn resolve_font(candidates: &[FontCandidate], font_size: u32, ch: char) -> GlyphFont {
    for candidate in candidates {
        match load_outline(candidate, ch) {
            Ok(font) => {
                info!(font = candidate.label, size = font_size, "using font");
                return GlyphFont::Outline {
                    font,
                    scale: PxScale::from(font_size as f32),
                    label: candidate.label,
                };
            }
            Err(reason) => debug!(font = candidate.label, path = candidate.path, %reason, "font skipped"),
        }
    }
    info!("no font candidate usable, using built-in bitmap font");
    GlyphFont::Builtin
}

fn load_outline(candidate: &FontCandidate, ch: char) -> Result<FontVec, String> {
    let data = fs::read(candidate.path).map_err(|e| format!("read failed: {}", e))?;
    let font = FontVec::try_from_vec_and_index(data, candidate.face_index)
        .map_err(|e| format!("parse failed: {}", e))?;
    // Id 0 is .notdef, which usually has an outline of its own.
    let id = font.glyph_id(ch);
    if id.0 == 0 || font.outline(id).is_none() {
        return Err(format!("no outline for {:?}", ch));
    }
    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &[FontCandidate] = &[
        FontCandidate::new("missing bold", "/nonexistent/fonts/Bold.ttf", 0),
        FontCandidate::new("missing regular", "/nonexistent/fonts/Regular.ttf", 0),
    ];

    #[test]
    fn test_missing_fonts_fall_back_to_builtin() {
        let font = resolve_font(MISSING, 96, 'V');
        assert!(font.is_builtin());
        assert_eq!(font.label(), "built-in");
    }

    #[test]
    fn test_unparseable_font_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"definitely not a font").unwrap();
        let path: &'static str = Box::leak(bogus.to_string_lossy().into_owned().into_boxed_str());
        let candidates = [FontCandidate::new("bogus", path, 0)];
        assert!(resolve_font(&candidates, 32, 'V').is_builtin());
    }

    #[test]
    fn test_builtin_ink_box_ignores_size() {
        let ink = GlyphFont::Builtin.ink_box('V').unwrap();
        assert_eq!(ink, InkBox { min_x: 0, min_y: 0, width: 5, height: 7 });
        assert!(GlyphFont::Builtin.ink_box('Q').is_none());
    }

    #[test]
    fn test_builtin_draw_sets_expected_pixels() {
        let bg = Rgb([0, 0, 0]);
        let white = Rgb([255, 255, 255]);
        let mut canvas = RgbImage::from_pixel(10, 10, bg);
        GlyphFont::Builtin.draw(&mut canvas, 'V', 2, 1, white);
        // arms at the top, point at the bottom centre
        assert_eq!(*canvas.get_pixel(2, 1), white);
        assert_eq!(*canvas.get_pixel(6, 1), white);
        assert_eq!(*canvas.get_pixel(4, 1), bg);
        assert_eq!(*canvas.get_pixel(4, 7), white);
        assert_eq!(*canvas.get_pixel(2, 7), bg);
        let inked = canvas.pixels().filter(|p| **p == white).count();
        assert_eq!(inked, 4 * 2 + 2 * 2 + 1);
    }

    #[test]
    fn test_builtin_draw_clips_at_edges() {
        let mut canvas = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        GlyphFont::Builtin.draw(&mut canvas, 'V', -2, -2, Rgb([255, 255, 255]));
        assert_eq!(canvas.dimensions(), (3, 3));
    }
}
