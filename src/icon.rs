use crate::config::{ACCENT_RADIUS_RATIO, FONT_SIZE_RATIO, GLYPH_LIFT_RATIO, PRIMARY_RADIUS_RATIO};
use crate::models::InkBox;

#[cfg(feature = "render")]
use {
    crate::config::{FONT_CANDIDATES, GLYPH, PALETTE},
    crate::error::{Error, Result},
    crate::font::{GlyphFont, resolve_font},
    crate::models::{FontCandidate, Rgb},
    image::{ImageFormat, RgbImage},
    imageproc::drawing::draw_filled_circle_mut,
    std::{fs, io::Cursor, path::Path},
    tracing::debug,
};

/// Geometry of the emblem for one canvas size. Every length truncates toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub center: (i32, i32),
    pub primary_radius: i32,
    pub accent_radius: i32,
    pub font_size: u32,
    pub glyph_lift: i32,
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let c = (size / 2) as i32;
        let primary_radius = scale(size as f64, PRIMARY_RADIUS_RATIO) as i32;
        let accent_radius = scale(primary_radius as f64, ACCENT_RADIUS_RATIO) as i32;
        Self {
            size,
            center: (c, c),
            primary_radius,
            accent_radius,
            font_size: scale(size as f64, FONT_SIZE_RATIO) as u32,
            glyph_lift: scale(size as f64, GLYPH_LIFT_RATIO) as i32,
        }
    }

    /// Draw origin that centres `ink` on the canvas centre, then lifts it by `glyph_lift`.
    pub fn glyph_origin(&self, ink: InkBox) -> (i32, i32) {
        let (cx, cy) = self.center;
        let x = cx - (ink.width / 2) as i32 - ink.min_x;
        let y = cy - (ink.height / 2) as i32 - self.glyph_lift - ink.min_y;
        (x, y)
    }
}

#[inline]
fn scale(len: f64, ratio: f64) -> f64 {
    (len * ratio).trunc()
}

// Background, primary disc, accent disc, then the glyph on top
#[cfg(feature = "render")]
pub fn render_icon(size: u32, font: &GlyphFont) -> Result<RgbImage> {
    if size == 0 {
        return Err(Error::InvalidSize);
    }
    let layout = IconLayout::for_size(size);
    let mut canvas = blank_canvas(size, PALETTE.background)?;

    draw_filled_circle_mut(&mut canvas, layout.center, layout.primary_radius, PALETTE.primary.to_pixel());
    draw_filled_circle_mut(&mut canvas, layout.center, layout.accent_radius, PALETTE.accent.to_pixel());

    if let Some(ink) = font.ink_box(GLYPH) {
        let (x, y) = layout.glyph_origin(ink);
        font.draw(&mut canvas, GLYPH, x, y, PALETTE.glyph.to_pixel());
    }
    Ok(canvas)
}

#[cfg(feature = "render")]
fn blank_canvas(size: u32, color: Rgb) -> Result<RgbImage> {
    let too_big = || Error::CanvasAllocation { size };
    let pixels = (size as usize).checked_mul(size as usize).ok_or_else(too_big)?;
    let len = pixels.checked_mul(3).ok_or_else(too_big)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| too_big())?;
    buf.extend(std::iter::repeat_n(color.0, pixels).flatten());
    RgbImage::from_raw(size, size, buf).ok_or_else(too_big)
}

/// PNG bytes for `canvas`, whatever extension the destination carries.
#[cfg(feature = "render")]
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders a `size`x`size` icon and writes it to `path`, replacing any existing file.
/// The parent directory must already exist.
#[cfg(feature = "render")]
pub fn generate(size: u32, path: impl AsRef<Path>) -> Result<()> {
    generate_with_fonts(size, path, FONT_CANDIDATES)
}

#[cfg(feature = "render")]
pub fn generate_with_fonts(size: u32, path: impl AsRef<Path>, fonts: &[FontCandidate]) -> Result<()> {
    let path = path.as_ref();
    if size == 0 {
        return Err(Error::InvalidSize);
    }
    let layout = IconLayout::for_size(size);
    let font = resolve_font(fonts, layout.font_size, GLYPH);
    let canvas = render_icon(size, &font)?;
    let png = encode_png(&canvas)?;
    fs::write(path, &png).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), size, bytes = png.len(), font = font.label(), "icon written");
    Ok(())
}
