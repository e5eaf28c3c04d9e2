use std::path::Path;

/// 8-bit RGB colour, kept independent of the raster crate so the constants
/// compile without the `render` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Builds a colour from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Rgb([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
    }

    #[cfg(feature = "render")]
    pub fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub primary: Rgb,
    pub accent: Rgb,
    pub glyph: Rgb,
}

/// One requested artifact: square pixel size plus output path relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub path: &'static str,
}

impl IconSpec {
    pub const fn new(size: u32, path: &'static str) -> Self {
        Self { size, path }
    }

    pub fn file_name(&self) -> Option<&str> {
        Path::new(self.path).file_name().and_then(|s| s.to_str())
    }
}

/// A font file to try for the glyph. `face_index` selects the face inside a collection (.ttc).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontCandidate {
    pub label: &'static str,
    pub path: &'static str,
    pub face_index: u32,
}

impl FontCandidate {
    pub const fn new(label: &'static str, path: &'static str, face_index: u32) -> Self {
        Self { label, path, face_index }
    }
}

/// Inked pixel bounds of a glyph, relative to the origin it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBox {
    pub min_x: i32,
    pub min_y: i32,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex(0xfffefb), Rgb([255, 254, 251]));
        assert_eq!(Rgb::from_hex(0x00668c), Rgb([0, 102, 140]));
        assert_eq!(Rgb::from_hex(0x71c4ef), Rgb([113, 196, 239]));
    }

    #[test]
    fn test_file_name() {
        let spec = IconSpec::new(32, "public/favicon.ico");
        assert_eq!(spec.file_name(), Some("favicon.ico"));
    }
}
