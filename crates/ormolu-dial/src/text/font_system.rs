use std::fmt;

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the host
/// application and lent to the scheduler each tick, so the dial can measure
/// label widths without owning font data.
pub struct FontSystem {
    // A slot is `None` only for measurement stubs registered in test builds.
    fonts: Vec<Option<fontdue::Font>>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(Some(font));
        Ok(id)
    }

    /// Registers a measurement-only stand-in font.
    ///
    /// Text measured against it takes the degraded zero-width path, so
    /// pipeline tests can run without shipping font assets.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn load_test_stub(&mut self) -> FontId {
        let id = FontId(self.fonts.len());
        self.fonts.push(None);
        id
    }

    /// Returns true if `id` refers to a loaded font.
    ///
    /// Scheduler construction checks this up front so a bad handle fails
    /// fast instead of degrading every frame.
    pub fn contains(&self, id: FontId) -> bool {
        id.0 < self.fonts.len()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0).and_then(|f| f.as_ref())
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in logical pixels. Unknown fonts measure as
    /// an empty block of the nominal line height so callers degrade to
    /// slightly-off centering rather than failing.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Use the pen position after each glyph (g.x - xmin + advance) rather
        // than the bitmap right edge, so the measured width covers the full
        // advance extent and centered placement does not clip trailing glyphs.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs
            .iter()
            .map(|g| g.y + g.height as f32)
            .fold(size, f32::max);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
