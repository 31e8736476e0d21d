use egui::Pos2;

use crate::drawable::RenderStyle;
use crate::error::StickerError;
use crate::surface::Surface;

/// A glyph stamped onto the canvas at a fixed anchor
#[derive(Debug, Clone, PartialEq)]
pub struct StickerMark {
    glyph: String,
    anchor: Pos2,
}

impl StickerMark {
    pub fn new(glyph: impl Into<String>, anchor: Pos2) -> Self {
        Self {
            glyph: glyph.into(),
            anchor,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    /// Draw the glyph centered on the anchor rather than hanging off its corner
    pub fn render(&self, surface: &mut dyn Surface, style: &RenderStyle) {
        surface.fill_text(self.anchor, &self.glyph, style.sticker_font_size, style.ink);
    }
}

/// The set of sticker glyphs the user can pick from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl StickerPalette {
    pub fn new(glyphs: impl IntoIterator<Item = String>) -> Self {
        let mut palette = Self::default();
        for glyph in glyphs {
            // Config validation already rejects blanks, so only duplicates drop out here
            let _ = palette.add(&glyph);
        }
        palette
    }

    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    pub fn contains(&self, glyph: &str) -> bool {
        self.glyphs.iter().any(|g| g == glyph)
    }

    /// Add user-supplied sticker text and return the glyph as stored.
    ///
    /// Surrounding whitespace is trimmed. Blank text is rejected, and text
    /// already in the palette is returned without adding a duplicate.
    pub fn add(&mut self, text: &str) -> Result<String, StickerError> {
        let glyph = text.trim();
        if glyph.is_empty() {
            return Err(StickerError::Empty);
        }
        if !self.contains(glyph) {
            self.glyphs.push(glyph.to_owned());
        }
        Ok(glyph.to_owned())
    }
}
