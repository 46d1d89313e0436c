//! Glyph metrics seam and the built-in font candidates.
//!
//! Layout never talks to a font engine directly. Everything goes through
//! [`TextFont`], which keeps the fit loop testable with deterministic fake
//! metrics and keeps the engine swappable. The shipped implementation is
//! [`GlyphFont`], a thin wrapper over `u8g2-fonts`, with the Helvetica
//! regular ramp the panel has always used.

use alloc::vec::Vec;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use u8g2_fonts::types::{FontColor, VerticalPosition};
use u8g2_fonts::{Font, FontRenderer, fonts};

use crate::colors::INK;

/// Glyph metrics and baseline-anchored drawing for one font.
///
/// Measurements are only valid for the font that produced them; switching
/// candidates invalidates every prior width.
pub trait TextFont {
    /// Pixels above the baseline.
    fn ascent(&self) -> i32;

    /// Pixels below the baseline, as a negative number.
    fn descent(&self) -> i32;

    /// Rendered advance width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Draw `text` with its baseline starting at `baseline`.
    ///
    /// Glyphs render transparent over whatever is underneath; the caller
    /// erases the region first when replacing content.
    fn draw_text<D>(&self, target: &mut D, baseline: Point, text: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>;
}

/// One entry of the candidate list, largest first.
pub struct FontCandidate<F> {
    /// Short name used in log output.
    pub name: &'static str,
    pub font: F,
}

impl<F> FontCandidate<F> {
    pub const fn new(name: &'static str, font: F) -> Self { Self { name, font } }
}

// =============================================================================
// u8g2 Implementation
// =============================================================================

/// [`TextFont`] over a `u8g2-fonts` renderer.
pub struct GlyphFont {
    renderer: FontRenderer,
}

impl GlyphFont {
    /// Wrap a u8g2 font. Unknown characters are skipped, not errors.
    pub const fn new<F: Font>() -> Self {
        Self { renderer: FontRenderer::new::<F>().with_ignore_unknown_chars(true) }
    }
}

impl TextFont for GlyphFont {
    fn ascent(&self) -> i32 { i32::from(self.renderer.get_ascent()) }

    fn descent(&self) -> i32 { i32::from(self.renderer.get_descent()) }

    fn text_width(&self, text: &str) -> u32 {
        // Unknown chars are ignored, so the lookup cannot fail in practice;
        // an empty or unrenderable fragment measures zero.
        match self.renderer.get_rendered_dimensions(text, Point::zero(), VerticalPosition::Baseline)
        {
            Ok(dimensions) => dimensions.advance.x.max(0) as u32,
            Err(_) => 0,
        }
    }

    fn draw_text<D>(&self, target: &mut D, baseline: Point, text: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self.renderer.render(
            text,
            baseline,
            VerticalPosition::Baseline,
            FontColor::Transparent(INK),
            target,
        ) {
            Ok(_) => Ok(()),
            Err(u8g2_fonts::Error::DisplayError(e)) => Err(e),
            // Transparent rendering with ignored unknown chars has no other
            // failure left; nothing sensible to surface to the caller.
            Err(_) => Ok(()),
        }
    }
}

// =============================================================================
// Built-in Candidates
// =============================================================================

/// The sizes to try, largest first. Every size is tried in order until the
/// text fits.
pub fn helvetica_ramp() -> Vec<FontCandidate<GlyphFont>> {
    let mut ramp = Vec::with_capacity(6);
    ramp.push(FontCandidate::new("helvR24", GlyphFont::new::<fonts::u8g2_font_helvR24_tf>()));
    ramp.push(FontCandidate::new("helvR18", GlyphFont::new::<fonts::u8g2_font_helvR18_tf>()));
    ramp.push(FontCandidate::new("helvR14", GlyphFont::new::<fonts::u8g2_font_helvR14_tf>()));
    ramp.push(FontCandidate::new("helvR12", GlyphFont::new::<fonts::u8g2_font_helvR12_tf>()));
    ramp.push(FontCandidate::new("helvR10", GlyphFont::new::<fonts::u8g2_font_helvR10_tf>()));
    ramp.push(FontCandidate::new("helvR08", GlyphFont::new::<fonts::u8g2_font_helvR08_tf>()));
    ramp
}

/// Battery glyph font for the indicator strip. Glyphs `'0'..='5'` show an
/// empty through full battery.
pub fn battery_indicator() -> GlyphFont { GlyphFont::new::<fonts::u8g2_font_battery19_tn>() }

// =============================================================================
// Unit Tests
// =============================================================================
