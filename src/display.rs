//! Region ownership and redraw orchestration.
//!
//! [`MessageDisplay`] owns the named rectangles of the panel (text region,
//! indicator region, separator rules) and decides what gets erased and which
//! window is committed. Partial updates erase the owned rectangle, draw the
//! new content, then commit exactly that rectangle; a full refresh rebuilds
//! the whole frame and commits the whole surface once.
//!
//! Every operation takes the surface by `&mut`, so one update owns the panel
//! exclusively until it returns. Nothing here suspends or retries; the
//! commit calls block at the driver boundary.

use alloc::vec::Vec;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::colors::{INK, PAPER};
use crate::config::FrameLayout;
use crate::config::layout::INDICATOR_X;
use crate::fonts::{FontCandidate, TextFont};
use crate::layout::fit;
use crate::surface::Surface;

/// Glyph measured to size the indicator rectangle.
const PROBE_GLYPH: &str = "0";

/// Battery indicator range, empty to full.
pub const INDICATOR_MIN: i32 = 0;
pub const INDICATOR_MAX: i32 = 5;

/// Indicator glyph for a battery level. Out-of-range levels clamp silently.
#[inline]
pub const fn indicator_glyph(level: i32) -> char {
    let clamped = if level < INDICATOR_MIN {
        INDICATOR_MIN
    } else if level > INDICATOR_MAX {
        INDICATOR_MAX
    } else {
        level
    };
    (b'0' + clamped as u8) as char
}

/// The whole message box display: text region, indicator, separator rules.
pub struct MessageDisplay<F> {
    frame: FrameLayout,
    candidates: Vec<FontCandidate<F>>,
    indicator_font: Option<F>,
}

impl<F: TextFont> MessageDisplay<F> {
    /// Build a display from an ordered candidate list (largest first) and,
    /// optionally, the indicator glyph font. The margin profile follows the
    /// indicator choice.
    pub fn new(candidates: Vec<FontCandidate<F>>, indicator_font: Option<F>) -> Self {
        let frame = if indicator_font.is_some() {
            FrameLayout::with_indicator()
        } else {
            FrameLayout::text_only()
        };
        Self { frame, candidates, indicator_font }
    }

    #[inline]
    pub const fn frame(&self) -> &FrameLayout { &self.frame }

    /// Rebuild and commit the whole frame.
    ///
    /// Separator rules go down first so no later content has to avoid
    /// overdrawing them, then the indicator and the text draw without
    /// per-region erases, then one full-surface commit.
    pub fn full_refresh<S: Surface>(
        &self,
        surface: &mut S,
        text: &str,
        level: i32,
    ) -> Result<(), S::Error> {
        let screen = surface.bounding_box().size;
        log::debug!("full refresh on {}x{} panel", screen.width, screen.height);

        surface.clear(PAPER)?;
        if self.frame.show_indicator() {
            self.draw_rule(surface, self.frame.top_rule_y())?;
        }
        self.draw_rule(surface, self.frame.bottom_rule_y(screen))?;
        self.update_indicator(surface, level, false)?;
        self.update_text(surface, text, false)?;
        surface.update()
    }

    /// Replace the text region content.
    ///
    /// With `erase` the owned rectangle is filled with [`PAPER`] before
    /// drawing and committed by itself afterwards. Without it the text
    /// draws over whatever is there and the caller commits separately.
    pub fn update_text<S: Surface>(
        &self,
        surface: &mut S,
        text: &str,
        erase: bool,
    ) -> Result<(), S::Error> {
        let region = self.frame.text_region(surface.bounding_box().size);
        if region.size.width == 0 || region.size.height == 0 {
            return Ok(());
        }

        if erase {
            surface.fill_solid(&region, PAPER)?;
        }
        if let Some(fitted) = fit(text, &region, &self.candidates) {
            log::debug!(
                "text region {}x{}: {} lines in {}",
                region.size.width,
                region.size.height,
                fitted.lines.len(),
                fitted.candidate.name,
            );
            fitted.draw(surface, &region)?;
        }
        if erase {
            surface.update_window(&region)?;
        }
        Ok(())
    }

    /// Replace the battery indicator glyph. No-op without an indicator font.
    pub fn update_indicator<S: Surface>(
        &self,
        surface: &mut S,
        level: i32,
        erase: bool,
    ) -> Result<(), S::Error> {
        let Some(font) = &self.indicator_font else {
            return Ok(());
        };
        let region = self.indicator_region(font);
        if region.size.width == 0 || region.size.height == 0 {
            return Ok(());
        }

        if erase {
            surface.fill_solid(&region, PAPER)?;
        }
        let glyph = indicator_glyph(level);
        let mut buf = [0u8; 4];
        let baseline =
            Point::new(region.top_left.x, region.top_left.y + region.size.height as i32);
        font.draw_text(surface, baseline, glyph.encode_utf8(&mut buf))?;
        if erase {
            surface.update_window(&region)?;
        }
        Ok(())
    }

    /// The rectangle owned by the indicator glyph.
    ///
    /// Recomputed from the current glyph metrics on every call and centered
    /// vertically in the top strip.
    fn indicator_region(&self, font: &F) -> Rectangle {
        let width = font.text_width(PROBE_GLYPH);
        let height = font.ascent().max(0);
        let y = (self.frame.top_margin() - height) / 2;
        Rectangle::new(Point::new(INDICATOR_X, y), Size::new(width, height as u32))
    }

    /// One-pixel separator rule across the panel at row `y`.
    fn draw_rule<S: Surface>(&self, surface: &mut S, y: i32) -> Result<(), S::Error> {
        let (x, length) = self.frame.rule_span(surface.bounding_box().size);
        if length == 0 {
            return Ok(());
        }
        Line::new(Point::new(x, y), Point::new(x + length as i32 - 1, y))
            .into_styled(PrimitiveStyle::with_stroke(INK, 1))
            .draw(surface)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
