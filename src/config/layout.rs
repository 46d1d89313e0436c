//! Panel geometry and margin constants.
//!
//! The frame around the text region is static configuration: margins are
//! fixed pixel counts chosen for the panel, not derived at runtime. The one
//! exception is the indicator rectangle, which depends on live font metrics
//! and is therefore computed in [`crate::display`], not here.
//!
//! Two margin profiles exist, one with the battery indicator strip at the
//! top and one without. [`FrameLayout`] picks the profile once at
//! construction and is read-only afterwards.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Panel Configuration
// =============================================================================

/// Panel width in pixels (GDEP015OC1 1.54" e-paper: 200x200).
pub const SCREEN_WIDTH: u32 = 200;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 200;

// =============================================================================
// Margins
// =============================================================================

/// Top margin when the indicator strip is shown. Also the strip's height.
pub const TOP_MARGIN_WITH_INDICATOR: i32 = 30;

/// Top margin without the indicator strip.
pub const TOP_MARGIN_TEXT_ONLY: i32 = 3;

/// Bottom margin. The bottom separator rule sits on its upper edge.
pub const BOTTOM_MARGIN: i32 = 30;

/// Left and right margin around the text region.
pub const SIDE_MARGIN: i32 = 3;

/// Column where the indicator glyph is drawn.
pub const INDICATOR_X: i32 = 175;

// =============================================================================
// Text Placement
// =============================================================================

/// Extra vertical space added to ascent + |descent| for every line.
pub const LINE_LEADING: u32 = 7;

/// Gap between the region top and the first baseline, on top of the ascent.
pub const FIRST_LINE_OFFSET: i32 = 5;

// =============================================================================
// Frame Layout
// =============================================================================

/// Margin profile for one display session.
///
/// Owns the fixed rectangles of the frame: the text region between the
/// separator rules and the span of the rules themselves. All rectangles are
/// computed from the panel size passed in by the caller, so the same profile
/// works on any panel dimensions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FrameLayout {
    show_indicator: bool,
    top_margin: i32,
    bottom_margin: i32,
    side_margin: i32,
}

impl FrameLayout {
    /// Profile with the battery indicator strip at the top.
    pub const fn with_indicator() -> Self {
        Self {
            show_indicator: true,
            top_margin: TOP_MARGIN_WITH_INDICATOR,
            bottom_margin: BOTTOM_MARGIN,
            side_margin: SIDE_MARGIN,
        }
    }

    /// Profile without the indicator strip; the text region grows upwards.
    pub const fn text_only() -> Self {
        Self {
            show_indicator: false,
            top_margin: TOP_MARGIN_TEXT_ONLY,
            bottom_margin: BOTTOM_MARGIN,
            side_margin: SIDE_MARGIN,
        }
    }

    #[inline]
    pub const fn show_indicator(&self) -> bool { self.show_indicator }

    #[inline]
    pub const fn top_margin(&self) -> i32 { self.top_margin }

    /// The rectangle owned by the text content.
    ///
    /// Sits one pixel below the top margin and two pixels short of the
    /// bottom rule so text never touches the separators. Degenerate panel
    /// sizes clamp to a zero-area rectangle, which every drawing operation
    /// treats as a no-op.
    pub fn text_region(&self, screen: Size) -> Rectangle {
        let width = (screen.width as i32 - 2 * self.side_margin).max(0) as u32;
        let height =
            (screen.height as i32 - self.top_margin - self.bottom_margin - 2).max(0) as u32;
        Rectangle::new(Point::new(self.side_margin, self.top_margin + 1), Size::new(width, height))
    }

    /// Row of the top separator rule. Only drawn when the indicator is shown.
    #[inline]
    pub const fn top_rule_y(&self) -> i32 { self.top_margin }

    /// Row of the bottom separator rule.
    #[inline]
    pub const fn bottom_rule_y(&self, screen: Size) -> i32 {
        screen.height as i32 - self.bottom_margin
    }

    /// Start column and length of a separator rule.
    pub fn rule_span(&self, screen: Size) -> (i32, u32) {
        (self.side_margin, (screen.width as i32 - 2 * self.side_margin).max(0) as u32)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
