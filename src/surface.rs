//! Commit boundary to the physical panel.
//!
//! A bistable controller keeps its image without power and only changes when
//! told to refresh, either the whole surface (slow, flicker) or one window
//! (fast). Drawing into the framebuffer and committing it are separate
//! steps, so the trait extends [`DrawTarget`] with the two commit calls.
//!
//! Both commits block until the controller is done; nothing in this crate
//! assumes asynchronous completion. The firmware implements this over its
//! epd driver, the tests over an in-memory framebuffer.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Drawing surface of the panel plus its refresh commands.
pub trait Surface: DrawTarget<Color = BinaryColor> {
    /// Commit the whole framebuffer to the panel. Blocking.
    fn update(&mut self) -> Result<(), Self::Error>;

    /// Commit only `area` to the panel. Blocking.
    ///
    /// Callers never pass a zero-area rectangle; the region bookkeeping
    /// filters those out before reaching the driver.
    fn update_window(&mut self, area: &Rectangle) -> Result<(), Self::Error>;
}
