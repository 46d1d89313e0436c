//! Rendering core for an e-paper message box.
//!
//! The device shows one message at a time on a small bistable panel. This
//! library owns everything between "here is the new text" and "commit these
//! pixels": greedy word wrapping, largest-first font selection, and the
//! region bookkeeping that decides which rectangle of the panel has to be
//! erased and recommitted.
//!
//! Device glue (WiFi, mail fetching, SPI pins) lives with the firmware
//! binary and talks to this library through two seams:
//!
//! - [`Surface`]: the panel, as an `embedded-graphics` draw target plus the
//!   blocking full/partial commit calls of a bistable controller
//! - [`TextFont`]: glyph metrics and baseline-anchored text drawing
//!
//! # Update Strategy
//!
//! | Element   | Trigger                  | Strategy                        |
//! |-----------|--------------------------|---------------------------------|
//! | Text      | New message arrived      | Erase region + partial commit   |
//! | Indicator | Battery level changed    | Erase region + partial commit   |
//! | Frame     | Wake from deep sleep     | Full clear, rules, full commit  |
//!
//! # Testing
//!
//! The library is `no_std + alloc` on the device and `std` under test, so
//! the whole engine runs on the host:
//!
//! ```bash
//! cargo test
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints: pixel math mixes i32 offsets with u32 extents throughout
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod colors;
pub mod config;
pub mod display;
pub mod fonts;
pub mod layout;
pub mod message;
pub mod surface;

#[cfg(test)]
pub(crate) mod testutil;

pub use config::FrameLayout;
pub use display::MessageDisplay;
pub use fonts::{FontCandidate, GlyphFont, TextFont};
pub use layout::{FittedText, fit, wrap};
pub use surface::Surface;
