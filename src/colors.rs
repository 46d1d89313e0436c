//! The two colors a bistable panel can show.

use embedded_graphics::pixelcolor::BinaryColor;

/// Drawn pixels. `On` maps to black on the panel.
pub const INK: BinaryColor = BinaryColor::On;

/// Erased pixels. `Off` maps to white on the panel.
pub const PAPER: BinaryColor = BinaryColor::Off;
