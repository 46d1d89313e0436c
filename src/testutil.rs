//! Test doubles shared by the unit tests.
//!
//! - [`FakeFont`]: fixed-width metrics so layout decisions are arithmetic
//! - [`MockSurface`]: in-memory framebuffer recording every commit call

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::{INK, PAPER};
use crate::fonts::TextFont;
use crate::surface::Surface;

/// Deterministic font: every character is `char_width` pixels wide.
pub struct FakeFont {
    pub char_width: u32,
    pub ascent: i32,
    pub descent: i32,
}

impl FakeFont {
    pub const fn sized(char_width: u32, ascent: i32, descent: i32) -> Self {
        Self { char_width, ascent, descent }
    }
}

impl TextFont for FakeFont {
    fn ascent(&self) -> i32 { self.ascent }

    fn descent(&self) -> i32 { self.descent }

    fn text_width(&self, text: &str) -> u32 { text.chars().count() as u32 * self.char_width }

    /// Draws the line box (advance width by ascent) above the baseline.
    fn draw_text<D>(&self, target: &mut D, baseline: Point, text: &str) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let width = self.text_width(text);
        if width == 0 || self.ascent <= 0 {
            return Ok(());
        }
        let rect = Rectangle::new(
            Point::new(baseline.x, baseline.y - self.ascent),
            Size::new(width, self.ascent as u32),
        );
        target.fill_solid(&rect, INK)
    }
}

/// In-memory panel capturing pixels and commit calls.
pub struct MockSurface {
    size: Size,
    pixels: Vec<BinaryColor>,
    pub full_updates: usize,
    pub window_updates: Vec<Rectangle>,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            pixels: vec![PAPER; (width * height) as usize],
            full_updates: 0,
            window_updates: Vec::new(),
        }
    }

    /// Color at `(x, y)`; out-of-bounds reads come back as [`PAPER`].
    pub fn pixel(&self, x: i32, y: i32) -> BinaryColor {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return PAPER;
        }
        self.pixels[(y as u32 * self.size.width + x as u32) as usize]
    }

    /// Number of inked pixels on the whole panel.
    pub fn ink_count(&self) -> usize {
        self.pixels.iter().filter(|color| **color == BinaryColor::On).count()
    }

    /// The raw framebuffer, for whole-frame comparisons.
    pub fn frame(&self) -> &[BinaryColor] { &self.pixels }
}

impl OriginDimensions for MockSurface {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for MockSurface {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height
            {
                self.pixels[(point.y as u32 * self.size.width + point.x as u32) as usize] = color;
            }
        }
        Ok(())
    }
}

impl Surface for MockSurface {
    fn update(&mut self) -> Result<(), Self::Error> {
        self.full_updates += 1;
        Ok(())
    }

    fn update_window(&mut self, area: &Rectangle) -> Result<(), Self::Error> {
        self.window_updates.push(*area);
        Ok(())
    }
}
