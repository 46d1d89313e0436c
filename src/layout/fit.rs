//! Largest-first font fitting.
//!
//! The candidate list is ordered by visual size. Each candidate wraps the
//! text and is accepted only if every line fits the region width and the
//! whole block fits the region height; the first acceptable candidate wins.
//! When none is acceptable the smallest candidate is used anyway and the
//! output clips at the panel edges instead of erroring. A message box that
//! shows most of a message beats one that shows nothing.

use alloc::string::String;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::layout::{FIRST_LINE_OFFSET, LINE_LEADING};
use crate::fonts::{FontCandidate, TextFont};
use crate::layout::wrap;

/// Wrapped lines for one selected candidate.
pub struct FittedText<'a, F> {
    /// The candidate the lines were measured with.
    pub candidate: &'a FontCandidate<F>,
    pub lines: Vec<String>,
    /// Ascent + |descent| + leading, the baseline-to-baseline distance.
    pub line_height: u32,
}

impl<F: TextFont> FittedText<'_, F> {
    /// Total height of the wrapped block.
    #[inline]
    pub fn block_height(&self) -> u32 { self.line_height * self.lines.len() as u32 }

    /// Draw the lines into `region`, top-down.
    ///
    /// Baselines start at `region.y + ascent + FIRST_LINE_OFFSET` and
    /// advance by the line height. A line whose baseline would land past
    /// the region bottom is dropped along with everything after it, so a
    /// block that only loosely passed the height test can still lose its
    /// tail at the boundary.
    pub fn draw<D>(&self, target: &mut D, region: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let bottom = region.top_left.y + region.size.height as i32;
        let mut baseline = region.top_left.y + self.candidate.font.ascent() + FIRST_LINE_OFFSET;
        for line in &self.lines {
            if baseline > bottom {
                break;
            }
            self.candidate.font.draw_text(target, Point::new(region.top_left.x, baseline), line)?;
            baseline += self.line_height as i32;
        }
        Ok(())
    }
}

/// Pick the largest candidate whose wrapped text fits `region`.
///
/// Candidates are tried in order. One is rejected as "too long" when any of
/// its lines measures wider than the region, which means a single word did
/// not fit and a smaller font may still get it under the limit. Otherwise
/// it is accepted when `line_height * line_count` stays within the region
/// height. If every candidate is rejected the last one is returned
/// regardless, clipped at draw time. Returns `None` only for an empty
/// candidate list.
pub fn fit<'a, F: TextFont>(
    text: &str,
    region: &Rectangle,
    candidates: &'a [FontCandidate<F>],
) -> Option<FittedText<'a, F>> {
    let max_width = region.size.width;
    let mut selected: Option<FittedText<'a, F>> = None;

    for candidate in candidates {
        let font = &candidate.font;
        let line_height = font.ascent().max(0) as u32 + font.descent().unsigned_abs() + LINE_LEADING;
        let lines = wrap(text, max_width, |fragment| font.text_width(fragment));

        let too_long = lines.iter().any(|line| font.text_width(line) > max_width);
        let line_count = lines.len() as u32;
        selected = Some(FittedText { candidate, lines, line_height });

        if too_long {
            continue;
        }
        if line_height * line_count <= region.size.height {
            return selected;
        }
    }

    if let Some(fitted) = &selected {
        log::debug!("no candidate fits, degrading to {}", fitted.candidate.name);
    }
    selected
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::INK;
    use crate::testutil::{FakeFont, MockSurface};

    /// Candidate ramp with per-character widths 24 down to 8.
    fn fake_ramp() -> Vec<FontCandidate<FakeFont>> {
        [24, 18, 14, 12, 10, 8]
            .into_iter()
            .map(|size| {
                let name: &'static str = match size {
                    24 => "fake24",
                    18 => "fake18",
                    14 => "fake14",
                    12 => "fake12",
                    10 => "fake10",
                    _ => "fake08",
                };
                FontCandidate::new(name, FakeFont::sized(size, size as i32, -(size as i32) / 4))
            })
            .collect()
    }

    fn region(width: u32, height: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(width, height))
    }

    #[test]
    fn test_short_text_selects_the_largest_candidate() {
        let ramp = fake_ramp();
        let fitted = fit("Hi", &region(300, 200), &ramp).unwrap();
        assert_eq!(fitted.candidate.name, "fake24");
        assert_eq!(fitted.lines, ["Hi"]);
    }

    #[test]
    fn test_larger_fitting_candidate_wins_over_smaller_fitting_one() {
        // Both fake24 and fake08 would fit this text; order decides.
        let ramp = fake_ramp();
        let fitted = fit("a b c", &region(300, 200), &ramp).unwrap();
        assert_eq!(fitted.candidate.name, "fake24");
    }

    #[test]
    fn test_shrinks_until_the_block_height_fits() {
        // Ten characters per word keep every line at one word. At size 24
        // the block is 8 lines of 37px; only sizes 12 and below fit 160px.
        let text = "aaaaaaaaaa bbbbbbbbbb cccccccccc dddddddddd \
                    eeeeeeeeee ffffffffff gggggggggg hhhhhhhhhh";
        let ramp = fake_ramp();
        let fitted = fit(text, &region(260, 160), &ramp).unwrap();
        assert!(fitted.block_height() <= 160);
        assert_eq!(fitted.candidate.name, "fake12");
    }

    #[test]
    fn test_oversized_word_shrinks_the_font() {
        // 12 chars: 288px at size 24, 96px at size 8. Width 100 forces the
        // smallest candidate even though the larger block heights also fit.
        let ramp = fake_ramp();
        let fitted = fit("unmanageable", &region(100, 200), &ramp).unwrap();
        assert_eq!(fitted.candidate.name, "fake08");
        assert!(fitted.candidate.font.text_width(&fitted.lines[0]) <= 100);
    }

    #[test]
    fn test_degrades_to_smallest_when_nothing_fits() {
        // 50 chars: 1200px at the largest size, still 400px at the
        // smallest. The engine keeps the smallest layout and clips.
        let word: String = core::iter::repeat_n('x', 50).collect();
        let ramp = fake_ramp();
        let fitted = fit(&word, &region(200, 100), &ramp).unwrap();
        assert_eq!(fitted.candidate.name, "fake08");
        assert_eq!(fitted.lines.len(), 1);
        assert!(
            fitted.candidate.font.text_width(&fitted.lines[0]) > 200,
            "degraded layout keeps the overflowing line"
        );
    }

    #[test]
    fn test_empty_text_selects_largest_with_no_lines() {
        let ramp = fake_ramp();
        let fitted = fit("", &region(200, 100), &ramp).unwrap();
        assert_eq!(fitted.candidate.name, "fake24");
        assert!(fitted.lines.is_empty());
        assert_eq!(fitted.block_height(), 0);
    }

    #[test]
    fn test_empty_candidate_list_yields_none() {
        let ramp: Vec<FontCandidate<FakeFont>> = Vec::new();
        assert!(fit("hello", &region(200, 100), &ramp).is_none());
    }

    #[test]
    fn test_fit_is_deterministic() {
        let ramp = fake_ramp();
        let text = "pack my box with five dozen liquor jugs";
        let a = fit(text, &region(120, 160), &ramp).unwrap();
        let b = fit(text, &region(120, 160), &ramp).unwrap();
        assert_eq!(a.candidate.name, b.candidate.name);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.line_height, b.line_height);
    }

    #[test]
    fn test_draw_drops_lines_past_the_region_bottom() {
        // One candidate, ascent 10, line height 10 + 2 + 7 = 19. Region
        // height 40 accepts baselines 15 and 34 but not 53.
        let ramp = [FontCandidate::new("fake", FakeFont::sized(10, 10, -2))];
        let target = region(200, 40);
        let fitted = fit("aaaaaaaaaa bbbbbbbbbb cccccccccc", &target, &ramp).unwrap();
        assert_eq!(fitted.lines.len(), 3);

        let mut surface = MockSurface::new(200, 200);
        fitted.draw(&mut surface, &target).unwrap();
        // Two 100x10 line boxes made it onto the panel, the third did not.
        assert_eq!(surface.ink_count(), 2 * 100 * 10);
        assert_eq!(surface.pixel(0, 34 - 1), INK);
        assert_eq!(surface.pixel(0, 53 - 1), crate::colors::PAPER);
    }

    #[test]
    fn test_draw_places_the_first_baseline_below_the_region_top() {
        let ramp = [FontCandidate::new("fake", FakeFont::sized(10, 10, -2))];
        let target = Rectangle::new(Point::new(3, 31), Size::new(194, 138));
        let fitted = fit("hello", &target, &ramp).unwrap();

        let mut surface = MockSurface::new(200, 200);
        fitted.draw(&mut surface, &target).unwrap();
        // Baseline 31 + 10 + 5 = 46; the line box spans rows 36..=45.
        assert_eq!(surface.pixel(3, 36), INK);
        assert_eq!(surface.pixel(3, 35), crate::colors::PAPER);
        assert_eq!(surface.pixel(3, 45), INK);
        assert_eq!(surface.pixel(3, 46), crate::colors::PAPER);
    }
}
