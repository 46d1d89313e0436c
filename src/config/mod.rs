//! Display geometry configuration.
//!
//! - `layout`: panel dimensions, margins and the frame layout profiles

pub mod layout;

pub use layout::{
    BOTTOM_MARGIN,
    FIRST_LINE_OFFSET,
    FrameLayout,
    INDICATOR_X,
    LINE_LEADING,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SIDE_MARGIN,
    TOP_MARGIN_TEXT_ONLY,
    TOP_MARGIN_WITH_INDICATOR,
};
