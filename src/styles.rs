//! Pre-computed text styles for the percentage label.
//!
//! The alignment style is `const` so no style objects are rebuilt per
//! frame. The character style cannot be const because the label color is
//! a runtime property; callers build `MonoTextStyle::new(font, color)`
//! with the font handle held by the widget.

use embedded_graphics::{
    mono_font::MonoFont,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

/// Label anchoring: centered horizontally on the anchor point and
/// vertically on the text's middle line, so a single anchor at the widget
/// center centers the label in both axes.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Default label font (`ProFont` 24pt), the closest match in this stack
/// to a bold 22pt system font.
pub const DEFAULT_TEXT_FONT: &MonoFont = &PROFONT_24_POINT;
