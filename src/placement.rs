//! # Placement Engine
//!
//! Converts horizontal pixel offsets into monospace character columns.
//!
//! The width of one character in the export font is measured by whatever
//! renders the editor and injected here. Until a usable measurement arrives
//! (or when one is zero, negative or not finite) the engine uses a fallback
//! width, so column math never divides by zero.
//!
//! No collision handling happens here: two placements may resolve to the same
//! column. The exporter decides how overlapping chords are laid out.

use log::warn;

/// Width of one character of a 16px monospace font, in pixels.
pub const DEFAULT_CHAR_WIDTH: f64 = 9.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementEngine {
    char_width: f64,
    fallback: f64,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self {
            char_width: DEFAULT_CHAR_WIDTH,
            fallback: DEFAULT_CHAR_WIDTH,
        }
    }
}

fn usable(width: f64) -> bool {
    width.is_finite() && width > 0.0
}

impl PlacementEngine {
    /// Engine with a measured width and the default fallback.
    pub fn new(char_width: f64) -> Self {
        Self::with_fallback(char_width, DEFAULT_CHAR_WIDTH)
    }

    /// Engine with a measured width and a configured fallback. An unusable
    /// fallback is itself replaced by [`DEFAULT_CHAR_WIDTH`].
    pub fn with_fallback(char_width: f64, fallback: f64) -> Self {
        let fallback = if usable(fallback) {
            fallback
        } else {
            warn!("Ignoring fallback character width {}", fallback);
            DEFAULT_CHAR_WIDTH
        };
        let mut engine = Self {
            char_width: fallback,
            fallback,
        };
        engine.set_char_width(char_width);
        engine
    }

    /// Inject a new measurement. Unusable values select the fallback.
    pub fn set_char_width(&mut self, char_width: f64) {
        if usable(char_width) {
            self.char_width = char_width;
        } else {
            warn!(
                "Character width {} is unusable, using fallback {}",
                char_width, self.fallback
            );
            self.char_width = self.fallback;
        }
    }

    pub fn char_width(&self) -> f64 {
        self.char_width
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// `round(offset / char_width)`, never below column 0.
    ///
    /// ```
    /// use chordsheet::PlacementEngine;
    ///
    /// let engine = PlacementEngine::new(10.0);
    /// assert_eq!(engine.pixel_to_column(60.0), 6);
    /// assert_eq!(engine.pixel_to_column(14.9), 1);
    /// assert_eq!(engine.pixel_to_column(-25.0), 0);
    /// ```
    pub fn pixel_to_column(&self, offset: f64) -> usize {
        let column = (offset / self.char_width).round();
        if column.is_nan() || column <= 0.0 {
            0
        } else {
            column as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        let engine = PlacementEngine::new(10.0);
        assert_eq!(engine.pixel_to_column(0.0), 0);
        assert_eq!(engine.pixel_to_column(4.9), 0);
        assert_eq!(engine.pixel_to_column(5.0), 1);
        assert_eq!(engine.pixel_to_column(15.0), 2);
        assert_eq!(engine.pixel_to_column(123.4), 12);
    }

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        let engine = PlacementEngine::new(8.0);
        assert_eq!(engine.pixel_to_column(-0.1), 0);
        assert_eq!(engine.pixel_to_column(-400.0), 0);
        assert_eq!(engine.pixel_to_column(f64::NAN), 0);
    }

    #[test]
    fn test_zero_width_uses_fallback() {
        let engine = PlacementEngine::new(0.0);
        assert_eq!(engine.char_width(), DEFAULT_CHAR_WIDTH);

        let engine = PlacementEngine::with_fallback(f64::NAN, 5.0);
        assert_eq!(engine.char_width(), 5.0);
        assert_eq!(engine.pixel_to_column(50.0), 10);
    }

    #[test]
    fn test_unusable_fallback_uses_default() {
        let engine = PlacementEngine::with_fallback(-1.0, 0.0);
        assert_eq!(engine.fallback(), DEFAULT_CHAR_WIDTH);
        assert_eq!(engine.char_width(), DEFAULT_CHAR_WIDTH);
    }

    #[test]
    fn test_remeasure() {
        let mut engine = PlacementEngine::default();
        engine.set_char_width(12.0);
        assert_eq!(engine.pixel_to_column(36.0), 3);
        engine.set_char_width(0.0);
        assert_eq!(engine.char_width(), DEFAULT_CHAR_WIDTH);
    }
}
