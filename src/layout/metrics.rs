//! Metrics: Layout bounds computed once from the terminal size.
//!
//! Every component that needs layout bounds receives them from here
//! explicitly; nothing reads the terminal size on its own. Metrics are
//! recomputed only at startup and on a resize event.

use super::rect::Rect;

/// Screen regions for the slideline layout.
///
/// The bottom row holds the input line; everything above it is the stage
/// that submitted text slides across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    screen: Rect,
    stage: Rect,
    input_line: Rect,
}

impl Metrics {
    /// Compute metrics for a terminal of the given size.
    ///
    /// Degenerate sizes are clamped so the stage and input line always
    /// exist (at least 1x1 each).
    pub fn from_size(width: u16, height: u16) -> Self {
        let screen = Rect::from_size(width.max(1), height.max(2));
        let (stage, input_line) = screen.split_vertical(screen.height - 1);
        Self {
            screen,
            stage,
            input_line,
        }
    }

    /// The full screen rectangle.
    #[inline]
    pub const fn screen(&self) -> Rect {
        self.screen
    }

    /// The stage area text slides across.
    #[inline]
    pub const fn stage(&self) -> Rect {
        self.stage
    }

    /// The single-row input line at the bottom.
    #[inline]
    pub const fn input_line(&self) -> Rect {
        self.input_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_layout() {
        let metrics = Metrics::from_size(80, 24);
        assert_eq!(metrics.screen(), Rect::from_size(80, 24));
        assert_eq!(metrics.stage(), Rect::new(0, 0, 80, 23));
        assert_eq!(metrics.input_line(), Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_metrics_degenerate_size() {
        let metrics = Metrics::from_size(0, 0);
        assert!(!metrics.stage().is_empty());
        assert!(!metrics.input_line().is_empty());
    }
}
