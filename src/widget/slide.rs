//! `TextSlide`: One line of text gliding across the stage.
//!
//! A slide is single-use: it is created off-screen at the right edge of
//! the stage when text is committed, slides to the center, and is dropped
//! after its exit past the left edge completes. Its column position is a
//! linear interpolation of the owned [`SlideState`]'s progress over the
//! range captured when a move begins.

use crate::animation::SlideState;
use crate::buffer::{Buffer, Rgb};
use crate::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// One sliding text surface bound to its own animation state.
#[derive(Debug, Clone)]
pub struct TextSlide {
    /// The text content.
    content: String,
    /// Rendered width of the content in columns.
    columns: u16,
    /// Stage the slide moves across (also clips rendering).
    stage: Rect,
    /// Text color.
    fg: Rgb,
    /// Fractional column of the content's left edge.
    x: f32,
    /// Interpolation range for the current move.
    range: (f32, f32),
    /// Owned progress tracker, advanced once per tick.
    state: SlideState,
}

impl TextSlide {
    /// Create a slide resting just past the stage's right edge.
    pub fn new(content: &str, stage: Rect, fg: Rgb) -> Self {
        let columns = u16::try_from(UnicodeWidthStr::width(content)).unwrap_or(u16::MAX);
        let x = f32::from(stage.right());
        Self {
            content: content.to_string(),
            columns,
            stage,
            fg,
            x,
            range: (x, x),
            state: SlideState::new(),
        }
    }

    /// The text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Rendered width in columns.
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Current fractional column of the content's left edge.
    pub const fn position(&self) -> f32 {
        self.x
    }

    /// Whether the slide's state is currently advancing.
    pub const fn is_moving(&self) -> bool {
        self.state.is_moving()
    }

    /// The column that horizontally centers the content on the stage.
    pub fn center_column(&self) -> f32 {
        (f32::from(self.stage.width) - f32::from(self.columns)) / 2.0 + f32::from(self.stage.x)
    }

    /// Begin sliding from the current position to `target`.
    ///
    /// No-op returning `false` while a move is already in flight.
    fn move_to(&mut self, target: f32) -> bool {
        if !self.state.start() {
            return false;
        }
        self.range = (self.x, target);
        true
    }

    /// Begin the entrance move toward the stage center.
    pub fn begin_entrance(&mut self) -> bool {
        let target = self.center_column();
        self.move_to(target)
    }

    /// Begin the exit move to one content-width past the left stage edge.
    pub fn begin_exit(&mut self) -> bool {
        let target = f32::from(self.stage.x) - f32::from(self.columns);
        self.move_to(target)
    }

    /// Advance one tick and recompute the position from progress.
    ///
    /// Returns `true` on the tick where the move settles.
    pub fn advance(&mut self) -> bool {
        let settled = self.state.advance();
        let (start, end) = self.range;
        self.x = (end - start).mul_add(self.state.progress(), start);
        settled
    }

    /// Draw the slide onto the stage's center row, clipped to the stage.
    pub fn render(&self, buffer: &mut Buffer) {
        if self.stage.is_empty() {
            return;
        }
        let row = self.stage.y + self.stage.height / 2;

        #[allow(clippy::cast_possible_truncation)]
        let mut col = self.x.round() as i32;
        let left = i32::from(self.stage.x);
        let right = i32::from(self.stage.right());

        for grapheme in self.content.graphemes(true) {
            let width = i32::try_from(UnicodeWidthStr::width(grapheme)).unwrap_or(0);
            if width == 0 {
                continue;
            }
            if col >= left && col + width <= right {
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                buffer.draw_text(col as u16, row, grapheme, self.fg, Rgb::DEFAULT_BG);
            }
            col += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage() -> Rect {
        Rect::new(0, 0, 80, 23)
    }

    #[test]
    fn test_slide_starts_offscreen_right() {
        let slide = TextSlide::new("hello", stage(), Rgb::WHITE);
        assert_eq!(slide.position(), 80.0);
        assert_eq!(slide.columns(), 5);
        assert!(!slide.is_moving());
    }

    #[test]
    fn test_slide_entrance_reaches_center() {
        let mut slide = TextSlide::new("hello", stage(), Rgb::WHITE);
        assert!(slide.begin_entrance());

        let mut ticks = 0;
        while !slide.advance() {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(ticks + 1, 20);
        assert!((slide.position() - 37.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_slide_exit_clears_left_edge() {
        let mut slide = TextSlide::new("hello", stage(), Rgb::WHITE);
        slide.begin_entrance();
        while !slide.advance() {}

        assert!(slide.begin_exit());
        while !slide.advance() {}
        assert!((slide.position() - -5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_slide_move_is_idempotent_while_moving() {
        let mut slide = TextSlide::new("hi", stage(), Rgb::WHITE);
        assert!(slide.begin_entrance());
        slide.advance();
        // Exit request while the entrance is in flight is ignored.
        assert!(!slide.begin_exit());
    }

    #[test]
    fn test_slide_wide_content_width() {
        let slide = TextSlide::new("日本", stage(), Rgb::WHITE);
        assert_eq!(slide.columns(), 4);
        assert!((slide.center_column() - 38.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_slide_render_clips_to_stage() {
        let mut slide = TextSlide::new("hello", stage(), Rgb::WHITE);
        let mut buffer = Buffer::new(80, 24);

        // Off-screen right: nothing rendered.
        slide.render(&mut buffer);
        let row = 11;
        for x in 0..80 {
            assert_eq!(buffer.get(x, row).unwrap().symbol(), " ");
        }

        // Centered after the entrance: content appears on the center row.
        slide.begin_entrance();
        while !slide.advance() {}
        slide.render(&mut buffer);
        assert_eq!(buffer.get(38, row).unwrap().symbol(), "h");
        assert_eq!(buffer.get(42, row).unwrap().symbol(), "o");
    }

    #[test]
    fn test_slide_render_keeps_combining_marks() {
        // Decomposed accent: the cluster must reach the stage intact.
        let mut slide = TextSlide::new("cafe\u{301}", stage(), Rgb::WHITE);
        assert_eq!(slide.columns(), 4);

        slide.begin_entrance();
        while !slide.advance() {}
        let mut buffer = Buffer::new(80, 24);
        slide.render(&mut buffer);
        assert_eq!(buffer.get(40, 11).unwrap().symbol(), "f");
        assert_eq!(buffer.get(41, 11).unwrap().symbol(), "e\u{301}");
    }

    #[test]
    fn test_slide_empty_content() {
        let mut slide = TextSlide::new("", stage(), Rgb::WHITE);
        assert_eq!(slide.columns(), 0);
        assert!(slide.begin_entrance());
        while !slide.advance() {}
        assert!((slide.position() - 40.0).abs() < f32::EPSILON);
    }
}
