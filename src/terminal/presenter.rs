//! Presenter: Double-buffered frame presentation.
//!
//! The presenter keeps the last frame that reached the terminal and, on each
//! `present`, emits ANSI sequences for changed cells only, flushed in a
//! single write. All of it runs on the caller's thread; slideline mutates
//! every piece of display state from one logical thread.

use super::output::OutputBuffer;
use crate::buffer::{Buffer, Modifiers, Rgb};
use std::io::{self, Write};

/// Double-buffered cell diff against the last presented frame.
pub struct Presenter {
    /// The frame currently visible on the terminal.
    current: Buffer,
    /// Pre-allocated ANSI output.
    output: OutputBuffer,
    /// Whether the next present must redraw every cell.
    full_redraw: bool,
}

impl Presenter {
    /// Create a presenter for a terminal of the given dimensions.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current: Buffer::new(width, height),
            output: OutputBuffer::with_capacity(65536),
            full_redraw: true,
        }
    }

    /// Resize the retained frame. Forces a full redraw on the next present.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.full_redraw = true;
    }

    /// Force the next present to redraw every cell.
    pub const fn mark_full_redraw(&mut self) {
        self.full_redraw = true;
    }

    /// Diff `next` against the retained frame and flush the changes.
    ///
    /// `next` must have the same dimensions as the presenter.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn present<W: Write>(&mut self, next: &Buffer, writer: &mut W) -> io::Result<()> {
        debug_assert_eq!(self.current.width(), next.width());
        debug_assert_eq!(self.current.height(), next.height());

        self.output.clear();
        if self.full_redraw {
            self.output.clear_screen();
        }

        // Track the cursor column and the active SGR state so runs of
        // adjacent changed cells cost one cursor move and one style change.
        let mut cursor: Option<(u16, u16)> = None;
        let mut style: Option<(Rgb, Rgb, Modifiers)> = None;

        for y in 0..next.height() {
            let mut x = 0;
            while x < next.width() {
                let Some(cell) = next.get(x, y) else { break };
                let unchanged = !self.full_redraw && self.current.get(x, y) == Some(cell);
                if unchanged || cell.is_wide_continuation() {
                    x += 1;
                    continue;
                }

                if cursor != Some((x, y)) {
                    self.output.cursor_move(x, y);
                }
                let cell_style = (cell.fg(), cell.bg(), cell.modifiers());
                if style != Some(cell_style) {
                    self.output.reset_attrs();
                    self.output.set_modifiers(cell.modifiers());
                    self.output.set_fg(cell.fg());
                    self.output.set_bg(cell.bg());
                    style = Some(cell_style);
                }
                self.output.write_str(cell.symbol());

                let advance = u16::from(cell.display_width().max(1));
                cursor = Some((x + advance, y));
                x += advance;
            }
        }

        if !self.output.is_empty() {
            self.output.reset_attrs();
            self.output.flush_to(writer)?;
        }

        self.current.copy_from(next);
        self.full_redraw = false;
        Ok(())
    }
}

impl std::fmt::Debug for Presenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Presenter")
            .field("current", &self.current)
            .field("full_redraw", &self.full_redraw)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Cell;

    #[test]
    fn test_present_idempotent_frame_is_silent() {
        let mut presenter = Presenter::new(10, 2);
        let mut frame = Buffer::new(10, 2);
        frame.draw_text(0, 0, "hi", Rgb::WHITE, Rgb::BLACK);

        let mut first = Vec::new();
        presenter.present(&frame, &mut first).unwrap();
        assert!(!first.is_empty());

        let mut second = Vec::new();
        presenter.present(&frame, &mut second).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_present_emits_only_changed_cells() {
        let mut presenter = Presenter::new(10, 2);
        let mut frame = Buffer::new(10, 2);
        presenter.present(&frame, &mut Vec::new()).unwrap();

        frame.set(3, 1, Cell::new('Z'));
        let mut out = Vec::new();
        presenter.present(&frame, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // One cursor move to row 2 / col 4, one glyph.
        assert!(text.contains("\x1b[2;4H"));
        assert!(text.contains('Z'));
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn test_present_keeps_combining_marks() {
        let mut presenter = Presenter::new(10, 2);
        presenter.present(&Buffer::new(10, 2), &mut Vec::new()).unwrap();

        let mut frame = Buffer::new(10, 2);
        frame.draw_text(0, 0, "e\u{301}", Rgb::WHITE, Rgb::BLACK);
        let mut out = Vec::new();
        presenter.present(&frame, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("e\u{301}"));
    }

    #[test]
    fn test_resize_forces_full_redraw() {
        let mut presenter = Presenter::new(10, 2);
        let frame = Buffer::new(10, 2);
        presenter.present(&frame, &mut Vec::new()).unwrap();

        presenter.resize(12, 2);
        let bigger = Buffer::new(12, 2);
        let mut out = Vec::new();
        presenter.present(&bigger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[2J"));
    }
}
