//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use crate::buffer::{Modifiers, Rgb};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set text style modifiers.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        if modifiers.contains(Modifiers::BOLD) {
            self.data.extend_from_slice(b"\x1b[1m");
        }
        if modifiers.contains(Modifiers::DIM) {
            self.data.extend_from_slice(b"\x1b[2m");
        }
        if modifiers.contains(Modifiers::ITALIC) {
            self.data.extend_from_slice(b"\x1b[3m");
        }
        if modifiers.contains(Modifiers::UNDERLINE) {
            self.data.extend_from_slice(b"\x1b[4m");
        }
        if modifiers.contains(Modifiers::REVERSED) {
            self.data.extend_from_slice(b"\x1b[7m");
        }
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn test_modifier_sequences() {
        let mut out = OutputBuffer::new();
        out.set_modifiers(Modifiers::BOLD | Modifiers::DIM);
        assert_eq!(out.as_bytes(), b"\x1b[1m\x1b[2m");
    }

    #[test]
    fn test_write_str_utf8() {
        let mut out = OutputBuffer::new();
        out.write_str("e\u{301}日");
        assert_eq!(out.as_bytes(), "e\u{301}日".as_bytes());
    }
}
