//! Text Input Widget: Single-line text entry with cursor.
//!
//! The entry point for every slide: the user types a line here and commits
//! it with Enter. While a transition is in flight the input is disabled -
//! it ignores keys and renders dim until the sequencer settles.

use super::traits::Widget;
use crate::actor::{InputEvent, KeyCode};
use crate::buffer::{Buffer, Cell, Modifiers, Rgb};
use crate::layout::Rect;

/// Configuration for the text input widget.
#[derive(Debug, Clone)]
pub struct TextInputConfig {
    /// Foreground color for text.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Cursor color.
    pub cursor_fg: Rgb,
    /// Placeholder text shown when empty.
    pub placeholder: String,
    /// Placeholder text color.
    pub placeholder_fg: Rgb,
    /// Prompt prefix (e.g., "> ").
    pub prompt: String,
    /// Prompt color.
    pub prompt_fg: Rgb,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            fg: Rgb::WHITE,
            bg: Rgb::new(30, 30, 30),
            cursor_fg: Rgb::new(0, 255, 255),
            placeholder: String::from("type a line, press enter"),
            placeholder_fg: Rgb::new(100, 100, 100),
            prompt: String::from("> "),
            prompt_fg: Rgb::new(0, 255, 255),
        }
    }
}

/// A single-line text input widget with cursor and editing support.
#[derive(Debug)]
pub struct TextInput {
    /// Current text content.
    content: String,
    /// Cursor position (byte offset).
    cursor: usize,
    /// Widget bounds.
    bounds: Rect,
    /// Whether text entry is currently allowed.
    enabled: bool,
    /// Whether this widget has focus (drives the cursor blink).
    focused: bool,
    /// Configuration.
    config: TextInputConfig,
    /// Frame counter for cursor blinking.
    frame: u64,
    /// Needs redraw flag.
    dirty: bool,
}

impl TextInput {
    /// Create a new text input widget with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, TextInputConfig::default())
    }

    /// Create a new text input widget with custom configuration.
    pub const fn with_config(bounds: Rect, config: TextInputConfig) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            bounds,
            enabled: true,
            focused: true,
            config,
            frame: 0,
            dirty: true,
        }
    }

    /// Get the current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.dirty = true;
    }

    /// Check if the input is empty.
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Enable or disable text entry.
    ///
    /// A disabled input ignores all keys and renders dim.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.dirty = true;
    }

    /// Check if text entry is allowed.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.dirty = true;
    }

    /// Advance frame for cursor blink animation.
    pub const fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        // Only mark dirty if the cursor is actually blinking
        if self.enabled && self.focused && self.frame % 15 == 0 {
            self.dirty = true;
        }
    }

    /// Insert a character at the cursor position.
    fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.dirty = true;
    }

    /// Insert a string at the cursor position (paste).
    fn insert_str(&mut self, s: &str) {
        self.content.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.dirty = true;
    }

    /// Delete the character before the cursor.
    fn backspace(&mut self) {
        if self.cursor > 0 {
            // Find the previous char boundary
            let prev = self.content[..self.cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
            self.content.remove(prev);
            self.cursor = prev;
            self.dirty = true;
        }
    }

    /// Delete the character at the cursor.
    fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
            self.dirty = true;
        }
    }

    /// Move cursor left.
    fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.content[..self.cursor]
                .char_indices()
                .last()
                .map_or(0, |(i, _)| i);
            self.dirty = true;
        }
    }

    /// Move cursor right.
    fn cursor_right(&mut self) {
        if self.cursor < self.content.len() {
            if let Some(c) = self.content[self.cursor..].chars().next() {
                self.cursor += c.len_utf8();
                self.dirty = true;
            }
        }
    }

    /// Move cursor to start.
    const fn cursor_home(&mut self) {
        if self.cursor != 0 {
            self.cursor = 0;
            self.dirty = true;
        }
    }

    /// Move cursor to end.
    const fn cursor_end(&mut self) {
        let end = self.content.len();
        if self.cursor != end {
            self.cursor = end;
            self.dirty = true;
        }
    }

    /// Style modifiers for the current enabled state.
    fn text_modifiers(&self) -> Modifiers {
        if self.enabled {
            Modifiers::empty()
        } else {
            Modifiers::DIM
        }
    }
}

impl Widget for TextInput {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        let x = self.bounds.x;
        let y = self.bounds.y;
        let width = self.bounds.width as usize;
        let mods = self.text_modifiers();

        // Clear the line with background
        for i in 0..self.bounds.width {
            buffer.set(x + i, y, Cell::new(' ').with_bg(self.config.bg));
        }

        // Draw prompt
        let prompt_len = self.config.prompt.chars().count();
        for (i, c) in self.config.prompt.chars().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let px = x + i as u16;
            if (px as usize) < x as usize + width {
                buffer.set(
                    px,
                    y,
                    Cell::new(c)
                        .with_fg(self.config.prompt_fg)
                        .with_bg(self.config.bg)
                        .with_modifiers(mods),
                );
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        let text_start = x + prompt_len as u16;
        let text_width = width.saturating_sub(prompt_len);

        if self.content.is_empty() && !self.config.placeholder.is_empty() {
            // Draw placeholder
            for (i, c) in self.config.placeholder.chars().take(text_width).enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                let px = text_start + i as u16;
                buffer.set(
                    px,
                    y,
                    Cell::new(c)
                        .with_fg(self.config.placeholder_fg)
                        .with_bg(self.config.bg)
                        .with_modifiers(mods),
                );
            }
        } else {
            // Draw content, scrolled so the cursor stays visible
            let cursor_char_pos = self.content[..self.cursor].chars().count();
            let content_chars: Vec<char> = self.content.chars().collect();

            let scroll_offset = if cursor_char_pos >= text_width {
                cursor_char_pos - text_width + 1
            } else {
                0
            };

            let blink_on = self.enabled && self.focused && self.frame % 30 < 15;

            for (i, &c) in content_chars
                .iter()
                .skip(scroll_offset)
                .take(text_width)
                .enumerate()
            {
                #[allow(clippy::cast_possible_truncation)]
                let px = text_start + i as u16;
                let is_cursor = blink_on && (i + scroll_offset) == cursor_char_pos;

                if is_cursor {
                    buffer.set(
                        px,
                        y,
                        Cell::new(c)
                            .with_fg(self.config.bg)
                            .with_bg(self.config.cursor_fg),
                    );
                } else {
                    buffer.set(
                        px,
                        y,
                        Cell::new(c)
                            .with_fg(self.config.fg)
                            .with_bg(self.config.bg)
                            .with_modifiers(mods),
                    );
                }
            }

            // Draw cursor at end if needed
            #[allow(clippy::cast_possible_truncation)]
            let cursor_visual_pos = cursor_char_pos.saturating_sub(scroll_offset) as u16;
            if blink_on
                && cursor_char_pos == content_chars.len()
                && (cursor_visual_pos as usize) < text_width
            {
                let cx = text_start + cursor_visual_pos;
                buffer.set(
                    cx,
                    y,
                    Cell::new('█')
                        .with_fg(self.config.cursor_fg)
                        .with_bg(self.config.bg),
                );
            }
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        if !self.enabled || !self.focused {
            return false;
        }

        match event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Char(c) => {
                    if !modifiers.control && !modifiers.alt {
                        self.insert_char(*c);
                        return true;
                    }
                }
                KeyCode::Backspace => {
                    self.backspace();
                    return true;
                }
                KeyCode::Delete => {
                    self.delete();
                    return true;
                }
                KeyCode::Left => {
                    self.cursor_left();
                    return true;
                }
                KeyCode::Right => {
                    self.cursor_right();
                    return true;
                }
                KeyCode::Home => {
                    self.cursor_home();
                    return true;
                }
                KeyCode::End => {
                    self.cursor_end();
                    return true;
                }
                _ => {}
            },
            InputEvent::Paste(text) => {
                self.insert_str(text);
                return true;
            }
            _ => {}
        }

        false
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::KeyModifiers;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new(Rect::new(0, 23, 80, 1));

        assert!(input.handle_input(&key(KeyCode::Char('H'))));
        assert!(input.handle_input(&key(KeyCode::Char('i'))));
        assert_eq!(input.content(), "Hi");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_text_input_backspace() {
        let mut input = TextInput::new(Rect::new(0, 23, 80, 1));
        for c in "Hello".chars() {
            input.handle_input(&key(KeyCode::Char(c)));
        }

        input.handle_input(&key(KeyCode::Backspace));
        assert_eq!(input.content(), "Hell");
    }

    #[test]
    fn test_text_input_cursor_movement() {
        let mut input = TextInput::new(Rect::new(0, 23, 80, 1));
        for c in "Hello".chars() {
            input.handle_input(&key(KeyCode::Char(c)));
        }

        input.handle_input(&key(KeyCode::Left));
        assert_eq!(input.cursor, 4);

        input.handle_input(&key(KeyCode::Home));
        assert_eq!(input.cursor, 0);

        input.handle_input(&key(KeyCode::End));
        assert_eq!(input.cursor, 5);
    }

    #[test]
    fn test_text_input_disabled_ignores_keys() {
        let mut input = TextInput::new(Rect::new(0, 23, 80, 1));
        input.set_enabled(false);

        assert!(!input.handle_input(&key(KeyCode::Char('x'))));
        assert!(input.is_empty());

        input.set_enabled(true);
        assert!(input.handle_input(&key(KeyCode::Char('x'))));
        assert_eq!(input.content(), "x");
    }

    #[test]
    fn test_text_input_paste() {
        let mut input = TextInput::new(Rect::new(0, 23, 80, 1));
        input.handle_input(&key(KeyCode::Char('a')));
        input.handle_input(&InputEvent::Paste("bc".to_string()));
        assert_eq!(input.content(), "abc");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn test_text_input_clear() {
        let mut input = TextInput::new(Rect::new(0, 23, 80, 1));
        input.handle_input(&key(KeyCode::Char('a')));
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_text_input_renders_prompt_dim_when_disabled() {
        let mut input = TextInput::new(Rect::new(0, 0, 80, 1));
        input.set_enabled(false);

        let mut buffer = Buffer::new(80, 1);
        input.render(&mut buffer);
        let prompt_cell = buffer.get(0, 0).unwrap();
        assert_eq!(prompt_cell.symbol(), ">");
        assert!(prompt_cell.modifiers().contains(Modifiers::DIM));
    }
}
