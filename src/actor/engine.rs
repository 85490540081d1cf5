//! Engine: Terminal lifecycle and frame plumbing.
//!
//! The Engine is the entry point for running slideline against a real
//! terminal. It owns raw-mode setup/teardown, the input actor, the frame
//! buffer widgets draw into, and the presenter that flushes it.

use super::input::InputActor;
use super::messages::InputEvent;
use crate::buffer::Buffer;
use crate::terminal::Presenter;
use crossbeam_channel::{bounded, Receiver};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;

/// Configuration for the Engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Input poll timeout.
    pub input_poll_timeout: Duration,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

/// The main slideline engine.
///
/// Puts the terminal in raw mode on construction and restores it on drop.
pub struct Engine {
    /// Configuration.
    config: EngineConfig,
    /// Input event receiver.
    input_rx: Receiver<InputEvent>,
    /// Input actor handle.
    input_actor: Option<InputActor>,
    /// Frame buffer widgets render into.
    buffer: Buffer,
    /// Diffing presenter for the frame buffer.
    presenter: Presenter,
    /// Terminal width.
    width: u16,
    /// Terminal height.
    height: u16,
    /// Whether the engine is running.
    running: bool,
}

impl Engine {
    /// Create a new engine with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(EngineConfig::default())
    }

    /// Create a new engine with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: EngineConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let input_actor = InputActor::spawn(input_tx, config.input_poll_timeout);

        Ok(Self {
            config,
            input_rx,
            input_actor: Some(input_actor),
            buffer: Buffer::new(width.max(1), height.max(1)),
            presenter: Presenter::new(width.max(1), height.max(1)),
            width,
            height,
            running: true,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get a mutable reference to the frame buffer.
    pub const fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Get the input receiver for event-driven loops.
    ///
    /// Clone it for use in `select!`.
    pub const fn input_receiver(&self) -> &Receiver<InputEvent> {
        &self.input_rx
    }

    /// Check if the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the engine.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Clear the frame buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Handle a resize event: resize both the frame buffer and the
    /// presenter's retained frame.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.buffer.resize(width.max(1), height.max(1));
        self.presenter.resize(width.max(1), height.max(1));
    }

    /// Diff the frame buffer against the last presented frame and flush
    /// the changes to the terminal in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn present(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.presenter.present(&self.buffer, &mut stdout)
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }

        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
