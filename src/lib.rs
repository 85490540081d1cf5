//! # Slideline
//!
//! A flicker-free terminal marquee: type a line, watch it slide.
//!
//! Slideline renders a single input line at the bottom of the terminal.
//! Committing text with Enter slides it in from the right edge to the
//! center of the stage; the next commit retires the old line off the left
//! edge before the new one enters. Both moves run on a fixed-step timer
//! (20 ticks per transition) and never overlap.
//!
//! ## Core Concepts
//!
//! - **Fixed-step animation**: one [`animation::SlideState`] per slide,
//!   advanced once per tick, settling by snapping to its target
//! - **Sequenced phases**: retire-then-enter, driven by an explicit state
//!   machine in [`widget::Sequencer`]
//! - **Double-buffered rendering**: widgets draw into a cell [`Buffer`];
//!   the presenter flushes only changed cells in a single write
//! - **Actor threads**: input polling and the ticker each live on their
//!   own thread; all state mutation happens in the main loop
//!
//! ## Example
//!
//! ```rust
//! use slideline::{Buffer, Rect, Sequencer, SequencerConfig, Widget};
//!
//! let stage = Rect::new(0, 0, 80, 23);
//! let mut sequencer = Sequencer::new(stage, SequencerConfig::default());
//! sequencer.submit("hello");
//!
//! // Each tick advances exactly one slide; Some(_) marks the settle.
//! while sequencer.on_tick().is_none() {}
//!
//! let mut buffer = Buffer::new(80, 24);
//! sequencer.render(&mut buffer);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod animation;
pub mod buffer;
pub mod layout;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use actor::{Engine, EngineConfig, InputEvent, KeyCode, KeyModifiers, Tick, Ticker};
pub use animation::{SlideState, STEP};
pub use buffer::{Buffer, Cell, Modifiers, Rgb};
pub use layout::{Metrics, Rect};
pub use terminal::{OutputBuffer, Presenter};
pub use widget::{Phase, Sequencer, SequencerConfig, Settled, TextInput, TextInputConfig, Widget};
