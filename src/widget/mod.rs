//! Widgets: The UI components composing the slideline screen.
//!
//! - [`TextInput`]: single-line text entry at the bottom of the screen
//! - [`TextSlide`]: one line of committed text gliding across the stage
//! - [`Sequencer`]: the state machine sequencing slide transitions
//!
//! All widgets draw into a [`crate::buffer::Buffer`] through the
//! [`Widget`] trait and are driven from the main loop.

mod sequencer;
mod slide;
mod text_input;
mod traits;

pub use sequencer::{Phase, Sequencer, SequencerConfig, Settled};
pub use slide::TextSlide;
pub use text_input::{TextInput, TextInputConfig};
pub use traits::Widget;
