//! Actor Model: Message-passing concurrency for the terminal runtime.
//!
//! Two dedicated threads feed one main loop over crossbeam channels:
//! - **Input Actor**: Polls terminal events, forwards to the main loop
//! - **Ticker**: Fixed-period tick signal while a transition is running
//! - **Main Loop**: Owns every widget and all animation state
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │  Main Loop   │
//!                                      │              │
//! ┌──────────────┐        Tick         │ (sequencer,  │
//! │Ticker Thread │ ─────────────────▶  │  input line, │
//! └──────────────┘                     │  presenter)  │
//!                                      └──────────────┘
//! ```
//!
//! All mutation happens on the main loop's thread; the actors only
//! produce events.

mod engine;
mod input;
mod messages;
mod ticker;

pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers};
pub use ticker::{Tick, Ticker};
