//! Terminal module: ANSI output plumbing.
//!
//! - [`OutputBuffer`]: pre-allocated escape-sequence builder, flushed in a
//!   single syscall
//! - [`Presenter`]: double-buffered cell diff between frames

mod output;
mod presenter;

pub use output::OutputBuffer;
pub use presenter::Presenter;
