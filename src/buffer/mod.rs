//! Buffer module: Core data structures for the double-buffer display surface.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of display
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Rgb`]: True-color representation
//! - [`Modifiers`]: Text style bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use buffer::Buffer;
pub use cell::{Cell, Modifiers, Rgb};
