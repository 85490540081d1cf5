//! Animation module: The fixed-step progress machine behind every slide.

mod state;

pub use state::{SlideState, STEP};
