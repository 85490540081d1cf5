//! Layout module: Static regions computed once, not per frame.
//!
//! Bounds are computed at initialization and on terminal resize, then
//! passed into each component explicitly.

mod metrics;
mod rect;

pub use metrics::Metrics;
pub use rect::Rect;
