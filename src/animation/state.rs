//! `SlideState`: Fixed-step animation progress tracker.
//!
//! One state advances one interpolation scalar per tick. It has no notion
//! of pixels or columns; owners map `progress` onto a position range.

/// Progress gained per tick. A full transition takes `1 / STEP` = 20 ticks.
pub const STEP: f32 = 0.05;

/// Tolerance for the settle check so accumulated float error cannot push
/// the final tick past the `ceil(1/STEP)` bound.
const SETTLE_EPSILON: f32 = 1e-4;

/// Per-element animation progress.
///
/// `progress` moves from `checkpoint` toward `checkpoint + direction` in
/// `STEP` increments. Reaching one full unit of travel snaps progress to
/// the exact target, records it as the new checkpoint and clears the
/// direction. A `direction` of 0 means the state is settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideState {
    /// Current interpolation scalar.
    progress: f32,
    /// -1, 0 or 1; 0 means idle/settled.
    direction: i8,
    /// Last settled progress value.
    checkpoint: f32,
}

impl Default for SlideState {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideState {
    /// Create a settled state at progress 0.
    pub const fn new() -> Self {
        Self {
            progress: 0.0,
            direction: 0,
            checkpoint: 0.0,
        }
    }

    /// Advance one tick.
    ///
    /// Returns `true` on the tick where the state settles: progress snaps
    /// to the exact target, the checkpoint moves there and the direction
    /// resets to 0. Advancing a settled state is a no-op returning `false`.
    pub fn advance(&mut self) -> bool {
        self.progress += f32::from(self.direction) * STEP;
        if (self.progress - self.checkpoint).abs() > 1.0 - SETTLE_EPSILON {
            self.progress = self.checkpoint + f32::from(self.direction);
            self.direction = 0;
            self.checkpoint = self.progress;
            return true;
        }
        false
    }

    /// Begin moving. No-op returning `false` while already moving.
    ///
    /// Slides are single-use and always enter from the same edge, so this
    /// resets progress and checkpoint to 0 before setting the direction.
    pub fn start(&mut self) -> bool {
        if self.direction != 0 {
            return false;
        }
        self.progress = 0.0;
        self.checkpoint = 0.0;
        self.direction = 1;
        true
    }

    /// Current interpolation scalar.
    #[inline]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the state is currently advancing.
    #[inline]
    pub const fn is_moving(&self) -> bool {
        self.direction != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Advance until settled, returning the number of calls it took.
    fn ticks_to_settle(state: &mut SlideState) -> u32 {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if state.advance() {
                return ticks;
            }
            assert!(ticks < 1000, "state never settled");
        }
    }

    #[test]
    fn test_settles_in_exactly_twenty_ticks() {
        let mut state = SlideState::new();
        assert!(state.start());
        assert_eq!(ticks_to_settle(&mut state), 20);
        assert_eq!(state.progress(), 1.0);
        assert!(!state.is_moving());
    }

    #[test]
    fn test_advance_while_settled_is_noop() {
        let mut state = SlideState::new();
        assert!(!state.advance());
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_start_while_moving_is_noop() {
        let mut state = SlideState::new();
        assert!(state.start());
        state.advance();
        let before = state;

        // A second start must not reset or re-arm anything.
        assert!(!state.start());
        assert_eq!(state, before);

        // Total tick count is unchanged by the ignored start.
        assert_eq!(ticks_to_settle(&mut state), 19);
    }

    #[test]
    fn test_restart_after_settle() {
        let mut state = SlideState::new();
        state.start();
        ticks_to_settle(&mut state);

        assert!(state.start());
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_moving());
        assert_eq!(ticks_to_settle(&mut state), 20);
    }

    #[test]
    fn test_progress_monotonic_until_settle() {
        let mut state = SlideState::new();
        state.start();
        let mut last = state.progress();
        while !state.advance() {
            assert!(state.progress() > last);
            last = state.progress();
        }
        assert_eq!(state.progress(), 1.0);
    }
}
