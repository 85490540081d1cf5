//! Sequencer: Drives at most two slides through their transitions.
//!
//! The sequencer is an explicit finite-state machine stepped from outside
//! by tick events: the commit path (`submit`) only rearranges slots and
//! starts the ticker, and every animation advance happens in `on_tick`.
//! The two transition phases are strictly sequential - the ticker is
//! stopped and restarted between them, and only one slide advances per
//! tick.

use super::slide::TextSlide;
use super::traits::Widget;
use crate::actor::{InputEvent, Tick, Ticker};
use crate::buffer::{Buffer, Rgb};
use crate::layout::Rect;
use crossbeam_channel::Receiver;
use std::time::Duration;

/// Phase of the transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No animation running; submissions are accepted.
    Idle,
    /// The previous slide is moving off-screen left.
    RetiringPrevious,
    /// The current slide is moving in from the right edge.
    EnteringCurrent,
}

/// Reported by [`Sequencer::on_tick`] on the tick where the entering slide
/// comes to rest and the machine returns to [`Phase::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled;

/// Configuration for the sequencer.
#[derive(Debug, Clone)]
pub struct SequencerConfig {
    /// Time between animation ticks.
    pub tick_interval: Duration,
    /// Slide text color.
    pub fg: Rgb,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            fg: Rgb::from_u32(0x003F_51B5),
        }
    }
}

/// Orchestrates the outgoing and incoming text slides over one ticker.
pub struct Sequencer {
    /// State machine tag.
    phase: Phase,
    /// The slide entering or resting at the center.
    current: Option<TextSlide>,
    /// The retiring slide; occupied only during `RetiringPrevious`.
    previous: Option<TextSlide>,
    /// Shared tick source, running only while a phase is active.
    ticker: Ticker,
    /// Stage new slides are created on.
    stage: Rect,
    /// Configuration.
    config: SequencerConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl Sequencer {
    /// Create an idle sequencer for the given stage.
    pub fn new(stage: Rect, config: SequencerConfig) -> Self {
        Self {
            phase: Phase::Idle,
            current: None,
            previous: None,
            ticker: Ticker::new(config.tick_interval),
            stage,
            config,
            dirty: true,
        }
    }

    /// Current phase of the state machine.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the sequencer is idle and accepting submissions.
    pub const fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    /// The text resting at (or heading for) the center, if any.
    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(TextSlide::content)
    }

    /// The tick receiver to select on.
    ///
    /// Clone it once; it stays valid across the ticker's start/stop cycles.
    pub const fn ticks(&self) -> &Receiver<Tick> {
        self.ticker.receiver()
    }

    /// Commit a line of text and begin its transition.
    ///
    /// Any existing current slide becomes the retiring previous slide.
    /// Empty text is valid content. Returns `false` without touching any
    /// state if a transition is already in flight.
    pub fn submit(&mut self, text: &str) -> bool {
        if !self.is_idle() {
            return false;
        }

        if let Some(retiring) = self.current.take() {
            self.previous = Some(retiring);
        }
        self.current = Some(TextSlide::new(text, self.stage, self.config.fg));

        if let Some(prev) = self.previous.as_mut() {
            prev.begin_exit();
            self.phase = Phase::RetiringPrevious;
        } else {
            self.enter_current();
        }

        self.ticker.start();
        self.dirty = true;
        true
    }

    /// Transition into `EnteringCurrent` and arm the current slide.
    fn enter_current(&mut self) {
        if let Some(current) = self.current.as_mut() {
            current.begin_entrance();
        }
        self.phase = Phase::EnteringCurrent;
    }

    /// Step the state machine by one tick.
    ///
    /// Exactly one slide advances per call. Returns [`Settled`] on the tick
    /// where the entering slide comes to rest; stray ticks while idle are
    /// ignored.
    pub fn on_tick(&mut self) -> Option<Settled> {
        match self.phase {
            Phase::Idle => None,
            Phase::RetiringPrevious => {
                let settled = self.previous.as_mut().is_some_and(TextSlide::advance);
                self.dirty = true;
                if settled {
                    // The retired slide leaves the display for good.
                    self.previous = None;
                    self.ticker.stop();
                    self.enter_current();
                    self.ticker.start();
                }
                None
            }
            Phase::EnteringCurrent => {
                let settled = self.current.as_mut().is_some_and(TextSlide::advance);
                self.dirty = true;
                if settled {
                    self.ticker.stop();
                    self.phase = Phase::Idle;
                    return Some(Settled);
                }
                None
            }
        }
    }
}

impl Widget for Sequencer {
    fn bounds(&self) -> Rect {
        self.stage
    }

    /// Rebind the stage. Slides already in flight keep the range they
    /// captured; the next submission uses the new bounds.
    fn set_bounds(&mut self, bounds: Rect) {
        self.stage = bounds;
        self.dirty = true;
    }

    fn render(&self, buffer: &mut Buffer) {
        if let Some(previous) = &self.previous {
            previous.render(buffer);
        }
        if let Some(current) = &self.current {
            current.render(buffer);
        }
    }

    fn handle_input(&mut self, _event: &InputEvent) -> bool {
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

    fn sequencer() -> Sequencer {
        Sequencer::new(Rect::new(0, 0, 80, 23), SequencerConfig::default())
    }

    /// Step until `Settled`, returning the number of ticks it took.
    fn ticks_to_settle(seq: &mut Sequencer) -> u32 {
        let mut ticks = 0;
        loop {
            ticks += 1;
            if seq.on_tick().is_some() {
                return ticks;
            }
            assert!(ticks < 1000, "sequencer never settled");
        }
    }

    #[test]
    fn test_first_submission_enters_directly() {
        let mut seq = sequencer();
        assert!(seq.submit("A"));
        assert_eq!(seq.phase(), Phase::EnteringCurrent);
        assert!(seq.ticker.is_running());
        assert!(seq.previous.is_none());

        assert_eq!(ticks_to_settle(&mut seq), 20);
        assert!(seq.is_idle());
        assert!(!seq.ticker.is_running());
        assert!(seq.previous.is_none());

        // "A" rests at the horizontal center of the 80-column stage.
        let pos = seq.current.as_ref().unwrap().position();
        assert!((pos - 39.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_second_submission_retires_then_enters() {
        let mut seq = sequencer();
        seq.submit("A");
        ticks_to_settle(&mut seq);

        assert!(seq.submit("B"));
        assert_eq!(seq.phase(), Phase::RetiringPrevious);
        assert_eq!(seq.previous.as_ref().unwrap().content(), "A");
        assert_eq!(seq.current_text(), Some("B"));

        // While "A" retires, "B" stays parked off-screen right.
        let parked = seq.current.as_ref().unwrap().position();
        for _ in 0..5 {
            seq.on_tick();
            assert_eq!(seq.current.as_ref().unwrap().position(), parked);
        }

        // Retirement completes on its 20th tick; "A" is gone before "B" moves.
        for _ in 0..15 {
            assert!(seq.on_tick().is_none());
        }
        assert!(seq.previous.is_none());
        assert_eq!(seq.phase(), Phase::EnteringCurrent);
        assert!(seq.ticker.is_running());

        assert_eq!(ticks_to_settle(&mut seq), 20);
        assert!(seq.is_idle());
        assert_eq!(seq.current_text(), Some("B"));
    }

    #[test]
    fn test_retired_slide_clears_the_left_edge() {
        let mut seq = sequencer();
        seq.submit("old");
        ticks_to_settle(&mut seq);
        seq.submit("new");

        // One tick before retirement completes the slide is still live.
        for _ in 0..19 {
            seq.on_tick();
        }
        let prev = seq.previous.as_ref().unwrap();
        assert!(prev.is_moving());
        assert!(prev.position() > -3.0);
        assert_eq!(seq.phase(), Phase::RetiringPrevious);

        // The 20th tick lands it exactly one content-width past the left
        // edge and removes it from the display.
        seq.on_tick();
        assert!(seq.previous.is_none());
        assert_eq!(seq.phase(), Phase::EnteringCurrent);
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let mut seq = sequencer();
        seq.submit("A");
        seq.on_tick();

        assert!(!seq.submit("B"));
        assert_eq!(seq.current_text(), Some("A"));
        assert_eq!(seq.phase(), Phase::EnteringCurrent);

        ticks_to_settle(&mut seq);
        assert!(seq.submit("B"));
    }

    #[test]
    fn test_same_text_twice_runs_independent_transitions() {
        let mut seq = sequencer();
        seq.submit("echo");
        assert_eq!(ticks_to_settle(&mut seq), 20);

        seq.submit("echo");
        assert_eq!(seq.phase(), Phase::RetiringPrevious);
        // Full retire (20) + full enter (20), no shared state between the
        // two slides.
        assert_eq!(ticks_to_settle(&mut seq), 40);
        let pos = seq.current.as_ref().unwrap().position();
        assert!((pos - 38.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_submission_is_valid_content() {
        let mut seq = sequencer();
        assert!(seq.submit(""));
        assert_eq!(ticks_to_settle(&mut seq), 20);
        assert_eq!(seq.current_text(), Some(""));
    }

    #[test]
    fn test_stray_tick_while_idle_is_ignored() {
        let mut seq = sequencer();
        assert!(seq.on_tick().is_none());
        assert!(seq.is_idle());

        seq.submit("A");
        ticks_to_settle(&mut seq);
        assert!(seq.on_tick().is_none());
        assert!(seq.is_idle());
    }

    #[test]
    fn test_ticker_runs_only_while_animating() {
        let mut seq = sequencer();
        assert!(!seq.ticker.is_running());

        seq.submit("A");
        assert!(seq.ticker.is_running());
        ticks_to_settle(&mut seq);
        assert!(!seq.ticker.is_running());

        seq.submit("B");
        assert!(seq.ticker.is_running());
        // Stop/restart happens at the phase boundary.
        for _ in 0..20 {
            seq.on_tick();
        }
        assert_eq!(seq.phase(), Phase::EnteringCurrent);
        assert!(seq.ticker.is_running());
        ticks_to_settle(&mut seq);
        assert!(!seq.ticker.is_running());
    }
}
