//! Ticker: Start/stop wrapper around a fixed-period timing thread.
//!
//! The ticker delivers a regular "tick" signal that drives every animation
//! advance. `start` and `stop` are idempotent toggles: starting a running
//! ticker or stopping a stopped one is a silent no-op, and there is never
//! more than one timing thread alive.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event sent at regular intervals.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Frame number within the current run (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since this run was started.
    pub elapsed: Duration,
}

/// Fixed-period tick source with idempotent start/stop.
///
/// The receiver outlives start/stop cycles: each started run clones the
/// same sender, so one select loop observes every generation of ticks.
pub struct Ticker {
    /// Time between ticks.
    interval: Duration,
    /// Sender cloned into each spawned timing thread.
    tick_tx: Sender<Tick>,
    /// Receiver for tick events.
    tick_rx: Receiver<Tick>,
    /// Flag to signal the current run to shut down.
    shutdown: Arc<AtomicBool>,
    /// Handle to the running timing thread, if any.
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Create a stopped ticker with the given interval.
    pub fn new(interval: Duration) -> Self {
        // Bounded channel with small buffer - we don't want ticks to queue up
        let (tick_tx, tick_rx) = bounded(2);
        Self {
            interval,
            tick_tx,
            tick_rx,
            shutdown: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Start ticking. No-op if already running.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the timing thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn start(&mut self) {
        if self.handle.is_some() {
            return;
        }

        self.shutdown.store(false, Ordering::Relaxed);
        let tick_tx = self.tick_tx.clone();
        let shutdown = self.shutdown.clone();
        let interval = self.interval;

        let handle = thread::Builder::new()
            .name("slideline-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&tick_tx, &shutdown, interval);
            })
            .expect("Failed to spawn ticker thread");

        self.handle = Some(handle);
    }

    /// Stop ticking and join the timing thread. No-op if already stopped.
    ///
    /// Ticks still buffered in the channel belong to the finished run and
    /// are discarded, so a restarted ticker delivers its first tick one
    /// full interval after `start`.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.shutdown.store(true, Ordering::Relaxed);
            let _ = handle.join();
            while self.tick_rx.try_recv().is_ok() {}
        }
    }

    /// Check whether a timing thread is currently running.
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Get the tick interval.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Get a reference to the tick receiver.
    ///
    /// Clone it for use in `select!` loops; it stays valid across
    /// start/stop cycles.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Tick> {
        &self.tick_rx
    }

    /// Main ticker loop.
    fn run_loop(tick_tx: &Sender<Tick>, shutdown: &Arc<AtomicBool>, interval: Duration) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                let tick = Tick {
                    frame,
                    elapsed: now - start,
                };

                // Non-blocking send - if buffer is full, skip this tick
                // (receiver is too slow, prevent queue buildup)
                let _ = tick_tx.try_send(tick);

                frame += 1;
                next_tick += interval;

                // Handle case where we're behind (catch up without queuing)
                if next_tick < now {
                    next_tick = now + interval;
                }
            } else {
                let sleep_duration = next_tick - now;
                thread::sleep(sleep_duration.min(Duration::from_millis(1)));
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("interval", &self.interval)
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_basic() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        ticker.start();

        let tick = ticker.receiver().recv_timeout(Duration::from_millis(100));
        assert!(tick.is_ok());
        assert_eq!(tick.unwrap().frame, 0);

        ticker.stop();
    }

    #[test]
    fn test_ticker_start_is_idempotent() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        ticker.start();
        ticker.start();
        assert!(ticker.is_running());

        // One timing thread: frames on the channel stay strictly increasing.
        let first = ticker
            .receiver()
            .recv_timeout(Duration::from_millis(100))
            .unwrap();
        let second = ticker
            .receiver()
            .recv_timeout(Duration::from_millis(100))
            .unwrap();
        assert!(second.frame > first.frame);

        ticker.stop();
    }

    #[test]
    fn test_ticker_stop_is_idempotent() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        ticker.start();
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
        assert!(ticker
            .receiver()
            .recv_timeout(Duration::from_millis(50))
            .is_err());
    }

    #[test]
    fn test_ticker_stop_discards_buffered_ticks() {
        let mut ticker = Ticker::new(Duration::from_millis(5));
        ticker.start();
        // Let the bounded channel fill up before stopping.
        thread::sleep(Duration::from_millis(50));
        ticker.stop();

        assert!(ticker.receiver().try_recv().is_err());
    }

    #[test]
    fn test_ticker_restart_reuses_receiver() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        ticker.start();
        ticker.stop();

        ticker.start();
        assert!(ticker
            .receiver()
            .recv_timeout(Duration::from_millis(100))
            .is_ok());
        ticker.stop();
    }

    #[test]
    fn test_ticker_stopped_by_default() {
        let ticker = Ticker::new(Duration::from_millis(10));
        assert!(!ticker.is_running());
        assert!(ticker
            .receiver()
            .recv_timeout(Duration::from_millis(30))
            .is_err());
    }
}
