//! Periodic tick source for the game clock.

use super::GameEvent;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TickerError {
    #[error("Tick period must be greater than zero")]
    ZeroPeriod,
}

/// Owns the one repeating timer that drives a session's countdown.
///
/// Each [`start`](Self::start) begins a new generation and cancels the
/// previous timer. Ticks are tagged with their generation so the consumer can
/// drop ticks a cancelled timer had already queued. Dropping the ticker
/// cancels its timer.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Result<Self, TickerError> {
        if period.is_zero() {
            return Err(TickerError::ZeroPeriod);
        }
        Ok(Self {
            period,
            generation: 0,
            handle: None,
        })
    }

    /// Start ticking into `events`, replacing any running timer.
    ///
    /// The first tick arrives one full period after the call. Must be called
    /// from within a tokio runtime.
    pub fn start(&mut self, events: mpsc::Sender<GameEvent>) -> u64 {
        self.stop();
        self.generation += 1;

        let generation = self.generation;
        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut cadence = interval(period);
            cadence.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // first tick completes immediately
            cadence.tick().await;

            loop {
                cadence.tick().await;
                if events.send(GameEvent::Tick { generation }).await.is_err() {
                    break;
                }
            }
        }));

        debug!(generation, period_ms = period.as_millis() as u64, "ticker started");
        generation
    }

    /// Cancel the running timer, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(generation = self.generation, "ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Whether a tick of `generation` comes from the live timer.
    pub fn accepts(&self, generation: u64) -> bool {
        self.handle.is_some() && generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
