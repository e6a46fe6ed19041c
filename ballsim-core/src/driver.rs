//! Fixed-step driver loop
//!
//! The driver owns no global state: elapsed time comes in through a
//! [`TimeSource`] and frames go out through a [`RenderSink`]. Wall-clock time
//! is accumulated and consumed in whole `dt` steps so the physics always
//! sees the same step size regardless of frame rate.

use crate::error::SimError;
use crate::render::{paint, RenderSink};
use crate::simulator::{Simulator, StepReport};
use std::collections::VecDeque;
use std::time::Instant;

/// Default physics step, matching a 120 Hz display
pub const DEFAULT_DT: f64 = 1.0 / 120.0;

/// Provides the time elapsed since the previous call, in seconds
pub trait TimeSource {
    fn elapsed_seconds(&mut self) -> f64;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn elapsed_seconds(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        elapsed
    }
}

/// Scripted clock; returns queued deltas in order, then zero
#[derive(Debug, Default)]
pub struct ManualClock {
    deltas: VecDeque<f64>,
}

impl ManualClock {
    pub fn new(deltas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            deltas: deltas.into_iter().collect(),
        }
    }

    pub fn push(&mut self, delta: f64) {
        self.deltas.push_back(delta);
    }

    /// Number of deltas not yet consumed
    pub fn pending(&self) -> usize {
        self.deltas.len()
    }
}

impl TimeSource for ManualClock {
    fn elapsed_seconds(&mut self) -> f64 {
        self.deltas.pop_front().unwrap_or(0.0)
    }
}

/// What one call to [`Driver::tick`] did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub steps: usize,
    pub dropped_steps: usize,
    pub physics: StepReport,
}

pub struct Driver {
    pub simulator: Simulator,
    dt: f64,
    max_substeps: usize,
    accumulator: f64,
}

impl Driver {
    pub fn new(simulator: Simulator, dt: f64) -> Result<Self, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }
        Ok(Self {
            simulator,
            dt,
            max_substeps: 8,
            accumulator: 0.0,
        })
    }

    /// Cap on physics steps per tick; time beyond it is dropped
    pub fn with_max_substeps(mut self, max_substeps: usize) -> Self {
        self.max_substeps = max_substeps.max(1);
        self
    }

    /// Consume elapsed time in fixed steps, then paint the current state
    pub fn tick<T, S>(&mut self, clock: &mut T, sink: &mut S) -> Result<TickReport, SimError>
    where
        T: TimeSource + ?Sized,
        S: RenderSink + ?Sized,
    {
        let elapsed = clock.elapsed_seconds();
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let mut report = TickReport::default();
        while self.accumulator >= self.dt {
            if report.steps == self.max_substeps {
                report.dropped_steps = (self.accumulator / self.dt) as usize;
                log::warn!(
                    "falling behind, dropping {} physics steps",
                    report.dropped_steps
                );
                self.accumulator = 0.0;
                break;
            }
            let step = self.simulator.step(self.dt)?;
            self.accumulator -= self.dt;
            report.steps += 1;
            report.physics += step;
        }

        paint(self.simulator.bodies(), sink);
        Ok(report)
    }
}
