//! Fixed-step scheduling.
//!
//! Callers report elapsed wall-clock time; the scheduler turns it into a
//! whole number of simulation ticks at a fixed rate. Leftover time below
//! one period stays in the accumulator for the next call, so pacing is
//! exact over the long run regardless of how `dt` is sliced.

use log::warn;
use smallvec::SmallVec;

use crate::config::{ConfigError, SchedulerConfig};

/// Something that advances in discrete ticks.
pub trait Simulation {
    /// What one tick reports.
    type Outcome;

    /// Whether no further ticks will do anything.
    fn is_done(&self) -> bool;

    /// Execute one tick.
    fn tick(&mut self) -> Self::Outcome;
}

/// Result of one [`FixedStepScheduler::advance`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvanceReport<O> {
    /// Ticks executed.
    pub ticks: u32,
    /// Outcome of each executed tick, oldest first.
    pub outcomes: SmallVec<[O; 4]>,
    /// Whether the tick cap stopped the call with a backlog left over.
    pub throttled: bool,
}

impl<O> AdvanceReport<O> {
    fn empty() -> Self {
        Self {
            ticks: 0,
            outcomes: SmallVec::new(),
            throttled: false,
        }
    }
}

/// Converts elapsed time into fixed-rate ticks of a [`Simulation`].
#[derive(Clone, Debug)]
pub struct FixedStepScheduler {
    config: SchedulerConfig,
    period: f64,
    accumulator: f64,
}

impl FixedStepScheduler {
    /// Create a scheduler with an empty accumulator.
    pub fn new(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let period = config.tick_period();
        Ok(Self {
            config,
            period,
            accumulator: 0.0,
        })
    }

    /// Add `dt` seconds and run every tick now due.
    ///
    /// Stops early when `sim` reports done, leaving the remaining time in
    /// the accumulator, or when `max_ticks_per_advance` is reached.
    /// Negative or non-finite `dt` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeworks_engine::{FixedStepScheduler, SchedulerConfig, Simulation};
    ///
    /// struct Counter(u32);
    /// impl Simulation for Counter {
    ///     type Outcome = ();
    ///     fn is_done(&self) -> bool { false }
    ///     fn tick(&mut self) { self.0 += 1; }
    /// }
    ///
    /// let mut sched = FixedStepScheduler::new(SchedulerConfig::default()).unwrap();
    /// let mut sim = Counter(0);
    /// assert_eq!(sched.advance(1.0, &mut sim).ticks, 30);
    /// assert_eq!(sim.0, 30);
    /// ```
    pub fn advance<S: Simulation>(&mut self, dt: f64, sim: &mut S) -> AdvanceReport<S::Outcome> {
        let mut report = AdvanceReport::empty();
        if !dt.is_finite() || dt < 0.0 {
            warn!("ignoring invalid frame time {dt}");
            return report;
        }
        self.accumulator += dt;

        while self.accumulator >= self.period && !sim.is_done() {
            if let Some(cap) = self.config.max_ticks_per_advance {
                if report.ticks >= cap {
                    report.throttled = true;
                    break;
                }
            }
            report.outcomes.push(sim.tick());
            report.ticks += 1;
            self.accumulator -= self.period;
        }
        report
    }

    /// Unspent time in seconds.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Seconds per tick.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Whole ticks already due but not yet run.
    pub fn backlog(&self) -> u64 {
        (self.accumulator / self.period) as u64
    }

    /// The pacing configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Drop any accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
