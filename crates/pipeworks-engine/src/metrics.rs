//! Cumulative generation counters.
//!
//! [`GenerationMetrics`] is updated by the growth engine on every tick and
//! reset with it. All counters are cumulative since construction or the
//! last reset.

/// Counters describing a generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationMetrics {
    /// Ticks executed, excluding no-op ticks after completion.
    pub ticks: u64,
    /// Pipe segments written to the grid.
    pub segments_placed: u64,
    /// Successful moves to the next palette color.
    pub color_advances: u64,
    /// Walks that ended with no open neighbour.
    pub stuck_events: u64,
    /// Walks that ended by exceeding the per-color segment cap.
    pub capped_events: u64,
    /// Random coordinates drawn while looking for a new start cell.
    pub reseed_draws: u64,
    /// Reseeds that gave up on random draws and scanned the grid instead.
    pub fallback_scans: u64,
}

impl GenerationMetrics {
    /// Walks ended for any reason.
    pub fn walks_ended(&self) -> u64 {
        self.stuck_events + self.capped_events
    }
}
