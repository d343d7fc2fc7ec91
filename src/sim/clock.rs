//! Fixed-step clock
//!
//! Converts variable frame deltas from the display loop into a whole number
//! of simulation ticks, so gameplay speed does not depend on refresh rate.

use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS, SIM_DT};

/// Accumulates wall-clock time and hands out fixed ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    /// Seconds per tick
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

/// Fraction of a step a frame may fall short and still count as a full tick
///
/// Browser frame timestamps are quantized, so at a matching refresh rate the
/// accumulated delta lands a hair under `step` about half the time. Running
/// the tick early and carrying the shortfall as negative time keeps one tick
/// per frame without drifting the long-run rate.
const SNAP_TOLERANCE: f32 = 0.05;

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Build a clock from a tick rate in Hz
    pub fn with_rate(hz: f32) -> Self {
        Self::new(1.0 / hz)
    }

    /// Feed one frame's elapsed seconds, returning how many ticks to run
    ///
    /// Deltas are clamped so a backgrounded tab does not come back to a
    /// burst of catch-up ticks. Time beyond the substep cap is dropped.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_DELTA);

        let threshold = self.step * (1.0 - SNAP_TOLERANCE);
        let mut ticks = 0;
        while self.accumulator >= threshold && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame deltas as a browser reports them: rAF timestamps rounded to 0.1 ms
    fn quantized_deltas(hz: f64, frames: u32) -> Vec<f32> {
        let stamp = |i: u32| (i as f64 * 1000.0 / hz * 10.0).round() / 10.0;
        (1..=frames)
            .map(|i| ((stamp(i) - stamp(i - 1)) / 1000.0) as f32)
            .collect()
    }

    #[test]
    fn test_one_tick_per_refresh_at_matching_rate() {
        let mut clock = FixedStep::with_rate(50.0);
        for _ in 0..50 {
            assert_eq!(clock.advance(0.02), 1);
        }
    }

    #[test]
    fn test_quantized_timestamps_never_stutter() {
        let mut clock = FixedStep::with_rate(60.0);
        for (frame, dt) in quantized_deltas(60.0, 600).into_iter().enumerate() {
            assert_eq!(clock.advance(dt), 1, "frame {} (dt {})", frame, dt);
        }
    }

    #[test]
    fn test_high_refresh_runs_fewer_ticks_per_frame() {
        let mut clock = FixedStep::with_rate(60.0);
        // 120 Hz display for one second
        let ticks: Vec<u32> = quantized_deltas(120.0, 120)
            .into_iter()
            .map(|dt| clock.advance(dt))
            .collect();
        assert!(ticks.iter().all(|&t| t <= 1));
        assert_eq!(ticks.iter().sum::<u32>(), 60);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = FixedStep::with_rate(60.0);
        // 0.1s cap is six ticks
        assert_eq!(clock.advance(5.0), 6);
        assert!(clock.accumulator < clock.step);

        let mut fine = FixedStep::with_rate(240.0);
        assert_eq!(fine.advance(5.0), MAX_SUBSTEPS);
        assert!(fine.accumulator <= fine.step);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.accumulator, 0.0);
    }
}
