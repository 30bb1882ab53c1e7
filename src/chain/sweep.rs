//! Transfer-curve sampling over a swept input voltage.
//!
//! The sweep is indexed by an integer step count rather than by
//! accumulating `step` into a float, so `0..=5 V` in `0.1 V` steps yields
//! exactly 51 points and lands on both endpoints.

use crate::error::{ChainError, Result};

use super::{DeviceConfig, SignalChain, SimulationInput};
use crate::components::AdcCode;

/// Default sweep increment in volts.
pub const DEFAULT_STEP: f64 = 0.1;

/// Slack for `(stop - start) / step` landing just under an integer.
const STEP_COUNT_EPSILON: f64 = 1e-9;

/// Upper bound on the number of points in one sweep.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Inclusive input-voltage range for a sweep.
///
/// Only constructible through [`SweepRange::new`] or
/// [`SweepRange::full_scale`], so the point count is always bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    start: f64,
    stop: f64,
    step: f64,
    len: usize,
}

impl SweepRange {
    /// Create a range, checking that it describes a finite, forward sweep
    /// of at most [`MAX_SWEEP_POINTS`] points.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(ChainError::invalid_sweep("bounds and step must be finite"));
        }
        if step <= 0.0 {
            return Err(ChainError::invalid_sweep(format!(
                "step must be positive, got {step}"
            )));
        }
        if stop < start {
            return Err(ChainError::invalid_sweep(format!(
                "stop ({stop}) is below start ({start})"
            )));
        }

        let steps = ((stop - start) / step + STEP_COUNT_EPSILON).floor();
        if !steps.is_finite() || steps >= MAX_SWEEP_POINTS as f64 {
            return Err(ChainError::invalid_sweep(format!(
                "{start}..={stop} in steps of {step} exceeds {MAX_SWEEP_POINTS} points"
            )));
        }

        Ok(Self {
            start,
            stop,
            step,
            len: steps as usize + 1,
        })
    }

    /// `0..=v_ref` in 0.1 V steps.
    ///
    /// Fails when the configured reference is not a usable upper bound.
    pub fn full_scale(config: &DeviceConfig) -> Result<Self> {
        Self::new(0.0, config.reference_voltage(), DEFAULT_STEP)
    }

    /// First sampled voltage.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Last voltage of the range, inclusive.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Increment between samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of sampled points, both endpoints included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A range always holds at least its start point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Voltage of the `index`-th sample.
    pub fn voltage_at(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }
}

/// One sample of the transfer curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    /// Input voltage formatted to one decimal place
    pub label: String,
    pub input_voltage: f64,
    pub code: AdcCode,
}

/// Lazy, replayable iterator over a transfer curve.
///
/// Clone it to restart from the first point.
#[derive(Debug, Clone)]
pub struct TransferCurve {
    chain: SignalChain,
    common_mode_voltage: f64,
    range: SweepRange,
    next: usize,
    len: usize,
}

impl TransferCurve {
    /// Plan a sweep at a fixed common-mode voltage.
    pub fn new(config: &DeviceConfig, common_mode_voltage: f64, range: SweepRange) -> Self {
        let len = range.len();
        log::debug!(
            "sweep: vcom={common_mode_voltage} {}..={} step {} ({len} points)",
            range.start(),
            range.stop(),
            range.step()
        );
        Self {
            chain: SignalChain::new(config),
            common_mode_voltage,
            range,
            next: 0,
            len,
        }
    }

    /// The range being swept.
    pub fn range(&self) -> &SweepRange {
        &self.range
    }

    fn point(&self, index: usize) -> CurvePoint {
        let input_voltage = self.range.voltage_at(index);
        let result = self
            .chain
            .simulate(SimulationInput::new(self.common_mode_voltage, input_voltage));
        CurvePoint {
            label: format!("{input_voltage:.1}"),
            input_voltage,
            code: result.code,
        }
    }
}

impl Iterator for TransferCurve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.next >= self.len {
            return None;
        }
        let point = self.point(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TransferCurve {}

/// Sample the transfer curve at a fixed common-mode voltage.
pub fn sweep(config: &DeviceConfig, common_mode_voltage: f64, range: SweepRange) -> TransferCurve {
    TransferCurve::new(config, common_mode_voltage, range)
}
