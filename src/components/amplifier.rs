//! Fully differential amplifier model (AD8475-style).
//!
//! The single-ended input drives `+IN` while `-IN` is tied to ground. The
//! signal is referenced against a virtual ground at half the ADC reference,
//! scaled by the gain, and split symmetrically around the output
//! common-mode voltage:
//!
//! ```text
//! swing = (Vin - Vref/2) * gain * Vref/2
//! OUT+  = Vcm + swing/2
//! OUT-  = Vcm - swing/2
//! ```
//!
//! With `Vref = 5` and `gain = 0.8`, an input spanning `0..=5 V` produces a
//! differential swing of `±5 V`, which is exactly the ADC's full-scale range.

/// Parameters for a differential amplifier stage.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplifierParams {
    /// Fixed differential gain
    pub gain: f64,
    /// Positive supply rail (display only)
    pub v_supply_pos: f64,
    /// Negative supply rail (display only)
    pub v_supply_neg: f64,
}

impl Default for AmplifierParams {
    fn default() -> Self {
        Self::ad8475()
    }
}

impl AmplifierParams {
    /// AD8475 configured for its 0.8x input pins on a single 5 V supply.
    pub fn ad8475() -> Self {
        Self {
            gain: 0.8,
            v_supply_pos: 5.0,
            v_supply_neg: 0.0,
        }
    }

    /// Set the gain, keeping the supply rails.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Total supply span between the rails.
    pub fn supply_span(&self) -> f64 {
        self.v_supply_pos - self.v_supply_neg
    }
}

/// The two single-ended outputs of the amplifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialOutput {
    /// Voltage on OUT+ (drives ADC IN+)
    pub plus: f64,
    /// Voltage on OUT- (drives ADC IN-)
    pub minus: f64,
}

impl DifferentialOutput {
    /// `OUT+ - OUT-`, computed from the two rendered outputs.
    pub fn differential(&self) -> f64 {
        self.plus - self.minus
    }

    /// Mean of the two outputs.
    pub fn common_mode(&self) -> f64 {
        (self.plus + self.minus) / 2.0
    }
}

/// A differential amplifier stage referenced to a given ADC reference.
#[derive(Debug, Clone)]
pub struct DifferentialAmplifier {
    pub params: AmplifierParams,
    /// Virtual ground of the single-ended input, `Vref / 2`
    pub midpoint: f64,
}

impl DifferentialAmplifier {
    /// Create an amplifier stage for an ADC with reference `v_ref`.
    pub fn new(params: AmplifierParams, v_ref: f64) -> Self {
        Self {
            params,
            midpoint: v_ref / 2.0,
        }
    }

    /// Input voltage relative to the virtual ground.
    pub fn signal_offset(&self, v_in: f64) -> f64 {
        v_in - self.midpoint
    }

    /// Differential swing before splitting around the common-mode voltage.
    pub fn swing(&self, v_in: f64) -> f64 {
        self.signal_offset(v_in) * self.params.gain * self.midpoint
    }

    /// Drive the stage with `v_in` on `+IN` and `v_cm` on `VOCM`.
    ///
    /// No rail limiting is applied; the model extrapolates linearly.
    pub fn drive(&self, v_in: f64, v_cm: f64) -> DifferentialOutput {
        let swing = self.swing(v_in);
        DifferentialOutput {
            plus: v_cm + swing / 2.0,
            minus: v_cm - swing / 2.0,
        }
    }
}
