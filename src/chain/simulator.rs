//! The amplifier-to-ADC transfer function.

use crate::components::{AdcCode, DifferentialAmplifier, SarAdc};

use super::DeviceConfig;

/// Caller-supplied operating point.
///
/// Values outside `0..=v_ref` are accepted and extrapolated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    /// Amplifier output common-mode voltage (VOCM)
    pub common_mode_voltage: f64,
    /// Single-ended voltage on the amplifier's +IN pin
    pub input_voltage: f64,
}

impl SimulationInput {
    pub fn new(common_mode_voltage: f64, input_voltage: f64) -> Self {
        Self {
            common_mode_voltage,
            input_voltage,
        }
    }
}

/// Everything observable about one conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Amplifier OUT- / ADC IN-
    pub output_minus: f64,
    /// Amplifier OUT+ / ADC IN+
    pub output_plus: f64,
    /// `output_plus - output_minus`
    pub differential_voltage: f64,
    /// Quantized output word
    pub code: AdcCode,
}

impl SimulationResult {
    /// Decimal output code.
    pub fn decimal(&self) -> u32 {
        self.code.value()
    }

    /// Code rendered as `0x` plus five uppercase hex digits.
    pub fn hex(&self) -> String {
        self.code.to_hex()
    }

    /// Code rendered as eighteen binary digits.
    pub fn binary(&self) -> String {
        self.code.to_binary()
    }
}

/// The two-stage signal chain built from a [`DeviceConfig`].
///
/// Holds no state besides the stage models, so one chain can serve any
/// number of callers.
#[derive(Debug, Clone)]
pub struct SignalChain {
    amplifier: DifferentialAmplifier,
    adc: SarAdc,
}

impl SignalChain {
    /// Build the stages for a device configuration.
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            amplifier: DifferentialAmplifier::new(config.amplifier.clone(), config.adc.v_ref),
            adc: SarAdc::new(config.adc.clone()),
        }
    }

    /// Run one conversion.
    pub fn simulate(&self, input: SimulationInput) -> SimulationResult {
        let out = self
            .amplifier
            .drive(input.input_voltage, input.common_mode_voltage);
        let differential_voltage = out.differential();

        SimulationResult {
            output_minus: out.minus,
            output_plus: out.plus,
            differential_voltage,
            code: self.adc.convert(differential_voltage),
        }
    }

    /// Amplifier stage.
    pub fn amplifier(&self) -> &DifferentialAmplifier {
        &self.amplifier
    }

    /// ADC stage.
    pub fn adc(&self) -> &SarAdc {
        &self.adc
    }
}

/// Simulate one operating point of the signal chain.
pub fn simulate(config: &DeviceConfig, input: SimulationInput) -> SimulationResult {
    SignalChain::new(config).simulate(input)
}
