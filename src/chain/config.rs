//! Device configuration for the signal chain.

use crate::components::{AdcParams, AmplifierParams};
use crate::error::{ChainError, Result};

/// Immutable parameter set for the amplifier/ADC pair.
///
/// Only `adc.v_ref` and `amplifier.gain` enter the transfer function; the
/// supply fields are carried for display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeviceConfig {
    pub adc: AdcParams,
    pub amplifier: AmplifierParams,
}

impl DeviceConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// AD8475 (gain 0.8) driving an AD7691 with a 5 V reference.
    pub fn ad7691_ad8475() -> Self {
        Self {
            adc: AdcParams::ad7691(),
            amplifier: AmplifierParams::ad8475(),
        }
    }

    /// Set the ADC reference voltage (the full-scale range).
    pub fn with_reference_voltage(mut self, v_ref: f64) -> Self {
        self.adc.v_ref = v_ref;
        self
    }

    /// Set the amplifier gain.
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.amplifier.gain = gain;
        self
    }

    /// Reference voltage in volts.
    pub fn reference_voltage(&self) -> f64 {
        self.adc.v_ref
    }

    /// Amplifier gain.
    pub fn gain(&self) -> f64 {
        self.amplifier.gain
    }

    /// Check that the parameters feeding the transfer function are usable.
    pub fn validate(&self) -> Result<()> {
        for (param, value) in [("v_ref", self.adc.v_ref), ("gain", self.amplifier.gain)] {
            if !value.is_finite() || value <= 0.0 {
                log::warn!("rejecting device config: {param} = {value}");
                return Err(ChainError::invalid_config(param, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_design() {
        let config = DeviceConfig::default();
        assert_eq!(config, DeviceConfig::ad7691_ad8475());
        assert_eq!(config.reference_voltage(), 5.0);
        assert_eq!(config.gain(), 0.8);
        assert_eq!(config.adc.vdd, 4.9975);
        assert_eq!(config.amplifier.v_supply_pos, 5.0);
        assert_eq!(config.amplifier.v_supply_neg, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DeviceConfig::new()
            .with_reference_voltage(4.096)
            .with_gain(0.4);
        assert_eq!(config.reference_voltage(), 4.096);
        assert_eq!(config.gain(), 0.4);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = DeviceConfig::new().with_reference_voltage(0.0).validate();
        assert!(matches!(err, Err(ChainError::InvalidConfig { param: "v_ref", .. })));

        let err = DeviceConfig::new().with_gain(-1.0).validate();
        assert!(matches!(err, Err(ChainError::InvalidConfig { param: "gain", .. })));

        assert!(DeviceConfig::new().with_gain(f64::NAN).validate().is_err());
        assert!(DeviceConfig::new()
            .with_reference_voltage(f64::INFINITY)
            .validate()
            .is_err());
    }
}
