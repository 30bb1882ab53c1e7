//! 18-bit bipolar SAR ADC quantizer (AD7691-style).
//!
//! The converter measures `IN+ - IN-` against a full-scale range equal to
//! the reference voltage and outputs a two's-complement word:
//!
//! | Differential input | Code      |
//! |--------------------|-----------|
//! | `+FSR - 1 LSB`     | `0x1FFFF` |
//! | `0 V`              | `0x00000` |
//! | `0 V - 1 LSB`      | `0x3FFFF` |
//! | `-FSR`             | `0x20000` |
//!
//! Each half of the range is mapped linearly onto its half of code space,
//! so the positive and negative branches use slightly different step sizes
//! and the transfer curve jumps from `0x00000` to `0x3FFFF` at zero.

use super::code::AdcCode;

/// Highest code of the positive branch (`+FSR - 1 LSB`).
pub const MAX_POSITIVE_CODE: u32 = 0x1FFFF;

/// Code at negative full scale (`-FSR`), where the negative branch saturates.
pub const MIN_NEGATIVE_CODE: u32 = 0x20000;

/// Code one LSB below zero.
pub const MAX_NEGATIVE_CODE: u32 = 0x3FFFF;

/// Parameters for the ADC.
#[derive(Debug, Clone, PartialEq)]
pub struct AdcParams {
    /// Reference voltage, equal to the full-scale range magnitude
    pub v_ref: f64,
    /// Digital supply (display only)
    pub vdd: f64,
}

impl Default for AdcParams {
    fn default() -> Self {
        Self::ad7691()
    }
}

impl AdcParams {
    /// AD7691 with a 5 V reference.
    pub fn ad7691() -> Self {
        Self {
            v_ref: 5.0,
            vdd: 4.9975,
        }
    }

    /// Set the reference voltage.
    pub fn with_reference(mut self, v_ref: f64) -> Self {
        self.v_ref = v_ref;
        self
    }

    /// Voltage of one LSB on the positive branch, `FSR / 2^17`.
    pub fn lsb(&self) -> f64 {
        self.v_ref / (MIN_NEGATIVE_CODE as f64)
    }
}

/// A successive-approximation ADC reduced to its static transfer function.
#[derive(Debug, Clone)]
pub struct SarAdc {
    pub params: AdcParams,
}

impl SarAdc {
    /// Create a new converter.
    pub fn new(params: AdcParams) -> Self {
        Self { params }
    }

    /// Full-scale range in volts.
    pub fn full_scale(&self) -> f64 {
        self.params.v_ref
    }

    /// Quantize a differential input voltage.
    ///
    /// Never fails: voltages beyond `±FSR` saturate at `0x1FFFF` / `0x20000`.
    pub fn convert(&self, v_diff: f64) -> AdcCode {
        let fsr = self.full_scale();

        let raw = if v_diff >= 0.0 {
            let scaled = (v_diff / fsr * MAX_POSITIVE_CODE as f64).round();
            (scaled as u32).min(MAX_POSITIVE_CODE)
        } else if v_diff.is_nan() {
            0
        } else {
            let magnitude = v_diff.abs();
            if magnitude >= fsr {
                MIN_NEGATIVE_CODE
            } else {
                let ratio = magnitude / fsr;
                let span = (MAX_NEGATIVE_CODE - MIN_NEGATIVE_CODE) as f64;
                MAX_NEGATIVE_CODE - (ratio * span).round() as u32
            }
        };

        log::trace!("convert: v_diff={v_diff} -> {raw:#07X}");

        AdcCode::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn adc() -> SarAdc {
        SarAdc::new(AdcParams::ad7691())
    }

    #[test]
    fn test_zero_and_just_below_zero() {
        assert_eq!(adc().convert(0.0).value(), 0);
        assert_eq!(adc().convert(-0.0).value(), 0);
        assert_eq!(adc().convert(-1e-15).value(), MAX_NEGATIVE_CODE);
        assert_eq!(adc().convert(1e-15).value(), 0);
    }

    #[test]
    fn test_positive_saturation() {
        let adc = adc();
        assert_eq!(adc.convert(5.0).value(), MAX_POSITIVE_CODE);
        assert_eq!(adc.convert(7.5).value(), MAX_POSITIVE_CODE);
        assert_eq!(adc.convert(f64::INFINITY).value(), MAX_POSITIVE_CODE);
    }

    #[test]
    fn test_negative_saturation() {
        let adc = adc();
        assert_eq!(adc.convert(-5.0).value(), MIN_NEGATIVE_CODE);
        assert_eq!(adc.convert(-12.0).value(), MIN_NEGATIVE_CODE);
        assert_eq!(adc.convert(f64::NEG_INFINITY).value(), MIN_NEGATIVE_CODE);
    }

    #[test]
    fn test_interior_points() {
        let adc = adc();
        // 1.0 / 5.0 * 131071 = 26214.2
        assert_eq!(adc.convert(1.0).value(), 26214);
        // 2.5 / 5.0 * 131071 = 65535.5, rounds up
        assert_eq!(adc.convert(2.5).value(), 65536);
        // 262143 - round(0.2 * 131071)
        assert_eq!(adc.convert(-1.0).value(), 235929);
        assert_eq!(adc.convert(-3.0).value(), 183500);
    }

    #[test]
    fn test_nan_maps_to_zero() {
        assert_eq!(adc().convert(f64::NAN).value(), 0);
    }

    #[test]
    fn test_lsb() {
        assert_relative_eq!(AdcParams::ad7691().lsb(), 5.0 / 131072.0);
        assert_relative_eq!(AdcParams::ad7691().with_reference(4.096).lsb(), 3.125e-5);
    }
}
