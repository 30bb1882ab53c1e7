//! Component models for the two stages of the signal chain.
//!
//! - [`amplifier`]: fully differential driver amplifier (AD8475)
//! - [`adc`]: 18-bit bipolar SAR ADC quantizer (AD7691)
//! - [`code`]: the ADC output word and its renderings

pub mod adc;
pub mod amplifier;
pub mod code;

pub use adc::{AdcParams, SarAdc, MAX_NEGATIVE_CODE, MAX_POSITIVE_CODE, MIN_NEGATIVE_CODE};
pub use amplifier::{AmplifierParams, DifferentialAmplifier, DifferentialOutput};
pub use code::{AdcCode, CODE_BITS, CODE_COUNT};
