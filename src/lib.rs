//! # AD7691 Core
//!
//! Static simulation of an analog front end: an AD8475 fully differential
//! amplifier driving an AD7691 18-bit bipolar SAR ADC.
//!
//! This library provides:
//! - A linear model of the amplifier stage (gain, virtual ground, common mode)
//! - The ADC's two's-complement quantizer with saturation at both ends
//! - Hex/binary rendering of the 18-bit output word
//! - Transfer-curve sampling for plotting
//!
//! ## Architecture
//!
//! - [`components`] - Stage models (amplifier, ADC) and the output code type
//! - [`chain`] - Device configuration, [`simulate`] and [`sweep`]
//! - [`report`] - Text output (CLI only)
//!
//! ## Usage
//!
//! ```
//! use ad7691_core::{simulate, DeviceConfig, SimulationInput};
//!
//! let config = DeviceConfig::default();
//! let result = simulate(&config, SimulationInput::new(2.5, 5.0));
//! assert_eq!(result.hex(), "0x1FFFF");
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! ad7691 simulate --vcom 2.5 --vin 3.3
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmSignalChain } from 'ad7691_core';
//!
//! const chain = new WasmSignalChain(5.0, 0.8);
//! const r = chain.simulate(2.5, 3.3);
//! ```
//!
//! ## Transfer Function
//!
//! For reference `Vref`, gain `G`, common mode `Vcm` and input `Vin`:
//!
//! 1. `swing = (Vin - Vref/2) * G * Vref/2`
//! 2. `IN+ = Vcm + swing/2`, `IN- = Vcm - swing/2`
//! 3. `Vd = IN+ - IN-` is quantized piecewise: `0..FSR` onto
//!    `0x00000..=0x1FFFF`, `-FSR..0` onto `0x20000..=0x3FFFF`.

pub mod chain;
pub mod components;
pub mod error;

#[cfg(feature = "cli")]
pub mod report;

// Re-export main types for convenience
pub use chain::{
    simulate, sweep, CurvePoint, DeviceConfig, SignalChain, SimulationInput, SimulationResult,
    SweepRange, TransferCurve,
};
pub use components::AdcCode;
pub use error::{ChainError, Result};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmSignalChain, WasmSimulation};

/// ADC resolution in bits
pub const RESOLUTION_BITS: u32 = components::CODE_BITS;
