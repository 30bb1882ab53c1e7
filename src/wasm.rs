//! WASM bindings for the signal-chain simulator.
//!
//! The browser page owns the slider state and calls in on every change.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSignalChain } from 'ad7691_core';
//!
//! await init();
//!
//! const chain = new WasmSignalChain(5.0, 0.8);
//! const r = chain.simulate(vcom, inputVoltage);
//! console.log(r.in_minus, r.in_plus, r.decimal, r.hex, r.binary);
//!
//! const labels = chain.sweep_labels(vcom);
//! const codes = chain.sweep_codes(vcom);
//! ```

use wasm_bindgen::prelude::*;

use crate::chain::{sweep, DeviceConfig, SignalChain, SimulationInput, SweepRange};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JavaScript-facing handle on a configured signal chain.
#[wasm_bindgen]
pub struct WasmSignalChain {
    config: DeviceConfig,
    chain: SignalChain,
    range: SweepRange,
}

#[wasm_bindgen]
impl WasmSignalChain {
    /// Create a chain for the given reference voltage and amplifier gain.
    ///
    /// Throws if either value is not finite and positive, or if the
    /// reference is too large to sweep in 0.1 V steps.
    #[wasm_bindgen(constructor)]
    pub fn new(v_ref: f64, gain: f64) -> Result<WasmSignalChain, JsValue> {
        let config = DeviceConfig::new()
            .with_reference_voltage(v_ref)
            .with_gain(gain);
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let range =
            SweepRange::full_scale(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let chain = SignalChain::new(&config);
        Ok(WasmSignalChain {
            config,
            chain,
            range,
        })
    }

    /// Convert one operating point.
    #[wasm_bindgen]
    pub fn simulate(&self, vcom: f64, input_voltage: f64) -> WasmSimulation {
        let r = self
            .chain
            .simulate(SimulationInput::new(vcom, input_voltage));
        WasmSimulation {
            in_minus: r.output_minus,
            in_plus: r.output_plus,
            v_diff: r.differential_voltage,
            decimal: r.decimal(),
            signed: r.code.signed(),
            hex: r.hex(),
            binary: r.binary(),
        }
    }

    /// X-axis labels of the full-scale transfer curve.
    #[wasm_bindgen]
    pub fn sweep_labels(&self, vcom: f64) -> Vec<String> {
        sweep(&self.config, vcom, self.range)
            .map(|p| p.label)
            .collect()
    }

    /// Output codes of the full-scale transfer curve.
    #[wasm_bindgen]
    pub fn sweep_codes(&self, vcom: f64) -> Vec<u32> {
        sweep(&self.config, vcom, self.range)
            .map(|p| p.code.value())
            .collect()
    }

    /// ADC reference voltage.
    #[wasm_bindgen(getter)]
    pub fn v_ref(&self) -> f64 {
        self.config.reference_voltage()
    }

    /// Amplifier gain.
    #[wasm_bindgen(getter)]
    pub fn gain(&self) -> f64 {
        self.config.gain()
    }
}

/// Result of one conversion, flattened for JavaScript.
#[wasm_bindgen]
pub struct WasmSimulation {
    in_minus: f64,
    in_plus: f64,
    v_diff: f64,
    decimal: u32,
    signed: i32,
    hex: String,
    binary: String,
}

#[wasm_bindgen]
impl WasmSimulation {
    #[wasm_bindgen(getter)]
    pub fn in_minus(&self) -> f64 {
        self.in_minus
    }

    #[wasm_bindgen(getter)]
    pub fn in_plus(&self) -> f64 {
        self.in_plus
    }

    #[wasm_bindgen(getter)]
    pub fn v_diff(&self) -> f64 {
        self.v_diff
    }

    #[wasm_bindgen(getter)]
    pub fn decimal(&self) -> u32 {
        self.decimal
    }

    #[wasm_bindgen(getter)]
    pub fn signed(&self) -> i32 {
        self.signed
    }

    #[wasm_bindgen(getter)]
    pub fn hex(&self) -> String {
        self.hex.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn binary(&self) -> String {
        self.binary.clone()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
