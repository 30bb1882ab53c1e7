//! The amplifier/ADC signal chain.
//!
//! ```text
//!            +-----------+  OUT+    +----------+
//!  Vin ----->| +IN       |--------->| IN+      |
//!  GND ----->| -IN  AMP  |          |   ADC    |----> 18-bit code
//!  Vcm ----->| VOCM      |--------->| IN-      |
//!            +-----------+  OUT-    +----------+
//! ```
//!
//! [`simulate`] evaluates one operating point; [`sweep`] samples the
//! transfer curve over a range of input voltages at a fixed common-mode
//! voltage. Both are pure: the same arguments always give the same output.

mod config;
mod simulator;
mod sweep;

pub use config::DeviceConfig;
pub use simulator::{simulate, SignalChain, SimulationInput, SimulationResult};
pub use sweep::{sweep, CurvePoint, SweepRange, TransferCurve, DEFAULT_STEP, MAX_SWEEP_POINTS};
