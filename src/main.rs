//! ad7691 - AD8475 + AD7691 signal-chain simulator
//!
//! # Usage
//!
//! ```bash
//! ad7691 simulate --vcom 2.5 --vin 3.3
//! ad7691 sweep --vcom 2.5 --step 0.05 > curve.tsv
//! ad7691 -vv sweep --vcom 2.5            # debug logging on stderr
//! ```
//!
//! `RUST_LOG` overrides the level chosen with `-v`.

use std::io;

use ad7691_core::{
    chain::{simulate, sweep, DeviceConfig, SimulationInput, SweepRange, DEFAULT_STEP},
    error::Result,
    report,
};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

/// Simulate an AD8475 differential amplifier driving an AD7691 18-bit ADC
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single input voltage
    Simulate {
        /// Amplifier output common-mode voltage in volts
        #[arg(long, default_value_t = 2.5)]
        vcom: f64,

        /// Voltage on the amplifier's +IN pin in volts
        #[arg(long, default_value_t = 2.5)]
        vin: f64,

        #[command(flatten)]
        device: DeviceArgs,
    },

    /// Print the transfer curve as tab-separated values
    Sweep {
        /// Amplifier output common-mode voltage in volts
        #[arg(long, default_value_t = 2.5)]
        vcom: f64,

        /// First input voltage (volts)
        #[arg(long, default_value_t = 0.0)]
        start: f64,

        /// Last input voltage, inclusive (defaults to the reference voltage)
        #[arg(long)]
        stop: Option<f64>,

        /// Input voltage increment (volts)
        #[arg(long, default_value_t = DEFAULT_STEP)]
        step: f64,

        #[command(flatten)]
        device: DeviceArgs,
    },
}

#[derive(Args, Debug)]
struct DeviceArgs {
    /// ADC reference voltage (full-scale range) in volts
    #[arg(long, default_value_t = 5.0)]
    vref: f64,

    /// Amplifier gain
    #[arg(long, default_value_t = 0.8)]
    gain: f64,
}

impl DeviceArgs {
    fn into_config(self) -> Result<DeviceConfig> {
        let config = DeviceConfig::new()
            .with_reference_voltage(self.vref)
            .with_gain(self.gain);
        config.validate()?;
        Ok(config)
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Simulate { vcom, vin, device } => {
            let config = device.into_config()?;
            let input = SimulationInput::new(vcom, vin);
            let result = simulate(&config, input);
            report::write_result(&mut stdout, &input, &result)?;
        }
        Command::Sweep {
            vcom,
            start,
            stop,
            step,
            device,
        } => {
            let config = device.into_config()?;
            let stop = stop.unwrap_or_else(|| config.reference_voltage());
            let range = SweepRange::new(start, stop, step)?;
            report::write_curve(&mut stdout, sweep(&config, vcom, range))?;
        }
    }

    Ok(())
}
