//! Text output for the CLI frontend.
//!
//! Writers take any [`Write`] so the same formatting serves stdout and tests.

use std::io::Write;

use crate::chain::{CurvePoint, SimulationInput, SimulationResult};
use crate::error::Result;

/// Write the result block for one operating point.
pub fn write_result<W: Write>(
    out: &mut W,
    input: &SimulationInput,
    result: &SimulationResult,
) -> Result<()> {
    writeln!(out, "VCOM           {:.2} V", input.common_mode_voltage)?;
    writeln!(out, "Vin            {:.2} V", input.input_voltage)?;
    writeln!(out, "IN-            {:.4} V", result.output_minus)?;
    writeln!(out, "IN+            {:.4} V", result.output_plus)?;
    writeln!(out, "Differential   {:.4} V", result.differential_voltage)?;
    writeln!(out, "Decimal        {}", result.decimal())?;
    writeln!(out, "Hexadecimal    {}", result.hex())?;
    writeln!(out, "Binary         {}", result.binary())?;
    writeln!(out, "Signed         {}", result.code.signed())?;
    Ok(())
}

/// Write a transfer curve as tab-separated `label<TAB>code` lines.
pub fn write_curve<W, I>(out: &mut W, points: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = CurvePoint>,
{
    writeln!(out, "vin\tcode")?;
    for point in points {
        writeln!(out, "{}\t{}", point.label, point.code)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{simulate, sweep, DeviceConfig, SweepRange};

    #[test]
    fn test_result_block() {
        let input = SimulationInput::new(2.5, 5.0);
        let result = simulate(&DeviceConfig::default(), input);

        let mut buf = Vec::new();
        write_result(&mut buf, &input, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("IN-            0.0000 V"));
        assert!(text.contains("IN+            5.0000 V"));
        assert!(text.contains("Decimal        131071"));
        assert!(text.contains("Hexadecimal    0x1FFFF"));
        assert!(text.contains("Binary         011111111111111111"));
        assert!(text.contains("Signed         131071"));
    }

    #[test]
    fn test_curve_lines() {
        let config = DeviceConfig::default();
        let range = SweepRange::new(2.4, 2.6, 0.1).unwrap();

        let mut buf = Vec::new();
        write_curve(&mut buf, sweep(&config, 2.5, range)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "vin\tcode");
        assert!(lines[1].starts_with("2.4\t"));
        assert!(lines[3].starts_with("2.6\t"));
    }
}
