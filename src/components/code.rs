//! The 18-bit ADC output word and its textual renderings.

use std::fmt;

use crate::error::{ChainError, Result};

/// Output word width in bits.
pub const CODE_BITS: u32 = 18;

/// Number of distinct output codes (`2^18`).
pub const CODE_COUNT: u32 = 1 << CODE_BITS;

const HEX_DIGITS: usize = 5;
const SIGN_BIT: u32 = 1 << (CODE_BITS - 1);

/// An 18-bit ADC output code, always in `0..=0x3FFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AdcCode(u32);

impl AdcCode {
    /// Create a code, rejecting values wider than 18 bits.
    pub fn new(value: u32) -> Result<Self> {
        if value >= CODE_COUNT {
            return Err(ChainError::invalid_code(
                value.to_string(),
                format!("exceeds {CODE_BITS}-bit range"),
            ));
        }
        Ok(Self(value))
    }

    /// Wrap a value the quantizer has already bounded.
    pub(crate) fn from_raw(value: u32) -> Self {
        debug_assert!(value < CODE_COUNT);
        Self(value & (CODE_COUNT - 1))
    }

    /// The unsigned code.
    pub fn value(self) -> u32 {
        self.0
    }

    /// The code read as an 18-bit two's-complement integer.
    ///
    /// `0x1FFFF` is `+131071`, `0x20000` is `-131072`, `0x3FFFF` is `-1`.
    pub fn signed(self) -> i32 {
        if self.0 & SIGN_BIT != 0 {
            self.0 as i32 - CODE_COUNT as i32
        } else {
            self.0 as i32
        }
    }

    /// `0x` followed by five uppercase, zero-padded hex digits.
    pub fn to_hex(self) -> String {
        format!("0x{:0width$X}", self.0, width = HEX_DIGITS)
    }

    /// Eighteen zero-padded binary digits.
    pub fn to_binary(self) -> String {
        format!("{:0width$b}", self.0, width = CODE_BITS as usize)
    }

    /// Parse a hex rendering. The `0x` prefix is optional, case is ignored.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty()
            || digits.len() > HEX_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ChainError::invalid_code(
                s,
                format!("expected 1 to {HEX_DIGITS} hex digits"),
            ));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| ChainError::invalid_code(s, e.to_string()))?;
        Self::new(value).map_err(|_| ChainError::invalid_code(s, "exceeds 18-bit range"))
    }

    /// Parse a binary rendering of at most 18 digits.
    pub fn from_binary(s: &str) -> Result<Self> {
        if s.is_empty()
            || s.len() > CODE_BITS as usize
            || !s.bytes().all(|b| matches!(b, b'0' | b'1'))
        {
            return Err(ChainError::invalid_code(
                s,
                format!("expected 1 to {CODE_BITS} binary digits"),
            ));
        }
        let value =
            u32::from_str_radix(s, 2).map_err(|e| ChainError::invalid_code(s, e.to_string()))?;
        Ok(Self(value))
    }
}

impl fmt::Display for AdcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AdcCode> for u32 {
    fn from(code: AdcCode) -> Self {
        code.0
    }
}

impl TryFrom<u32> for AdcCode {
    type Error = ChainError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderings_of_landmark_codes() {
        let max_pos = AdcCode::new(0x1FFFF).unwrap();
        assert_eq!(max_pos.to_hex(), "0x1FFFF");
        assert_eq!(max_pos.to_binary(), "011111111111111111");

        let zero = AdcCode::new(0).unwrap();
        assert_eq!(zero.to_hex(), "0x00000");
        assert_eq!(zero.to_binary(), "000000000000000000");

        let min_neg = AdcCode::new(0x20000).unwrap();
        assert_eq!(min_neg.to_hex(), "0x20000");
        assert_eq!(min_neg.to_binary(), "100000000000000000");

        assert_eq!(AdcCode::new(0xABC).unwrap().to_hex(), "0x00ABC");
    }

    #[test]
    fn test_every_code_round_trips() {
        for value in 0..CODE_COUNT {
            let code = AdcCode::new(value).unwrap();
            let hex = code.to_hex();
            let bin = code.to_binary();

            assert_eq!(hex.len(), 2 + 5);
            assert_eq!(bin.len(), 18);
            assert_eq!(AdcCode::from_hex(&hex).unwrap(), code);
            assert_eq!(AdcCode::from_binary(&bin).unwrap(), code);
        }
    }

    #[test]
    fn test_signed_interpretation() {
        assert_eq!(AdcCode::new(0).unwrap().signed(), 0);
        assert_eq!(AdcCode::new(0x1FFFF).unwrap().signed(), 131071);
        assert_eq!(AdcCode::new(0x20000).unwrap().signed(), -131072);
        assert_eq!(AdcCode::new(0x3FFFF).unwrap().signed(), -1);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(AdcCode::new(CODE_COUNT).is_err());
        assert!(AdcCode::try_from(0x40000u32).is_err());
        assert!(AdcCode::from_hex("0x40000").is_err());
        assert!(AdcCode::from_hex("0x100000").is_err());
        assert!(AdcCode::from_hex("0x").is_err());
        assert!(AdcCode::from_hex("0xZZ").is_err());
        assert!(AdcCode::from_binary("1000000000000000000").is_err());
        assert!(AdcCode::from_binary("012").is_err());
    }

    #[test]
    fn test_rejects_signs_and_stray_characters() {
        for input in ["0x+1FFF", "+1FFFF", "-1", "0x-1", " 1F", "0x1F "] {
            assert!(AdcCode::from_hex(input).is_err(), "hex {input:?}");
        }
        for input in ["+1", "-1", "+01", "1 0", "0b1"] {
            assert!(AdcCode::from_binary(input).is_err(), "binary {input:?}");
        }
    }

    #[test]
    fn test_hex_prefix_and_case_are_lenient() {
        assert_eq!(AdcCode::from_hex("1ffff").unwrap().value(), 0x1FFFF);
        assert_eq!(AdcCode::from_hex("0X3FFFF").unwrap().value(), 0x3FFFF);
    }

    #[test]
    fn test_display_is_decimal() {
        assert_eq!(AdcCode::new(131072).unwrap().to_string(), "131072");
    }
}
