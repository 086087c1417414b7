//! Ledger symbol types with exact raw encoding
//!
//! A [`SymbolCode`] packs up to seven uppercase letters into a `u64`, one byte
//! per character starting at the least significant byte. A [`Symbol`] adds the
//! decimal precision in the low byte: `raw = code << 8 | precision`.
//!
//! Pool tables are keyed by `SymbolCode::raw()`, so the packing here must match
//! the ledger bit for bit.
//!
//! ```rust
//! use types::{Symbol, SymbolCode};
//!
//! let code: SymbolCode = "ABC".parse().unwrap();
//! assert_eq!(code.raw(), 0x43_42_41);
//!
//! let sym: Symbol = "4,ABC".parse().unwrap();
//! assert_eq!(sym.precision(), 4);
//! assert_eq!(sym.to_string(), "4,ABC");
//! ```

use crate::common::errors::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::name::AccountName;

/// Maximum number of characters in a symbol code
pub const MAX_CODE_LEN: usize = 7;

/// Maximum number of decimal places a symbol may carry
pub const MAX_PRECISION: u8 = 18;

/// Packed symbol code (up to seven `A`-`Z` characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode(u64);

impl SymbolCode {
    /// Validate and pack a code string
    pub fn new(code: &str) -> Result<Self, SymbolError> {
        if code.is_empty() {
            return Err(SymbolError::EmptyCode);
        }
        if code.len() > MAX_CODE_LEN {
            return Err(SymbolError::CodeTooLong {
                code: code.to_string(),
                max: MAX_CODE_LEN,
            });
        }

        let mut raw = 0u64;
        for (i, c) in code.chars().enumerate() {
            if !c.is_ascii_uppercase() {
                return Err(SymbolError::InvalidCharacter {
                    code: code.to_string(),
                    found: c,
                });
            }
            raw |= (c as u64) << (8 * i);
        }

        Ok(Self(raw))
    }

    /// Raw packed value used as the pool table key
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Rebuild from a raw packed value, validating every byte
    pub fn from_raw(raw: u64) -> Result<Self, SymbolError> {
        let code: String = raw
            .to_le_bytes()
            .iter()
            .take_while(|b| **b != 0)
            .map(|b| *b as char)
            .collect();
        let code = Self::new(&code)?;
        if code.0 != raw {
            // Bytes after the first zero were non-zero
            return Err(SymbolError::InvalidFormat(format!("{raw:#x}")));
        }
        Ok(code)
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.to_le_bytes().iter().take_while(|b| **b != 0) {
            write!(f, "{}", *byte as char)?;
        }
        Ok(())
    }
}

impl FromStr for SymbolCode {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SymbolCode> for String {
    fn from(code: SymbolCode) -> Self {
        code.to_string()
    }
}

/// Symbol code plus decimal precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    code: SymbolCode,
    precision: u8,
}

impl Symbol {
    /// Build a symbol from a precision and a code string
    pub fn new(precision: u8, code: &str) -> Result<Self, SymbolError> {
        Self::from_parts(precision, SymbolCode::new(code)?)
    }

    /// Build a symbol from an already validated code
    pub fn from_parts(precision: u8, code: SymbolCode) -> Result<Self, SymbolError> {
        if precision > MAX_PRECISION {
            return Err(SymbolError::PrecisionTooLarge {
                precision,
                max: MAX_PRECISION,
            });
        }
        Ok(Self { code, precision })
    }

    pub const fn code(self) -> SymbolCode {
        self.code
    }

    pub const fn precision(self) -> u8 {
        self.precision
    }

    /// Raw ledger value: `code << 8 | precision`
    pub const fn raw(self) -> u64 {
        (self.code.raw() << 8) | self.precision as u64
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (precision, code) = s
            .split_once(',')
            .ok_or_else(|| SymbolError::InvalidFormat(s.to_string()))?;
        let precision: u8 = precision
            .trim()
            .parse()
            .map_err(|_| SymbolError::InvalidFormat(s.to_string()))?;
        Self::new(precision, code.trim())
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}

/// Symbol qualified by the account that issues it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtendedSymbol {
    pub symbol: Symbol,
    pub contract: AccountName,
}

impl ExtendedSymbol {
    pub const fn new(symbol: Symbol, contract: AccountName) -> Self {
        Self { symbol, contract }
    }
}

impl fmt::Display for ExtendedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.contract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_code_raw_packing() {
        let code = SymbolCode::new("SOV").unwrap();
        // 'S' = 0x53, 'O' = 0x4F, 'V' = 0x56, low byte first
        assert_eq!(code.raw(), 0x56_4F_53);
        assert_eq!(code.to_string(), "SOV");
    }

    #[test]
    fn test_symbol_code_max_length() {
        let code = SymbolCode::new("ABCDEFG").unwrap();
        assert_eq!(code.to_string(), "ABCDEFG");
        assert_eq!(code.raw() >> 48, 'G' as u64);

        assert!(matches!(
            SymbolCode::new("ABCDEFGH"),
            Err(SymbolError::CodeTooLong { .. })
        ));
    }

    #[test]
    fn test_symbol_code_rejects_invalid_input() {
        assert_eq!(SymbolCode::new(""), Err(SymbolError::EmptyCode));
        assert!(matches!(
            SymbolCode::new("abc"),
            Err(SymbolError::InvalidCharacter { found: 'a', .. })
        ));
        assert!(matches!(
            SymbolCode::new("A1"),
            Err(SymbolError::InvalidCharacter { found: '1', .. })
        ));
    }

    #[test]
    fn test_symbol_code_from_raw() {
        let code = SymbolCode::new("EOS").unwrap();
        assert_eq!(SymbolCode::from_raw(code.raw()).unwrap(), code);
        assert!(SymbolCode::from_raw(0).is_err());
        // Gap between characters
        assert!(SymbolCode::from_raw(0x41_00_41).is_err());
    }

    #[test]
    fn test_symbol_raw_includes_precision() {
        let sym = Symbol::new(4, "SOV").unwrap();
        assert_eq!(sym.raw(), (0x56_4F_53 << 8) | 4);
        assert_eq!(sym.code().raw(), 0x56_4F_53);
    }

    #[test]
    fn test_symbol_parse_and_display() {
        let sym: Symbol = "8,BTC".parse().unwrap();
        assert_eq!(sym.precision(), 8);
        assert_eq!(sym.code().to_string(), "BTC");
        assert_eq!(sym.to_string(), "8,BTC");

        assert!("BTC".parse::<Symbol>().is_err());
        assert!("x,BTC".parse::<Symbol>().is_err());
        assert!(matches!(
            "19,BTC".parse::<Symbol>(),
            Err(SymbolError::PrecisionTooLarge { precision: 19, .. })
        ));
    }

    #[test]
    fn test_symbol_equality_needs_matching_precision() {
        let a = Symbol::new(4, "ABC").unwrap();
        let b = Symbol::new(6, "ABC").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.code(), b.code());
    }

    #[test]
    fn test_symbol_serde_as_text() {
        let sym = Symbol::new(4, "ABC").unwrap();
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"4,ABC\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sym);

        assert!(serde_json::from_str::<Symbol>("\"4,abc\"").is_err());
    }

    #[test]
    fn test_extended_symbol_display() {
        let ext = ExtendedSymbol::new(
            Symbol::new(4, "BASE").unwrap(),
            "basetoken".parse().unwrap(),
        );
        assert_eq!(ext.to_string(), "4,BASE@basetoken");
    }
}
