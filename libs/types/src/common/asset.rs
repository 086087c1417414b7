//! Fixed-point ledger assets
//!
//! An [`Asset`] is a signed integer amount in the smallest unit of its
//! [`Symbol`], whose precision gives the number of decimal places. Amounts are
//! bounded to `±(2^62 - 1)` like the ledger's own asset type, which leaves
//! headroom for doubling a balance without leaving `i64`.
//!
//! ## Design Principles
//!
//! - **No Precision Loss**: amounts stay scaled integers; `rust_decimal` is used
//!   only at the text boundary
//! - **Symbol Safety**: arithmetic between different symbols is an error
//! - **Checked Arithmetic**: every operation reports overflow instead of wrapping

use crate::common::errors::AssetError;
use crate::common::symbol::Symbol;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest magnitude an asset amount may hold
pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

/// Amount of a specific symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asset {
    amount: i64,
    symbol: Symbol,
}

impl Asset {
    /// Create an asset, rejecting amounts outside the ledger range
    pub fn new(amount: i64, symbol: Symbol) -> Result<Self, AssetError> {
        if !Self::is_amount_within_range(amount as i128) {
            return Err(AssetError::OutOfRange {
                amount: amount as i128,
            });
        }
        Ok(Self { amount, symbol })
    }

    /// Create from a wide intermediate, as produced by pricing arithmetic
    pub fn from_wide(amount: i128, symbol: Symbol) -> Result<Self, AssetError> {
        if !Self::is_amount_within_range(amount) {
            return Err(AssetError::OutOfRange { amount });
        }
        // Range check above guarantees the cast is lossless
        Ok(Self {
            amount: amount as i64,
            symbol,
        })
    }

    pub const fn zero(symbol: Symbol) -> Self {
        Self { amount: 0, symbol }
    }

    pub const fn amount(&self) -> i64 {
        self.amount
    }

    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    pub const fn is_amount_within_range(amount: i128) -> bool {
        -(MAX_AMOUNT as i128) <= amount && amount <= MAX_AMOUNT as i128
    }

    /// Parse `"<amount> <CODE>"`, taking the precision from the fraction digits
    ///
    /// ```
    /// use types::Asset;
    ///
    /// let asset = Asset::from_decimal_str("12.5000 ABC").unwrap();
    /// assert_eq!(asset.amount(), 125_000);
    /// assert_eq!(asset.symbol().precision(), 4);
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, AssetError> {
        let invalid = || AssetError::InvalidFormat {
            input: s.to_string(),
        };

        let (number, code) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let decimal = Decimal::from_str(number.trim()).map_err(|_| invalid())?;

        let precision = u8::try_from(decimal.scale()).map_err(|_| invalid())?;
        let symbol = Symbol::new(precision, code.trim())?;

        Self::from_wide(decimal.mantissa(), symbol)
    }

    /// Exact decimal value, for display and interfacing only
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.amount as i128, self.symbol.precision() as u32)
    }

    /// Checked addition - fails on symbol mismatch or range overflow
    pub fn checked_add(self, rhs: Self) -> Result<Self, AssetError> {
        self.ensure_same_symbol(&rhs)?;
        Self::from_wide(self.amount as i128 + rhs.amount as i128, self.symbol)
    }

    /// Checked subtraction - fails on symbol mismatch or range overflow
    pub fn checked_sub(self, rhs: Self) -> Result<Self, AssetError> {
        self.ensure_same_symbol(&rhs)?;
        Self::from_wide(self.amount as i128 - rhs.amount as i128, self.symbol)
    }

    fn ensure_same_symbol(&self, rhs: &Self) -> Result<(), AssetError> {
        if self.symbol != rhs.symbol {
            return Err(AssetError::SymbolMismatch {
                left: self.symbol.to_string(),
                right: rhs.symbol.to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.symbol.code())
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl TryFrom<String> for Asset {
    type Error = AssetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_decimal_str(&value)
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::SymbolError;

    fn sym(precision: u8, code: &str) -> Symbol {
        Symbol::new(precision, code).unwrap()
    }

    #[test]
    fn test_asset_creation_and_range() {
        let asset = Asset::new(10_000, sym(4, "SOV")).unwrap();
        assert_eq!(asset.amount(), 10_000);
        assert_eq!(asset.symbol(), sym(4, "SOV"));

        assert!(Asset::new(MAX_AMOUNT, sym(4, "SOV")).is_ok());
        assert!(Asset::new(-MAX_AMOUNT, sym(4, "SOV")).is_ok());
        assert!(matches!(
            Asset::new(MAX_AMOUNT + 1, sym(4, "SOV")),
            Err(AssetError::OutOfRange { .. })
        ));
        assert!(Asset::new(i64::MIN, sym(4, "SOV")).is_err());
    }

    #[test]
    fn test_asset_display() {
        assert_eq!(Asset::new(10_000, sym(4, "SOV")).unwrap().to_string(), "1.0000 SOV");
        assert_eq!(Asset::new(5, sym(4, "ABC")).unwrap().to_string(), "0.0005 ABC");
        assert_eq!(Asset::new(-25, sym(1, "ABC")).unwrap().to_string(), "-2.5 ABC");
        assert_eq!(Asset::zero(sym(4, "ABC")).to_string(), "0.0000 ABC");
        assert_eq!(Asset::new(42, sym(0, "ABC")).unwrap().to_string(), "42 ABC");
    }

    #[test]
    fn test_asset_parsing() {
        let asset: Asset = "1234.5678 XYZ".parse().unwrap();
        assert_eq!(asset.amount(), 12_345_678);
        assert_eq!(asset.symbol(), sym(4, "XYZ"));

        let whole: Asset = "7 XYZ".parse().unwrap();
        assert_eq!(whole.amount(), 7);
        assert_eq!(whole.symbol().precision(), 0);

        let negative: Asset = "-0.50 XYZ".parse().unwrap();
        assert_eq!(negative.amount(), -50);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_asset_parsing_errors() {
        assert!(matches!(
            "1.0000".parse::<Asset>(),
            Err(AssetError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "abc XYZ".parse::<Asset>(),
            Err(AssetError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "1.0000 xyz".parse::<Asset>(),
            Err(AssetError::Symbol(SymbolError::InvalidCharacter { .. }))
        ));
        assert!(matches!(
            "4611686018427387904 XYZ".parse::<Asset>(),
            Err(AssetError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_asset_checked_arithmetic() {
        let a = Asset::new(15_000, sym(4, "SOV")).unwrap();
        let b = Asset::new(5_000, sym(4, "SOV")).unwrap();

        assert_eq!(a.checked_add(b).unwrap().amount(), 20_000);
        assert_eq!(a.checked_sub(b).unwrap().amount(), 10_000);
        assert_eq!(b.checked_sub(a).unwrap().amount(), -10_000);

        let max = Asset::new(MAX_AMOUNT, sym(4, "SOV")).unwrap();
        assert!(matches!(max.checked_add(b), Err(AssetError::OutOfRange { .. })));
    }

    #[test]
    fn test_asset_symbol_mismatch() {
        let a = Asset::new(1, sym(4, "SOV")).unwrap();
        let b = Asset::new(1, sym(8, "SOV")).unwrap();
        assert!(matches!(a.checked_add(b), Err(AssetError::SymbolMismatch { .. })));
    }

    #[test]
    fn test_asset_serde_as_text() {
        let asset = Asset::new(12_500, sym(4, "ABC")).unwrap();
        let json = serde_json::to_string(&asset).unwrap();
        assert_eq!(json, "\"1.2500 ABC\"");
        assert_eq!(serde_json::from_str::<Asset>(&json).unwrap(), asset);
    }
}
