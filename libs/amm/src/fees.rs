//! Fee schedule, in hundredths of a percent

use crate::config::Variant;
use crate::router::Hop;
use types::Symbol;

/// Fee for a conversion with the base asset on one side: 0.10% trade +
/// 0.10% protocol
pub const DIRECT_FEE: u32 = 20;

/// Fee for a conversion between two non-base assets (two legs)
pub const CROSS_FEE: u32 = 40;

/// Fee lookup for one variant and base asset
#[derive(Debug, Clone, Copy)]
pub struct FeeModel {
    variant: Variant,
    base: Symbol,
}

impl FeeModel {
    pub fn new(variant: Variant, base: Symbol) -> Self {
        Self { variant, base }
    }

    /// Total fee for converting `sym_in` into `sym_out`
    pub fn fee(&self, sym_in: Symbol, sym_out: Symbol) -> u32 {
        match self.variant {
            Variant::General => {
                if Hop::new(sym_in, sym_out).touches(self.base) {
                    DIRECT_FEE
                } else {
                    CROSS_FEE
                }
            }
            Variant::Simplified => Self::flat(),
        }
    }

    /// Simplified variant's fee, independent of the pair
    pub const fn flat() -> u32 {
        DIRECT_FEE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols() -> (Symbol, Symbol, Symbol) {
        (
            Symbol::new(4, "BASE").unwrap(),
            Symbol::new(4, "ABC").unwrap(),
            Symbol::new(4, "XYZ").unwrap(),
        )
    }

    #[test]
    fn test_general_fee_schedule() {
        let (base, abc, xyz) = symbols();
        let fees = FeeModel::new(Variant::General, base);

        assert_eq!(fees.fee(base, abc), 20);
        assert_eq!(fees.fee(abc, base), 20);
        assert_eq!(fees.fee(abc, xyz), 40);
        assert_eq!(fees.fee(xyz, abc), 40);
    }

    #[test]
    fn test_general_fee_requires_exact_base_symbol() {
        let (base, abc, _) = symbols();
        let fees = FeeModel::new(Variant::General, base);
        let other_precision = Symbol::new(8, "BASE").unwrap();

        assert_eq!(fees.fee(other_precision, abc), 40);
    }

    #[test]
    fn test_simplified_fee_is_flat() {
        let (base, abc, xyz) = symbols();
        let fees = FeeModel::new(Variant::Simplified, base);

        assert_eq!(fees.fee(base, abc), 20);
        assert_eq!(fees.fee(abc, xyz), 20);
        assert_eq!(FeeModel::flat(), 20);
    }
}
