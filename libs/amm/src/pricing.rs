//! Constant-product pricing with exact integer arithmetic
//!
//! ```text
//! amount_out = reserve_out * amount_in * (10000 - fee)
//!              --------------------------------------
//!              (reserve_in + amount_in) * 10000
//! ```
//!
//! The quotient is taken once, truncating toward zero, so results are
//! identical on every platform. The product in the numerator can reach
//! 2^138 for in-range assets, which does not fit `u128`; it is evaluated by
//! splitting each division into quotient and remainder so that every
//! intermediate stays below 2^124.

use crate::error::{QuoteError, Result};

/// Fee denominator: fees are hundredths of a percent
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Constant-product (x*y=k) swap math
pub struct ConstantProductMath;

impl ConstantProductMath {
    /// Output amount for one hop after the fee is deducted
    ///
    /// # Arguments
    /// * `amount_in` - Input amount in the input symbol's smallest unit
    /// * `reserve_in` - Input-side reserve
    /// * `reserve_out` - Output-side reserve
    /// * `fee` - Fee in hundredths of a percent (20 = 0.20%)
    ///
    /// # Examples
    /// ```
    /// use amm::ConstantProductMath;
    ///
    /// let out = ConstantProductMath::amount_out(10_000, 1_000_000, 2_000_000, 20).unwrap();
    /// assert_eq!(out, 19_762);
    /// ```
    pub fn amount_out(amount_in: i64, reserve_in: i64, reserve_out: i64, fee: u32) -> Result<i64> {
        for value in [amount_in, reserve_in, reserve_out] {
            if value < 0 {
                return Err(QuoteError::NegativeAmount(value));
            }
        }
        if fee > FEE_DENOMINATOR {
            return Err(QuoteError::InvalidFee(fee));
        }
        if amount_in == 0 {
            return Ok(0);
        }

        let amount_in = amount_in as u128;
        let denom = FEE_DENOMINATOR as u128;
        let keep = (FEE_DENOMINATOR - fee) as u128;

        // reserve_out * amount_in / (reserve_in + amount_in) = q + r / pool
        let pool = reserve_in as u128 + amount_in;
        let product = reserve_out as u128 * amount_in;
        let (q, r) = (product / pool, product % pool);

        // (q + r / pool) * keep / denom, with q * keep split as u * denom + v
        let scaled = q * keep;
        let (u, v) = (scaled / denom, scaled % denom);
        let out = u + (v * pool + r * keep) / (pool * denom);

        // out <= q <= reserve_out, so it always fits
        i64::try_from(out).map_err(|_| QuoteError::Overflow("amount out exceeds i64"))
    }

    /// `value * numerator / denominator` truncated, for rescaling reserves
    pub fn mul_div(value: i64, numerator: i64, denominator: i64) -> Option<i128> {
        if denominator == 0 {
            return None;
        }
        Some(value as i128 * numerator as i128 / denominator as i128)
    }
}
