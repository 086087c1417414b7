//! Quote engine: routing, fees, reserves, and pricing wired together
//!
//! A quote is one synchronous pass over a snapshot of the pool table. The
//! engine never writes, so a failed quote leaves nothing behind, and a
//! returned quote is only as fresh as the store at the moment it was read.

use crate::config::{EngineConfig, Variant};
use crate::error::{QuoteError, Result};
use crate::fees::FeeModel;
use crate::pricing::ConstantProductMath;
use crate::reserves::{ReserveLookup, Reserves};
use crate::router::{Hop, Route};
use crate::store::PoolStore;
use rust_decimal::Decimal;
use tracing::debug;
use types::{Asset, Symbol};

/// One priced hop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HopQuote {
    pub hop: Hop,
    pub amount_in: Asset,
    pub amount_out: Asset,
    pub reserves: Reserves,
    /// Fee charged on this hop, hundredths of a percent
    pub fee: u32,
}

/// Full conversion result with its per-hop breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub amount_in: Asset,
    pub amount_out: Asset,
    pub hops: Vec<HopQuote>,
}

impl Quote {
    /// Output units per input unit, in display terms
    pub fn effective_rate(&self) -> Option<Decimal> {
        self.amount_out
            .to_decimal()
            .checked_div(self.amount_in.to_decimal())
    }
}

/// Quote engine over an injected pool store
#[derive(Debug, Clone)]
pub struct QuoteEngine<S> {
    config: EngineConfig,
    store: S,
}

impl<S: PoolStore> QuoteEngine<S> {
    pub fn new(config: EngineConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fees(&self) -> FeeModel {
        FeeModel::new(self.config.variant, self.config.base_symbol())
    }

    fn lookup(&self) -> ReserveLookup<'_, S> {
        ReserveLookup::new(&self.store, &self.config)
    }

    /// Total fee for converting `sym_in` into `sym_out`, hundredths of a percent
    ///
    /// The simplified variant ignores both arguments.
    pub fn get_fee(&self, sym_in: Symbol, sym_out: Symbol) -> u32 {
        self.fees().fee(sym_in, sym_out)
    }

    /// `(reserve_in, reserve_out)` for converting `sym_in` into `sym_out`
    pub fn get_reserves(&self, sym_in: Symbol, sym_out: Symbol) -> Result<(Asset, Asset)> {
        self.lookup().reserves(sym_in, sym_out).map(Into::into)
    }

    /// Amount of `sym_out` received for `amount_in`
    pub fn get_amount_out(&self, amount_in: Asset, sym_out: Symbol) -> Result<Asset> {
        self.quote(amount_in, sym_out).map(|quote| quote.amount_out)
    }

    /// Same as [`get_amount_out`](Self::get_amount_out), keeping every hop
    pub fn quote(&self, amount_in: Asset, sym_out: Symbol) -> Result<Quote> {
        if amount_in.is_negative() {
            return Err(QuoteError::NegativeAmount(amount_in.amount()));
        }

        let route = Route::plan(amount_in.symbol(), sym_out, self.config.base_symbol())?;
        debug!(
            %amount_in,
            %sym_out,
            hops = route.hop_count(),
            variant = %self.config.variant,
            "routing quote"
        );

        let mut hops = Vec::with_capacity(route.hop_count());
        let mut carried = amount_in;
        for hop in route.hops() {
            let priced = self.quote_hop(hop, carried)?;
            carried = priced.amount_out;
            hops.push(priced);
        }

        Ok(Quote {
            amount_in,
            amount_out: carried,
            hops,
        })
    }

    fn quote_hop(&self, hop: Hop, amount_in: Asset) -> Result<HopQuote> {
        if self.config.variant == Variant::Simplified && !hop.touches(self.config.base_symbol()) {
            return Err(QuoteError::Unreachable {
                sym_in: hop.sym_in,
                sym_out: hop.sym_out,
            });
        }

        let fee = self.fees().fee(hop.sym_in, hop.sym_out);
        let reserves = self.lookup().reserves(hop.sym_in, hop.sym_out)?;
        let out = ConstantProductMath::amount_out(
            amount_in.amount(),
            reserves.reserve_in.amount(),
            reserves.reserve_out.amount(),
            fee,
        )?;
        let amount_out = Asset::new(out, hop.sym_out)?;

        debug!(
            %hop,
            %amount_in,
            %amount_out,
            reserve_in = reserves.reserve_in.amount(),
            reserve_out = reserves.reserve_out.amount(),
            fee,
            "priced hop"
        );

        Ok(HopQuote {
            hop,
            amount_in,
            amount_out,
            reserves,
            fee,
        })
    }
}
