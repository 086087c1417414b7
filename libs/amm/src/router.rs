//! Path selection through the base asset
//!
//! Every pool pairs one traded asset with the base asset, so a conversion is
//! either one hop (one side is the base) or two hops transiting the base.

use crate::error::{QuoteError, Result};
use std::fmt;
use types::Symbol;

/// One single-pool conversion step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hop {
    pub sym_in: Symbol,
    pub sym_out: Symbol,
}

impl Hop {
    pub const fn new(sym_in: Symbol, sym_out: Symbol) -> Self {
        Self { sym_in, sym_out }
    }

    /// Whether either side of this hop is `base`
    pub fn touches(&self, base: Symbol) -> bool {
        self.sym_in == base || self.sym_out == base
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.sym_in, self.sym_out)
    }
}

/// Ordered hops for one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Direct(Hop),
    ThroughBase { first: Hop, second: Hop },
}

impl Route {
    /// Pick the path for converting `sym_in` into `sym_out`
    pub fn plan(sym_in: Symbol, sym_out: Symbol, base: Symbol) -> Result<Self> {
        if sym_in == sym_out {
            return Err(QuoteError::InvalidPair { sym_in, sym_out });
        }

        if sym_in != base && sym_out != base {
            return Ok(Route::ThroughBase {
                first: Hop::new(sym_in, base),
                second: Hop::new(base, sym_out),
            });
        }

        Ok(Route::Direct(Hop::new(sym_in, sym_out)))
    }

    /// Hops in execution order
    pub fn hops(&self) -> impl Iterator<Item = Hop> {
        let (first, second) = match *self {
            Route::Direct(hop) => (hop, None),
            Route::ThroughBase { first, second } => (first, Some(second)),
        };
        std::iter::once(first).chain(second)
    }

    pub fn hop_count(&self) -> usize {
        match self {
            Route::Direct(_) => 1,
            Route::ThroughBase { .. } => 2,
        }
    }
}
