//! Subcommand rendering
//!
//! Each command returns its output as a string so `main` only prints.

use amm::{PoolStore, Quote, QuoteEngine, FEE_DENOMINATOR};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::json;
use std::fmt::Write;
use types::{Asset, Symbol};

/// Fee in hundredths of a percent as a percentage, `20` -> `0.20`
fn fee_percent(fee: u32) -> Decimal {
    Decimal::new(i64::from(fee), 2)
}

pub fn fee<S: PoolStore>(engine: &QuoteEngine<S>, sym_in: Symbol, sym_out: Symbol) -> String {
    let fee = engine.get_fee(sym_in, sym_out);
    format!(
        "{} -> {}: fee {} ({}%)",
        sym_in,
        sym_out,
        fee,
        fee_percent(fee)
    )
}

pub fn reserves<S: PoolStore>(
    engine: &QuoteEngine<S>,
    sym_in: Symbol,
    sym_out: Symbol,
) -> Result<String> {
    let (reserve_in, reserve_out) = engine
        .get_reserves(sym_in, sym_out)
        .with_context(|| format!("no reserves for {} -> {}", sym_in, sym_out))?;

    Ok(format!(
        "reserve_in  {}\nreserve_out {}",
        reserve_in, reserve_out
    ))
}

pub fn quote<S: PoolStore>(
    engine: &QuoteEngine<S>,
    amount_in: Asset,
    sym_out: Symbol,
    as_json: bool,
) -> Result<String> {
    let quote = engine
        .quote(amount_in, sym_out)
        .with_context(|| format!("cannot quote {} into {}", amount_in, sym_out))?;

    if as_json {
        return quote_json(&quote);
    }

    let mut out = String::new();
    write!(out, "{} -> {}", quote.amount_in, quote.amount_out)?;
    if let Some(rate) = quote.effective_rate() {
        write!(out, " (rate {})", rate.normalize())?;
    }
    for (index, hop) in quote.hops.iter().enumerate() {
        write!(
            out,
            "\n  hop {}: {}  in {}  out {}  fee {}%  reserves {} / {}",
            index + 1,
            hop.hop,
            hop.amount_in,
            hop.amount_out,
            fee_percent(hop.fee),
            hop.reserves.reserve_in,
            hop.reserves.reserve_out,
        )?;
    }
    Ok(out)
}

fn quote_json(quote: &Quote) -> Result<String> {
    let hops: Vec<_> = quote
        .hops
        .iter()
        .map(|hop| {
            json!({
                "sym_in": hop.hop.sym_in.to_string(),
                "sym_out": hop.hop.sym_out.to_string(),
                "amount_in": hop.amount_in.to_string(),
                "amount_out": hop.amount_out.to_string(),
                "reserve_in": hop.reserves.reserve_in.to_string(),
                "reserve_out": hop.reserves.reserve_out.to_string(),
                "fee": hop.fee,
                "fee_denominator": FEE_DENOMINATOR,
            })
        })
        .collect();

    let value = json!({
        "amount_in": quote.amount_in.to_string(),
        "amount_out": quote.amount_out.to_string(),
        "effective_rate": quote.effective_rate().map(|rate| rate.normalize().to_string()),
        "hops": hops,
    });

    serde_json::to_string_pretty(&value).context("Failed to serialize quote")
}
