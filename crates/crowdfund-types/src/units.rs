//! SOL / lamport conversion.
//!
//! Amounts reach the ledger as integer lamports. Conversions from the
//! human-facing SOL unit round exactly once, on the final scaled value.

use crate::error::TypeError;

/// Lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

const DECIMALS: usize = 9;

/// Convert a SOL amount to lamports.
///
/// Rejects NaN, infinities, negative values, and anything past `u64::MAX`
/// lamports.
pub fn sol_to_lamports(sol: f64) -> Result<u64, TypeError> {
    if !sol.is_finite() || sol < 0.0 {
        return Err(TypeError::InvalidAmount(sol.to_string()));
    }
    let scaled = (sol * LAMPORTS_PER_SOL as f64).round();
    if scaled >= u64::MAX as f64 {
        return Err(TypeError::AmountOverflow(sol.to_string()));
    }
    Ok(scaled as u64)
}

/// Parse a decimal SOL string such as `"0.01"` into lamports using integer
/// arithmetic only. At most nine fractional digits are accepted.
pub fn parse_sol(input: &str) -> Result<u64, TypeError> {
    let s = input.trim();
    let invalid = || TypeError::InvalidAmount(input.to_string());
    let overflow = || TypeError::AmountOverflow(input.to_string());

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > DECIMALS {
        return Err(invalid());
    }

    let whole: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        let digits: u64 = frac.parse().map_err(|_| invalid())?;
        digits * 10u64.pow((DECIMALS - frac.len()) as u32)
    };

    whole
        .checked_mul(LAMPORTS_PER_SOL)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(overflow)
}

/// Lamports as SOL, for display.
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
