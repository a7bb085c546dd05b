use soroban_sdk::{Env, U256};

use crate::constants::*;
use crate::errors::EngineError;

/// Normalised solvency ratio, scaled by `PRECISION`.
///
/// An account without debt is always safe and gets `u128::MAX`. Otherwise
/// `(collateral_usd * LIQUIDATION_THRESHOLD / LIQUIDATION_PRECISION) * PRECISION / debt`,
/// saturating at `u128::MAX`.
pub fn health_factor(env: &Env, debt: u128, collateral_usd: u128) -> u128 {
    if debt == 0 {
        return u128::MAX;
    }
    let adjusted = U256::from_u128(env, collateral_usd)
        .mul(&U256::from_u128(env, LIQUIDATION_THRESHOLD))
        .div(&U256::from_u128(env, LIQUIDATION_PRECISION));
    adjusted
        .mul(&U256::from_u128(env, PRECISION))
        .div(&U256::from_u128(env, debt))
        .to_u128()
        .unwrap_or(u128::MAX)
}

/// `MIN_HEALTH_FACTOR` itself is safe.
pub fn is_healthy(ratio: u128) -> bool {
    ratio >= MIN_HEALTH_FACTOR
}

/// Rescales an 8-decimal feed price to 18 decimals.
pub fn normalize_price(feed_price: i128) -> Result<u128, EngineError> {
    if feed_price <= 0 {
        return Err(EngineError::InvalidPrice);
    }
    (feed_price as u128)
        .checked_mul(ADDITIONAL_FEED_PRECISION)
        .ok_or(EngineError::MathOverflow)
}

/// USD value (18 decimals) of `amount` native units of an asset priced at
/// `price` (18 decimals per whole token). Truncates toward zero.
pub fn usd_value(env: &Env, amount: u128, price: u128, decimals: u32) -> Result<u128, EngineError> {
    mul_div(env, amount, price, pow10(decimals))
}

/// Native units of an asset worth `usd` (18 decimals). Inverse of
/// [`usd_value`], truncating toward zero as well.
pub fn asset_amount(env: &Env, usd: u128, price: u128, decimals: u32) -> Result<u128, EngineError> {
    if price == 0 {
        return Err(EngineError::InvalidPrice);
    }
    mul_div(env, usd, pow10(decimals), price)
}

/// Extra collateral paid to a liquidator on top of `seized`.
pub fn liquidation_bonus(env: &Env, seized: u128) -> Result<u128, EngineError> {
    mul_div(env, seized, LIQUIDATION_BONUS, LIQUIDATION_PRECISION)
}

// Host-side 256-bit intermediates, so two 18-decimal factors never overflow.
fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, EngineError> {
    U256::from_u128(env, a)
        .mul(&U256::from_u128(env, b))
        .div(&U256::from_u128(env, denominator))
        .to_u128()
        .ok_or(EngineError::MathOverflow)
}

pub fn pow10(decimals: u32) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0u32;
    while i < decimals {
        result = result.saturating_mul(10);
        i += 1;
    }
    result
}
