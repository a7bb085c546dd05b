use soroban_sdk::{log, Address, Env};

use crate::constants::{FEED_DECIMALS, STALENESS_WINDOW};
use crate::errors::EngineError;
use crate::health;
use crate::reflector::{Asset, PriceFeedClient};
use crate::storage::CollateralConfig;

/// A price observation, rescaled to 18 decimals.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Quote {
    pub price: u128,
    pub timestamp: u64,
}

/// Wraps the external feed and refuses to hand out prices it cannot vouch
/// for. A stale feed freezes every valuation that needs it.
pub struct PriceOracleAdapter;

impl PriceOracleAdapter {
    pub fn validated_quote(env: &Env, config: &CollateralConfig) -> Result<Quote, EngineError> {
        let feed = PriceFeedClient::new(env, &config.price_feed);
        let Some(data) = feed.lastprice(&Asset::Stellar(config.asset.clone())) else {
            log!(env, "no price for asset", config.asset.clone());
            return Err(EngineError::PriceUnavailable);
        };
        let quote = Quote {
            price: health::normalize_price(data.price)?,
            timestamp: data.timestamp,
        };
        let age = env.ledger().timestamp().saturating_sub(quote.timestamp);
        if age > STALENESS_WINDOW {
            log!(env, "stale price", config.asset.clone(), quote.timestamp, age);
            return Err(EngineError::StalePrice);
        }
        Ok(quote)
    }

    /// Rejects feeds whose precision the fixed constants cannot rescale.
    pub fn check_feed(env: &Env, price_feed: &Address) -> Result<(), EngineError> {
        let decimals = PriceFeedClient::new(env, price_feed).decimals();
        if decimals != FEED_DECIMALS {
            return Err(EngineError::UnsupportedDecimals);
        }
        Ok(())
    }

    pub fn usd_value(env: &Env, config: &CollateralConfig, amount: u128) -> Result<u128, EngineError> {
        let quote = Self::validated_quote(env, config)?;
        health::usd_value(env, amount, quote.price, config.decimals)
    }

    pub fn asset_amount(env: &Env, config: &CollateralConfig, usd: u128) -> Result<u128, EngineError> {
        let quote = Self::validated_quote(env, config)?;
        health::asset_amount(env, usd, quote.price, config.decimals)
    }
}
