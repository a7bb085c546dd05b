pub const PRECISION: u128 = 1_000_000_000_000_000_000u128; // 1e18
/// Decimals every price feed must report.
pub const FEED_DECIMALS: u32 = 8;
/// Lifts an 8-decimal feed price to 18 decimals.
pub const ADDITIONAL_FEED_PRECISION: u128 = 10_000_000_000u128; // 1e10
/// Only half of the collateral value backs debt (200% overcollateralized).
pub const LIQUIDATION_THRESHOLD: u128 = 50;
pub const LIQUIDATION_BONUS: u128 = 10;
pub const LIQUIDATION_PRECISION: u128 = 100;
pub const MIN_HEALTH_FACTOR: u128 = PRECISION;
pub const STALENESS_WINDOW: u64 = 3 * 60 * 60; // seconds
pub const MAX_COLLATERAL_DECIMALS: u32 = 18;
