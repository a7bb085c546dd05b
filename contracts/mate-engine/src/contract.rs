use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, Map, Vec};

use crate::constants::*;
use crate::engine::SolvencyEngine;
use crate::errors::EngineError;
use crate::guard::ReentrancyGuard;
use crate::health;
use crate::ledger::{CollateralLedger, DebtLedger};
use crate::liquidation::LiquidationEngine;
use crate::oracle::PriceOracleAdapter;
use crate::storage::{self, CollateralConfig};

#[contract]
pub struct MateEngine;

fn require_positive(amount: u128) -> Result<(), EngineError> {
    if amount == 0 {
        return Err(EngineError::NeedsMoreThanZero);
    }
    Ok(())
}

#[contractimpl]
impl MateEngine {
    /// Fixes the MATE token and the accepted collateral for the lifetime of
    /// the engine. `price_feeds[i]` prices `collateral_assets[i]`. The MATE
    /// token's admin must be handed to this contract before anyone can mint.
    pub fn __constructor(
        env: Env,
        mate_token: Address,
        collateral_assets: Vec<Address>,
        price_feeds: Vec<Address>,
    ) {
        if collateral_assets.len() != price_feeds.len() {
            panic_with_error!(&env, EngineError::TokenAddressesAndPriceFeedsLengthMismatch);
        }
        if collateral_assets.is_empty() {
            panic_with_error!(&env, EngineError::NoCollateralAssets);
        }
        let mut seen: Map<Address, bool> = Map::new(&env);
        let mut configs: Vec<CollateralConfig> = Vec::new(&env);
        for (asset, price_feed) in collateral_assets.iter().zip(price_feeds.iter()) {
            if seen.contains_key(asset.clone()) {
                panic_with_error!(&env, EngineError::DuplicateCollateralAsset);
            }
            seen.set(asset.clone(), true);
            let decimals = token::Client::new(&env, &asset).decimals();
            if decimals > MAX_COLLATERAL_DECIMALS {
                panic_with_error!(&env, EngineError::UnsupportedDecimals);
            }
            if let Err(err) = PriceOracleAdapter::check_feed(&env, &price_feed) {
                panic_with_error!(&env, err);
            }
            configs.push_back(CollateralConfig {
                asset,
                price_feed,
                decimals,
            });
        }
        storage::write_config(&env, &mate_token, &configs);
    }

    // Mutating entry points

    pub fn deposit_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: u128,
    ) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        user.require_auth();
        require_positive(amount)?;
        let config = storage::collateral_config(&env, &asset)?;
        SolvencyEngine::deposit_collateral(&env, &user, &config, amount)
    }

    pub fn mint(env: Env, user: Address, amount: u128) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        user.require_auth();
        require_positive(amount)?;
        SolvencyEngine::mint(&env, &user, amount)?;
        SolvencyEngine::revert_if_health_factor_broken(&env, &user)
    }

    /// The health factor is checked after the tokens have left custody; a
    /// failing check reverts the transfer with everything else.
    pub fn redeem_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: u128,
    ) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        user.require_auth();
        require_positive(amount)?;
        let config = storage::collateral_config(&env, &asset)?;
        SolvencyEngine::redeem_collateral(&env, &config, amount, &user, &user)?;
        SolvencyEngine::revert_if_health_factor_broken(&env, &user)
    }

    pub fn burn(env: Env, user: Address, amount: u128) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        user.require_auth();
        require_positive(amount)?;
        SolvencyEngine::burn(&env, amount, &user, &user)
    }

    pub fn deposit_collateral_and_mint(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: u128,
        mate_amount: u128,
    ) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        user.require_auth();
        require_positive(collateral_amount)?;
        require_positive(mate_amount)?;
        let config = storage::collateral_config(&env, &asset)?;
        SolvencyEngine::deposit_collateral(&env, &user, &config, collateral_amount)?;
        SolvencyEngine::mint(&env, &user, mate_amount)?;
        SolvencyEngine::revert_if_health_factor_broken(&env, &user)
    }

    /// Burns `mate_amount` of the caller's debt, then redeems
    /// `collateral_amount` of `asset`, checking health once at the end.
    pub fn redeem_collateral_for_mate(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: u128,
        mate_amount: u128,
    ) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        user.require_auth();
        require_positive(collateral_amount)?;
        require_positive(mate_amount)?;
        let config = storage::collateral_config(&env, &asset)?;
        SolvencyEngine::burn(&env, mate_amount, &user, &user)?;
        SolvencyEngine::redeem_collateral(&env, &config, collateral_amount, &user, &user)?;
        SolvencyEngine::revert_if_health_factor_broken(&env, &user)
    }

    /// Repays `debt_to_cover` of `user`'s debt with the liquidator's MATE in
    /// exchange for the equivalent `collateral_asset` plus a 10% bonus.
    pub fn liquidate(
        env: Env,
        liquidator: Address,
        user: Address,
        collateral_asset: Address,
        debt_to_cover: u128,
    ) -> Result<(), EngineError> {
        let _guard = ReentrancyGuard::acquire(&env)?;
        liquidator.require_auth();
        require_positive(debt_to_cover)?;
        let config = storage::collateral_config(&env, &collateral_asset)?;
        LiquidationEngine::liquidate(&env, &liquidator, &user, &config, debt_to_cover)
    }

    // Views

    pub fn get_collateral_balance(env: Env, user: Address, asset: Address) -> u128 {
        CollateralLedger::balance(&env, &user, &asset)
    }

    pub fn get_debt(env: Env, user: Address) -> u128 {
        DebtLedger::balance(&env, &user)
    }

    /// `(debt, collateral value in USD)`
    pub fn get_account_information(env: Env, user: Address) -> Result<(u128, u128), EngineError> {
        SolvencyEngine::account_information(&env, &user)
    }

    pub fn get_account_collateral_value(env: Env, user: Address) -> Result<u128, EngineError> {
        CollateralLedger::value_usd(&env, &user)
    }

    pub fn get_health_factor(env: Env, user: Address) -> Result<u128, EngineError> {
        SolvencyEngine::health_factor(&env, &user)
    }

    pub fn calculate_health_factor(env: Env, debt: u128, collateral_usd: u128) -> u128 {
        health::health_factor(&env, debt, collateral_usd)
    }

    pub fn get_usd_value(env: Env, asset: Address, amount: u128) -> Result<u128, EngineError> {
        let config = storage::collateral_config(&env, &asset)?;
        PriceOracleAdapter::usd_value(&env, &config, amount)
    }

    pub fn get_token_amount_from_usd(env: Env, asset: Address, usd: u128) -> Result<u128, EngineError> {
        let config = storage::collateral_config(&env, &asset)?;
        PriceOracleAdapter::asset_amount(&env, &config, usd)
    }

    pub fn get_collateral_assets(env: Env) -> Vec<Address> {
        storage::collateral_assets(&env)
    }

    pub fn get_collateral_price_feed(env: Env, asset: Address) -> Result<Address, EngineError> {
        Ok(storage::collateral_config(&env, &asset)?.price_feed)
    }

    pub fn get_collateral_decimals(env: Env, asset: Address) -> Result<u32, EngineError> {
        Ok(storage::collateral_config(&env, &asset)?.decimals)
    }

    pub fn get_total_collateral(env: Env, asset: Address) -> u128 {
        CollateralLedger::total(&env, &asset)
    }

    pub fn get_total_debt(env: Env) -> u128 {
        DebtLedger::total(&env)
    }

    pub fn get_mate_token(env: Env) -> Address {
        storage::mate_token(&env)
    }

    pub fn get_precision(_env: Env) -> u128 {
        PRECISION
    }

    pub fn get_additional_feed_precision(_env: Env) -> u128 {
        ADDITIONAL_FEED_PRECISION
    }

    pub fn get_liquidation_threshold(_env: Env) -> u128 {
        LIQUIDATION_THRESHOLD
    }

    pub fn get_liquidation_bonus(_env: Env) -> u128 {
        LIQUIDATION_BONUS
    }

    pub fn get_liquidation_precision(_env: Env) -> u128 {
        LIQUIDATION_PRECISION
    }

    pub fn get_min_health_factor(_env: Env) -> u128 {
        MIN_HEALTH_FACTOR
    }

    pub fn get_staleness_window(_env: Env) -> u64 {
        STALENESS_WINDOW
    }
}
