use soroban_sdk::{log, token, Address, Env};

use crate::errors::EngineError;
use crate::events::{CollateralDeposited, CollateralRedeemed, MateBurned, MateMinted};
use crate::health;
use crate::ledger::{CollateralLedger, DebtLedger};
use crate::mate::MateClient;
use crate::storage::{self, to_i128, CollateralConfig};

/// Deposit, mint, redeem and burn primitives.
///
/// Ledgers are written before any token call. A failing token call comes back
/// as an `EngineError`, and returning it from the entry point makes the host
/// discard every write and nested transfer of the invocation.
pub struct SolvencyEngine;

impl SolvencyEngine {
    /// Credits `amount` of `asset` to `user` and pulls it into custody.
    pub fn deposit_collateral(
        env: &Env,
        user: &Address,
        config: &CollateralConfig,
        amount: u128,
    ) -> Result<(), EngineError> {
        CollateralLedger::credit(env, user, &config.asset, amount)?;
        let value = to_i128(amount)?;
        let token = token::Client::new(env, &config.asset);
        let custody = env.current_contract_address();
        if !matches!(token.try_transfer(user, &custody, &value), Ok(Ok(()))) {
            log!(env, "collateral transfer in failed", config.asset.clone(), user.clone(), amount);
            return Err(EngineError::TransferFailed);
        }
        CollateralDeposited {
            user: user.clone(),
            asset: config.asset.clone(),
            amount,
        }
        .publish(env);
        Ok(())
    }

    /// Adds `amount` to `user`'s debt and mints the same amount of MATE to
    /// them. The caller decides when to check the resulting health factor.
    pub fn mint(env: &Env, user: &Address, amount: u128) -> Result<(), EngineError> {
        let debt = DebtLedger::increase(env, user, amount)?;
        let value = to_i128(amount)?;
        let mate = MateClient::new(env, &storage::mate_token(env));
        if !matches!(mate.try_mint(user, &value), Ok(Ok(()))) {
            log!(env, "mate mint failed", user.clone(), amount);
            return Err(EngineError::MintFailed);
        }
        MateMinted {
            user: user.clone(),
            amount,
            debt,
        }
        .publish(env);
        Ok(())
    }

    /// Debits `from`'s deposit and sends the tokens to `to`. Used both for
    /// plain redemption (`from == to`) and for liquidation seizures.
    pub fn redeem_collateral(
        env: &Env,
        config: &CollateralConfig,
        amount: u128,
        from: &Address,
        to: &Address,
    ) -> Result<(), EngineError> {
        CollateralLedger::debit(env, from, &config.asset, amount)?;
        let value = to_i128(amount)?;
        let token = token::Client::new(env, &config.asset);
        let custody = env.current_contract_address();
        if !matches!(token.try_transfer(&custody, to, &value), Ok(Ok(()))) {
            log!(env, "collateral transfer out failed", config.asset.clone(), to.clone(), amount);
            return Err(EngineError::TransferFailed);
        }
        CollateralRedeemed {
            from: from.clone(),
            to: to.clone(),
            asset: config.asset.clone(),
            amount,
        }
        .publish(env);
        Ok(())
    }

    /// Clears `amount` of `on_behalf_of`'s debt with MATE taken from `payer`,
    /// then destroys that MATE.
    pub fn burn(
        env: &Env,
        amount: u128,
        on_behalf_of: &Address,
        payer: &Address,
    ) -> Result<(), EngineError> {
        let debt = DebtLedger::decrease(env, on_behalf_of, amount)?;
        let value = to_i128(amount)?;
        let mate = MateClient::new(env, &storage::mate_token(env));
        let custody = env.current_contract_address();
        if !matches!(mate.try_transfer(payer, &custody, &value), Ok(Ok(()))) {
            log!(env, "mate transfer in failed", payer.clone(), amount);
            return Err(EngineError::TransferFailed);
        }
        if !matches!(mate.try_burn(&custody, &value), Ok(Ok(()))) {
            log!(env, "mate burn failed", amount);
            return Err(EngineError::TransferFailed);
        }
        MateBurned {
            on_behalf_of: on_behalf_of.clone(),
            payer: payer.clone(),
            amount,
            debt,
        }
        .publish(env);
        Ok(())
    }

    /// `(debt, collateral value in USD)`, both with 18 decimals.
    pub fn account_information(env: &Env, user: &Address) -> Result<(u128, u128), EngineError> {
        let debt = DebtLedger::balance(env, user);
        let collateral_usd = CollateralLedger::value_usd(env, user)?;
        Ok((debt, collateral_usd))
    }

    /// An account without debt is safe whatever its collateral is worth, so
    /// no feed is consulted for it.
    pub fn health_factor(env: &Env, user: &Address) -> Result<u128, EngineError> {
        if DebtLedger::balance(env, user) == 0 {
            return Ok(u128::MAX);
        }
        let (debt, collateral_usd) = Self::account_information(env, user)?;
        Ok(health::health_factor(env, debt, collateral_usd))
    }

    pub fn revert_if_health_factor_broken(env: &Env, user: &Address) -> Result<(), EngineError> {
        let ratio = Self::health_factor(env, user)?;
        if !health::is_healthy(ratio) {
            log!(env, "health factor broken", user.clone(), ratio);
            return Err(EngineError::BreaksHealthFactor);
        }
        Ok(())
    }
}
