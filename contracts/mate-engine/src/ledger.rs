use soroban_sdk::{Address, Env};

use crate::errors::EngineError;
use crate::oracle::PriceOracleAdapter;
use crate::storage::{self, read_amount, write_amount, DataKey};

/// Per-account, per-asset deposits. Every mutation moves the asset total too.
pub struct CollateralLedger;

impl CollateralLedger {
    pub fn balance(env: &Env, user: &Address, asset: &Address) -> u128 {
        read_amount(env, &DataKey::Collateral(user.clone(), asset.clone()))
    }

    pub fn total(env: &Env, asset: &Address) -> u128 {
        read_amount(env, &DataKey::TotalCollateral(asset.clone()))
    }

    pub fn credit(env: &Env, user: &Address, asset: &Address, amount: u128) -> Result<u128, EngineError> {
        let key = DataKey::Collateral(user.clone(), asset.clone());
        let total_key = DataKey::TotalCollateral(asset.clone());
        let balance = read_amount(env, &key)
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;
        let total = read_amount(env, &total_key)
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;
        write_amount(env, &key, balance);
        write_amount(env, &total_key, total);
        Ok(balance)
    }

    pub fn debit(env: &Env, user: &Address, asset: &Address, amount: u128) -> Result<u128, EngineError> {
        let key = DataKey::Collateral(user.clone(), asset.clone());
        let total_key = DataKey::TotalCollateral(asset.clone());
        let balance = read_amount(env, &key)
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientBalance)?;
        // The total is at least every balance it covers.
        let total = read_amount(env, &total_key)
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientBalance)?;
        write_amount(env, &key, balance);
        write_amount(env, &total_key, total);
        Ok(balance)
    }

    /// USD value (18 decimals) of everything `user` has deposited.
    ///
    /// Every configured asset is priced, including those with a zero
    /// balance, so one stale feed freezes every valuation.
    pub fn value_usd(env: &Env, user: &Address) -> Result<u128, EngineError> {
        let mut total: u128 = 0;
        for config in storage::collateral_configs(env).iter() {
            let amount = Self::balance(env, user, &config.asset);
            let value = PriceOracleAdapter::usd_value(env, &config, amount)?;
            total = total.checked_add(value).ok_or(EngineError::MathOverflow)?;
        }
        Ok(total)
    }
}

/// Per-account MATE debt, kept in step with the total.
pub struct DebtLedger;

impl DebtLedger {
    pub fn balance(env: &Env, user: &Address) -> u128 {
        read_amount(env, &DataKey::Debt(user.clone()))
    }

    pub fn total(env: &Env) -> u128 {
        read_amount(env, &DataKey::TotalDebt)
    }

    pub fn increase(env: &Env, user: &Address, amount: u128) -> Result<u128, EngineError> {
        let key = DataKey::Debt(user.clone());
        let debt = read_amount(env, &key)
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;
        let total = read_amount(env, &DataKey::TotalDebt)
            .checked_add(amount)
            .ok_or(EngineError::MathOverflow)?;
        write_amount(env, &key, debt);
        write_amount(env, &DataKey::TotalDebt, total);
        Ok(debt)
    }

    pub fn decrease(env: &Env, user: &Address, amount: u128) -> Result<u128, EngineError> {
        let key = DataKey::Debt(user.clone());
        let debt = read_amount(env, &key)
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientBalance)?;
        let total = read_amount(env, &DataKey::TotalDebt)
            .checked_sub(amount)
            .ok_or(EngineError::InsufficientBalance)?;
        write_amount(env, &key, debt);
        write_amount(env, &DataKey::TotalDebt, total);
        Ok(debt)
    }
}
