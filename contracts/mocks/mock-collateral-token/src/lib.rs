#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

#[contracttype]
enum DataKey {
    Initialized,
    Frozen,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockTokenError {
    Frozen = 1,
    BadAmount = 2,
    InsufficientBalance = 3,
}

/// Collateral stand-in with configurable decimals whose transfers can be
/// switched off to simulate a token that refuses to move funds.
#[contract]
pub struct MockCollateralToken;

#[contractimpl]
impl MockCollateralToken {
    pub fn initialize(env: Env, name: String, symbol: String, decimals: u32) {
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::Initialized)
            .is_some()
        {
            panic!("already initialized");
        }
        TokenBase::set_metadata(&env, decimals, name, symbol);
        env.storage().persistent().set(&DataKey::Initialized, &true);
    }

    pub fn name(env: Env) -> String {
        TokenBase::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        TokenBase::symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenBase::decimals(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().persistent().set(&DataKey::Frozen, &frozen);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), MockTokenError> {
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::Frozen)
            .unwrap_or(false)
        {
            return Err(MockTokenError::Frozen);
        }
        if amount <= 0 {
            return Err(MockTokenError::BadAmount);
        }
        if TokenBase::balance(&env, &from) < amount {
            return Err(MockTokenError::InsufficientBalance);
        }
        TokenBase::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), MockTokenError> {
        if amount <= 0 {
            return Err(MockTokenError::BadAmount);
        }
        TokenBase::mint(&env, &to, amount);
        Ok(())
    }
}
