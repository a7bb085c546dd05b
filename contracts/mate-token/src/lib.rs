#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};
use stellar_tokens::fungible::burnable::emit_burn;
use stellar_tokens::fungible::Base as TokenBase;

/// MATE is accounted with 18 decimals, the same unit the engine uses for debt.
pub const MATE_DECIMALS: u32 = 18;

#[contracttype]
pub enum DataKey {
    Admin,
    MaxSupply,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NonPositiveAmount = 1,
    InsufficientBalance = 2,
    MaxSupplyExceeded = 3,
    InvalidMaxSupply = 4,
}

/// USD-pegged synthetic token. Only the admin (the engine, once ownership is
/// handed over) can mint; holders burn their own balance.
#[contract]
pub struct MateToken;

#[contractimpl]
impl MateToken {
    pub fn __constructor(env: Env, admin: Address, max_supply: i128) {
        if max_supply <= 0 {
            soroban_sdk::panic_with_error!(&env, TokenError::InvalidMaxSupply);
        }
        TokenBase::set_metadata(
            &env,
            MATE_DECIMALS,
            String::from_str(&env, "MATE Synthetic Dollar"),
            String::from_str(&env, "MATE"),
        );
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::MaxSupply, &max_supply);
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

    pub fn max_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::MaxSupply)
            .expect("max supply not set")
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        TokenBase::allowance(&env, &owner, &spender)
    }

    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
        live_until_ledger: u32,
    ) -> Result<(), TokenError> {
        if amount < 0 {
            return Err(TokenError::NonPositiveAmount);
        }
        TokenBase::approve(&env, &owner, &spender, amount, live_until_ledger);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        if amount <= 0 {
            return Err(TokenError::NonPositiveAmount);
        }
        if TokenBase::balance(&env, &from) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        TokenBase::transfer(&env, &from, &to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        if amount <= 0 {
            return Err(TokenError::NonPositiveAmount);
        }
        if TokenBase::balance(&env, &from) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        TokenBase::transfer_from(&env, &spender, &from, &to, amount);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), TokenError> {
        require_admin(&env);
        if amount <= 0 {
            return Err(TokenError::NonPositiveAmount);
        }
        let supply = TokenBase::total_supply(&env);
        if amount > Self::max_supply(env.clone()).saturating_sub(supply) {
            return Err(TokenError::MaxSupplyExceeded);
        }
        TokenBase::mint(&env, &to, amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        if amount <= 0 {
            return Err(TokenError::NonPositiveAmount);
        }
        if TokenBase::balance(&env, &from) < amount {
            return Err(TokenError::InsufficientBalance);
        }
        TokenBase::update(&env, Some(&from), None, amount);
        emit_burn(&env, &from, amount);
        Ok(())
    }

    pub fn admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("no admin")
    }

    /// Hands minting rights to a new admin; the deployer uses this once to
    /// give the engine ownership.
    pub fn set_admin(env: Env, new_admin: Address) {
        require_admin(&env);
        env.storage().instance().set(&DataKey::Admin, &new_admin);
    }
}

fn require_admin(env: &Env) -> Address {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("no admin");
    admin.require_auth();
    admin
}
