use soroban_sdk::{Address, Env};

// Calls the engine makes into the MATE token contract.
#[soroban_sdk::contractclient(name = "MateClient")]
pub trait Mate {
    fn mint(env: Env, to: Address, amount: i128);
    fn burn(env: Env, from: Address, amount: i128);
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}
