use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::EngineError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage: fixed at construction
    MateToken,
    CollateralAssets,      // Vec<Address>, construction order
    AssetConfig(Address),  // CollateralConfig
    Locked,                // bool, held while a mutating call runs
    // Persistent storage: ledgers
    Collateral(Address, Address), // (user, asset) -> u128, native decimals
    TotalCollateral(Address),     // asset -> u128
    Debt(Address),                // user -> u128, 18 decimals
    TotalDebt,                    // u128
}

/// A collateral asset accepted by the engine and the feed that prices it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralConfig {
    pub asset: Address,
    pub price_feed: Address,
    pub decimals: u32,
}

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

pub fn bump_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn write_config(env: &Env, mate_token: &Address, configs: &Vec<CollateralConfig>) {
    let instance = env.storage().instance();
    let mut assets: Vec<Address> = Vec::new(env);
    for config in configs.iter() {
        assets.push_back(config.asset.clone());
        instance.set(&DataKey::AssetConfig(config.asset.clone()), &config);
    }
    instance.set(&DataKey::CollateralAssets, &assets);
    instance.set(&DataKey::MateToken, mate_token);
    bump_instance_ttl(env);
}

pub fn mate_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::MateToken)
        .expect("engine not constructed")
}

pub fn collateral_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::CollateralAssets)
        .unwrap_or(Vec::new(env))
}

pub fn collateral_configs(env: &Env) -> Vec<CollateralConfig> {
    let mut configs = Vec::new(env);
    for asset in collateral_assets(env).iter() {
        if let Some(config) = env
            .storage()
            .instance()
            .get::<_, CollateralConfig>(&DataKey::AssetConfig(asset))
        {
            configs.push_back(config);
        }
    }
    configs
}

pub fn collateral_config(env: &Env, asset: &Address) -> Result<CollateralConfig, EngineError> {
    env.storage()
        .instance()
        .get(&DataKey::AssetConfig(asset.clone()))
        .ok_or(EngineError::NotAllowedToken)
}

// Reads never extend TTLs so views stay side-effect free; writes do.
pub fn read_amount(env: &Env, key: &DataKey) -> u128 {
    env.storage().persistent().get(key).unwrap_or(0u128)
}

pub fn write_amount(env: &Env, key: &DataKey, amount: u128) {
    let persistent = env.storage().persistent();
    persistent.set(key, &amount);
    persistent.extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn to_i128(amount: u128) -> Result<i128, EngineError> {
    i128::try_from(amount).map_err(|_| EngineError::MathOverflow)
}
