#![no_std]

mod constants;
mod contract;
mod engine;
mod errors;
mod events;
mod guard;
mod health;
mod ledger;
mod liquidation;
mod mate;
mod oracle;
mod storage;

pub mod reflector;

pub use constants::*;
pub use contract::{MateEngine, MateEngineClient};
pub use errors::EngineError;
pub use events::{CollateralDeposited, CollateralRedeemed, Liquidated, MateBurned, MateMinted};
pub use storage::CollateralConfig;
