use soroban_sdk::{log, Address, Env};

use crate::engine::SolvencyEngine;
use crate::errors::EngineError;
use crate::events::Liquidated;
use crate::health;
use crate::oracle::PriceOracleAdapter;
use crate::storage::CollateralConfig;

/// Third-party repair of unsafe accounts.
///
/// A liquidator repays part of an unsafe account's debt with their own MATE
/// and receives the equivalent collateral plus a 10% bonus. Once collateral is
/// worth less than 110% of the debt (health factor below 0.55) every partial
/// liquidation lowers the ratio and is rejected with `HealthFactorNotImproved`;
/// such accounts can end up insolvent.
pub struct LiquidationEngine;

impl LiquidationEngine {
    pub fn liquidate(
        env: &Env,
        liquidator: &Address,
        user: &Address,
        config: &CollateralConfig,
        debt_to_cover: u128,
    ) -> Result<(), EngineError> {
        let health_before = SolvencyEngine::health_factor(env, user)?;
        if health::is_healthy(health_before) {
            return Err(EngineError::HealthFactorOk);
        }

        let seized = PriceOracleAdapter::asset_amount(env, config, debt_to_cover)?;
        let bonus = health::liquidation_bonus(env, seized)?;
        let total_seized = seized.checked_add(bonus).ok_or(EngineError::MathOverflow)?;

        SolvencyEngine::redeem_collateral(env, config, total_seized, user, liquidator)?;
        SolvencyEngine::burn(env, debt_to_cover, user, liquidator)?;

        let health_after = SolvencyEngine::health_factor(env, user)?;
        if health_after <= health_before {
            log!(env, "liquidation did not improve", user.clone(), health_before, health_after);
            return Err(EngineError::HealthFactorNotImproved);
        }
        SolvencyEngine::revert_if_health_factor_broken(env, liquidator)?;

        Liquidated {
            liquidator: liquidator.clone(),
            user: user.clone(),
            asset: config.asset.clone(),
            debt_covered: debt_to_cover,
            collateral_seized: seized,
            bonus,
            health_before,
            health_after,
        }
        .publish(env);
        Ok(())
    }
}
