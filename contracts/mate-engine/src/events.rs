use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralDeposited {
    #[topic]
    pub user: Address,
    #[topic]
    pub asset: Address,
    pub amount: u128,
}

/// Emitted on redemption and on every seizure by a liquidator; `from` is the
/// account whose ledger shrank, `to` the wallet that received the tokens.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollateralRedeemed {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub asset: Address,
    pub amount: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MateMinted {
    #[topic]
    pub user: Address,
    pub amount: u128,
    pub debt: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MateBurned {
    #[topic]
    pub on_behalf_of: Address,
    #[topic]
    pub payer: Address,
    pub amount: u128,
    pub debt: u128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Liquidated {
    #[topic]
    pub liquidator: Address,
    #[topic]
    pub user: Address,
    pub asset: Address,
    pub debt_covered: u128,
    pub collateral_seized: u128,
    pub bonus: u128,
    pub health_before: u128,
    pub health_after: u128,
}
