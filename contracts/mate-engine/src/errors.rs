use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum EngineError {
    // Input validation
    NeedsMoreThanZero = 1,
    NotAllowedToken = 2,
    TokenAddressesAndPriceFeedsLengthMismatch = 3,
    DuplicateCollateralAsset = 4,
    NoCollateralAssets = 5,
    UnsupportedDecimals = 6,
    // Solvency
    BreaksHealthFactor = 10,
    HealthFactorOk = 11,
    HealthFactorNotImproved = 12,
    InsufficientBalance = 13,
    // Token capability
    TransferFailed = 20,
    MintFailed = 21,
    // Oracle
    StalePrice = 30,
    PriceUnavailable = 31,
    InvalidPrice = 32,
    // Engine
    ReentrantCall = 40,
    MathOverflow = 41,
}
