use anchor_lang::error_code;

#[error_code]
pub enum LaunchpadError {
    #[msg("Curve configuration already initialized")]
    AlreadyInitialized,

    #[msg("Invalid curve or fee parameter")]
    InvalidParameter,

    #[msg("A pool already exists for this mint")]
    DuplicatePool,

    #[msg("No pool exists for this mint")]
    PoolNotFound,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Slippage limit exceeded")]
    SlippageExceeded,

    #[msg("Purchase would exceed the curve supply cap")]
    SupplyCapExceeded,

    #[msg("Sell amount exceeds supply sold through the curve")]
    InsufficientSupply,

    #[msg("Payout exceeds pool reserve")]
    InsufficientReserve,

    #[msg("Signer is not authorized for this operation")]
    Unauthorized,
}
