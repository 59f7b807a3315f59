use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The required principal did not authenticate
    NotAuthorized = 1,

    /// Pool reserves cannot cover this operation
    InsufficientLiquidity = 2,

    /// Swap output fell below the caller's minimum
    SlippageExceeded = 3,

    /// Swap would shrink the constant product
    InvariantViolated = 4,

    /// First deposit too small to lock the minimum liquidity
    BelowMinLiquidity = 5,

    /// Arithmetic overflow or underflow occurred
    ArithmeticOverflow = 6,

    /// Amount must be non-negative
    NegativeAmount = 7,

    /// Contract is not initialized
    NotInitialized = 8,

    /// Contract is already initialized
    AlreadyInitialized = 9,

    /// Caller holds fewer LP shares than requested
    InsufficientLpBalance = 10,

    /// Parameter outside its valid range
    InvalidParameter = 11,
}
