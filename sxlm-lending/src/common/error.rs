use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The required principal did not authenticate
    NotAuthorized = 1,

    /// No position exists for this account
    PositionEmpty = 2,

    /// Operation would leave the position below the liquidation threshold
    UnhealthyAfter = 3,

    /// The pool holds less free XLM than requested
    InsufficientPoolLiquidity = 4,

    /// Borrower is at or above the liquidation threshold
    HealthyBorrower = 5,

    /// Position carries no debt
    NothingToRepay = 6,

    /// Arithmetic overflow or underflow occurred
    ArithmeticOverflow = 7,

    /// Contract is not initialized
    NotInitialized = 8,

    /// Contract is already initialized
    AlreadyInitialized = 9,

    /// Amount must be non-negative
    NegativeAmount = 10,

    /// Position holds less collateral than requested
    InsufficientCollateral = 11,

    /// Parameter outside its valid range
    InvalidParameter = 12,
}
