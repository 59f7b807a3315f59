use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The required principal did not authenticate
    NotAuthorized = 1,

    /// Deposits and withdrawal requests are paused
    Paused = 2,

    /// Caller holds less sXLM than requested
    InsufficientSxlm = 3,

    /// Withdrawal has not reached its unlock ledger yet
    WithdrawalLocked = 4,

    /// Withdrawal belongs to a different owner
    NotOwner = 5,

    /// Withdrawal was already claimed
    AlreadyClaimed = 6,

    /// No withdrawal record under this id
    NotFound = 7,

    /// Arithmetic overflow or underflow occurred
    ArithmeticOverflow = 8,

    /// Deposit below the minimum stake
    BelowMinStake = 9,

    /// Amount must be non-negative
    NegativeAmount = 10,

    /// Contract is not initialized
    NotInitialized = 11,

    /// Contract is already initialized
    AlreadyInitialized = 12,

    /// Parameter outside its valid range
    InvalidParameter = 13,

    /// Treasury holds less than the requested amount
    InsufficientTreasury = 14,
}
