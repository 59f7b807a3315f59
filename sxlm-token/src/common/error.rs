use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The required principal did not authenticate
    NotAuthorized = 1,

    /// Insufficient balance
    InsufficientBalance = 2,

    /// Insufficient allowance; spender must call `approve` first
    InsufficientAllowance = 3,

    /// Allowance exists but its expiration ledger has passed
    AllowanceExpired = 4,

    /// Arithmetic overflow or underflow occurred
    ArithmeticOverflow = 5,

    /// Contract is not initialized
    NotInitialized = 6,

    /// Contract is already initialized
    AlreadyInitialized = 7,

    /// Amount must be non-negative
    NegativeAmount = 8,

    /// expiration_ledger must be greater than or equal to the current ledger number
    InvalidLedgerSequence = 9,
}
