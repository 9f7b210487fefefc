//! Contract error types for the FundMe crowdfunding ledger.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundingError {
    /// Price feed could not be reached or reported an unusable value
    PriceUnavailable = 1,
    /// Contribution is worth less than the minimum in USD
    BelowMinimum = 2,
    /// Only the owner can perform this action
    NotOwner = 3,
    /// Native token transfer was rejected
    TransferFailed = 4,
    /// No contributor at the requested index
    IndexOutOfRange = 5,
    /// Arithmetic overflow occurred
    Overflow = 6,
    /// Config not set - the constructor never ran
    NotInitialized = 7,
}
