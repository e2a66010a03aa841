use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the ledger owner
    Unauthorized = 10,
    /// Target identity is the ledger itself
    InvalidAddress = 11,

    // ============================================
    // DEAL ERRORS (20-29)
    // ============================================
    /// No deal with this id
    UnknownDeal = 20,
    /// Deal already fully repaid
    DealAlreadyClosed = 21,
    /// End time must be after start time
    InvalidTimestamp = 22,
    /// Term must be at least one month
    InvalidTerm = 23,

    // ============================================
    // AMOUNT ERRORS (30-39)
    // ============================================
    /// Amount negative, zero where not allowed, or above outstanding principal
    InvalidAmount = 30,
    /// Vault reserve cannot fund the principal
    InsufficientFunds = 31,
    /// Payer cannot fund the repayment
    TransferFailed = 32,
}
