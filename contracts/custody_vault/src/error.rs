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
    /// Caller is not the owner or the registered repayment pool
    Unauthorized = 10,
    /// Target identity is the vault itself
    InvalidAddress = 11,
    /// No repayment pool registered yet
    NotRegistered = 12,
    /// Registered ledger still carries outstanding principal
    LedgerInUse = 13,

    // ============================================
    // AMOUNT/BALANCE ERRORS (20-29)
    // ============================================
    /// Amount must be positive, or the conversion rounds to zero
    InvalidAmount = 20,
    /// Holder has fewer shares than requested
    InsufficientShares = 21,
    /// Reserve plus yield position cannot cover the request
    InsufficientFunds = 22,
    /// Payer cannot fund the asset pull
    TransferFailed = 23,
}
