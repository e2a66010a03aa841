use soroban_sdk::{contracttype, Address, String};

// Constants
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points
pub const MONTHS_PER_YEAR: i128 = 12;
pub const FIRST_DEAL_ID: u64 = 1; // get_last_deal_id() is 0 before any deal

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DealStatus {
    /// Principal still outstanding
    Active = 0,
    /// Outstanding principal reached zero
    Closed = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deal {
    /// Unique deal ID, never reused
    pub id: u64,
    /// Principal funded at creation (fixed)
    pub principal: i128,
    /// Principal not yet repaid
    pub outstanding: i128,
    /// Unix timestamp when the receivable starts
    pub start_time: u64,
    /// Unix timestamp when the receivable ends
    pub end_time: u64,
    /// Term in months
    pub term_months: u32,
    /// Annual interest rate in basis points
    pub interest_rate_bps: u32,
    /// Free-text description
    pub label: String,
    /// Current deal status
    pub status: DealStatus,
    /// Who received the principal from the vault
    pub recipient: Address,
    /// Interest recorded against this deal so far
    pub interest_paid: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Vault,
    Stablecoin,
    Deal(u64), // Deal ID → Deal
    LastDealId,
    TotalOutstanding, // Σ outstanding over all deals
    Initialized,
}
