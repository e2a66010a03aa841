use soroban_sdk::{contracttype, Address};

// Constants
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points

/// Snapshot returned by `get_pool_data`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolData {
    pub share_token: Address,
    /// Shares held by the queried user
    pub user_shares: i128,
    /// Current redeemable value of those shares
    pub user_value: i128,
    /// Reserve + yield position + outstanding deal principal
    pub total_balance: i128,
    pub total_shares: i128,
}

/// Lifetime counters, informational only.
///
/// None of these feed the exchange rate, which is always recomputed from
/// the reserve, the live yield position and the live deal ledger.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VaultAccounting {
    /// Stablecoin received through deposits
    pub total_deposited: i128,
    /// Stablecoin paid out through redemptions
    pub total_redeemed: i128,
    /// Principal sent out to fund deals
    pub total_deployed: i128,
    /// Principal returned by deal repayments
    pub total_principal_repaid: i128,
    /// Interest returned by deal repayments (pure profit for shareholders)
    pub total_interest_earned: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Stablecoin,
    ShareToken,
    YieldAdapter,
    RepaymentPool,
    Reserve,      // Tracked reserve, not the raw token balance
    ReserveRatio, // In basis points (e.g., 2000 = keep 20% of deposits liquid)
    Accounting,
    Initialized,
}
