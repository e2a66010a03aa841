use crate::storage::BASIS_POINTS;

/// Calculate shares minted for a deposit
///
/// Formula: shares = amount × total_supply / total_balance
///
/// `total_balance` must be measured before the deposit lands. Truncation
/// always rounds against the depositor. An empty pool mints 1:1.
///
/// Returns `None` when the pool has shares but no value left to price them
/// against, or on overflow.
///
/// Example:
/// - total_supply: 1,000, total_balance: 2,000
/// - amount: 2,000
/// - shares: 2,000 × 1,000 / 2,000 = 1,000
pub fn calculate_shares_for_deposit(
    amount: i128,
    total_supply: i128,
    total_balance: i128,
) -> Option<i128> {
    if total_supply == 0 {
        return Some(amount);
    }
    if total_balance <= 0 {
        return None;
    }

    amount.checked_mul(total_supply)?.checked_div(total_balance)
}

/// Calculate the stablecoin value of a share amount
///
/// Formula: value = shares × total_balance / total_supply
///
/// Truncation rounds against the redeemer. With no shares outstanding the
/// rate is 1:1.
///
/// Example:
/// - total_supply: 2,500, total_balance: 15,000
/// - shares: 1,000
/// - value: 1,000 × 15,000 / 2,500 = 6,000
pub fn calculate_share_value(
    shares: i128,
    total_supply: i128,
    total_balance: i128,
) -> Option<i128> {
    if total_supply == 0 {
        return Some(shares);
    }

    shares.checked_mul(total_balance)?.checked_div(total_supply)
}

/// Calculate the part of a deposit placed with the yield venue
///
/// Formula: to_yield = amount × (1 - reserve_ratio)
///
/// Example:
/// - amount: 1,000
/// - reserve_ratio: 20% (2,000 basis points)
/// - to_yield: 1,000 × 80% = 800
pub fn calculate_yield_allocation(amount: i128, reserve_ratio_bps: i128) -> Option<i128> {
    let yield_bps = BASIS_POINTS.checked_sub(reserve_ratio_bps)?;
    if yield_bps < 0 {
        return None;
    }

    amount.checked_mul(yield_bps)?.checked_div(BASIS_POINTS)
}
