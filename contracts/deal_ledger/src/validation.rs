use crate::error::Error;
use crate::storage::{Deal, DealStatus, BASIS_POINTS, MONTHS_PER_YEAR};

/// Check the terms of a new deal
pub fn validate_deal_terms(
    principal: i128,
    start_time: u64,
    end_time: u64,
    term_months: u32,
) -> Result<(), Error> {
    if principal <= 0 {
        return Err(Error::InvalidAmount);
    }

    if end_time <= start_time {
        return Err(Error::InvalidTimestamp);
    }

    if term_months == 0 {
        return Err(Error::InvalidTerm);
    }

    Ok(())
}

/// Check a repayment against a deal, returning the total to collect
///
/// An interest-only payment (`amount == 0`) is allowed; an empty one is not.
pub fn validate_repayment(deal: &Deal, amount: i128, interest: i128) -> Result<i128, Error> {
    if deal.status == DealStatus::Closed {
        return Err(Error::DealAlreadyClosed);
    }

    if amount < 0 || interest < 0 {
        return Err(Error::InvalidAmount);
    }

    if amount > deal.outstanding {
        return Err(Error::InvalidAmount);
    }

    let total = amount.checked_add(interest).ok_or(Error::InvalidAmount)?;
    if total == 0 {
        return Err(Error::InvalidAmount);
    }

    Ok(total)
}

/// Calculate simple interest over the deal term
///
/// Formula: interest = principal × rate × term_months / 12
///
/// Example:
/// - principal: 20,000
/// - rate: 8% (800 basis points)
/// - term: 6 months
/// - interest: 20,000 × 8% × 6 / 12 = 800
pub fn calculate_expected_interest(
    principal: i128,
    interest_rate_bps: u32,
    term_months: u32,
) -> Option<i128> {
    principal
        .checked_mul(interest_rate_bps as i128)?
        .checked_mul(term_months as i128)?
        .checked_div(BASIS_POINTS.checked_mul(MONTHS_PER_YEAR)?)
}
