#![no_std]

mod error;
mod events;
mod storage;
mod validation;
mod vault;


pub use error::Error;
pub use storage::{Deal, DealStatus};
pub use vault::{VaultClient, VaultInterface};

use events::*;
use storage::{DataKey, FIRST_DEAL_ID};
use validation::{calculate_expected_interest, validate_deal_terms, validate_repayment};

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Symbol};

#[contract]
pub struct DealLedger;

#[contractimpl]
impl DealLedger {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the ledger
    ///
    /// The vault must register this ledger with `set_repayment_pool` before
    /// any deal can be funded.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        owner: Address,
        vault: Address,
        stablecoin: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Vault, &vault);
        env.storage().instance().set(&DataKey::Stablecoin, &stablecoin);
        env.storage()
            .instance()
            .set(&DataKey::LastDealId, &(FIRST_DEAL_ID - 1));
        env.storage()
            .instance()
            .set(&DataKey::TotalOutstanding, &0i128);

        Ok(())
    }

    /// Hand the owner role to a new identity
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAddress`: New owner is the ledger itself
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        let previous = Self::require_owner(&env, &caller)?;

        if new_owner == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        env.storage().instance().set(&DataKey::Owner, &new_owner);

        env.events().publish(
            (Symbol::new(&env, "owner_xfer"),),
            OwnershipTransferredEvent {
                previous,
                new_owner,
            },
        );

        Ok(())
    }

    // ============================================
    // CREATE DEAL
    // ============================================

    /// Fund a new receivable from the vault reserve
    ///
    /// The vault sends `principal` to the caller, who disburses it to the
    /// borrower. Returns the new deal id.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAmount`: Principal <= 0
    /// - `InvalidTimestamp`: End time not after start time
    /// - `InvalidTerm`: Term of zero months
    /// - `InsufficientFunds`: Vault reserve below principal
    pub fn create_deal(
        env: Env,
        caller: Address,
        principal: i128,
        start_time: u64,
        end_time: u64,
        term_months: u32,
        interest_rate_bps: u32,
        label: String,
    ) -> Result<u64, Error> {
        Self::require_owner(&env, &caller)?;

        validate_deal_terms(principal, start_time, end_time, term_months)?;

        let vault = VaultClient::new(&env, &Self::read_vault(&env)?);
        if vault.reserve_balance() < principal {
            return Err(Error::InsufficientFunds);
        }

        let deal_id = Self::get_last_deal_id(env.clone())
            .checked_add(1)
            .ok_or(Error::InvalidAmount)?;
        let total_outstanding = Self::total_outstanding(env.clone())
            .checked_add(principal)
            .ok_or(Error::InvalidAmount)?;

        let deal = Deal {
            id: deal_id,
            principal,
            outstanding: principal,
            start_time,
            end_time,
            term_months,
            interest_rate_bps,
            label: label.clone(),
            status: DealStatus::Active,
            recipient: caller.clone(),
            interest_paid: 0,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Deal(deal_id), &deal);
        env.storage()
            .instance()
            .set(&DataKey::LastDealId, &deal_id);
        env.storage()
            .instance()
            .set(&DataKey::TotalOutstanding, &total_outstanding);

        vault.fund_deal(&env.current_contract_address(), &caller, &principal);

        log!(&env, "deal {} funded with {}", deal_id, principal);
        env.events().publish(
            (Symbol::new(&env, "deal_created"), deal_id),
            DealCreatedEvent {
                deal_id,
                principal,
                recipient: caller,
                start_time,
                end_time,
                term_months,
                interest_rate_bps,
                label,
            },
        );

        Ok(deal_id)
    }

    // ============================================
    // REPAY
    // ============================================

    /// Record a repayment and route `amount + interest` into the vault reserve
    ///
    /// `amount` reduces the outstanding principal; `interest` is profit for
    /// the vault's shareholders. The deal closes when outstanding hits zero.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `UnknownDeal`: No deal with this id
    /// - `DealAlreadyClosed`: Deal fully repaid
    /// - `InvalidAmount`: Negative part, empty payment, or amount above outstanding
    /// - `TransferFailed`: Payer does not hold amount + interest
    pub fn repay(
        env: Env,
        payer: Address,
        deal_id: u64,
        amount: i128,
        interest: i128,
    ) -> Result<(), Error> {
        let vault = VaultClient::new(&env, &Self::read_vault(&env)?);

        let mut deal = Self::deal_list(env.clone(), deal_id)?;
        let total = validate_repayment(&deal, amount, interest)?;

        payer.require_auth();

        let stablecoin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Stablecoin)
            .ok_or(Error::NotInitialized)?;
        if token::Client::new(&env, &stablecoin).balance(&payer) < total {
            return Err(Error::TransferFailed);
        }

        deal.outstanding -= amount;
        deal.interest_paid = deal
            .interest_paid
            .checked_add(interest)
            .ok_or(Error::InvalidAmount)?;
        if deal.outstanding == 0 {
            deal.status = DealStatus::Closed;
        }

        let total_outstanding = Self::total_outstanding(env.clone()) - amount;

        env.storage()
            .persistent()
            .set(&DataKey::Deal(deal_id), &deal);
        env.storage()
            .instance()
            .set(&DataKey::TotalOutstanding, &total_outstanding);

        vault.receive_repayment(&env.current_contract_address(), &payer, &amount, &interest);

        log!(
            &env,
            "deal {} repaid {} + {} interest, {} left",
            deal_id,
            amount,
            interest,
            deal.outstanding
        );
        env.events().publish(
            (Symbol::new(&env, "deal_repaid"), deal_id),
            DealRepaidEvent {
                deal_id,
                payer,
                amount,
                interest,
                outstanding: deal.outstanding,
            },
        );

        if deal.status == DealStatus::Closed {
            env.events().publish(
                (Symbol::new(&env, "deal_closed"), deal_id),
                DealClosedEvent {
                    deal_id,
                    interest_paid: deal.interest_paid,
                },
            );
        }

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn deal_list(env: Env, deal_id: u64) -> Result<Deal, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Deal(deal_id))
            .ok_or(Error::UnknownDeal)
    }

    pub fn get_last_deal_id(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::LastDealId)
            .unwrap_or(FIRST_DEAL_ID - 1)
    }

    /// Σ outstanding principal over all deals, read live by the vault
    pub fn total_outstanding(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalOutstanding)
            .unwrap_or(0)
    }

    /// Simple interest the deal would earn over its full term
    pub fn expected_interest(env: Env, deal_id: u64) -> Result<i128, Error> {
        let deal = Self::deal_list(env, deal_id)?;
        calculate_expected_interest(deal.principal, deal.interest_rate_bps, deal.term_months)
            .ok_or(Error::InvalidAmount)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn vault(env: Env) -> Result<Address, Error> {
        Self::read_vault(&env)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn read_vault(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Vault)
            .ok_or(Error::NotInitialized)
    }

    /// Authorize `caller` and check it holds the owner role.
    fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
        let owner: Address = env
            .storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)?;
        caller.require_auth();

        if *caller != owner {
            return Err(Error::Unauthorized);
        }
        Ok(owner)
    }
}
