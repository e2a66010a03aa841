#![no_std]

mod error;
mod events;
mod pricing;
mod storage;
mod yield_adapter;


pub use error::Error;
pub use storage::{PoolData, VaultAccounting};
pub use yield_adapter::{YieldAdapterClient, YieldAdapterInterface};

use events::*;
use pricing::{calculate_share_value, calculate_shares_for_deposit, calculate_yield_allocation};
use storage::{DataKey, BASIS_POINTS};

use soroban_sdk::{contract, contractimpl, log, token, vec, Address, Env, IntoVal, Symbol, Vec};

/// Where the pool's value currently sits. Re-read on every call.
struct Holdings {
    reserve: i128,
    yield_position: i128,
    outstanding_principal: i128,
}

impl Holdings {
    fn available(&self) -> Option<i128> {
        self.reserve.checked_add(self.yield_position)
    }

    fn total(&self) -> Option<i128> {
        self.available()?.checked_add(self.outstanding_principal)
    }
}

#[contract]
pub struct CustodyVault;

#[contractimpl]
impl CustodyVault {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the vault
    ///
    /// `share_token` must hand its controller role to this vault before the
    /// first deposit. `reserve_ratio_bps` is the share of every deposit kept
    /// liquid in the reserve; the rest is supplied to `yield_adapter`.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidAmount`: Reserve ratio outside [0, 10,000]
    pub fn initialize(
        env: Env,
        owner: Address,
        stablecoin: Address,
        share_token: Address,
        yield_adapter: Address,
        reserve_ratio_bps: i128,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        if !(0..=BASIS_POINTS).contains(&reserve_ratio_bps) {
            return Err(Error::InvalidAmount);
        }

        owner.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Owner, &owner);
        env.storage().instance().set(&DataKey::Stablecoin, &stablecoin);
        env.storage().instance().set(&DataKey::ShareToken, &share_token);
        env.storage()
            .instance()
            .set(&DataKey::YieldAdapter, &yield_adapter);
        env.storage()
            .instance()
            .set(&DataKey::ReserveRatio, &reserve_ratio_bps);
        env.storage().instance().set(&DataKey::Reserve, &0i128);
        env.storage()
            .instance()
            .set(&DataKey::Accounting, &VaultAccounting::default());

        Ok(())
    }

    /// Register the deal ledger allowed to fund deals from the reserve and
    /// push repayments into it
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAddress`: Ledger is the vault itself
    /// - `LedgerInUse`: Current ledger still has outstanding principal
    pub fn set_repayment_pool(env: Env, caller: Address, ledger: Address) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if ledger == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        // Swapping ledgers would drop live receivables from the total balance
        if Self::outstanding_principal(&env) > 0 {
            return Err(Error::LedgerInUse);
        }

        env.storage()
            .instance()
            .set(&DataKey::RepaymentPool, &ledger);

        env.events().publish(
            (Symbol::new(&env, "repayment_pool_set"),),
            RepaymentPoolSetEvent { ledger },
        );

        Ok(())
    }

    /// Change the share of each deposit kept in the reserve
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAmount`: Ratio outside [0, 10,000]
    pub fn set_reserve_ratio(env: Env, caller: Address, reserve_ratio_bps: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if !(0..=BASIS_POINTS).contains(&reserve_ratio_bps) {
            return Err(Error::InvalidAmount);
        }

        env.storage()
            .instance()
            .set(&DataKey::ReserveRatio, &reserve_ratio_bps);

        Ok(())
    }

    /// Hand the owner role to a new identity
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAddress`: New owner is the vault itself
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
    // DEPOSIT
    // ============================================

    /// Deposit stablecoin and mint shares to `on_behalf_of`
    ///
    /// Shares are priced against the total balance before the deposit lands.
    /// Returns the number of shares minted.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0, or too small to mint a single share
    /// - `TransferFailed`: Payer does not hold `amount`
    pub fn deposit(
        env: Env,
        from: Address,
        amount: i128,
        on_behalf_of: Address,
    ) -> Result<i128, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        from.require_auth();

        let stablecoin = Self::read_address(&env, &DataKey::Stablecoin)?;
        let share_token = Self::read_address(&env, &DataKey::ShareToken)?;
        let adapter = Self::read_address(&env, &DataKey::YieldAdapter)?;

        let holdings = Self::holdings(&env)?;
        let total_balance = holdings.total().ok_or(Error::InvalidAmount)?;
        let total_supply = Self::total_shares(&env, &share_token);

        let shares = calculate_shares_for_deposit(amount, total_supply, total_balance)
            .ok_or(Error::InvalidAmount)?;
        if shares <= 0 {
            return Err(Error::InvalidAmount);
        }

        let stablecoin_client = token::Client::new(&env, &stablecoin);
        if stablecoin_client.balance(&from) < amount {
            return Err(Error::TransferFailed);
        }

        let to_yield = calculate_yield_allocation(amount, Self::reserve_ratio(env.clone()))
            .ok_or(Error::InvalidAmount)?;

        let new_reserve = holdings
            .reserve
            .checked_add(amount - to_yield)
            .ok_or(Error::InvalidAmount)?;
        Self::write_reserve(&env, new_reserve);

        let mut accounting = Self::get_accounting(env.clone());
        accounting.total_deposited = accounting
            .total_deposited
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        Self::write_accounting(&env, &accounting);

        let vault = env.current_contract_address();
        stablecoin_client.transfer(&from, &vault, &amount);

        Self::mint_shares(&env, &share_token, &on_behalf_of, shares);

        if to_yield > 0 {
            stablecoin_client.transfer(&vault, &adapter, &to_yield);
            YieldAdapterClient::new(&env, &adapter).supply(&to_yield);
        }

        log!(
            &env,
            "deposit {} for {} shares, {} to yield",
            amount,
            shares,
            to_yield
        );
        env.events().publish(
            (Symbol::new(&env, "deposited"), on_behalf_of.clone()),
            DepositedEvent {
                from,
                on_behalf_of,
                amount,
                shares_minted: shares,
                supplied_to_yield: to_yield,
            },
        );

        Ok(shares)
    }

    // ============================================
    // REDEEM
    // ============================================

    /// Burn shares and pay out their value in stablecoin
    ///
    /// The payout is computed before burning. When the reserve cannot cover
    /// it, exactly the shortfall is pulled back from the yield position
    /// first. Returns the payout.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Share amount <= 0, or worth nothing
    /// - `InsufficientShares`: User holds fewer shares than requested
    /// - `InsufficientFunds`: Reserve plus yield position cannot cover the payout
    pub fn redeem(env: Env, user: Address, share_amount: i128) -> Result<i128, Error> {
        if share_amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        user.require_auth();

        let stablecoin = Self::read_address(&env, &DataKey::Stablecoin)?;
        let share_token = Self::read_address(&env, &DataKey::ShareToken)?;
        let adapter = Self::read_address(&env, &DataKey::YieldAdapter)?;

        if Self::share_balance(&env, &share_token, &user) < share_amount {
            return Err(Error::InsufficientShares);
        }

        let holdings = Self::holdings(&env)?;
        let total_balance = holdings.total().ok_or(Error::InvalidAmount)?;
        let total_supply = Self::total_shares(&env, &share_token);

        let payout = calculate_share_value(share_amount, total_supply, total_balance)
            .ok_or(Error::InvalidAmount)?;
        if payout <= 0 {
            return Err(Error::InvalidAmount);
        }

        let shortfall = if payout > holdings.reserve {
            payout - holdings.reserve
        } else {
            0
        };
        if shortfall > holdings.yield_position {
            return Err(Error::InsufficientFunds);
        }

        let mut accounting = Self::get_accounting(env.clone());
        accounting.total_redeemed = accounting
            .total_redeemed
            .checked_add(payout)
            .ok_or(Error::InvalidAmount)?;
        Self::write_accounting(&env, &accounting);

        Self::burn_shares(&env, &share_token, &user, share_amount);

        let vault = env.current_contract_address();
        let mut reserve = holdings.reserve;
        if shortfall > 0 {
            let received = YieldAdapterClient::new(&env, &adapter).withdraw(&shortfall, &vault);
            if received < shortfall {
                return Err(Error::InsufficientFunds);
            }
            reserve = reserve.checked_add(received).ok_or(Error::InvalidAmount)?;
        }
        Self::write_reserve(&env, reserve - payout);

        token::Client::new(&env, &stablecoin).transfer(&vault, &user, &payout);

        log!(
            &env,
            "redeem {} shares for {}, {} from yield",
            share_amount,
            payout,
            shortfall
        );
        env.events().publish(
            (Symbol::new(&env, "redeemed"), user.clone()),
            RedeemedEvent {
                user,
                shares_burned: share_amount,
                payout,
                withdrawn_from_yield: shortfall,
            },
        );

        Ok(payout)
    }

    // ============================================
    // YIELD POSITION REBALANCING
    // ============================================

    /// Pull `amount` out of the yield position into the reserve
    ///
    /// Stages liquidity ahead of redemptions or deal funding.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientFunds`: Yield position below `amount`
    pub fn withdraw_to_safe(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let adapter = YieldAdapterClient::new(&env, &Self::read_address(&env, &DataKey::YieldAdapter)?);
        if adapter.current_balance() < amount {
            return Err(Error::InsufficientFunds);
        }

        let received = adapter.withdraw(&amount, &env.current_contract_address());
        if received < amount {
            return Err(Error::InsufficientFunds);
        }

        let reserve = Self::read_reserve(&env)
            .checked_add(received)
            .ok_or(Error::InvalidAmount)?;
        Self::write_reserve(&env, reserve);

        log!(&env, "withdrew {} from yield, reserve {}", received, reserve);
        env.events().publish(
            (Symbol::new(&env, "yield_moved"),),
            YieldMovedEvent {
                amount: -received,
                reserve_after: reserve,
            },
        );

        Ok(())
    }

    /// Push `amount` of the reserve into the yield position
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientFunds`: Reserve below `amount`
    pub fn supply_to_yield(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        Self::require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let reserve = Self::read_reserve(&env);
        if reserve < amount {
            return Err(Error::InsufficientFunds);
        }

        let stablecoin = Self::read_address(&env, &DataKey::Stablecoin)?;
        let adapter = Self::read_address(&env, &DataKey::YieldAdapter)?;

        Self::write_reserve(&env, reserve - amount);

        token::Client::new(&env, &stablecoin).transfer(
            &env.current_contract_address(),
            &adapter,
            &amount,
        );
        YieldAdapterClient::new(&env, &adapter).supply(&amount);

        env.events().publish(
            (Symbol::new(&env, "yield_moved"),),
            YieldMovedEvent {
                amount,
                reserve_after: reserve - amount,
            },
        );

        Ok(())
    }

    /// Credit stablecoin sent straight to the vault address to the reserve
    ///
    /// Unsolicited transfers are ignored by the exchange rate until skimmed;
    /// once skimmed they are profit for current shareholders. Returns the
    /// amount credited.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not owner
    pub fn skim(env: Env, caller: Address) -> Result<i128, Error> {
        Self::require_owner(&env, &caller)?;

        let stablecoin = Self::read_address(&env, &DataKey::Stablecoin)?;
        let held = token::Client::new(&env, &stablecoin).balance(&env.current_contract_address());
        let reserve = Self::read_reserve(&env);

        let excess = held - reserve;
        if excess <= 0 {
            return Ok(0);
        }

        Self::write_reserve(&env, held);

        log!(&env, "skimmed {}, reserve {}", excess, held);
        env.events().publish(
            (Symbol::new(&env, "skimmed"),),
            SkimmedEvent {
                amount: excess,
                reserve_after: held,
            },
        );

        Ok(excess)
    }

    // ============================================
    // DEAL LEDGER ENTRY POINTS
    // ============================================

    /// Send deal principal out of the reserve (registered ledger only)
    ///
    /// Never calls back into the ledger.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NotRegistered`: No repayment pool registered
    /// - `Unauthorized`: Caller is not the registered repayment pool
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientFunds`: Reserve below `amount`
    pub fn fund_deal(
        env: Env,
        ledger: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::require_repayment_pool(&env, &ledger)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let reserve = Self::read_reserve(&env);
        if reserve < amount {
            return Err(Error::InsufficientFunds);
        }

        let stablecoin = Self::read_address(&env, &DataKey::Stablecoin)?;

        Self::write_reserve(&env, reserve - amount);

        let mut accounting = Self::get_accounting(env.clone());
        accounting.total_deployed = accounting
            .total_deployed
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        Self::write_accounting(&env, &accounting);

        token::Client::new(&env, &stablecoin).transfer(
            &env.current_contract_address(),
            &recipient,
            &amount,
        );

        env.events().publish(
            (Symbol::new(&env, "deal_funded"), recipient.clone()),
            DealFundedEvent {
                ledger,
                recipient,
                amount,
            },
        );

        Ok(())
    }

    /// Pull a deal repayment from `payer` into the reserve (registered
    /// ledger only)
    ///
    /// Interest is pure profit: it raises the total balance without minting
    /// shares. Never calls back into the ledger.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `NotRegistered`: No repayment pool registered
    /// - `Unauthorized`: Caller is not the registered repayment pool
    /// - `InvalidAmount`: Negative part or nothing to repay
    /// - `TransferFailed`: Payer does not hold principal + interest
    pub fn receive_repayment(
        env: Env,
        ledger: Address,
        payer: Address,
        principal: i128,
        interest: i128,
    ) -> Result<(), Error> {
        Self::require_repayment_pool(&env, &ledger)?;

        if principal < 0 || interest < 0 {
            return Err(Error::InvalidAmount);
        }
        let total = principal.checked_add(interest).ok_or(Error::InvalidAmount)?;
        if total == 0 {
            return Err(Error::InvalidAmount);
        }

        let stablecoin_client =
            token::Client::new(&env, &Self::read_address(&env, &DataKey::Stablecoin)?);
        if stablecoin_client.balance(&payer) < total {
            return Err(Error::TransferFailed);
        }

        let reserve = Self::read_reserve(&env)
            .checked_add(total)
            .ok_or(Error::InvalidAmount)?;
        Self::write_reserve(&env, reserve);

        let mut accounting = Self::get_accounting(env.clone());
        accounting.total_principal_repaid = accounting
            .total_principal_repaid
            .checked_add(principal)
            .ok_or(Error::InvalidAmount)?;
        accounting.total_interest_earned = accounting
            .total_interest_earned
            .checked_add(interest)
            .ok_or(Error::InvalidAmount)?;
        Self::write_accounting(&env, &accounting);

        stablecoin_client.transfer(&payer, &env.current_contract_address(), &total);

        log!(&env, "repayment {} principal, {} interest", principal, interest);
        env.events().publish(
            (Symbol::new(&env, "repayment_received"), payer.clone()),
            RepaymentReceivedEvent {
                ledger,
                payer,
                principal,
                interest,
            },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Reserve + yield position + outstanding deal principal
    pub fn get_total_balance(env: Env) -> Result<i128, Error> {
        Self::holdings(&env)?.total().ok_or(Error::InvalidAmount)
    }

    /// Reserve + yield position, excluding illiquid deal principal
    pub fn get_available_balance(env: Env) -> Result<i128, Error> {
        Self::holdings(&env)?.available().ok_or(Error::InvalidAmount)
    }

    pub fn reserve_balance(env: Env) -> i128 {
        Self::read_reserve(&env)
    }

    /// Current value of the yield position
    pub fn defi_balance(env: Env) -> Result<i128, Error> {
        let adapter = Self::read_address(&env, &DataKey::YieldAdapter)?;
        Ok(YieldAdapterClient::new(&env, &adapter).current_balance())
    }

    /// Stablecoin value of `share_amount` at the current exchange rate
    pub fn convert_lp_to_usdc(env: Env, share_amount: i128) -> Result<i128, Error> {
        if share_amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let share_token = Self::read_address(&env, &DataKey::ShareToken)?;
        let total_balance = Self::get_total_balance(env.clone())?;
        let total_supply = Self::total_shares(&env, &share_token);

        calculate_share_value(share_amount, total_supply, total_balance).ok_or(Error::InvalidAmount)
    }

    /// Shares a deposit of `amount` would mint right now
    pub fn calculate_usdc_to_lp(env: Env, amount: i128) -> Result<i128, Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let share_token = Self::read_address(&env, &DataKey::ShareToken)?;
        let total_balance = Self::get_total_balance(env.clone())?;
        let total_supply = Self::total_shares(&env, &share_token);

        calculate_shares_for_deposit(amount, total_supply, total_balance)
            .ok_or(Error::InvalidAmount)
    }

    /// Position of `user` together with pool-wide totals
    pub fn get_pool_data(env: Env, user: Address) -> Result<PoolData, Error> {
        let share_token = Self::read_address(&env, &DataKey::ShareToken)?;
        let total_balance = Self::get_total_balance(env.clone())?;
        let total_shares = Self::total_shares(&env, &share_token);
        let user_shares = Self::share_balance(&env, &share_token, &user);
        let user_value = calculate_share_value(user_shares, total_shares, total_balance)
            .ok_or(Error::InvalidAmount)?;

        Ok(PoolData {
            share_token,
            user_shares,
            user_value,
            total_balance,
            total_shares,
        })
    }

    /// Address of the yield adapter
    pub fn aave_pool(env: Env) -> Result<Address, Error> {
        Self::read_address(&env, &DataKey::YieldAdapter)
    }

    pub fn repayment_pool(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::RepaymentPool)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Self::read_address(&env, &DataKey::Owner)
    }

    pub fn share_token(env: Env) -> Result<Address, Error> {
        Self::read_address(&env, &DataKey::ShareToken)
    }

    pub fn stablecoin(env: Env) -> Result<Address, Error> {
        Self::read_address(&env, &DataKey::Stablecoin)
    }

    pub fn reserve_ratio(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::ReserveRatio)
            .unwrap_or(BASIS_POINTS)
    }

    pub fn get_accounting(env: Env) -> VaultAccounting {
        env.storage()
            .instance()
            .get::<DataKey, VaultAccounting>(&DataKey::Accounting)
            .unwrap_or_default()
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn read_address(env: &Env, key: &DataKey) -> Result<Address, Error> {
        env.storage().instance().get(key).ok_or(Error::NotInitialized)
    }

    fn read_reserve(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Reserve)
            .unwrap_or(0)
    }

    fn write_reserve(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::Reserve, &amount);
    }

    fn write_accounting(env: &Env, accounting: &VaultAccounting) {
        env.storage()
            .instance()
            .set(&DataKey::Accounting, accounting);
    }

    /// Authorize `caller` and check it holds the owner role.
    fn require_owner(env: &Env, caller: &Address) -> Result<Address, Error> {
        let owner = Self::read_address(env, &DataKey::Owner)?;
        caller.require_auth();

        if *caller != owner {
            return Err(Error::Unauthorized);
        }
        Ok(owner)
    }

    fn require_repayment_pool(env: &Env, ledger: &Address) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }

        let registered: Address = env
            .storage()
            .instance()
            .get(&DataKey::RepaymentPool)
            .ok_or(Error::NotRegistered)?;
        ledger.require_auth();

        if *ledger != registered {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    fn holdings(env: &Env) -> Result<Holdings, Error> {
        let adapter = Self::read_address(env, &DataKey::YieldAdapter)?;

        Ok(Holdings {
            reserve: Self::read_reserve(env),
            yield_position: YieldAdapterClient::new(env, &adapter).current_balance(),
            outstanding_principal: Self::outstanding_principal(env),
        })
    }

    fn outstanding_principal(env: &Env) -> i128 {
        match env
            .storage()
            .instance()
            .get::<DataKey, Address>(&DataKey::RepaymentPool)
        {
            Some(ledger) => env.invoke_contract::<i128>(
                &ledger,
                &Symbol::new(env, "total_outstanding"),
                Vec::new(env),
            ),
            None => 0,
        }
    }

    fn total_shares(env: &Env, share_token: &Address) -> i128 {
        env.invoke_contract::<i128>(
            share_token,
            &Symbol::new(env, "total_supply"),
            Vec::new(env),
        )
    }

    fn share_balance(env: &Env, share_token: &Address, holder: &Address) -> i128 {
        env.invoke_contract::<i128>(
            share_token,
            &Symbol::new(env, "balance_of"),
            vec![env, holder.to_val()],
        )
    }

    fn mint_shares(env: &Env, share_token: &Address, to: &Address, amount: i128) {
        env.invoke_contract::<()>(
            share_token,
            &Symbol::new(env, "mint"),
            vec![
                env,
                env.current_contract_address().to_val(),
                to.to_val(),
                amount.into_val(env),
            ],
        );
    }

    fn burn_shares(env: &Env, share_token: &Address, from: &Address, amount: i128) {
        env.invoke_contract::<()>(
            share_token,
            &Symbol::new(env, "burn"),
            vec![
                env,
                env.current_contract_address().to_val(),
                from.to_val(),
                amount.into_val(env),
            ],
        );
    }
}
