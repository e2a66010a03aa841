#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use storage::{Allowance, TokenMetadata};

use events::{ApproveEvent, BurnEvent, ControllerTransferredEvent, MintEvent, TransferEvent};
use storage::{
    read_allowance, read_balance, read_total_supply, write_allowance, write_balance,
    write_total_supply, DataKey,
};

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};

#[contract]
pub struct ShareToken;

#[contractimpl]
impl ShareToken {
    /// Initialize the token contract
    ///
    /// The controller is the only identity allowed to mint and burn. It is
    /// normally handed over to the vault right after deployment.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(
        env: Env,
        controller: Address,
        name: String,
        symbol: String,
        decimals: u32,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        controller.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Controller, &controller);
        env.storage().instance().set(
            &DataKey::Metadata,
            &TokenMetadata {
                name,
                symbol,
                decimals,
            },
        );
        write_total_supply(&env, 0);

        Ok(())
    }

    /// Hand mint/burn control to a new identity
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the controller
    /// - `InvalidAddress`: New controller is the token itself
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_controller: Address,
    ) -> Result<(), Error> {
        let controller = Self::require_controller(&env, &caller)?;

        if new_controller == env.current_contract_address() {
            return Err(Error::InvalidAddress);
        }

        env.storage()
            .instance()
            .set(&DataKey::Controller, &new_controller);

        env.events().publish(
            (Symbol::new(&env, "ctrl_xfer"),),
            ControllerTransferredEvent {
                previous: controller,
                new_controller,
            },
        );

        Ok(())
    }

    /// Mint shares (controller only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the controller
    /// - `InvalidAmount`: Amount <= 0
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::require_controller(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let new_balance = read_balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;
        let new_supply = read_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::InvalidAmount)?;

        write_balance(&env, &to, new_balance);
        write_total_supply(&env, new_supply);

        log!(&env, "minted {} shares, supply now {}", amount, new_supply);
        env.events().publish(
            (Symbol::new(&env, "mint"), to.clone()),
            MintEvent {
                to,
                amount,
                total_supply: new_supply,
            },
        );

        Ok(())
    }

    /// Burn shares (controller only)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the controller
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Holder has fewer shares than `amount`
    pub fn burn(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), Error> {
        Self::require_controller(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let current_balance = read_balance(&env, &from);
        if current_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        let new_supply = read_total_supply(&env) - amount;
        write_balance(&env, &from, current_balance - amount);
        write_total_supply(&env, new_supply);

        log!(&env, "burned {} shares, supply now {}", amount, new_supply);
        env.events().publish(
            (Symbol::new(&env, "burn"), from.clone()),
            BurnEvent {
                from,
                amount,
                total_supply: new_supply,
            },
        );

        Ok(())
    }

    /// Transfer shares between holders
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Not enough balance
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        from.require_auth();

        Self::move_balance(&env, &from, &to, amount)
    }

    /// Set the allowance `spender` may move out of `owner`'s balance
    ///
    /// Replaces any previous allowance. `Finite(0)` revokes it.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Negative finite allowance
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        allowance: Allowance,
    ) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        if let Allowance::Finite(amount) = allowance {
            if amount < 0 {
                return Err(Error::InvalidAmount);
            }
        }

        owner.require_auth();

        write_allowance(&env, &owner, &spender, &allowance);

        env.events().publish(
            (Symbol::new(&env, "approve"), owner.clone()),
            ApproveEvent {
                owner,
                spender,
                allowance,
            },
        );

        Ok(())
    }

    /// Move shares on behalf of `from` using a previously granted allowance
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientAllowance`: Allowance below `amount`
    /// - `InsufficientBalance`: Not enough balance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        Self::check_initialized(&env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        spender.require_auth();

        let remaining = match read_allowance(&env, &from, &spender) {
            Allowance::Unlimited => None,
            Allowance::Finite(current) if current >= amount => Some(current - amount),
            Allowance::Finite(_) => return Err(Error::InsufficientAllowance),
        };

        Self::move_balance(&env, &from, &to, amount)?;

        if let Some(remaining) = remaining {
            write_allowance(&env, &from, &spender, &Allowance::Finite(remaining));
        }

        Ok(())
    }

    /// Get share balance of a holder
    pub fn balance_of(env: Env, holder: Address) -> i128 {
        read_balance(&env, &holder)
    }

    /// Get the allowance granted by `owner` to `spender`
    pub fn allowance(env: Env, owner: Address, spender: Address) -> Allowance {
        read_allowance(&env, &owner, &spender)
    }

    /// Total shares outstanding
    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn controller(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Controller)
            .ok_or(Error::NotInitialized)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(Self::metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(Self::metadata(&env)?.decimals)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn check_initialized(env: &Env) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }

    fn metadata(env: &Env) -> Result<TokenMetadata, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Metadata)
            .ok_or(Error::NotInitialized)
    }

    /// Authorize `caller` and check it holds the controller role.
    fn require_controller(env: &Env, caller: &Address) -> Result<Address, Error> {
        let controller: Address = env
            .storage()
            .instance()
            .get(&DataKey::Controller)
            .ok_or(Error::NotInitialized)?;

        caller.require_auth();

        if *caller != controller {
            return Err(Error::Unauthorized);
        }
        Ok(controller)
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
        let from_balance = read_balance(env, from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        if from != to {
            let new_to_balance = read_balance(env, to)
                .checked_add(amount)
                .ok_or(Error::InvalidAmount)?;
            write_balance(env, from, from_balance - amount);
            write_balance(env, to, new_to_balance);
        }

        env.events().publish(
            (Symbol::new(env, "transfer"), from.clone()),
            TransferEvent {
                from: from.clone(),
                to: to.clone(),
                amount,
            },
        );

        Ok(())
    }
}
