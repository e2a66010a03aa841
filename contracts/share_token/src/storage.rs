use soroban_sdk::{contracttype, Address, Env, String};

/// Spending permission granted by a holder to a spender.
///
/// `Unlimited` is never decremented by `transfer_from`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Allowance {
    Finite(i128),
    Unlimited,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Controller,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address), // (owner, spender)
    Initialized,
}

pub fn read_balance(env: &Env, holder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get::<DataKey, i128>(&DataKey::Balance(holder.clone()))
        .unwrap_or(0)
}

/// Zero balances are removed rather than stored.
pub fn write_balance(env: &Env, holder: &Address, amount: i128) {
    let key = DataKey::Balance(holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> Allowance {
    env.storage()
        .persistent()
        .get::<DataKey, Allowance>(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(Allowance::Finite(0))
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, allowance: &Allowance) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if *allowance == Allowance::Finite(0) {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, allowance);
    }
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get::<DataKey, i128>(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &amount);
}
