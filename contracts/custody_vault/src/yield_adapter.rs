use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external yield venue the vault places idle funds with.
///
/// The adapter is expected to accept `supply` and `withdraw` only from its
/// vault. Its balance may grow without any local transaction, so the vault
/// re-reads `current_balance` on every total-balance computation.
#[contractclient(name = "YieldAdapterClient")]
pub trait YieldAdapterInterface {
    /// Register `amount` the vault has just pushed to the adapter
    fn supply(env: Env, amount: i128);

    /// Send `amount` to `to`, returning what was actually sent
    fn withdraw(env: Env, amount: i128, to: Address) -> i128;

    /// Current value of the position, including accrued yield
    fn current_balance(env: Env) -> i128;
}
