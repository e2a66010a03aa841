use soroban_sdk::{contractclient, Address, Env};

/// The vault entry points the ledger is allowed to use.
///
/// None of them call back into the ledger.
#[contractclient(name = "VaultClient")]
pub trait VaultInterface {
    /// Reserve available for deal funding
    fn reserve_balance(env: Env) -> i128;

    /// Send `amount` of reserve to `recipient`
    fn fund_deal(env: Env, ledger: Address, recipient: Address, amount: i128);

    /// Pull `principal + interest` from `payer` into the reserve
    fn receive_repayment(env: Env, ledger: Address, payer: Address, principal: i128, interest: i128);
}
