use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct DepositedEvent {
    pub from: Address,
    pub on_behalf_of: Address,
    pub amount: i128,
    pub shares_minted: i128,
    pub supplied_to_yield: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RedeemedEvent {
    pub user: Address,
    pub shares_burned: i128,
    pub payout: i128,
    pub withdrawn_from_yield: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct YieldMovedEvent {
    /// Positive when funds went into the yield position, negative when pulled back
    pub amount: i128,
    pub reserve_after: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DealFundedEvent {
    pub ledger: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RepaymentReceivedEvent {
    pub ledger: Address,
    pub payer: Address,
    pub principal: i128,
    pub interest: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RepaymentPoolSetEvent {
    pub ledger: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous: Address,
    pub new_owner: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SkimmedEvent {
    pub amount: i128,
    pub reserve_after: i128,
}
