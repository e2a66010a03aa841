use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug)]
pub struct DealCreatedEvent {
    pub deal_id: u64,
    pub principal: i128,
    pub recipient: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub term_months: u32,
    pub interest_rate_bps: u32,
    pub label: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DealRepaidEvent {
    pub deal_id: u64,
    pub payer: Address,
    pub amount: i128,
    pub interest: i128,
    pub outstanding: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct DealClosedEvent {
    pub deal_id: u64,
    pub interest_paid: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct OwnershipTransferredEvent {
    pub previous: Address,
    pub new_owner: Address,
}
