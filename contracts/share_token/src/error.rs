use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,
    InvalidAddress = 4,

    // Balance errors
    InvalidAmount = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
}
