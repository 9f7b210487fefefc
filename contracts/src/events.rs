//! Events emitted by the FundMe contract.

use soroban_sdk::{contractevent, Address};

/// A contribution was accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Funded {
    #[topic]
    pub sender: Address,
    pub amount: i128,
    pub usd_value: i128, // 18-decimal USD at the price used for the check
}

/// The owner collected the whole balance
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    #[topic]
    pub owner: Address,
    pub amount: i128,
}
