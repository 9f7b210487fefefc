//! Type definitions for the FundMe crowdfunding ledger.

use soroban_sdk::{contracttype, Address};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Funders,
    AmountFunded(Address),
}

/// Immutable settings fixed by the constructor
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub owner: Address,
    pub price_feed: Address,
    pub native_token: Address,
    pub minimum_usd: i128, // 18-decimal fixed point, 50 USD = 50 * 10^18
}

/// Answer returned by an aggregator-style price feed
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RoundData {
    pub round_id: u128,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u128,
}

/// Price snapshot taken on each funding attempt, never stored
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceReading {
    pub price: i128,
    pub decimals: u32,
}
