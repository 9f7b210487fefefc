#![no_std]
//! # FundMe
//!
//! Soroban crowdfunding ledger. Contributors fund the contract with the
//! native token, the owner withdraws everything at once.
//!
//! ## Key Features
//! - Minimum contribution enforced in USD via an external price feed
//! - Cumulative per-funder accounting with first-contribution ordering
//! - Owner-only, all-or-nothing withdrawal that resets the ledger
//! - Checked arithmetic prevents overflow

mod contract;
mod errors;
mod events;
mod price_feed;
mod storage;
mod types;

#[cfg(test)]
mod tests;

pub use contract::{FundMe, FundMeClient};
pub use errors::FundingError;
pub use events::{Funded, Withdrawn};
pub use price_feed::{OracleError, PriceFeed, PriceFeedClient, NATIVE_DECIMALS, USD_DECIMALS};
pub use types::{Config, DataKey, PriceReading, RoundData};
