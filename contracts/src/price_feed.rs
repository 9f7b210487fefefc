//! Price oracle adapter.
//!
//! Wraps an aggregator-style feed (same shape as a Chainlink `AggregatorV3`)
//! and converts native token amounts into 18-decimal USD.

use soroban_sdk::{contractclient, log, Address, Env, I256};

use crate::errors::FundingError;
use crate::types::{PriceReading, RoundData};

/// Decimals of the native unit being funded (wei-style)
pub const NATIVE_DECIMALS: u32 = 18;
/// Decimals of the USD value compared against the minimum
pub const USD_DECIMALS: u32 = 18;
/// Largest feed precision we accept; anything above is treated as garbage
const MAX_FEED_DECIMALS: u32 = 38;

/// Interface every price feed contract must expose
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn decimals(env: Env) -> u32;
    fn latest_round_data(env: Env) -> RoundData;
    fn version(env: Env) -> u32;
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// Feed missing, failing, or reporting a non-positive/incomplete answer
    Unavailable,
}

impl From<OracleError> for FundingError {
    fn from(_: OracleError) -> Self {
        FundingError::PriceUnavailable
    }
}

/// Reads the latest price from `feed`.
///
/// Every failure of the cross-contract call is caught and reported as
/// `OracleError::Unavailable`, never as a zero price.
pub fn latest_price(env: &Env, feed: &Address) -> Result<PriceReading, OracleError> {
    let client = PriceFeedClient::new(env, feed);

    let decimals = match client.try_decimals() {
        Ok(Ok(decimals)) => decimals,
        _ => {
            log!(env, "price feed decimals call failed", feed.clone());
            return Err(OracleError::Unavailable);
        }
    };

    let round = match client.try_latest_round_data() {
        Ok(Ok(round)) => round,
        _ => {
            log!(env, "price feed round call failed", feed.clone());
            return Err(OracleError::Unavailable);
        }
    };

    if round.answer <= 0 || round.updated_at == 0 || decimals > MAX_FEED_DECIMALS {
        log!(env, "price feed answer rejected", round.answer, round.updated_at, decimals);
        return Err(OracleError::Unavailable);
    }

    Ok(PriceReading {
        price: round.answer,
        decimals,
    })
}

/// Returns the feed's interface version
pub fn feed_version(env: &Env, feed: &Address) -> Result<u32, OracleError> {
    match PriceFeedClient::new(env, feed).try_version() {
        Ok(Ok(version)) => Ok(version),
        _ => Err(OracleError::Unavailable),
    }
}

/// Converts a native amount into USD with `USD_DECIMALS` precision.
///
/// Formula: usd = amount * price / 10^(NATIVE_DECIMALS + decimals - USD_DECIMALS)
/// The product is formed in 256 bits and the division truncates, so a
/// contribution is never rounded up past the minimum.
pub fn to_usd(env: &Env, amount: i128, reading: &PriceReading) -> Result<i128, FundingError> {
    let ten = I256::from_i128(env, 10);
    let product = I256::from_i128(env, amount).mul(&I256::from_i128(env, reading.price));

    let source_decimals = NATIVE_DECIMALS + reading.decimals;
    let value = if source_decimals >= USD_DECIMALS {
        product.div(&ten.pow(source_decimals - USD_DECIMALS))
    } else {
        product.mul(&ten.pow(USD_DECIMALS - source_decimals))
    };

    value.to_i128().ok_or(FundingError::Overflow)
}
