//! Tests for contract construction and the read-only surface.

use super::{setup, MINIMUM_USD};
use crate::errors::FundingError;

#[test]
fn test_constructor_sets_price_feed() {
    let s = setup();

    // The ledger must query exactly the feed it was deployed with
    assert_eq!(s.client.price_feed(), s.feed.address);
}

#[test]
fn test_constructor_sets_owner_token_and_minimum() {
    let s = setup();

    assert_eq!(s.client.owner(), s.owner);
    assert_eq!(s.client.native_token(), s.token.address);
    assert_eq!(s.client.minimum_usd(), MINIMUM_USD);
}

#[test]
fn test_new_ledger_is_empty() {
    let s = setup();

    assert_eq!(s.client.contributor_count(), 0);
    assert_eq!(s.client.balance(), 0);
    assert_eq!(s.client.amount_funded_by(&s.owner), 0);

    let result = s.client.try_contributor_at(&0);
    assert_eq!(result, Err(Ok(FundingError::IndexOutOfRange)));
}

#[test]
fn test_price_feed_version() {
    let s = setup();

    assert_eq!(s.client.price_feed_version(), 0);
}
