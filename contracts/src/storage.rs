//! Typed access to contract storage.
//!
//! Config lives in instance storage and is written once. The ledger itself
//! (per-funder totals and the funder list) lives in persistent storage.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::FundingError;
use crate::types::{Config, DataKey};

pub(crate) fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub(crate) fn config(env: &Env) -> Result<Config, FundingError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(FundingError::NotInitialized)
}

pub(crate) fn funders(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Funders)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn set_funders(env: &Env, funders: &Vec<Address>) {
    if funders.is_empty() {
        env.storage().persistent().remove(&DataKey::Funders);
    } else {
        env.storage().persistent().set(&DataKey::Funders, funders);
    }
}

pub(crate) fn amount_funded(env: &Env, funder: Address) -> i128 {
    let key = DataKey::AmountFunded(funder);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub(crate) fn set_amount_funded(env: &Env, funder: Address, amount: i128) {
    let key = DataKey::AmountFunded(funder);
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}
