//! Core contract implementation for the FundMe crowdfunding ledger.

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

use crate::errors::FundingError;
use crate::events::{Funded, Withdrawn};
use crate::price_feed;
use crate::storage;
use crate::types::Config;

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Creates the ledger. Owner, feed, token and minimum never change afterwards.
    pub fn __constructor(
        env: Env,
        owner: Address,
        price_feed: Address,
        native_token: Address,
        minimum_usd: i128,
    ) {
        let config = Config {
            owner,
            price_feed,
            native_token,
            minimum_usd,
        };
        storage::set_config(&env, &config);
    }

    /// Accepts a contribution worth at least the USD minimum
    pub fn fund(env: Env, sender: Address, amount: i128) -> Result<(), FundingError> {
        sender.require_auth();

        let config = storage::config(&env)?;
        let reading = price_feed::latest_price(&env, &config.price_feed)?;

        if amount <= 0 {
            log!(&env, "contribution not positive", sender, amount);
            return Err(FundingError::BelowMinimum);
        }

        let usd_value = price_feed::to_usd(&env, amount, &reading)?;
        if usd_value < config.minimum_usd {
            log!(&env, "contribution below minimum", sender, amount, usd_value);
            return Err(FundingError::BelowMinimum);
        }

        let new_total = storage::amount_funded(&env, sender.clone())
            .checked_add(amount)
            .ok_or(FundingError::Overflow)?;

        let token_client = token::Client::new(&env, &config.native_token);
        let contract_address = env.current_contract_address();
        if !matches!(
            token_client.try_transfer(&sender, &contract_address, &amount),
            Ok(Ok(()))
        ) {
            log!(&env, "incoming transfer failed", sender, amount);
            return Err(FundingError::TransferFailed);
        }

        storage::set_amount_funded(&env, sender.clone(), new_total);

        let mut funders = storage::funders(&env);
        if !funders.contains(&sender) {
            funders.push_back(sender.clone());
            storage::set_funders(&env, &funders);
        }

        Funded {
            sender,
            amount,
            usd_value,
        }
        .publish(&env);

        Ok(())
    }

    /// Sends the whole balance to the owner and resets the ledger (owner only)
    pub fn withdraw(env: Env, caller: Address) -> Result<(), FundingError> {
        let config = storage::config(&env)?;

        if caller != config.owner {
            log!(&env, "withdraw rejected for non-owner", caller);
            return Err(FundingError::NotOwner);
        }

        caller.require_auth();

        let token_client = token::Client::new(&env, &config.native_token);
        let contract_address = env.current_contract_address();
        let held = token_client.balance(&contract_address);

        // Bookkeeping is cleared before value leaves; a failed transfer restores it.
        let funders = storage::funders(&env);
        let mut amounts: Vec<i128> = Vec::new(&env);
        for funder in funders.iter() {
            amounts.push_back(storage::amount_funded(&env, funder.clone()));
            storage::set_amount_funded(&env, funder, 0);
        }
        storage::set_funders(&env, &Vec::new(&env));

        if held > 0
            && !matches!(
                token_client.try_transfer(&contract_address, &config.owner, &held),
                Ok(Ok(()))
            )
        {
            log!(&env, "withdraw transfer failed", held);
            for (funder, amount) in funders.iter().zip(amounts.iter()) {
                storage::set_amount_funded(&env, funder, amount);
            }
            storage::set_funders(&env, &funders);
            return Err(FundingError::TransferFailed);
        }

        Withdrawn {
            owner: config.owner,
            amount: held,
        }
        .publish(&env);

        Ok(())
    }

    /// Returns the cumulative contribution of `funder` since the last withdrawal
    pub fn amount_funded_by(env: Env, funder: Address) -> i128 {
        storage::amount_funded(&env, funder)
    }

    /// Returns the funder at `index`, in order of first contribution
    pub fn contributor_at(env: Env, index: u32) -> Result<Address, FundingError> {
        storage::funders(&env)
            .get(index)
            .ok_or(FundingError::IndexOutOfRange)
    }

    pub fn contributor_count(env: Env) -> u32 {
        storage::funders(&env).len()
    }

    pub fn owner(env: Env) -> Result<Address, FundingError> {
        Ok(storage::config(&env)?.owner)
    }

    pub fn price_feed(env: Env) -> Result<Address, FundingError> {
        Ok(storage::config(&env)?.price_feed)
    }

    pub fn native_token(env: Env) -> Result<Address, FundingError> {
        Ok(storage::config(&env)?.native_token)
    }

    pub fn minimum_usd(env: Env) -> Result<i128, FundingError> {
        Ok(storage::config(&env)?.minimum_usd)
    }

    /// Returns the native token balance actually held by the contract
    pub fn balance(env: Env) -> Result<i128, FundingError> {
        let config = storage::config(&env)?;
        let token_client = token::Client::new(&env, &config.native_token);
        Ok(token_client.balance(&env.current_contract_address()))
    }

    /// Returns what `amount` is worth in 18-decimal USD at the current feed price
    pub fn conversion_rate(env: Env, amount: i128) -> Result<i128, FundingError> {
        let config = storage::config(&env)?;
        let reading = price_feed::latest_price(&env, &config.price_feed)?;
        price_feed::to_usd(&env, amount, &reading)
    }

    /// Returns the version reported by the configured price feed
    pub fn price_feed_version(env: Env) -> Result<u32, FundingError> {
        let config = storage::config(&env)?;
        Ok(price_feed::feed_version(&env, &config.price_feed)?)
    }
}
