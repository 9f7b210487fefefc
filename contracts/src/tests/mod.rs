//! Test modules for the FundMe contract.

mod construction;

use crate::contract::{FundMe, FundMeClient};
use doubles::{MockV3Aggregator, MockV3AggregatorClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

/// Feed precision used by the deploy mocks
pub(crate) const DECIMALS: u32 = 8;
/// $2000 with 8 decimals
pub(crate) const INITIAL_ANSWER: i128 = 2000_00000000;
/// $50 with 18 decimals
pub(crate) const MINIMUM_USD: i128 = 50_000000000000000000;
pub(crate) const ONE_ETHER: i128 = 1_000000000000000000;

pub(crate) struct Setup<'a> {
    pub env: Env,
    pub client: FundMeClient<'a>,
    pub owner: Address,
    pub feed: MockV3AggregatorClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

impl Setup<'_> {
    /// Generates a funder holding `balance` of the native token
    pub fn funder(&self, balance: i128) -> Address {
        let funder = Address::generate(&self.env);
        self.token_admin.mint(&funder, &balance);
        funder
    }
}

/// Env with auths mocked and a nonzero ledger time
pub(crate) fn test_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();

    // Feed rounds are stamped with ledger time; zero means "never updated"
    env.ledger().with_mut(|li| {
        li.timestamp = 1_700_000_000;
    });

    env
}

/// Deploys a feed reporting $2000 and a FundMe with a $50 minimum
pub(crate) fn setup<'a>() -> Setup<'a> {
    let env = test_env();

    let feed_id = env.register(MockV3Aggregator, (DECIMALS, INITIAL_ANSWER));
    let token_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let owner = Address::generate(&env);
    let contract_id = env.register(
        FundMe,
        (owner.clone(), feed_id.clone(), token_id.clone(), MINIMUM_USD),
    );

    Setup {
        client: FundMeClient::new(&env, &contract_id),
        feed: MockV3AggregatorClient::new(&env, &feed_id),
        token: TokenClient::new(&env, &token_id),
        token_admin: StellarAssetClient::new(&env, &token_id),
        owner,
        env,
    }
}
