#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Deployment shared by the contract-level property tests.

use common::clock;
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger as _},
    token::{self, StellarAssetClient},
    Address, Env,
};
use tier_staking::{GlobalConfig, TierParams, TierStakingContract, TierStakingContractClient};

pub const UNIT: i128 = 10_000_000;
pub const START_DAY: u64 = 19_000;

#[contract]
pub struct Reservoir;

#[contractimpl]
impl Reservoir {
    pub fn disburse(env: Env, token: Address, to: Address, amount: i128) {
        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);
    }
}

pub struct Setup {
    pub env: Env,
    pub client: TierStakingContractClient<'static>,
    pub contract_id: Address,
    pub owner: Address,
    pub deposit_token: Address,
}

pub fn tier(min: i128, max: i128, lock_days: u32, rate: i128) -> TierParams {
    TierParams {
        min_amount: min * UNIT,
        max_amount: max * UNIT,
        lock_days,
        day_rate_a: rate,
        day_rate_b: rate / 10,
    }
}

/// Ledger with four tiers at indices 1 to 4, cutoff at `START_DAY + 500` and
/// horizon at `START_DAY + 1000`.
pub fn setup() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    set_day(&env, START_DAY);

    let deposit_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token_a = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token_b = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let reservoir = env.register(Reservoir, ());
    StellarAssetClient::new(&env, &reward_token_a).mint(&reservoir, &(i128::MAX / 4));
    StellarAssetClient::new(&env, &reward_token_b).mint(&reservoir, &(i128::MAX / 4));

    let contract_id = env.register(TierStakingContract, ());
    let client = TierStakingContractClient::new(&env, &contract_id);
    let owner = Address::generate(&env);

    client.initialize(
        &owner,
        &GlobalConfig {
            deposit_token: deposit_token.clone(),
            reward_token_a,
            reward_token_b,
            reservoir,
            horizon_day: START_DAY + 1_000,
            deposit_cutoff_day: START_DAY + 500,
            deposit_enabled: true,
            rate_scale_a: 10_000,
            rate_scale_b: 1_000,
        },
    );

    for params in [
        tier(1_000, 9_999, 30, 10_000),
        tier(10_000, 49_999, 90, 100_000),
        tier(50_000, 99_999, 180, 1_000_000),
        tier(100_000, 700_000_000, 360, 10_000_000),
    ] {
        client.add_tier(&owner, &params);
    }

    Setup {
        env,
        client,
        contract_id,
        owner,
        deposit_token,
    }
}

pub fn set_day(env: &Env, day: u64) {
    env.ledger().set_timestamp(clock::day_start(day));
}

impl Setup {
    pub fn funded_account(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.deposit_token).mint(&account, &amount);
        account
    }

    pub fn custody_balance(&self) -> i128 {
        token::Client::new(&self.env, &self.deposit_token).balance(&self.contract_id)
    }
}
