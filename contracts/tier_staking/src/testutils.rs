//! Test fixtures shared by the unit tests and the fuzz target.
//!
//! [`MockReservoir`] pays rewards out of its own token balance.
//! [`Harness`] deploys a ledger wired to Stellar Asset Contract tokens and a
//! funded reservoir, with the ledger clock parked at [`START_DAY`].

extern crate std;

use common::clock;
use soroban_sdk::{
    contract, contractimpl,
    testutils::{Address as _, Ledger as _},
    token::{self, StellarAssetClient},
    Address, Env,
};

use crate::{GlobalConfig, TierParams, TierStakingContract, TierStakingContractClient};

/// One whole token at seven decimals.
pub const UNIT: i128 = 10_000_000;

/// Day the harness clock starts on.
pub const START_DAY: u64 = 19_000;

/// Reward float minted into the reservoir for each reward token.
pub const RESERVOIR_FLOAT: i128 = 1_000_000_000_000 * UNIT;

#[contract]
pub struct MockReservoir;

#[contractimpl]
impl MockReservoir {
    pub fn disburse(env: Env, token: Address, to: Address, amount: i128) {
        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);
    }
}

/// The catalog the member pool shipped with, at seven decimals.
///
/// | index | name     | bounds (tokens)      | lock | day rate  |
/// |-------|----------|----------------------|------|-----------|
/// | 1     | Silver   | 1 000 – 9 999        | 30   | 10 000    |
/// | 2     | Gold     | 10 000 – 49 999      | 90   | 100 000   |
/// | 3     | Platinum | 50 000 – 99 999      | 180  | 1 000 000 |
/// | 4     | Diamond  | 100 000 – 700 000 000| 360  | 10 000 000|
pub fn member_tiers() -> [TierParams; 4] {
    let tier = |min: i128, max: i128, lock_days: u32, rate: i128| TierParams {
        min_amount: min * UNIT,
        max_amount: max * UNIT,
        lock_days,
        day_rate_a: rate,
        day_rate_b: rate,
    };
    [
        tier(1_000, 9_999, 30, 10_000),
        tier(10_000, 49_999, 90, 100_000),
        tier(50_000, 99_999, 180, 1_000_000),
        tier(100_000, 700_000_000, 360, 10_000_000),
    ]
}

pub struct Harness {
    pub env: Env,
    pub client: TierStakingContractClient<'static>,
    pub contract_id: Address,
    pub owner: Address,
    pub deposit_token: Address,
    pub reward_token_a: Address,
    pub reward_token_b: Address,
    pub reservoir: Address,
}

impl Harness {
    /// Ledger with horizon at `START_DAY + 1000`, cutoff at `START_DAY + 500`
    /// and rate scales of 10 000. The catalog holds only the sentinel.
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Like [`Harness::new`], letting the caller adjust the configuration
    /// before initialisation.
    pub fn with_config(adjust: impl FnOnce(&mut GlobalConfig)) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(clock::day_start(START_DAY));

        let deposit_token = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let reward_token_a = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();
        let reward_token_b = env
            .register_stellar_asset_contract_v2(Address::generate(&env))
            .address();

        let reservoir = env.register(MockReservoir, ());
        StellarAssetClient::new(&env, &reward_token_a).mint(&reservoir, &RESERVOIR_FLOAT);
        StellarAssetClient::new(&env, &reward_token_b).mint(&reservoir, &RESERVOIR_FLOAT);

        let contract_id = env.register(TierStakingContract, ());
        let client = TierStakingContractClient::new(&env, &contract_id);

        let mut config = GlobalConfig {
            deposit_token: deposit_token.clone(),
            reward_token_a: reward_token_a.clone(),
            reward_token_b: reward_token_b.clone(),
            reservoir: reservoir.clone(),
            horizon_day: START_DAY + 1_000,
            deposit_cutoff_day: START_DAY + 500,
            deposit_enabled: true,
            rate_scale_a: 10_000,
            rate_scale_b: 10_000,
        };
        adjust(&mut config);

        let owner = Address::generate(&env);
        client.initialize(&owner, &config);

        Harness {
            env,
            client,
            contract_id,
            owner,
            deposit_token,
            reward_token_a,
            reward_token_b,
            reservoir,
        }
    }

    /// Harness with [`member_tiers`] installed at indices 1 to 4.
    pub fn with_member_tiers() -> Self {
        let harness = Self::new();
        for params in member_tiers().iter() {
            harness.client.add_tier(&harness.owner, params);
        }
        harness
    }

    pub fn today(&self) -> u64 {
        clock::current_day(&self.env)
    }

    pub fn set_day(&self, day: u64) {
        self.env.ledger().set_timestamp(clock::day_start(day));
    }

    pub fn advance_days(&self, days: u64) {
        self.set_day(self.today() + days);
    }

    /// A fresh account holding `amount` of the deposit token.
    pub fn funded_account(&self, amount: i128) -> Address {
        let account = Address::generate(&self.env);
        self.mint_deposit(&account, amount);
        account
    }

    pub fn mint_deposit(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.deposit_token).mint(to, &amount);
    }

    pub fn balance(&self, token: &Address, who: &Address) -> i128 {
        token::Client::new(&self.env, token).balance(who)
    }

    /// Move the reservoir's whole float of both reward tokens elsewhere.
    pub fn drain_reservoir(&self) {
        let sink = Address::generate(&self.env);
        for reward_token in [&self.reward_token_a, &self.reward_token_b] {
            let float = self.balance(reward_token, &self.reservoir);
            self.env.as_contract(&self.reservoir, || {
                token::Client::new(&self.env, reward_token)
                    .transfer(&self.reservoir, &sink, &float);
            });
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
