//! Global configuration and the guardrails on changing it.
//!
//! The configuration is loaded once per invocation and passed by reference to
//! every helper that needs it. The guard methods here are pure: they take the
//! current day (and any other live state) as arguments so they can be checked
//! without a deployed contract.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{accrual::Denomination, ContractError};

const CONFIG: Symbol = symbol_short!("CONFIG");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalConfig {
    /// Token accounts lock into a tier.
    pub deposit_token: Address,
    /// Token paid out for denomination A.
    pub reward_token_a: Address,
    /// Token paid out for denomination B.
    pub reward_token_b: Address,
    /// Contract that funds reward payouts.
    pub reservoir: Address,
    /// Last day for which rewards accrue. Once passed it is frozen.
    pub horizon_day: u64,
    /// Last day on which deposits are accepted.
    pub deposit_cutoff_day: u64,
    /// Owner switch over deposits, independent of the cutoff day.
    pub deposit_enabled: bool,
    /// Smallest nonzero day rate a tier may declare for denomination A.
    pub rate_scale_a: i128,
    /// Smallest nonzero day rate a tier may declare for denomination B.
    pub rate_scale_b: i128,
}

impl GlobalConfig {
    /// Checks applied to the configuration supplied at initialisation.
    pub fn validate(&self, current_day: u64) -> Result<(), ContractError> {
        if self.rate_scale_a <= 0 || self.rate_scale_b <= 0 {
            return Err(ContractError::InvalidRateScale);
        }
        if self.horizon_day < current_day {
            return Err(ContractError::HorizonBeforeNow);
        }
        Ok(())
    }

    pub fn rate_scale(&self, denomination: Denomination) -> i128 {
        match denomination {
            Denomination::A => self.rate_scale_a,
            Denomination::B => self.rate_scale_b,
        }
    }

    pub fn reward_token(&self, denomination: Denomination) -> &Address {
        match denomination {
            Denomination::A => &self.reward_token_a,
            Denomination::B => &self.reward_token_b,
        }
    }

    /// Tokens whose custody balance backs positions or payouts.
    pub fn is_staked_token(&self, token: &Address) -> bool {
        *token == self.deposit_token
            || *token == self.reward_token_a
            || *token == self.reward_token_b
    }

    pub fn check_deposits_open(&self, current_day: u64) -> Result<(), ContractError> {
        if !self.deposit_enabled || current_day > self.deposit_cutoff_day {
            return Err(ContractError::DepositsClosed);
        }
        Ok(())
    }

    /// A horizon that has been passed can never move again; one that has not
    /// may move anywhere from today onwards.
    pub fn check_horizon_update(
        &self,
        new_day: u64,
        current_day: u64,
    ) -> Result<(), ContractError> {
        if current_day > self.horizon_day {
            return Err(ContractError::HorizonAlreadyEnded);
        }
        if new_day < current_day {
            return Err(ContractError::HorizonBeforeNow);
        }
        Ok(())
    }

    /// Rate scales may only change once deposits have closed and no
    /// principal is assigned to any tier.
    pub fn check_rate_scale_update(
        &self,
        scale_a: i128,
        scale_b: i128,
        current_day: u64,
        positions_live: bool,
    ) -> Result<(), ContractError> {
        if scale_a <= 0 || scale_b <= 0 {
            return Err(ContractError::InvalidRateScale);
        }
        if self.deposit_cutoff_day > current_day {
            return Err(ContractError::DepositsStillOpen);
        }
        if positions_live {
            return Err(ContractError::PositionsStillLive);
        }
        Ok(())
    }
}

pub fn load(env: &Env) -> Result<GlobalConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn store(env: &Env, config: &GlobalConfig) {
    env.storage().instance().set(&CONFIG, config);
}
