//! Interface to the contract that funds reward payouts.
//!
//! The ledger never holds reward float of its own. Each settlement asks the
//! reservoir to send the owed amount of a reward token straight to the
//! account. A distributor or treasury contract can sit behind this interface.

use soroban_sdk::{contractclient, Address, Env};

use crate::{
    accrual::{Accrued, Denomination},
    config::GlobalConfig,
};

#[contractclient(name = "ReservoirClient")]
pub trait RewardReservoir {
    /// Send `amount` of `token` to `to`. Implementations are expected to
    /// authenticate the calling ledger.
    fn disburse(env: Env, token: Address, to: Address, amount: i128);
}

/// Pay every nonzero denomination in `owed` to `to`.
///
/// Callers must have written all ledger state before calling this.
pub fn pay_out(env: &Env, config: &GlobalConfig, to: &Address, owed: &Accrued) {
    let reservoir = ReservoirClient::new(env, &config.reservoir);
    for denomination in [Denomination::A, Denomination::B] {
        let amount = owed.get(denomination);
        if amount > 0 {
            reservoir.disburse(config.reward_token(denomination), to, &amount);
        }
    }
}
