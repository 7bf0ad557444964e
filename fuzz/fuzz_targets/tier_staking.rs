#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{token, Address};
use tier_staking::testutils::{Harness, UNIT};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { tier: u8, amount: u64 },
    Withdraw { amount: u64 },
    Harvest,
    AdvanceDays { days: u16 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let h = Harness::with_member_tiers();

    let users: Vec<Address> = (0..4)
        .map(|_| h.funded_account(1_000_000_000 * UNIT))
        .collect();

    // Failed calls are fine; panics and broken custody accounting are not.
    for (i, action) in actions.into_iter().enumerate() {
        let user = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { tier, amount } => {
                let _ = h.client.try_deposit(user, &u32::from(tier % 6), &i128::from(amount));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = h.client.try_withdraw(user, &i128::from(amount));
            }
            FuzzAction::Harvest => {
                let _ = h.client.try_harvest(user);
            }
            FuzzAction::AdvanceDays { days } => {
                h.advance_days(u64::from(days));
            }
        }

        let assigned: i128 = (0..h.client.tier_count())
            .map(|index| h.client.get_tier(&index).total_deposited)
            .sum();
        let held = token::Client::new(&h.env, &h.deposit_token).balance(&h.contract_id);
        assert_eq!(assigned, held);
    }
});
