extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token::StellarAssetClient,
    xdr, Address, IntoVal, TryFromVal, TryIntoVal, Val, Vec,
};

use crate::{
    events::{
        DepositEvent, EmergencyWithdrawEvent, ForeignTokenSweptEvent, HarvestEvent,
        HorizonUpdatedEvent, RateScaleUpdatedEvent, TierAddedEvent, WithdrawEvent,
    },
    testutils::{member_tiers, Harness, START_DAY, UNIT},
};

const SILVER: u32 = 1;
const GOLD: u32 = 2;

/// Topics and payloads published by the ledger contract itself, oldest first.
fn ledger_events(h: &Harness) -> std::vec::Vec<(Vec<Val>, Val)> {
    let events = h.env.events().all().filter_by_contract(&h.contract_id);
    events
        .events()
        .iter()
        .filter(|event| event.type_ == xdr::ContractEventType::Contract)
        .map(|event| {
            let xdr::ContractEventBody::V0(body) = &event.body;
            let mut topics: Vec<Val> = Vec::new(&h.env);
            for topic in body.topics.iter() {
                topics.push_back(Val::try_from_val(&h.env, topic).unwrap());
            }
            (topics, Val::try_from_val(&h.env, &body.data).unwrap())
        })
        .collect()
}

#[test]
fn test_deposit_after_accrual_emits_harvest_then_deposit() {
    let h = Harness::with_member_tiers();
    let user = h.funded_account(1_500 * UNIT);
    h.client.deposit(&user, &SILVER, &(1_000 * UNIT));

    h.advance_days(30);
    h.client.deposit(&user, &SILVER, &(500 * UNIT));

    let events = ledger_events(&h);
    assert!(events.len() >= 2);
    let (harvest_topics, harvest_data) = events[events.len() - 2].clone();
    let (deposit_topics, deposit_data) = events[events.len() - 1].clone();

    assert_eq!(
        harvest_topics,
        (symbol_short!("HARVEST"), user.clone()).into_val(&h.env)
    );
    let harvest: HarvestEvent = harvest_data.try_into_val(&h.env).unwrap();
    assert_eq!(harvest.account, user);
    assert_eq!(harvest.reward_a, 3 * UNIT / 10);
    assert_eq!(harvest.reward_b, 3 * UNIT / 10);
    assert_eq!(harvest.timestamp, h.env.ledger().timestamp());

    assert_eq!(
        deposit_topics,
        (symbol_short!("DEPOSIT"), user.clone()).into_val(&h.env)
    );
    let deposit: DepositEvent = deposit_data.try_into_val(&h.env).unwrap();
    assert_eq!(deposit.account, user);
    assert_eq!(deposit.tier_index, SILVER);
    assert_eq!(deposit.amount, 500 * UNIT);
}

#[test]
fn test_first_deposit_emits_no_harvest() {
    let h = Harness::with_member_tiers();
    let user = h.funded_account(1_000 * UNIT);
    h.client.deposit(&user, &SILVER, &(1_000 * UNIT));

    let events = ledger_events(&h);
    let harvest_topics: Vec<Val> = (symbol_short!("HARVEST"), user.clone()).into_val(&h.env);
    assert!(events.iter().all(|(topics, _)| *topics != harvest_topics));

    let (topics, _) = events.last().unwrap();
    assert_eq!(
        *topics,
        (symbol_short!("DEPOSIT"), user.clone()).into_val(&h.env)
    );
}

#[test]
fn test_zero_harvest_still_emits_event() {
    let h = Harness::with_member_tiers();
    let user = h.funded_account(1_000 * UNIT);
    h.client.deposit(&user, &SILVER, &(1_000 * UNIT));

    h.client.harvest(&user);

    let events = ledger_events(&h);
    let (topics, data) = events.last().unwrap().clone();
    assert_eq!(
        topics,
        (symbol_short!("HARVEST"), user.clone()).into_val(&h.env)
    );
    let harvest: HarvestEvent = data.try_into_val(&h.env).unwrap();
    assert_eq!(harvest.reward_a, 0);
    assert_eq!(harvest.reward_b, 0);
}

#[test]
fn test_withdraw_emits_harvest_then_withdraw() {
    let h = Harness::with_member_tiers();
    let user = h.funded_account(10_000 * UNIT);
    h.client.deposit(&user, &GOLD, &(10_000 * UNIT));

    h.advance_days(90);
    h.client.withdraw(&user, &(4_000 * UNIT));

    let events = ledger_events(&h);
    assert!(events.len() >= 2);
    let (harvest_topics, harvest_data) = events[events.len() - 2].clone();
    let (withdraw_topics, withdraw_data) = events[events.len() - 1].clone();

    assert_eq!(
        harvest_topics,
        (symbol_short!("HARVEST"), user.clone()).into_val(&h.env)
    );
    let harvest: HarvestEvent = harvest_data.try_into_val(&h.env).unwrap();
    assert_eq!(harvest.reward_a, 90 * UNIT);

    assert_eq!(
        withdraw_topics,
        (symbol_short!("WITHDRAW"), user.clone()).into_val(&h.env)
    );
    let withdraw: WithdrawEvent = withdraw_data.try_into_val(&h.env).unwrap();
    assert_eq!(withdraw.account, user);
    assert_eq!(withdraw.amount, 4_000 * UNIT);
}

#[test]
fn test_tier_added_event_carries_lock_and_index() {
    let h = Harness::new();
    let params = member_tiers()[1].clone();

    let index = h.client.add_tier(&h.owner, &params);

    let events = ledger_events(&h);
    let (topics, data) = events.last().unwrap().clone();
    assert_eq!(topics, (symbol_short!("TIER_ADD"),).into_val(&h.env));
    let added: TierAddedEvent = data.try_into_val(&h.env).unwrap();
    assert_eq!(added.lock_days, 90);
    assert_eq!(added.index, index);
    assert_eq!(added.index, 1);
}

#[test]
fn test_guardrail_events() {
    let h = Harness::with_member_tiers();

    h.client.set_horizon_day(&h.owner, &(START_DAY + 700));
    let (topics, data) = ledger_events(&h).last().unwrap().clone();
    assert_eq!(topics, (symbol_short!("HORIZON"),).into_val(&h.env));
    let horizon: HorizonUpdatedEvent = data.try_into_val(&h.env).unwrap();
    assert_eq!(horizon.day, START_DAY + 700);

    h.set_day(START_DAY + 500);
    h.client.set_rate_scale(&h.owner, &1, &2);
    let (topics, data) = ledger_events(&h).last().unwrap().clone();
    assert_eq!(topics, (symbol_short!("RATE_SCL"),).into_val(&h.env));
    let scales: RateScaleUpdatedEvent = data.try_into_val(&h.env).unwrap();
    assert_eq!(scales.scale_a, 1);
    assert_eq!(scales.scale_b, 2);
}

#[test]
fn test_recovery_events() {
    let h = Harness::with_member_tiers();
    let user = h.funded_account(1_000 * UNIT);
    h.client.deposit(&user, &SILVER, &(1_000 * UNIT));

    h.client.emergency_withdraw(&h.owner, &user);
    let (topics, data) = ledger_events(&h).last().unwrap().clone();
    assert_eq!(
        topics,
        (symbol_short!("EMRG_WD"), user.clone()).into_val(&h.env)
    );
    let exit: EmergencyWithdrawEvent = data.try_into_val(&h.env).unwrap();
    assert_eq!(exit.account, user);
    assert_eq!(exit.amount, 1_000 * UNIT);

    let stray = h
        .env
        .register_stellar_asset_contract_v2(Address::generate(&h.env))
        .address();
    StellarAssetClient::new(&h.env, &stray).mint(&h.contract_id, &UNIT);
    let to = Address::generate(&h.env);

    h.client.sweep_foreign_token(&h.owner, &stray, &UNIT, &to);
    let (topics, data) = ledger_events(&h).last().unwrap().clone();
    assert_eq!(
        topics,
        (symbol_short!("SWEEP"), stray.clone()).into_val(&h.env)
    );
    let swept: ForeignTokenSweptEvent = data.try_into_val(&h.env).unwrap();
    assert_eq!(swept.token, stray);
    assert_eq!(swept.amount, UNIT);
    assert_eq!(swept.to, to);
}
