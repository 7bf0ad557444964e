#![no_std]

pub mod accrual;
pub mod catalog;
pub mod config;
pub mod events;
pub mod position;
pub mod reservoir;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

use common::{clock, ownership, CommonError};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, token, Address, Env, Symbol,
};

pub use accrual::{Accrued, RATE_SCALE};
pub use catalog::{Tier, TierParams, SENTINEL_TIER};
pub use config::GlobalConfig;
pub use position::Position;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidTierBounds = 5,
    InvalidTierRate = 6,
    UnknownTier = 7,
    BelowTierMinimum = 8,
    AboveTierMaximum = 9,
    DepositsClosed = 10,
    LockActive = 11,
    InsufficientBalance = 12,
    NoActivePosition = 13,
    HorizonBeforeNow = 14,
    HorizonAlreadyEnded = 15,
    DepositsStillOpen = 16,
    PositionsStillLive = 17,
    InvalidRateScale = 18,
    CannotSweepStakedToken = 19,
    ArithmeticOverflow = 20,
    NoPendingOwner = 21,
}

impl From<CommonError> for ContractError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ContractError::NotInitialized,
            CommonError::AccessDenied => ContractError::Unauthorized,
            CommonError::NoPendingTransfer => ContractError::NoPendingOwner,
        }
    }
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Everything a client needs to render an account, read in one call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountInfo {
    pub position: Position,
    /// Live definition of the tier the position points at.
    pub tier: Tier,
    pub current_day: u64,
    pub accrued: Accrued,
    /// First day principal can be withdrawn.
    pub lock_release_day: u64,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TierStakingContract;

#[contractimpl]
impl TierStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger with its owner and configuration.
    ///
    /// The catalog starts with only the sentinel tier at index 0.
    pub fn initialize(
        env: Env,
        owner: Address,
        config: GlobalConfig,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        config.validate(clock::current_day(&env))?;

        config::store(&env, &config);
        catalog::init(&env);
        ownership::set_owner(&env, &owner);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, owner, config);

        Ok(())
    }

    // ── Position ledger ─────────────────────────────────────────────────────

    /// Lock `amount` more principal into `tier_index`.
    ///
    /// Rewards owed under the position's previous tier and window are paid
    /// first, then the combined amount must fit the requested tier and the
    /// lock window restarts today. A zero `amount` re-locks (and moves tiers,
    /// if a different index is given) without adding principal.
    pub fn deposit(
        env: Env,
        account: Address,
        tier_index: u32,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = config::load(&env)?;
        let today = clock::current_day(&env);
        config.check_deposits_open(today)?;
        let target = catalog::require_real(&env, tier_index)?;

        let current = position::load(&env, &account);
        let current_tier = catalog::require(&env, current.tier_index)?;
        let owed = accrual::accrued(&current, &current_tier, config.horizon_day, today)?;

        let new_amount = current
            .amount
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        target.check_bounds(new_amount)?;

        // Effects.
        catalog::move_principal(&env, current.tier_index, current.amount, tier_index, new_amount)?;
        position::store(
            &env,
            &account,
            &Position {
                amount: new_amount,
                tier_index,
                deposit_start_day: today,
            },
        );

        // Interactions.
        reservoir::pay_out(&env, &config, &account, &owed);
        if amount > 0 {
            token::Client::new(&env, &config.deposit_token).transfer(
                &account,
                &env.current_contract_address(),
                &amount,
            );
        }

        log!(&env, "deposit", account, tier_index, amount, new_amount);

        if !owed.is_zero() {
            events::publish_harvest(&env, account.clone(), owed.reward_a, owed.reward_b);
        }
        events::publish_deposit(&env, account, tier_index, amount);

        Ok(())
    }

    /// Withdraw `amount` principal once the lock has elapsed.
    ///
    /// Owed rewards are paid, the remaining amount is re-resolved to the first
    /// tier that accepts it (or the sentinel), and the window restarts today.
    pub fn withdraw(env: Env, account: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        if amount < 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = config::load(&env)?;
        let today = clock::current_day(&env);

        let current = position::load(&env, &account);
        let current_tier = catalog::require(&env, current.tier_index)?;
        if current.is_locked(&current_tier, config.horizon_day, today) {
            return Err(ContractError::LockActive);
        }
        if amount > current.amount {
            return Err(ContractError::InsufficientBalance);
        }
        if current.is_empty() {
            return Err(ContractError::NoActivePosition);
        }

        let owed = accrual::accrued(&current, &current_tier, config.horizon_day, today)?;
        let remaining = current.amount - amount;
        let resolved = catalog::resolve_for_amount(&env, remaining);

        // Effects.
        catalog::move_principal(&env, current.tier_index, current.amount, resolved, remaining)?;
        position::store(
            &env,
            &account,
            &Position {
                amount: remaining,
                tier_index: resolved,
                deposit_start_day: today,
            },
        );

        // Interactions.
        reservoir::pay_out(&env, &config, &account, &owed);
        if amount > 0 {
            token::Client::new(&env, &config.deposit_token).transfer(
                &env.current_contract_address(),
                &account,
                &amount,
            );
        }

        if resolved != current.tier_index {
            log!(
                &env,
                "withdraw re-resolved tier",
                account,
                current.tier_index,
                resolved
            );
        }

        if !owed.is_zero() {
            events::publish_harvest(&env, account.clone(), owed.reward_a, owed.reward_b);
        }
        events::publish_withdraw(&env, account, amount);

        Ok(())
    }

    /// Collect owed rewards and restart the lock window.
    ///
    /// Works while locked and after the deposit cutoff; bounds are not
    /// re-checked because the amount does not change.
    pub fn harvest(env: Env, account: Address) -> Result<Accrued, ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();

        let config = config::load(&env)?;
        let today = clock::current_day(&env);

        let mut current = position::load(&env, &account);
        if current.is_empty() {
            return Err(ContractError::NoActivePosition);
        }
        let tier = catalog::require(&env, current.tier_index)?;
        let owed = accrual::accrued(&current, &tier, config.horizon_day, today)?;

        current.deposit_start_day = today;
        position::store(&env, &account, &current);

        reservoir::pay_out(&env, &config, &account, &owed);

        events::publish_harvest(&env, account, owed.reward_a, owed.reward_b);

        Ok(owed)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_position(env: Env, account: Address) -> Position {
        position::load(&env, &account)
    }

    /// Rewards the account would receive if it settled now.
    pub fn get_accrued(env: Env, account: Address) -> Result<Accrued, ContractError> {
        let config = config::load(&env)?;
        let current = position::load(&env, &account);
        let tier = catalog::require(&env, current.tier_index)?;
        accrual::accrued(&current, &tier, config.horizon_day, clock::current_day(&env))
    }

    pub fn get_account_info(env: Env, account: Address) -> Result<AccountInfo, ContractError> {
        let config = config::load(&env)?;
        let today = clock::current_day(&env);
        let current = position::load(&env, &account);
        let tier = catalog::require(&env, current.tier_index)?;
        let accrued = accrual::accrued(&current, &tier, config.horizon_day, today)?;
        let lock_release_day = current.lock_release_day(&tier, config.horizon_day);

        Ok(AccountInfo {
            position: current,
            tier,
            current_day: today,
            accrued,
            lock_release_day,
        })
    }

    pub fn get_current_day(env: Env) -> u64 {
        clock::current_day(&env)
    }

    pub fn get_config(env: Env) -> Result<GlobalConfig, ContractError> {
        config::load(&env)
    }

    /// Number of catalog entries, the sentinel included.
    pub fn tier_count(env: Env) -> u32 {
        catalog::count(&env)
    }

    pub fn get_tier(env: Env, index: u32) -> Result<Tier, ContractError> {
        catalog::require(&env, index)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownership::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        ownership::get_pending_owner(&env)
    }

    // ── Tier catalog ─────────────────────────────────────────────────────────

    /// Append a tier and return its index.
    pub fn add_tier(env: Env, caller: Address, params: TierParams) -> Result<u32, ContractError> {
        let config = Self::owner_config(&env, &caller)?;

        let index = catalog::append(&env, &config, &params)?;

        events::publish_tier_added(&env, params.lock_days, index);

        Ok(index)
    }

    /// Replace the definition at `index`.
    ///
    /// Positions already pointing at the tier are re-priced for their whole
    /// unharvested window; nothing is settled at the old rate first.
    pub fn set_tier(
        env: Env,
        caller: Address,
        index: u32,
        params: TierParams,
    ) -> Result<(), ContractError> {
        let config = Self::owner_config(&env, &caller)?;

        catalog::overwrite(&env, &config, index, &params)?;

        log!(&env, "tier edited in place", index);
        events::publish_tier_updated(&env, index);

        Ok(())
    }

    // ── Admin guardrails ─────────────────────────────────────────────────────

    pub fn set_horizon_day(env: Env, caller: Address, day: u64) -> Result<(), ContractError> {
        let mut config = Self::owner_config(&env, &caller)?;

        config.check_horizon_update(day, clock::current_day(&env))?;
        config.horizon_day = day;
        config::store(&env, &config);

        events::publish_horizon_updated(&env, day);

        Ok(())
    }

    pub fn set_deposit_cutoff_day(
        env: Env,
        caller: Address,
        day: u64,
    ) -> Result<(), ContractError> {
        let mut config = Self::owner_config(&env, &caller)?;

        config.deposit_cutoff_day = day;
        config::store(&env, &config);

        events::publish_deposit_cutoff_updated(&env, day);

        Ok(())
    }

    pub fn set_deposit_enabled(
        env: Env,
        caller: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        let mut config = Self::owner_config(&env, &caller)?;

        config.deposit_enabled = enabled;
        config::store(&env, &config);

        events::publish_deposit_enabled_updated(&env, enabled);

        Ok(())
    }

    /// Change the rate scales. Only allowed after the deposit cutoff and once
    /// every tier's principal has been withdrawn.
    pub fn set_rate_scale(
        env: Env,
        caller: Address,
        scale_a: i128,
        scale_b: i128,
    ) -> Result<(), ContractError> {
        let mut config = Self::owner_config(&env, &caller)?;

        config.check_rate_scale_update(
            scale_a,
            scale_b,
            clock::current_day(&env),
            catalog::has_deposits(&env),
        )?;
        config.rate_scale_a = scale_a;
        config.rate_scale_b = scale_b;
        config::store(&env, &config);

        events::publish_rate_scale_updated(&env, scale_a, scale_b);

        Ok(())
    }

    // ── Recovery ─────────────────────────────────────────────────────────────

    /// Return an account's principal regardless of its lock, forfeiting all
    /// unharvested rewards. Returns the amount sent back.
    pub fn emergency_withdraw(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<i128, ContractError> {
        let config = Self::owner_config(&env, &caller)?;

        let current = position::load(&env, &account);
        if current.is_empty() {
            return Err(ContractError::NoActivePosition);
        }

        catalog::move_principal(&env, current.tier_index, current.amount, SENTINEL_TIER, 0)?;
        position::store(&env, &account, &Position::empty(clock::current_day(&env)));

        token::Client::new(&env, &config.deposit_token).transfer(
            &env.current_contract_address(),
            &account,
            &current.amount,
        );

        log!(&env, "emergency withdraw", account, current.amount);
        events::publish_emergency_withdraw(&env, account, current.amount);

        Ok(current.amount)
    }

    /// Move a token that is neither staked nor paid out of custody.
    pub fn sweep_foreign_token(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
        to: Address,
    ) -> Result<(), ContractError> {
        let config = Self::owner_config(&env, &caller)?;

        if config.is_staked_token(&token) {
            return Err(ContractError::CannotSweepStakedToken);
        }
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &to, &amount);

        events::publish_foreign_token_swept(&env, token, amount, to);

        Ok(())
    }

    // ── Ownership transfer (two-step) ────────────────────────────────────────

    /// Propose a new owner. The proposed address must call `accept_owner`.
    pub fn propose_owner(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        ownership::propose_owner(&env, &caller, &new_owner)?;

        events::publish_owner_transfer_proposed(&env, caller, new_owner);

        Ok(())
    }

    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        new_owner.require_auth();

        let old_owner = ownership::accept_owner(&env, &new_owner)?;

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let cancelled = ownership::cancel_owner_transfer(&env, &caller)?;

        events::publish_owner_transfer_cancelled(&env, caller, cancelled);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Authenticate `caller` as the owner and load the configuration.
    fn owner_config(env: &Env, caller: &Address) -> Result<GlobalConfig, ContractError> {
        Self::require_initialized(env)?;
        caller.require_auth();
        ownership::require_owner(env, caller)?;
        config::load(env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────



#[cfg(test)]
mod test_events;
