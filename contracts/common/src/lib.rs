//! Shared utilities and error types for the tiered staking contracts.
//!
//! This crate provides:
//! - [`CommonError`]: error codes returned by the shared helpers.
//! - [`clock`]: day-index derivation from the ledger timestamp.
//! - [`ownership`]: single-owner storage with a two-step ownership transfer.
//!
//! Contract-specific errors map these codes into their own enums.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod clock;
pub mod ownership;

pub use clock::*;
pub use ownership::*;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes returned by the helpers in this crate.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authentication & authorisation |
/// | 40 – 49 | Contract state                 |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// No owner has been recorded yet.
    NotInitialized = 1,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller is not the recorded owner, or not the proposed owner
    /// when accepting a transfer.
    AccessDenied = 10,

    // ── Contract state (40–49) ───────────────────────────────
    /// An ownership transfer was accepted or cancelled while none is pending.
    NoPendingTransfer = 40,
}
