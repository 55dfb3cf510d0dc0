//! Lockvault Contract - Native-Asset Custody with Cross-Chain Redemption
//!
//! Users deposit the native denom, lock it against wrapped issuance on a
//! paired chain, and redeem by presenting a proof that the wrapped asset was
//! retired over there. Locked value can be routed into an external yield
//! pool; redemptions that outrun matured pool liquidity wait in a FIFO queue.
//!
//! # Outbound Flow (Lock)
//! 1. User deposits native funds, crediting their liquid balance
//! 2. `Lock` commits liquid balance as locked (or staked, investing it into
//!    the yield pool) and emits the signed transfer record
//! 3. Relayers carry the record to the paired chain, which issues wrap tokens
//!
//! # Inbound Flow (Unlock / Stake / Unstake)
//! 1. Wrap tokens are retired on the paired chain, emitting a transfer record
//! 2. Anyone presents the record's action proof here; the bridge contract
//!    attests its authenticity
//! 3. The proof's source identity is validated, its digest is admitted at
//!    most once, and the beneficiary's balances move accordingly
//! 4. Staked redemptions pay out immediately while matured pool shares
//!    allow, and queue behind earlier requests otherwise; `ProcessQueue`
//!    drains the queue in strict arrival order
//!
//! # Accounting
//! - Per-owner balances in {liquid, locked, staked, unstaking}; their sum
//!   tracks deposits minus withdrawals exactly
//! - A contract-wide reserve mirrors the locked/staked sums as an anchor
//!   independent of the yield pool's bookkeeping
//! - Digest-indexed processed-proof records make redemption at-most-once

pub mod contract;
pub mod convert;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
pub mod pool;
pub mod proof;
mod query;
pub mod state;

pub use crate::error::ContractError;
