//! State definitions for the lockvault contract.
//!
//! Storage is organized around four concerns: the global configuration, the
//! per-owner balance ledger with its contract-wide reserve mirror, the
//! processed-proof set backing replay protection, and the FIFO unstaking
//! queue.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Configuration
// ============================================================================

/// Global configuration, written by instantiate and `UpdateConfig` only.
#[cw_serde]
pub struct Config {
    /// Admin (deployer) allowed to rewrite configuration
    pub admin: Addr,
    /// This chain's 32-byte identity
    pub chain_id: Binary,
    /// Bridge contract whose proof verdicts are trusted
    pub bridge: Addr,
    /// The single native denom this vault custodies
    pub native_denom: String,
    /// Paired chain's 32-byte identity
    pub paired_chain_id: Binary,
    /// Liquid-wrap contract on the paired chain
    pub paired_wraptoken_contract: String,
    /// Staked-wrap contract on the paired chain
    pub paired_staketoken_contract: String,
    /// External yield pool holding invested value
    pub yield_pool: Addr,
    /// Minimum age of a queue entry before it becomes payable
    pub min_unstake_seconds: u64,
    /// Whether staked-balance mutations accrue stake-weight obligations
    pub accrue_stake_weight: bool,
    /// Where pool interest payments are routed; absorbed if unset
    pub reward_recipient: Option<Addr>,
}

// ============================================================================
// Balance Ledger
// ============================================================================

/// Per-owner balance record.
///
/// Invariant: `liquid + locked + staked + unstaking` equals everything the
/// owner ever deposited minus everything they ever withdrew.
#[cw_serde]
pub struct BalanceRecord {
    /// Freely withdrawable
    pub liquid: Uint128,
    /// Committed against liquid-wrap issuance, earning nothing
    pub locked: Uint128,
    /// Committed and invested in the yield pool
    pub staked: Uint128,
    /// Committed to exit, awaiting pool liquidity
    pub unstaking: Uint128,
    /// Accumulated stake-weight obligations, in minimal-unit token-days
    pub stake_weight_owed: Uint128,
    /// Last time the staked field changed
    pub staked_updated_at: Timestamp,
}

impl BalanceRecord {
    pub fn new(now: Timestamp) -> Self {
        BalanceRecord {
            liquid: Uint128::zero(),
            locked: Uint128::zero(),
            staked: Uint128::zero(),
            unstaking: Uint128::zero(),
            stake_weight_owed: Uint128::zero(),
            staked_updated_at: now,
        }
    }

    /// Whether every balance field is zero (the close condition).
    pub fn is_empty(&self) -> bool {
        self.liquid.is_zero()
            && self.locked.is_zero()
            && self.staked.is_zero()
            && self.unstaking.is_zero()
    }
}

/// Contract-wide mirror of the sums of all owners' committed balances, plus
/// the pool shares the contract believes it holds. An accounting anchor
/// independent of the pool's own bookkeeping.
#[cw_serde]
#[derive(Default)]
pub struct ReserveRecord {
    pub locked: Uint128,
    pub staked: Uint128,
    pub rex: Uint128,
}

// ============================================================================
// Replay Guard
// ============================================================================

/// A consumed cross-chain proof. Created once, never mutated or deleted.
#[cw_serde]
pub struct ProcessedProof {
    pub id: u64,
    pub digest: Binary,
}

// ============================================================================
// Redemption Queue
// ============================================================================

/// A pending unstake awaiting pool liquidity.
///
/// Invariant: `quantity > 0` while the entry exists; the entry is deleted
/// exactly when its quantity is fully paid out.
#[cw_serde]
pub struct UnstakeEntry {
    pub owner: Addr,
    pub quantity: Uint128,
    /// FIFO ordering key; reset to "now" when the entry coalesces
    pub started: Timestamp,
}

// ============================================================================
// Stats
// ============================================================================

/// Operational counters.
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_locks: u64,
    pub total_redemptions: u64,
    pub total_queue_payouts: u64,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:lockvault";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in a stake-weight accrual day
pub const SECONDS_PER_DAY: u64 = 86_400;

// ============================================================================
// Storage
// ============================================================================

/// Global configuration
pub const CONFIG: Item<Config> = Item::new("config");

/// Per-owner balance records
pub const BALANCES: Map<&Addr, BalanceRecord> = Map::new("balances");

/// Contract-wide reserve mirror
pub const RESERVE: Item<ReserveRecord> = Item::new("reserve");

/// Operational counters
pub const STATS: Item<Stats> = Item::new("stats");

/// Next processed-proof id
pub const NEXT_PROOF_ID: Item<u64> = Item::new("next_proof_id");

/// Processed proofs by id
pub const PROCESSED: Map<u64, ProcessedProof> = Map::new("processed");

/// Secondary index: receipt digest -> processed-proof id.
/// Uniqueness of digests is enforced on insertion.
pub const PROCESSED_BY_DIGEST: Map<&[u8], u64> = Map::new("processed__digest");

/// FIFO unstaking queue. Range-ascending iteration over the
/// (started-nanos, owner) key is arrival order.
pub const UNSTAKE_QUEUE: Map<(u64, &Addr), UnstakeEntry> = Map::new("unstake_queue");

/// Secondary index: owner -> started-nanos of their single queue entry.
pub const UNSTAKE_BY_OWNER: Map<&Addr, u64> = Map::new("unstake_queue__owner");
