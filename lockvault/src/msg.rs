//! Message types for the lockvault contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use common::ActionProof;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message: the full global configuration.
///
/// Must be provided before any balance-affecting operation can execute; on
/// this platform that is guaranteed by instantiation itself.
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin allowed to rewrite configuration
    pub admin: String,
    /// This chain's 32-byte identity
    pub chain_id: Binary,
    /// Bridge contract whose proof verdicts are trusted
    pub bridge: String,
    /// The single native denom this vault custodies
    pub native_denom: String,
    /// Paired chain's 32-byte identity
    pub paired_chain_id: Binary,
    /// Liquid-wrap contract on the paired chain
    pub paired_wraptoken_contract: String,
    /// Staked-wrap contract on the paired chain
    pub paired_staketoken_contract: String,
    /// External yield pool contract
    pub yield_pool: String,
    /// Minimum age of a queue entry before it becomes payable
    pub min_unstake_seconds: u64,
    /// Whether staked-balance mutations accrue stake-weight obligations
    pub accrue_stake_weight: bool,
    /// Where pool interest payments are routed; absorbed if unset
    pub reward_recipient: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Rewrite the global configuration (the re-init).
    ///
    /// Authorization: Admin only
    UpdateConfig {
        chain_id: Binary,
        bridge: String,
        native_denom: String,
        paired_chain_id: Binary,
        paired_wraptoken_contract: String,
        paired_staketoken_contract: String,
        yield_pool: String,
        min_unstake_seconds: u64,
        accrue_stake_weight: bool,
        reward_recipient: Option<String>,
    },

    /// Deposit attached native funds.
    ///
    /// Authorization: Anyone
    ///
    /// Funds from ordinary senders credit the sender's liquid balance.
    /// Funds from the yield pool are interest, routed to the configured
    /// reward recipient (or absorbed), never credited to the ledger.
    Deposit {},

    /// Create an empty balance record for `owner`.
    ///
    /// Authorization: Anyone (the sender pays for storage)
    Open { owner: String },

    /// Delete the sender's balance record.
    ///
    /// Authorization: Owner
    ///
    /// Fails unless every balance field is exactly zero.
    Close {},

    /// Commit liquid balance for cross-chain issuance.
    ///
    /// Authorization: Owner (the sender)
    ///
    /// Debits liquid; credits locked, or staked with a pool investment when
    /// `stake` is set. Emits the signed transfer record consumed by the
    /// paired chain's wrap issuance. `beneficiary` is an account on the
    /// paired chain and is not validated locally.
    Lock {
        quantity: Uint128,
        beneficiary: String,
        stake: bool,
    },

    /// Redeem a liquid-wrap retirement proof.
    ///
    /// Authorization: Anyone (the prover)
    ///
    /// Moves locked to liquid for the beneficiary named in the proof.
    Unlock { proof: ActionProof },

    /// Apply a wrap-conversion proof: liquid wrap was retired into staked
    /// wrap on the paired chain.
    ///
    /// Authorization: Anyone (the prover)
    ///
    /// Moves locked to staked for the beneficiary and invests the amount
    /// into the yield pool.
    Stake { proof: ActionProof },

    /// Redeem a staked-wrap retirement proof.
    ///
    /// Authorization: Anyone (the prover)
    ///
    /// Debits the beneficiary's staked balance and either pays out
    /// immediately (queue empty, matured pool shares cover the sale) or
    /// enqueues a pending unstake.
    Unstake { proof: ActionProof },

    /// Withdraw liquid balance to the sender's account.
    ///
    /// Authorization: Owner (the sender)
    Withdraw { quantity: Uint128 },

    /// Drain the redemption queue while matured pool liquidity allows.
    ///
    /// Authorization: Anyone
    ///
    /// Settles at most `max_count` entries in strict arrival order; a
    /// single unpayable entry at the front stops the whole sweep.
    ProcessQueue { max_count: u32 },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// An owner's balance record
    #[returns(BalanceResponse)]
    Balance { owner: String },

    /// Contract-wide reserve totals
    #[returns(ReserveResponse)]
    Reserve {},

    /// Operational counters
    #[returns(StatsResponse)]
    Stats {},

    /// Whether a receipt digest has been consumed
    #[returns(ProcessedResponse)]
    IsProcessed { digest: Binary },

    /// An owner's pending unstake entry, if any
    #[returns(QueueEntryResponse)]
    QueueEntry { owner: String },

    /// Pending unstakes in arrival order
    #[returns(QueueResponse)]
    Queue {
        /// Return entries started strictly after this nanosecond timestamp
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Shares a pool deposit of `amount` would currently yield
    #[returns(ConversionResponse)]
    PurchaseQuantity { amount: Uint128 },

    /// Native units selling `rex` shares would currently release
    #[returns(ConversionResponse)]
    SaleProceeds { rex: Uint128 },

    /// Shares that must currently be sold to release `amount` native units
    #[returns(ConversionResponse)]
    SaleRequirement { amount: Uint128 },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub chain_id: Binary,
    pub bridge: Addr,
    pub native_denom: String,
    pub paired_chain_id: Binary,
    pub paired_wraptoken_contract: String,
    pub paired_staketoken_contract: String,
    pub yield_pool: Addr,
    pub min_unstake_seconds: u64,
    pub accrue_stake_weight: bool,
    pub reward_recipient: Option<Addr>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub owner: Addr,
    pub liquid: Uint128,
    pub locked: Uint128,
    pub staked: Uint128,
    pub unstaking: Uint128,
    pub stake_weight_owed: Uint128,
    pub staked_updated_at: Timestamp,
}

#[cw_serde]
pub struct ReserveResponse {
    pub locked: Uint128,
    pub staked: Uint128,
    pub rex: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub total_locks: u64,
    pub total_redemptions: u64,
    pub total_queue_payouts: u64,
}

#[cw_serde]
pub struct ProcessedResponse {
    pub processed: bool,
    /// The processed-proof id, when processed
    pub id: Option<u64>,
}

#[cw_serde]
pub struct QueueEntryResponse {
    pub entry: Option<QueueEntryInfo>,
}

#[cw_serde]
pub struct QueueEntryInfo {
    pub owner: Addr,
    pub quantity: Uint128,
    pub started: Timestamp,
}

#[cw_serde]
pub struct QueueResponse {
    pub entries: Vec<QueueEntryInfo>,
}

#[cw_serde]
pub struct ConversionResponse {
    pub amount: Uint128,
}
