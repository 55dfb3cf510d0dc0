//! Query handlers for the lockvault contract.

use cosmwasm_std::{Binary, Deps, Order, StdError, StdResult, Timestamp, Uint128};

use crate::msg::{
    BalanceResponse, ConfigResponse, ConversionResponse, ProcessedResponse, QueueEntryInfo,
    QueueEntryResponse, QueueResponse, ReserveResponse, StatsResponse,
};
use crate::state::{
    BALANCES, CONFIG, PROCESSED_BY_DIGEST, RESERVE, STATS, UNSTAKE_BY_OWNER, UNSTAKE_QUEUE,
};
use crate::{convert, pool};

/// Default page size for queue listings
const DEFAULT_LIMIT: u32 = 30;

/// Maximum page size for queue listings
const MAX_LIMIT: u32 = 100;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        chain_id: config.chain_id,
        bridge: config.bridge,
        native_denom: config.native_denom,
        paired_chain_id: config.paired_chain_id,
        paired_wraptoken_contract: config.paired_wraptoken_contract,
        paired_staketoken_contract: config.paired_staketoken_contract,
        yield_pool: config.yield_pool,
        min_unstake_seconds: config.min_unstake_seconds,
        accrue_stake_weight: config.accrue_stake_weight,
        reward_recipient: config.reward_recipient,
    })
}

/// Query an owner's balance record. Absent records read as all-zero.
pub fn query_balance(deps: Deps, owner: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let record = BALANCES.may_load(deps.storage, &owner)?;

    let response = match record {
        Some(record) => BalanceResponse {
            owner,
            liquid: record.liquid,
            locked: record.locked,
            staked: record.staked,
            unstaking: record.unstaking,
            stake_weight_owed: record.stake_weight_owed,
            staked_updated_at: record.staked_updated_at,
        },
        None => BalanceResponse {
            owner,
            liquid: Uint128::zero(),
            locked: Uint128::zero(),
            staked: Uint128::zero(),
            unstaking: Uint128::zero(),
            stake_weight_owed: Uint128::zero(),
            staked_updated_at: Timestamp::from_seconds(0),
        },
    };
    Ok(response)
}

/// Query the contract-wide reserve totals.
pub fn query_reserve(deps: Deps) -> StdResult<ReserveResponse> {
    let reserve = RESERVE.may_load(deps.storage)?.unwrap_or_default();
    Ok(ReserveResponse {
        locked: reserve.locked,
        staked: reserve.staked,
        rex: reserve.rex,
    })
}

/// Query operational counters.
pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        total_locks: stats.total_locks,
        total_redemptions: stats.total_redemptions,
        total_queue_payouts: stats.total_queue_payouts,
    })
}

/// Query whether a receipt digest has been consumed.
pub fn query_is_processed(deps: Deps, digest: Binary) -> StdResult<ProcessedResponse> {
    let id = PROCESSED_BY_DIGEST.may_load(deps.storage, digest.as_slice())?;
    Ok(ProcessedResponse {
        processed: id.is_some(),
        id,
    })
}

/// Query an owner's pending unstake entry.
pub fn query_queue_entry(deps: Deps, owner: String) -> StdResult<QueueEntryResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let entry = match UNSTAKE_BY_OWNER.may_load(deps.storage, &owner)? {
        Some(started_nanos) => {
            let entry = UNSTAKE_QUEUE.load(deps.storage, (started_nanos, &owner))?;
            Some(QueueEntryInfo {
                owner: entry.owner,
                quantity: entry.quantity,
                started: entry.started,
            })
        }
        None => None,
    };
    Ok(QueueEntryResponse { entry })
}

/// Query pending unstakes in arrival order.
pub fn query_queue(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<QueueResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = start_after.unwrap_or(0);

    let entries = UNSTAKE_QUEUE
        .range(deps.storage, None, None, Order::Ascending)
        .filter(|item| match item {
            Ok(((started_nanos, _), _)) => *started_nanos > start_after,
            Err(_) => true,
        })
        .take(limit)
        .map(|item| {
            let (_, entry) = item?;
            Ok(QueueEntryInfo {
                owner: entry.owner,
                quantity: entry.quantity,
                started: entry.started,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(QueueResponse { entries })
}

/// Simulate the shares a pool deposit would currently yield.
pub fn query_purchase_quantity(deps: Deps, amount: Uint128) -> StdResult<ConversionResponse> {
    let config = CONFIG.load(deps.storage)?;
    let snapshot = pool::query_snapshot(&deps.querier, &config.yield_pool)?;
    let rex = convert::purchase_quantity(&snapshot, amount)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(ConversionResponse { amount: rex })
}

/// Simulate the native units a share sale would currently release.
pub fn query_sale_proceeds(deps: Deps, rex: Uint128) -> StdResult<ConversionResponse> {
    let config = CONFIG.load(deps.storage)?;
    let snapshot = pool::query_snapshot(&deps.querier, &config.yield_pool)?;
    let amount = convert::sale_proceeds(&snapshot, rex)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(ConversionResponse { amount })
}

/// Simulate the shares that must be sold to release `amount` native units.
pub fn query_sale_requirement(deps: Deps, amount: Uint128) -> StdResult<ConversionResponse> {
    let config = CONFIG.load(deps.storage)?;
    let snapshot = pool::query_snapshot(&deps.querier, &config.yield_pool)?;
    let rex = convert::sale_requirement(&snapshot, amount)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(ConversionResponse { amount: rex })
}
