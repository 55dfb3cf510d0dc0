//! Lockvault contract - entry points.
//!
//! The handlers are modularized into:
//! - `execute/` - execute message handlers
//! - `query` - query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_close, execute_deposit, execute_lock, execute_open, execute_process_queue,
    execute_stake, execute_unlock, execute_unstake, execute_update_config, execute_withdraw,
    validate_chain_id,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_balance, query_config, query_is_processed, query_purchase_quantity, query_queue,
    query_queue_entry, query_reserve, query_sale_proceeds, query_sale_requirement, query_stats,
};
use crate::state::{
    Config, ReserveRecord, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, NEXT_PROOF_ID, RESERVE,
    STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    validate_chain_id(&msg.chain_id)?;
    validate_chain_id(&msg.paired_chain_id)?;

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        chain_id: msg.chain_id,
        bridge: deps.api.addr_validate(&msg.bridge)?,
        native_denom: msg.native_denom,
        paired_chain_id: msg.paired_chain_id,
        paired_wraptoken_contract: msg.paired_wraptoken_contract,
        paired_staketoken_contract: msg.paired_staketoken_contract,
        yield_pool: deps.api.addr_validate(&msg.yield_pool)?,
        min_unstake_seconds: msg.min_unstake_seconds,
        accrue_stake_weight: msg.accrue_stake_weight,
        reward_recipient: msg
            .reward_recipient
            .map(|r| deps.api.addr_validate(&r))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &config)?;

    RESERVE.save(deps.storage, &ReserveRecord::default())?;
    STATS.save(deps.storage, &Stats::default())?;
    NEXT_PROOF_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("native_denom", config.native_denom)
        .add_attribute("bridge", config.bridge)
        .add_attribute("yield_pool", config.yield_pool))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateConfig {
            chain_id,
            bridge,
            native_denom,
            paired_chain_id,
            paired_wraptoken_contract,
            paired_staketoken_contract,
            yield_pool,
            min_unstake_seconds,
            accrue_stake_weight,
            reward_recipient,
        } => execute_update_config(
            deps,
            info,
            chain_id,
            bridge,
            native_denom,
            paired_chain_id,
            paired_wraptoken_contract,
            paired_staketoken_contract,
            yield_pool,
            min_unstake_seconds,
            accrue_stake_weight,
            reward_recipient,
        ),

        // Account lifecycle & native-asset movement
        ExecuteMsg::Deposit {} => execute_deposit(deps, env, info),
        ExecuteMsg::Open { owner } => execute_open(deps, env, info, owner),
        ExecuteMsg::Close {} => execute_close(deps, info),
        ExecuteMsg::Withdraw { quantity } => execute_withdraw(deps, info, quantity),

        // Cross-chain commitment and redemption
        ExecuteMsg::Lock {
            quantity,
            beneficiary,
            stake,
        } => execute_lock(deps, env, info, quantity, beneficiary, stake),
        ExecuteMsg::Unlock { proof } => execute_unlock(deps, env, info, proof),
        ExecuteMsg::Stake { proof } => execute_stake(deps, env, info, proof),
        ExecuteMsg::Unstake { proof } => execute_unstake(deps, env, info, proof),
        ExecuteMsg::ProcessQueue { max_count } => {
            execute_process_queue(deps, env, info, max_count)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Balance { owner } => to_json_binary(&query_balance(deps, owner)?),
        QueryMsg::Reserve {} => to_json_binary(&query_reserve(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::IsProcessed { digest } => to_json_binary(&query_is_processed(deps, digest)?),
        QueryMsg::QueueEntry { owner } => to_json_binary(&query_queue_entry(deps, owner)?),
        QueryMsg::Queue { start_after, limit } => {
            to_json_binary(&query_queue(deps, start_after, limit)?)
        }
        QueryMsg::PurchaseQuantity { amount } => {
            to_json_binary(&query_purchase_quantity(deps, amount)?)
        }
        QueryMsg::SaleProceeds { rex } => to_json_binary(&query_sale_proceeds(deps, rex)?),
        QueryMsg::SaleRequirement { amount } => {
            to_json_binary(&query_sale_requirement(deps, amount)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
