//! Yield-pool collaborator interface.
//!
//! The pool is an external contract; its loan and maturity bookkeeping is a
//! black box. This module defines the messages the vault sends to it and the
//! read-only snapshots the vault consumes. Outbound messages settle after
//! the current operation commits, so their effects are never visible to
//! snapshot reads within the same call.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, QuerierWrapper, StdResult, Timestamp, Uint128, WasmMsg,
};

/// Execute messages understood by the yield pool.
#[cw_serde]
pub enum PoolExecuteMsg {
    /// Deposit attached native funds into the caller's pool fund
    Deposit {},
    /// Convert deposited funds into pool shares
    BuyRex { amount: Uint128 },
    /// Sell matured pool shares back into the pool fund
    SellRex { rex: Uint128 },
    /// Withdraw native funds from the pool fund back to the caller
    Withdraw { amount: Uint128 },
}

/// Queries understood by the yield pool.
#[cw_serde]
pub enum PoolQueryMsg {
    /// Current pool totals
    Snapshot {},
    /// An owner's matured shares and maturity schedule
    MaturedRex { owner: String },
}

/// Pool totals used by the conversion engine.
#[cw_serde]
pub struct PoolSnapshot {
    /// Native units lendable by the pool
    pub total_lendable: Uint128,
    /// Total outstanding pool shares
    pub total_rex: Uint128,
}

/// A time bucket of shares maturing at or after `matures_at`.
#[cw_serde]
pub struct RexMaturity {
    pub matures_at: Timestamp,
    pub rex: Uint128,
}

/// An owner's matured shares, eligible for immediate sale.
#[cw_serde]
pub struct MaturedRexResponse {
    pub matured_rex: Uint128,
    pub maturity_buckets: Vec<RexMaturity>,
}

/// Read the pool totals.
pub fn query_snapshot(querier: &QuerierWrapper, pool: &Addr) -> StdResult<PoolSnapshot> {
    querier.query_wasm_smart(pool, &PoolQueryMsg::Snapshot {})
}

/// Read an owner's matured shares.
pub fn query_matured_rex(querier: &QuerierWrapper, pool: &Addr, owner: &Addr) -> StdResult<Uint128> {
    let response: MaturedRexResponse = querier.query_wasm_smart(
        pool,
        &PoolQueryMsg::MaturedRex {
            owner: owner.to_string(),
        },
    )?;
    Ok(response.matured_rex)
}

/// Deposit native funds into the pool.
pub fn deposit_msg(pool: &Addr, funds: Coin) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pool.to_string(),
        msg: to_json_binary(&PoolExecuteMsg::Deposit {})?,
        funds: vec![funds],
    }))
}

/// Convert deposited funds into shares.
pub fn buy_rex_msg(pool: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pool.to_string(),
        msg: to_json_binary(&PoolExecuteMsg::BuyRex { amount })?,
        funds: vec![],
    }))
}

/// Sell matured shares.
pub fn sell_rex_msg(pool: &Addr, rex: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pool.to_string(),
        msg: to_json_binary(&PoolExecuteMsg::SellRex { rex })?,
        funds: vec![],
    }))
}

/// Withdraw native funds from the pool fund.
pub fn withdraw_msg(pool: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pool.to_string(),
        msg: to_json_binary(&PoolExecuteMsg::Withdraw { amount })?,
        funds: vec![],
    }))
}
