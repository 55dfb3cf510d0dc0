//! Proof-gated redemption handlers.
//!
//! Unlock, Stake, and Unstake all consume a cross-chain proof through the
//! same gates: bridge authenticity, identity validation, replay-guard
//! admission. They differ in which paired contract they redeem against and
//! which balance fields they move.

use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Order, Response, Storage, Uint128};

use common::{ActionProof, XferRecord};

use crate::error::ContractError;
use crate::execute::lock::invest;
use crate::execute::queue::enqueue;
use crate::state::{Config, CONFIG, STATS, UNSTAKE_QUEUE};
use crate::{convert, ledger, pool, proof};

/// Redeem a liquid-wrap retirement: `locked -> liquid` for the beneficiary.
pub fn execute_unlock(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    action_proof: ActionProof,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (xfer, beneficiary) = validate_redemption(
        &deps,
        &env,
        &config,
        &action_proof,
        &config.paired_wraptoken_contract,
        false,
        "liquid",
    )?;
    let quantity = xfer.quantity.amount;

    proof::admit_proof(deps.storage, &action_proof.receipt_digest)?;

    ledger::sub_locked(deps.storage, &beneficiary, quantity)?;
    ledger::sub_reserve_locked(deps.storage, quantity)?;
    ledger::add_liquid(deps.storage, env.block.time, &beneficiary, quantity)?;
    bump_redemptions(deps.storage)?;

    Ok(Response::new()
        .add_event(
            Event::new("unlocked")
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("quantity", quantity.to_string()),
        )
        .add_attribute("action", "unlock")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("quantity", quantity.to_string()))
}

/// Apply a wrap conversion: liquid wrap was retired into staked wrap on the
/// paired chain, so the beneficiary's `locked` moves to `staked` and the
/// amount is invested into the yield pool.
pub fn execute_stake(
    mut deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    action_proof: ActionProof,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (xfer, beneficiary) = validate_redemption(
        &deps,
        &env,
        &config,
        &action_proof,
        &config.paired_wraptoken_contract,
        true,
        "staking",
    )?;
    let quantity = xfer.quantity.amount;

    proof::admit_proof(deps.storage, &action_proof.receipt_digest)?;

    ledger::sub_locked(deps.storage, &beneficiary, quantity)?;
    ledger::sub_reserve_locked(deps.storage, quantity)?;
    ledger::add_staked(deps.storage, &config, env.block.time, &beneficiary, quantity)?;
    ledger::add_reserve_staked(deps.storage, quantity)?;
    let messages = invest(&mut deps, &config, quantity)?;
    bump_redemptions(deps.storage)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(
            Event::new("staked")
                .add_attribute("beneficiary", beneficiary.to_string())
                .add_attribute("quantity", quantity.to_string()),
        )
        .add_attribute("action", "stake")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("quantity", quantity.to_string()))
}

/// Redeem a staked-wrap retirement.
///
/// Pays out immediately when the queue is empty and the contract's matured
/// pool shares cover the sale; otherwise the request joins the FIFO queue.
/// The empty-queue condition keeps strict arrival-order fairness: a later
/// request never bypasses an earlier one still waiting on liquidity.
pub fn execute_unstake(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    action_proof: ActionProof,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (xfer, beneficiary) = validate_redemption(
        &deps,
        &env,
        &config,
        &action_proof,
        &config.paired_staketoken_contract,
        true,
        "staked",
    )?;
    let quantity = xfer.quantity.amount;

    proof::admit_proof(deps.storage, &action_proof.receipt_digest)?;

    ledger::sub_staked(deps.storage, &config, env.block.time, &beneficiary, quantity)?;
    ledger::sub_reserve_staked(deps.storage, quantity)?;

    let snapshot = pool::query_snapshot(&deps.querier, &config.yield_pool)?;
    let required_rex = convert::sale_requirement(&snapshot, quantity)?;
    let matured_rex =
        pool::query_matured_rex(&deps.querier, &config.yield_pool, &env.contract.address)?;
    let queue_empty = UNSTAKE_QUEUE
        .range(deps.storage, None, None, Order::Ascending)
        .next()
        .is_none();

    let response = if queue_empty && required_rex <= matured_rex {
        ledger::sub_reserve_rex(deps.storage, required_rex)?;
        ledger::add_liquid(deps.storage, env.block.time, &beneficiary, quantity)?;
        Response::new()
            .add_message(pool::sell_rex_msg(&config.yield_pool, required_rex)?)
            .add_message(pool::withdraw_msg(&config.yield_pool, quantity)?)
            .add_event(unstaked_event(&beneficiary, quantity))
            .add_attribute("action", "unstake")
            .add_attribute("beneficiary", beneficiary)
            .add_attribute("quantity", quantity.to_string())
            .add_attribute("queued", "false")
    } else {
        let entry = enqueue(deps.storage, env.block.time, &beneficiary, quantity)?;
        ledger::add_unstaking(deps.storage, env.block.time, &beneficiary, quantity)?;
        Response::new()
            .add_event(
                Event::new("unstake_queued")
                    .add_attribute("beneficiary", beneficiary.to_string())
                    .add_attribute("quantity", entry.quantity.to_string()),
            )
            .add_attribute("action", "unstake")
            .add_attribute("beneficiary", beneficiary)
            .add_attribute("quantity", quantity.to_string())
            .add_attribute("queued", "true")
    };
    bump_redemptions(deps.storage)?;

    Ok(response)
}

/// The settlement notification shared by immediate payouts and queue drains.
pub fn unstaked_event(owner: &Addr, quantity: Uint128) -> Event {
    Event::new("unstaked")
        .add_attribute("owner", owner.to_string())
        .add_attribute("quantity", quantity.to_string())
}

/// Run the shared proof gates and decode the transfer record.
///
/// `expect_staked` is the record kind the operation handles; the `staked`
/// flag on the wire discriminates liquid-wrap retirements (Unlock) from
/// conversions into staked wrap (Stake).
fn validate_redemption(
    deps: &DepsMut,
    env: &Env,
    config: &Config,
    action_proof: &ActionProof,
    expected_contract: &str,
    expect_staked: bool,
    kind: &str,
) -> Result<(XferRecord, Addr), ContractError> {
    proof::verify_with_bridge(&deps.querier, config, action_proof)?;
    let xfer = proof::validate_xfer(config, action_proof, expected_contract)?;

    if xfer.staked != expect_staked {
        return Err(ContractError::WrongProofKind {
            expected: kind.to_string(),
        });
    }
    if xfer.quantity.denom != config.native_denom {
        return Err(ContractError::WrongDenom {
            expected: config.native_denom.clone(),
            got: xfer.quantity.denom.clone(),
        });
    }
    if xfer.quantity.contract != env.contract.address.as_str() {
        return Err(ContractError::WrongSettlementContract {
            got: xfer.quantity.contract.clone(),
        });
    }
    if xfer.quantity.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let beneficiary = deps.api.addr_validate(&xfer.beneficiary)?;
    Ok((xfer, beneficiary))
}

fn bump_redemptions(storage: &mut dyn Storage) -> Result<(), ContractError> {
    let mut stats = STATS.load(storage)?;
    stats.total_redemptions += 1;
    STATS.save(storage, &stats)?;
    Ok(())
}
