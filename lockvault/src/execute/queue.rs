//! Redemption queue.
//!
//! Pending unstakes wait here in strict arrival order until the pool has
//! matured enough shares to pay them. The drain stops at the first entry it
//! cannot settle: head-of-line blocking keeps a later request from settling
//! before an earlier one, even if it is individually payable.

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, Order, Response, Storage, Timestamp, Uint128};

use crate::error::ContractError;
use crate::execute::redeem::unstaked_event;
use crate::state::{UnstakeEntry, CONFIG, STATS, UNSTAKE_BY_OWNER, UNSTAKE_QUEUE};
use crate::{convert, ledger, pool};

/// Insert a pending unstake, coalescing with the owner's existing entry.
///
/// Coalescing re-keys the entry at `now`, demoting it to the back of the
/// queue. A repeat unstake therefore resets the owner's waiting position,
/// a known fairness trade-off inherited from the queue's design.
pub fn enqueue(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: &Addr,
    amount: Uint128,
) -> Result<UnstakeEntry, ContractError> {
    let quantity = match UNSTAKE_BY_OWNER.may_load(storage, owner)? {
        Some(started_nanos) => {
            let prior = UNSTAKE_QUEUE.load(storage, (started_nanos, owner))?;
            UNSTAKE_QUEUE.remove(storage, (started_nanos, owner));
            prior.quantity.checked_add(amount)?
        }
        None => amount,
    };

    let entry = UnstakeEntry {
        owner: owner.clone(),
        quantity,
        started: now,
    };
    UNSTAKE_QUEUE.save(storage, (now.nanos(), owner), &entry)?;
    UNSTAKE_BY_OWNER.save(storage, owner, &now.nanos())?;
    Ok(entry)
}

/// Drain the queue while matured pool liquidity allows.
///
/// Settles at most `max_count` entries, oldest first. One aggregate share
/// sale and one aggregate pool withdrawal cover the whole batch.
pub fn execute_process_queue(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    max_count: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time;

    let head_exists = UNSTAKE_QUEUE
        .range(deps.storage, None, None, Order::Ascending)
        .next()
        .is_some();
    if !head_exists || max_count == 0 {
        return Ok(Response::new()
            .add_attribute("action", "process_queue")
            .add_attribute("settled", "0"));
    }

    let snapshot = pool::query_snapshot(&deps.querier, &config.yield_pool)?;
    let matured_rex =
        pool::query_matured_rex(&deps.querier, &config.yield_pool, &env.contract.address)?;

    let mut committed_rex = Uint128::zero();
    let mut total_payout = Uint128::zero();
    let mut settled: Vec<UnstakeEntry> = vec![];

    while (settled.len() as u32) < max_count {
        let head = UNSTAKE_QUEUE
            .range(deps.storage, None, None, Order::Ascending)
            .next()
            .transpose()?;
        let Some(((started_nanos, owner), entry)) = head else {
            break;
        };

        // Head not yet past the minimum holding period, or not payable from
        // what remains of the matured shares: stop the whole sweep.
        if now.seconds() < entry.started.seconds() + config.min_unstake_seconds {
            break;
        }
        let required_rex = convert::sale_requirement(&snapshot, entry.quantity)?;
        if committed_rex.checked_add(required_rex)? > matured_rex {
            break;
        }

        committed_rex += required_rex;
        total_payout += entry.quantity;

        ledger::sub_unstaking(deps.storage, &owner, entry.quantity)?;
        ledger::add_liquid(deps.storage, now, &owner, entry.quantity)?;
        UNSTAKE_QUEUE.remove(deps.storage, (started_nanos, &owner));
        UNSTAKE_BY_OWNER.remove(deps.storage, &owner);
        settled.push(entry);
    }

    let mut response = Response::new()
        .add_attribute("action", "process_queue")
        .add_attribute("settled", settled.len().to_string());

    if !settled.is_empty() {
        let mut stats = STATS.load(deps.storage)?;
        stats.total_queue_payouts += settled.len() as u64;
        STATS.save(deps.storage, &stats)?;

        if !committed_rex.is_zero() {
            ledger::sub_reserve_rex(deps.storage, committed_rex)?;
            response = response.add_message(pool::sell_rex_msg(&config.yield_pool, committed_rex)?);
        }
        response = response
            .add_message(pool::withdraw_msg(&config.yield_pool, total_payout)?)
            .add_attribute("rex_sold", committed_rex.to_string())
            .add_attribute("paid_out", total_payout.to_string());
        for entry in &settled {
            response = response.add_event(unstaked_event(&entry.owner, entry.quantity));
        }
    }

    Ok(response)
}
