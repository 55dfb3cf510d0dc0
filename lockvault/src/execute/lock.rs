//! Outbound lock handler.
//!
//! Locking commits liquid balance against wrap issuance on the paired chain
//! and emits the transfer record whose proof the paired deployment consumes.

use cosmwasm_std::{Coin, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use common::{payload_digest, ExtendedAsset, XferRecord, XFER_ACTION};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, STATS};
use crate::{convert, ledger, pool};

pub fn execute_lock(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    quantity: Uint128,
    beneficiary: String,
    stake: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if quantity.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    ledger::sub_liquid(deps.storage, &info.sender, quantity)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    if stake {
        ledger::add_staked(deps.storage, &config, env.block.time, &info.sender, quantity)?;
        ledger::add_reserve_staked(deps.storage, quantity)?;
        messages = invest(&mut deps, &config, quantity)?;
    } else {
        ledger::add_locked(deps.storage, env.block.time, &info.sender, quantity)?;
        ledger::add_reserve_locked(deps.storage, quantity)?;
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.total_locks += 1;
    STATS.save(deps.storage, &stats)?;

    let xfer = XferRecord {
        owner: info.sender.to_string(),
        quantity: ExtendedAsset::new(quantity, &config.native_denom, env.contract.address.as_str()),
        beneficiary: beneficiary.clone(),
        staked: stake,
    };
    let event = emitxfer_event(&xfer)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_event(event)
        .add_attribute("action", "lock")
        .add_attribute("owner", info.sender)
        .add_attribute("quantity", quantity.to_string())
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("staked", stake.to_string()))
}

/// Route `quantity` into the yield pool, recording the shares the purchase
/// is expected to yield at the current snapshot. The pool executes these
/// after this operation commits.
pub fn invest(
    deps: &mut DepsMut,
    config: &Config,
    quantity: Uint128,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let snapshot = pool::query_snapshot(&deps.querier, &config.yield_pool)?;
    let expected_rex = convert::purchase_quantity(&snapshot, quantity)?;
    ledger::add_reserve_rex(deps.storage, expected_rex)?;

    Ok(vec![
        pool::deposit_msg(
            &config.yield_pool,
            Coin {
                denom: config.native_denom.clone(),
                amount: quantity,
            },
        )?,
        pool::buy_rex_msg(&config.yield_pool, quantity)?,
    ])
}

/// The signed transfer record, emitted as an event whose payload crosses the
/// chain boundary byte-for-byte.
pub fn emitxfer_event(xfer: &XferRecord) -> Result<Event, ContractError> {
    let payload = cosmwasm_std::to_json_binary(xfer)?;
    let digest = payload_digest(payload.as_slice());

    Ok(Event::new(XFER_ACTION)
        .add_attribute("owner", xfer.owner.clone())
        .add_attribute("quantity", xfer.quantity.to_string())
        .add_attribute("beneficiary", xfer.beneficiary.clone())
        .add_attribute("staked", xfer.staked.to_string())
        .add_attribute("payload", payload.to_base64())
        .add_attribute("digest", hex::encode(digest)))
}
