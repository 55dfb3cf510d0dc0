//! Account lifecycle and native-asset movement handlers.
//!
//! Deposit is the inbound-transfer router: ordinary senders are credited
//! liquid balance; transfers from the yield pool are interest and never
//! touch the ledger.

use cosmwasm_std::{BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::ledger;
use crate::state::{BalanceRecord, BALANCES, CONFIG};

/// Create an empty balance record for `owner`. Repeated opens are no-ops.
pub fn execute_open(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_validate(&owner)?;

    if BALANCES.may_load(deps.storage, &owner)?.is_none() {
        BALANCES.save(deps.storage, &owner, &BalanceRecord::new(env.block.time))?;
    }

    Ok(Response::new()
        .add_attribute("action", "open")
        .add_attribute("owner", owner))
}

/// Delete the sender's balance record once every field is zero.
pub fn execute_close(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    CONFIG.load(deps.storage)?;

    let record = BALANCES
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::BalanceNotFound {
            owner: info.sender.to_string(),
        })?;
    if !record.is_empty() {
        return Err(ContractError::NonZeroBalance);
    }
    BALANCES.remove(deps.storage, &info.sender);

    Ok(Response::new()
        .add_attribute("action", "close")
        .add_attribute("owner", info.sender))
}

/// Route an inbound native transfer.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let coin = single_native_coin(&info, &config.native_denom)?;

    // Transfers from the yield pool are interest on invested value, not a
    // user deposit: route them onward or absorb them.
    if info.sender == config.yield_pool {
        let mut response = Response::new()
            .add_attribute("action", "deposit_rewards")
            .add_attribute("quantity", coin.amount.to_string());
        if let Some(recipient) = &config.reward_recipient {
            response = response
                .add_message(BankMsg::Send {
                    to_address: recipient.to_string(),
                    amount: vec![coin],
                })
                .add_attribute("recipient", recipient.to_string());
        }
        return Ok(response);
    }

    ledger::add_liquid(deps.storage, env.block.time, &info.sender, coin.amount)?;

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("owner", info.sender)
        .add_attribute("quantity", coin.amount.to_string()))
}

/// Withdraw liquid balance to the sender.
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    quantity: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if quantity.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    ledger::sub_liquid(deps.storage, &info.sender, quantity)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![Coin {
                denom: config.native_denom,
                amount: quantity,
            }],
        })
        .add_attribute("action", "withdraw")
        .add_attribute("owner", info.sender)
        .add_attribute("quantity", quantity.to_string()))
}

/// Exactly one coin of the configured native denom, with a positive amount.
fn single_native_coin(info: &MessageInfo, native_denom: &str) -> Result<Coin, ContractError> {
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds {
            reason: format!("expected exactly one coin, got {}", info.funds.len()),
        });
    }
    let coin = info.funds[0].clone();
    if coin.denom != native_denom {
        return Err(ContractError::WrongDenom {
            expected: native_denom.to_string(),
            got: coin.denom,
        });
    }
    if coin.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    Ok(coin)
}
