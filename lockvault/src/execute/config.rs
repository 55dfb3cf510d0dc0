//! Configuration handlers.

use cosmwasm_std::{Binary, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{Config, CONFIG};

/// Chain identities are 32-byte digests.
pub fn validate_chain_id(chain_id: &Binary) -> Result<(), ContractError> {
    if chain_id.len() != 32 {
        return Err(ContractError::InvalidChainId {
            got: chain_id.len(),
        });
    }
    Ok(())
}

/// Rewrite the global configuration. The admin itself is fixed at
/// instantiation.
#[allow(clippy::too_many_arguments)]
pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
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
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    validate_chain_id(&chain_id)?;
    validate_chain_id(&paired_chain_id)?;

    let new_config = Config {
        admin: config.admin,
        chain_id,
        bridge: deps.api.addr_validate(&bridge)?,
        native_denom,
        paired_chain_id,
        paired_wraptoken_contract,
        paired_staketoken_contract,
        yield_pool: deps.api.addr_validate(&yield_pool)?,
        min_unstake_seconds,
        accrue_stake_weight,
        reward_recipient: reward_recipient
            .map(|r| deps.api.addr_validate(&r))
            .transpose()?,
    };
    CONFIG.save(deps.storage, &new_config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("bridge", new_config.bridge)
        .add_attribute("native_denom", new_config.native_denom)
        .add_attribute("yield_pool", new_config.yield_pool)
        .add_attribute("min_unstake_seconds", min_unstake_seconds.to_string()))
}
