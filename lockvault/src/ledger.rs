//! Balance ledger.
//!
//! Paired debit/credit operations over the per-owner balance record and the
//! contract-wide reserve mirror. Debits load the record and assert
//! sufficiency; credits create the record when absent. Every mutation is a
//! single load-validate-mutate-save step, atomic under the host's
//! transaction rollback.
//!
//! Staked-balance mutations additionally accrue time-weighted stake-day
//! obligations: whole elapsed days since the last staked update, weighted by
//! the pre-mutation staked amount, are added to the owed accumulator before
//! the balance and timestamp change.

use cosmwasm_std::{Addr, Storage, Timestamp, Uint128};

use crate::error::ContractError;
use crate::state::{BalanceRecord, Config, ReserveRecord, BALANCES, RESERVE, SECONDS_PER_DAY};

// ============================================================================
// Per-owner balances
// ============================================================================

/// Credit an owner's liquid balance, creating the record if absent.
pub fn add_liquid(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    credit(storage, now, owner, |record| {
        record.liquid = record.liquid.checked_add(amount)?;
        Ok(())
    })
}

/// Debit an owner's liquid balance.
pub fn sub_liquid(
    storage: &mut dyn Storage,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    debit(storage, owner, |record| {
        record.liquid = checked_debit("liquid", record.liquid, amount)?;
        Ok(())
    })
}

/// Credit an owner's locked balance, creating the record if absent.
pub fn add_locked(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    credit(storage, now, owner, |record| {
        record.locked = record.locked.checked_add(amount)?;
        Ok(())
    })
}

/// Debit an owner's locked balance.
pub fn sub_locked(
    storage: &mut dyn Storage,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    debit(storage, owner, |record| {
        record.locked = checked_debit("locked", record.locked, amount)?;
        Ok(())
    })
}

/// Credit an owner's staked balance, creating the record if absent.
///
/// Stake-weight accrual runs against the pre-mutation balance first.
pub fn add_staked(
    storage: &mut dyn Storage,
    config: &Config,
    now: Timestamp,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    credit(storage, now, owner, |record| {
        accrue_stake_weight(record, config.accrue_stake_weight, now)?;
        record.staked = record.staked.checked_add(amount)?;
        Ok(())
    })
}

/// Debit an owner's staked balance.
///
/// Stake-weight accrual runs against the pre-mutation balance first.
pub fn sub_staked(
    storage: &mut dyn Storage,
    config: &Config,
    now: Timestamp,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    debit(storage, owner, |record| {
        accrue_stake_weight(record, config.accrue_stake_weight, now)?;
        record.staked = checked_debit("staked", record.staked, amount)?;
        Ok(())
    })
}

/// Credit an owner's unstaking balance, creating the record if absent.
pub fn add_unstaking(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    credit(storage, now, owner, |record| {
        record.unstaking = record.unstaking.checked_add(amount)?;
        Ok(())
    })
}

/// Debit an owner's unstaking balance.
pub fn sub_unstaking(
    storage: &mut dyn Storage,
    owner: &Addr,
    amount: Uint128,
) -> Result<BalanceRecord, ContractError> {
    debit(storage, owner, |record| {
        record.unstaking = checked_debit("unstaking", record.unstaking, amount)?;
        Ok(())
    })
}

// ============================================================================
// Reserve mirror
// ============================================================================

/// Credit the contract-wide locked reserve.
pub fn add_reserve_locked(storage: &mut dyn Storage, amount: Uint128) -> Result<ReserveRecord, ContractError> {
    update_reserve(storage, |reserve| {
        reserve.locked = reserve.locked.checked_add(amount)?;
        Ok(())
    })
}

/// Debit the contract-wide locked reserve.
pub fn sub_reserve_locked(storage: &mut dyn Storage, amount: Uint128) -> Result<ReserveRecord, ContractError> {
    update_reserve(storage, |reserve| {
        reserve.locked = checked_reserve_debit("locked", reserve.locked, amount)?;
        Ok(())
    })
}

/// Credit the contract-wide staked reserve.
pub fn add_reserve_staked(storage: &mut dyn Storage, amount: Uint128) -> Result<ReserveRecord, ContractError> {
    update_reserve(storage, |reserve| {
        reserve.staked = reserve.staked.checked_add(amount)?;
        Ok(())
    })
}

/// Debit the contract-wide staked reserve.
pub fn sub_reserve_staked(storage: &mut dyn Storage, amount: Uint128) -> Result<ReserveRecord, ContractError> {
    update_reserve(storage, |reserve| {
        reserve.staked = checked_reserve_debit("staked", reserve.staked, amount)?;
        Ok(())
    })
}

/// Credit the pool-share reserve.
pub fn add_reserve_rex(storage: &mut dyn Storage, rex: Uint128) -> Result<ReserveRecord, ContractError> {
    update_reserve(storage, |reserve| {
        reserve.rex = reserve.rex.checked_add(rex)?;
        Ok(())
    })
}

/// Debit the pool-share reserve.
pub fn sub_reserve_rex(storage: &mut dyn Storage, rex: Uint128) -> Result<ReserveRecord, ContractError> {
    update_reserve(storage, |reserve| {
        reserve.rex = checked_reserve_debit("rex", reserve.rex, rex)?;
        Ok(())
    })
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Accrue whole-day stake-weight against the pre-mutation staked balance,
/// then advance the staked-update timestamp.
///
/// The timestamp advances even when accrual is disabled, so enabling the
/// feature later does not grant retroactive weight.
fn accrue_stake_weight(
    record: &mut BalanceRecord,
    accrue: bool,
    now: Timestamp,
) -> Result<(), ContractError> {
    if accrue {
        let elapsed = now.seconds().saturating_sub(record.staked_updated_at.seconds());
        let days = elapsed / SECONDS_PER_DAY;
        if days > 0 {
            let weight = record.staked.checked_mul(Uint128::from(days))?;
            record.stake_weight_owed = record.stake_weight_owed.checked_add(weight)?;
        }
    }
    record.staked_updated_at = now;
    Ok(())
}

fn credit(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: &Addr,
    mutate: impl FnOnce(&mut BalanceRecord) -> Result<(), ContractError>,
) -> Result<BalanceRecord, ContractError> {
    let mut record = BALANCES
        .may_load(storage, owner)?
        .unwrap_or_else(|| BalanceRecord::new(now));
    mutate(&mut record)?;
    BALANCES.save(storage, owner, &record)?;
    Ok(record)
}

fn debit(
    storage: &mut dyn Storage,
    owner: &Addr,
    mutate: impl FnOnce(&mut BalanceRecord) -> Result<(), ContractError>,
) -> Result<BalanceRecord, ContractError> {
    let mut record = BALANCES
        .may_load(storage, owner)?
        .ok_or_else(|| ContractError::BalanceNotFound {
            owner: owner.to_string(),
        })?;
    mutate(&mut record)?;
    BALANCES.save(storage, owner, &record)?;
    Ok(record)
}

fn update_reserve(
    storage: &mut dyn Storage,
    mutate: impl FnOnce(&mut ReserveRecord) -> Result<(), ContractError>,
) -> Result<ReserveRecord, ContractError> {
    let mut reserve = RESERVE.may_load(storage)?.unwrap_or_default();
    mutate(&mut reserve)?;
    RESERVE.save(storage, &reserve)?;
    Ok(reserve)
}

fn checked_debit(
    field: &'static str,
    available: Uint128,
    requested: Uint128,
) -> Result<Uint128, ContractError> {
    if available < requested {
        return Err(ContractError::InsufficientBalance {
            field,
            available,
            requested,
        });
    }
    Ok(available - requested)
}

fn checked_reserve_debit(
    field: &'static str,
    available: Uint128,
    requested: Uint128,
) -> Result<Uint128, ContractError> {
    if available < requested {
        return Err(ContractError::InsufficientReserve {
            field,
            available,
            requested,
        });
    }
    Ok(available - requested)
}
