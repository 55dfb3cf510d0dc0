//! Conversion engine.
//!
//! Pure bonding-curve math between the native denom and yield-pool shares
//! ("rex"), over a snapshot of the pool's totals. This is a discrete
//! constant-ratio curve: the price moves only because the snapshot drifts
//! through external pool activity, never because of this engine's own calls.
//!
//! All multiplications run through `Uint128::multiply_ratio`, which widens
//! the intermediate and truncates the division. On non-negative operands
//! truncation is floor, so rounding always biases toward the pool: shares
//! are never over-issued and native asset is never over-paid.

use cosmwasm_std::Uint128;

use crate::error::ContractError;
use crate::pool::PoolSnapshot;

/// Shares received for depositing `deposit` native units into the pool.
///
/// `R1 = floor((S0 + deposit) * R0 / S0)`; the purchase yields `R1 - R0`.
pub fn purchase_quantity(snapshot: &PoolSnapshot, deposit: Uint128) -> Result<Uint128, ContractError> {
    if snapshot.total_lendable.is_zero() {
        return Err(ContractError::EmptyPool);
    }
    let s1 = snapshot.total_lendable.checked_add(deposit)?;
    let r1 = s1.multiply_ratio(snapshot.total_rex, snapshot.total_lendable);
    Ok(r1.checked_sub(snapshot.total_rex)?)
}

/// Native units received for selling `rex` shares back to the pool.
pub fn sale_proceeds(snapshot: &PoolSnapshot, rex: Uint128) -> Result<Uint128, ContractError> {
    if snapshot.total_rex.is_zero() {
        return Err(ContractError::EmptyPool);
    }
    Ok(rex.multiply_ratio(snapshot.total_lendable, snapshot.total_rex))
}

/// Shares that must be sold to release `amount` native units.
pub fn sale_requirement(snapshot: &PoolSnapshot, amount: Uint128) -> Result<Uint128, ContractError> {
    if snapshot.total_lendable.is_zero() {
        return Err(ContractError::EmptyPool);
    }
    Ok(amount.multiply_ratio(snapshot.total_rex, snapshot.total_lendable))
}
