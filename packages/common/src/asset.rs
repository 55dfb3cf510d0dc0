//! Extended asset type.
//!
//! An amount tagged with its denom and, because it crosses a trust boundary,
//! the identity of the contract the claim settles against. Arithmetic between
//! two extended assets requires an identical denom and contract.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult, Uint128};

/// An asset amount extended with its issuing-contract identity.
#[cw_serde]
pub struct ExtendedAsset {
    /// Amount in the denom's smallest unit
    pub amount: Uint128,
    /// Native denom of the asset
    pub denom: String,
    /// Contract the claim settles against (the custody contract on the
    /// native chain)
    pub contract: String,
}

impl ExtendedAsset {
    pub fn new(amount: impl Into<Uint128>, denom: impl Into<String>, contract: impl Into<String>) -> Self {
        ExtendedAsset {
            amount: amount.into(),
            denom: denom.into(),
            contract: contract.into(),
        }
    }

    /// Add another asset of the same identity.
    pub fn checked_add(&self, other: &ExtendedAsset) -> StdResult<ExtendedAsset> {
        self.assert_same_identity(other)?;
        Ok(ExtendedAsset {
            amount: self.amount.checked_add(other.amount)?,
            denom: self.denom.clone(),
            contract: self.contract.clone(),
        })
    }

    /// Subtract another asset of the same identity.
    pub fn checked_sub(&self, other: &ExtendedAsset) -> StdResult<ExtendedAsset> {
        self.assert_same_identity(other)?;
        Ok(ExtendedAsset {
            amount: self.amount.checked_sub(other.amount)?,
            denom: self.denom.clone(),
            contract: self.contract.clone(),
        })
    }

    fn assert_same_identity(&self, other: &ExtendedAsset) -> StdResult<()> {
        if self.denom != other.denom || self.contract != other.contract {
            return Err(StdError::generic_err(format!(
                "asset identity mismatch: {}@{} vs {}@{}",
                self.denom, self.contract, other.denom, other.contract
            )));
        }
        Ok(())
    }
}

impl fmt::Display for ExtendedAsset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}@{}", self.amount, self.denom, self.contract)
    }
}
