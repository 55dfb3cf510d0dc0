//! Error types for the lockvault contract.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Amount must be greater than zero")]
    ZeroAmount,

    #[error("Wrong denom: expected {expected}, got {got}")]
    WrongDenom { expected: String, got: String },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid chain id: expected 32 bytes, got {got}")]
    InvalidChainId { got: usize },

    // ========================================================================
    // Proof Errors
    // ========================================================================

    #[error("Proof rejected by bridge")]
    ProofRejected,

    #[error("Proof chain does not match paired chain")]
    WrongChain,

    #[error("Proof contract does not match paired contract: expected {expected}, got {got}")]
    WrongContract { expected: String, got: String },

    #[error("Proof action must be {expected}, got {got}")]
    WrongAction { expected: String, got: String },

    #[error("Proof transfer kind mismatch: this operation handles {expected} transfers")]
    WrongProofKind { expected: String },

    #[error("Proof settles against {got}, not this contract")]
    WrongSettlementContract { got: String },

    #[error("Invalid proof payload: {reason}")]
    InvalidProofPayload { reason: String },

    #[error("Action already proved: digest {digest}")]
    AlreadyProcessed { digest: String },

    // ========================================================================
    // Balance & Reserve Errors
    // ========================================================================

    #[error("No balance record for {owner}")]
    BalanceNotFound { owner: String },

    #[error("Insufficient {field} balance: available {available}, requested {requested}")]
    InsufficientBalance {
        field: &'static str,
        available: Uint128,
        requested: Uint128,
    },

    #[error("Insufficient {field} reserve: available {available}, requested {requested}")]
    InsufficientReserve {
        field: &'static str,
        available: Uint128,
        requested: Uint128,
    },

    #[error("Cannot close: balance is not zero")]
    NonZeroBalance,

    // ========================================================================
    // Pool Errors
    // ========================================================================

    #[error("Yield pool is empty")]
    EmptyPool,
}
