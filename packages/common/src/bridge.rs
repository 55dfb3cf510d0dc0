//! Bridge-service verification interface.
//!
//! The bridge contract is the external collaborator that establishes proof
//! authenticity. Consumers trust its verdict completely; everything else
//! about a proof (source identity, action name, payload shape) is validated
//! by the consumer itself.

use cosmwasm_schema::cw_serde;

use crate::xfer::ActionProof;

/// Queries understood by the bridge service.
#[cw_serde]
pub enum BridgeQueryMsg {
    /// Verify that the proof corresponds to an action executed and
    /// irreversibly committed on the chain it names.
    VerifyProof { proof: ActionProof },
}

/// Bridge verdict on a proof.
#[cw_serde]
pub struct VerifyProofResponse {
    pub is_valid: bool,
}
