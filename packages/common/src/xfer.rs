//! Cross-chain transfer record and proof envelope.
//!
//! A lock on the native chain emits an `emitxfer` event whose payload is the
//! canonical JSON serialization of [`XferRecord`]. The paired deployment
//! consumes that payload to issue wrap tokens; retiring wrap tokens emits the
//! same record shape back, wrapped in an [`ActionProof`] attested by the
//! bridge service. The serialization must round-trip byte-for-byte across
//! chains: both sides produce it with `to_json_binary` and consume it with
//! `from_json`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use tiny_keccak::{Hasher, Keccak};

use crate::asset::ExtendedAsset;

/// Action name under which transfer records are emitted and proved.
pub const XFER_ACTION: &str = "emitxfer";

/// The cross-chain transfer record.
#[cw_serde]
pub struct XferRecord {
    /// Account that committed the value on the emitting chain
    pub owner: String,
    /// Amount, denom, and the custody contract the claim settles against
    pub quantity: ExtendedAsset,
    /// Account credited on the receiving chain
    pub beneficiary: String,
    /// Whether the record concerns staked-wrap issuance or retirement
    pub staked: bool,
}

/// An authenticated action proof from the paired chain.
///
/// Authenticity (that the action was executed and irreversibly committed on
/// the named chain) is attested by the bridge service; this envelope carries
/// the identity fields and payload that the consuming contract validates.
#[cw_serde]
pub struct ActionProof {
    /// Chain the action was committed on
    pub chain_id: Binary,
    /// Contract that performed the action
    pub contract: String,
    /// Action name (must be [`XFER_ACTION`] for transfer records)
    pub action: String,
    /// Serialized action payload (an [`XferRecord`] for transfer records)
    pub payload: Binary,
    /// Unique digest of the action receipt, used for replay protection
    pub receipt_digest: Binary,
}

/// Keccak256 digest of a serialized payload.
///
/// Used as the receipt digest of locally emitted records so relayers can
/// correlate the emitted event with the proof later presented on the paired
/// chain.
pub fn payload_digest(payload: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(payload);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}
