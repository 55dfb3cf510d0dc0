//! Common - Shared Wire Types for the Lockvault Paired Deployments
//!
//! This package defines the types that cross the trust boundary between the
//! two paired contracts: the extended asset, the cross-chain transfer record
//! and its proof envelope, and the bridge-service verification interface.
//! Both deployments serialize these with canonical JSON, so the shapes here
//! are a wire contract and must not change without coordinating both sides.

pub mod asset;
pub mod bridge;
pub mod xfer;

pub use asset::ExtendedAsset;
pub use bridge::{BridgeQueryMsg, VerifyProofResponse};
pub use xfer::{payload_digest, ActionProof, XferRecord, XFER_ACTION};
