//! Proof validation and replay protection.
//!
//! A redemption proof passes through three gates, in order:
//! 1. the bridge service attests authenticity (trusted completely),
//! 2. the proof's identity fields are checked against the configured paired
//!    chain and contract and the transfer record is decoded,
//! 3. the receipt digest is admitted by the replay guard, at most once.
//!
//! Admission is the first storage mutation after content validation
//! succeeds, so a malformed proof never consumes its digest and a valid
//! digest can never be applied twice.

use cosmwasm_std::{from_json, Binary, QuerierWrapper, Storage};

use common::{ActionProof, BridgeQueryMsg, VerifyProofResponse, XferRecord, XFER_ACTION};

use crate::error::ContractError;
use crate::state::{Config, ProcessedProof, NEXT_PROOF_ID, PROCESSED, PROCESSED_BY_DIGEST};

/// Ask the bridge service whether the proof is authentic.
pub fn verify_with_bridge(
    querier: &QuerierWrapper,
    config: &Config,
    proof: &ActionProof,
) -> Result<(), ContractError> {
    let verdict: VerifyProofResponse = querier.query_wasm_smart(
        &config.bridge,
        &BridgeQueryMsg::VerifyProof {
            proof: proof.clone(),
        },
    )?;
    if !verdict.is_valid {
        return Err(ContractError::ProofRejected);
    }
    Ok(())
}

/// Validate the proof's identity fields and decode the transfer record.
///
/// `expected_contract` is the paired contract the operation redeems against:
/// the liquid-wrap contract for Unlock/Stake, the staked-wrap contract for
/// Unstake.
pub fn validate_xfer(
    config: &Config,
    proof: &ActionProof,
    expected_contract: &str,
) -> Result<XferRecord, ContractError> {
    if proof.chain_id != config.paired_chain_id {
        return Err(ContractError::WrongChain);
    }
    if proof.contract != expected_contract {
        return Err(ContractError::WrongContract {
            expected: expected_contract.to_string(),
            got: proof.contract.clone(),
        });
    }
    if proof.action != XFER_ACTION {
        return Err(ContractError::WrongAction {
            expected: XFER_ACTION.to_string(),
            got: proof.action.clone(),
        });
    }
    from_json(&proof.payload).map_err(|err| ContractError::InvalidProofPayload {
        reason: err.to_string(),
    })
}

/// Admit a receipt digest into the processed set, at most once.
///
/// Returns the autogenerated processed-proof id, or `AlreadyProcessed` if
/// the digest has been consumed before.
pub fn admit_proof(storage: &mut dyn Storage, digest: &Binary) -> Result<u64, ContractError> {
    if PROCESSED_BY_DIGEST.has(storage, digest.as_slice()) {
        return Err(ContractError::AlreadyProcessed {
            digest: hex::encode(digest.as_slice()),
        });
    }

    let id = NEXT_PROOF_ID.may_load(storage)?.unwrap_or_default();
    NEXT_PROOF_ID.save(storage, &(id + 1))?;
    PROCESSED.save(
        storage,
        id,
        &ProcessedProof {
            id,
            digest: digest.clone(),
        },
    )?;
    PROCESSED_BY_DIGEST.save(storage, digest.as_slice(), &id)?;
    Ok(id)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::{to_json_binary, Addr, Uint128};

    use common::ExtendedAsset;

    use super::*;

    fn config() -> Config {
        Config {
            admin: Addr::unchecked("admin"),
            chain_id: Binary::from([1u8; 32]),
            bridge: Addr::unchecked("bridge"),
            native_denom: "uluna".to_string(),
            paired_chain_id: Binary::from([2u8; 32]),
            paired_wraptoken_contract: "wrap".to_string(),
            paired_staketoken_contract: "stakewrap".to_string(),
            yield_pool: Addr::unchecked("pool"),
            min_unstake_seconds: 0,
            accrue_stake_weight: false,
            reward_recipient: None,
        }
    }

    fn proof() -> ActionProof {
        let record = XferRecord {
            owner: "paired1owner".to_string(),
            quantity: ExtendedAsset::new(100u128, "uluna", "vault"),
            beneficiary: "terra1beneficiary".to_string(),
            staked: false,
        };
        ActionProof {
            chain_id: Binary::from([2u8; 32]),
            contract: "wrap".to_string(),
            action: XFER_ACTION.to_string(),
            payload: to_json_binary(&record).unwrap(),
            receipt_digest: Binary::from([9u8; 32]),
        }
    }

    #[test]
    fn valid_proof_decodes() {
        let record = validate_xfer(&config(), &proof(), "wrap").unwrap();
        assert_eq!(record.quantity.amount, Uint128::new(100));
        assert!(!record.staked);
    }

    #[test]
    fn identity_mismatches_are_distinct_errors() {
        let cfg = config();

        let mut p = proof();
        p.chain_id = Binary::from([3u8; 32]);
        assert_eq!(validate_xfer(&cfg, &p, "wrap").unwrap_err(), ContractError::WrongChain);

        let p = proof();
        let err = validate_xfer(&cfg, &p, "stakewrap").unwrap_err();
        assert!(matches!(err, ContractError::WrongContract { .. }));

        let mut p = proof();
        p.action = "transfer".to_string();
        let err = validate_xfer(&cfg, &p, "wrap").unwrap_err();
        assert!(matches!(err, ContractError::WrongAction { .. }));

        let mut p = proof();
        p.payload = Binary::from(b"not json".as_slice());
        let err = validate_xfer(&cfg, &p, "wrap").unwrap_err();
        assert!(matches!(err, ContractError::InvalidProofPayload { .. }));
    }

    #[test]
    fn digests_admit_exactly_once() {
        let mut deps = mock_dependencies();
        let digest = Binary::from([9u8; 32]);

        let id = admit_proof(deps.as_mut().storage, &digest).unwrap();
        assert_eq!(id, 0);

        let err = admit_proof(deps.as_mut().storage, &digest).unwrap_err();
        assert!(matches!(err, ContractError::AlreadyProcessed { .. }));

        // A different digest still admits, with the next id.
        let other = Binary::from([10u8; 32]);
        assert_eq!(admit_proof(deps.as_mut().storage, &other).unwrap(), 1);
    }
}
