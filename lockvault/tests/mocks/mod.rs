//! Mock collaborator contracts and shared setup for integration tests.
//!
//! The vault consumes two external contracts: the bridge service (proof
//! authenticity) and the yield pool (snapshot, matured shares, deposits and
//! withdrawals). Both are mounted here as real cw-multi-test contracts so
//! the vault's queries and outbound messages run against the actual router.

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env,
    MessageInfo, Response, StdResult, Uint128,
};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::{ActionProof, ExtendedAsset, XferRecord, XFER_ACTION};
use lockvault::msg::{
    BalanceResponse, ExecuteMsg, InstantiateMsg, QueueEntryResponse, QueueResponse, QueryMsg,
    ReserveResponse, StatsResponse,
};
use lockvault::pool::{MaturedRexResponse, PoolSnapshot};

pub const DENOM: &str = "uluna";
pub const WRAP_CONTRACT: &str = "wraptoken";
pub const STAKE_CONTRACT: &str = "staketoken";

pub fn local_chain_id() -> Binary {
    Binary::from([1u8; 32])
}

pub fn paired_chain_id() -> Binary {
    Binary::from([2u8; 32])
}

// ============================================================================
// Mock yield pool
// ============================================================================

mod mock_pool {
    use super::*;

    #[cw_serde]
    pub struct PoolState {
        pub denom: String,
        pub total_lendable: Uint128,
        pub total_rex: Uint128,
        pub matured_rex: Uint128,
    }

    pub const STATE: Item<PoolState> = Item::new("state");

    #[cw_serde]
    pub struct PoolInstantiateMsg {
        pub denom: String,
        pub total_lendable: Uint128,
        pub total_rex: Uint128,
        pub matured_rex: Uint128,
    }

    /// Superset of the vault's `PoolExecuteMsg`, plus test controls. The
    /// overlapping variants serialize identically, so the vault's outbound
    /// messages dispatch into this contract unchanged.
    #[cw_serde]
    pub enum PoolExecuteMsg {
        Deposit {},
        BuyRex { amount: Uint128 },
        SellRex { rex: Uint128 },
        Withdraw { amount: Uint128 },
        SetSnapshot { total_lendable: Uint128, total_rex: Uint128 },
        SetMatured { matured_rex: Uint128 },
    }

    #[cw_serde]
    pub enum PoolQueryMsg {
        Snapshot {},
        MaturedRex { owner: String },
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: PoolInstantiateMsg,
    ) -> StdResult<Response> {
        STATE.save(
            deps.storage,
            &PoolState {
                denom: msg.denom,
                total_lendable: msg.total_lendable,
                total_rex: msg.total_rex,
                matured_rex: msg.matured_rex,
            },
        )?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: PoolExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            // The snapshot is held fixed regardless of pool traffic: tests
            // control price drift explicitly through SetSnapshot.
            PoolExecuteMsg::Deposit {} => Ok(Response::new()),
            PoolExecuteMsg::BuyRex { .. } => Ok(Response::new()),
            PoolExecuteMsg::SellRex { .. } => Ok(Response::new()),
            PoolExecuteMsg::Withdraw { amount } => {
                let state = STATE.load(deps.storage)?;
                Ok(Response::new().add_message(BankMsg::Send {
                    to_address: info.sender.to_string(),
                    amount: vec![Coin {
                        denom: state.denom,
                        amount,
                    }],
                }))
            }
            PoolExecuteMsg::SetSnapshot {
                total_lendable,
                total_rex,
            } => {
                STATE.update(deps.storage, |mut state| -> StdResult<_> {
                    state.total_lendable = total_lendable;
                    state.total_rex = total_rex;
                    Ok(state)
                })?;
                Ok(Response::new())
            }
            PoolExecuteMsg::SetMatured { matured_rex } => {
                STATE.update(deps.storage, |mut state| -> StdResult<_> {
                    state.matured_rex = matured_rex;
                    Ok(state)
                })?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: PoolQueryMsg) -> StdResult<Binary> {
        let state = STATE.load(deps.storage)?;
        match msg {
            PoolQueryMsg::Snapshot {} => to_json_binary(&PoolSnapshot {
                total_lendable: state.total_lendable,
                total_rex: state.total_rex,
            }),
            PoolQueryMsg::MaturedRex { .. } => to_json_binary(&MaturedRexResponse {
                matured_rex: state.matured_rex,
                maturity_buckets: vec![],
            }),
        }
    }
}

// ============================================================================
// Mock bridge
// ============================================================================

mod mock_bridge {
    use super::*;

    pub const VALID: Item<bool> = Item::new("valid");

    #[cw_serde]
    pub struct BridgeInstantiateMsg {}

    #[cw_serde]
    pub enum BridgeExecuteMsg {
        SetValid { valid: bool },
    }

    #[cw_serde]
    pub enum BridgeQueryMsg {
        VerifyProof { proof: ActionProof },
    }

    #[cw_serde]
    pub struct VerifyProofResponse {
        pub is_valid: bool,
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: BridgeInstantiateMsg,
    ) -> StdResult<Response> {
        VALID.save(deps.storage, &true)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: BridgeExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            BridgeExecuteMsg::SetValid { valid } => {
                VALID.save(deps.storage, &valid)?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: BridgeQueryMsg) -> StdResult<Binary> {
        match msg {
            BridgeQueryMsg::VerifyProof { .. } => to_json_binary(&VerifyProofResponse {
                is_valid: VALID.load(deps.storage)?,
            }),
        }
    }
}

// ============================================================================
// Test environment
// ============================================================================

pub struct SetupOptions {
    pub total_lendable: u128,
    pub total_rex: u128,
    pub matured_rex: u128,
    pub min_unstake_seconds: u64,
    pub accrue_stake_weight: bool,
    pub reward_recipient: Option<String>,
}

impl Default for SetupOptions {
    fn default() -> Self {
        SetupOptions {
            total_lendable: 1_000_000,
            total_rex: 10_000_000,
            matured_rex: 0,
            min_unstake_seconds: 0,
            accrue_stake_weight: false,
            reward_recipient: None,
        }
    }
}

pub struct TestEnv {
    pub app: App,
    pub vault: Addr,
    pub bridge: Addr,
    pub pool: Addr,
    pub admin: Addr,
    pub user: Addr,
    pub user2: Addr,
    pub user3: Addr,
}

fn contract_vault() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        lockvault::contract::execute,
        lockvault::contract::instantiate,
        lockvault::contract::query,
    ))
}

fn contract_pool() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        mock_pool::execute,
        mock_pool::instantiate,
        mock_pool::query,
    ))
}

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    Box::new(ContractWrapper::new(
        mock_bridge::execute,
        mock_bridge::instantiate,
        mock_bridge::query,
    ))
}

pub fn setup() -> TestEnv {
    setup_with(SetupOptions::default())
}

pub fn setup_with(options: SetupOptions) -> TestEnv {
    let mut app = App::default();

    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let user2 = Addr::unchecked("terra1user2");
    let user3 = Addr::unchecked("terra1user3");

    app.init_modules(|router, _, storage| {
        for account in [&admin, &user, &user2, &user3] {
            router
                .bank
                .init_balance(
                    storage,
                    account,
                    vec![
                        Coin {
                            denom: DENOM.to_string(),
                            amount: Uint128::new(10_000_000_000),
                        },
                        Coin {
                            denom: "uatom".to_string(),
                            amount: Uint128::new(1_000_000),
                        },
                    ],
                )
                .unwrap();
        }
    });

    let pool_code = app.store_code(contract_pool());
    let pool = app
        .instantiate_contract(
            pool_code,
            admin.clone(),
            &mock_pool::PoolInstantiateMsg {
                denom: DENOM.to_string(),
                total_lendable: Uint128::new(options.total_lendable),
                total_rex: Uint128::new(options.total_rex),
                matured_rex: Uint128::new(options.matured_rex),
            },
            &[],
            "mock-pool",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            admin.clone(),
            &mock_bridge::BridgeInstantiateMsg {},
            &[],
            "mock-bridge",
            None,
        )
        .unwrap();

    let vault_code = app.store_code(contract_vault());
    let vault = app
        .instantiate_contract(
            vault_code,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                chain_id: local_chain_id(),
                bridge: bridge.to_string(),
                native_denom: DENOM.to_string(),
                paired_chain_id: paired_chain_id(),
                paired_wraptoken_contract: WRAP_CONTRACT.to_string(),
                paired_staketoken_contract: STAKE_CONTRACT.to_string(),
                yield_pool: pool.to_string(),
                min_unstake_seconds: options.min_unstake_seconds,
                accrue_stake_weight: options.accrue_stake_weight,
                reward_recipient: options.reward_recipient,
            },
            &[],
            "lockvault",
            Some(admin.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        vault,
        bridge,
        pool,
        admin,
        user,
        user2,
        user3,
    }
}

// ============================================================================
// Helpers
// ============================================================================

impl TestEnv {
    pub fn deposit(&mut self, owner: &Addr, amount: u128) -> AppResponse {
        self.app
            .execute_contract(
                owner.clone(),
                self.vault.clone(),
                &ExecuteMsg::Deposit {},
                &coins(amount, DENOM),
            )
            .unwrap()
    }

    pub fn lock(&mut self, owner: &Addr, amount: u128, stake: bool) -> AppResponse {
        self.app
            .execute_contract(
                owner.clone(),
                self.vault.clone(),
                &ExecuteMsg::Lock {
                    quantity: Uint128::new(amount),
                    beneficiary: "paired1beneficiary".to_string(),
                    stake,
                },
                &[],
            )
            .unwrap()
    }

    /// A staked-wrap retirement proof naming `beneficiary`, with a digest
    /// derived from `digest_seed`.
    pub fn unstake_proof(&self, beneficiary: &Addr, amount: u128, digest_seed: u8) -> ActionProof {
        self.proof(STAKE_CONTRACT, beneficiary, amount, true, digest_seed)
    }

    /// A liquid-wrap retirement proof naming `beneficiary`.
    pub fn unlock_proof(&self, beneficiary: &Addr, amount: u128, digest_seed: u8) -> ActionProof {
        self.proof(WRAP_CONTRACT, beneficiary, amount, false, digest_seed)
    }

    /// A wrap-conversion proof (liquid wrap retired into staked wrap).
    pub fn stake_proof(&self, beneficiary: &Addr, amount: u128, digest_seed: u8) -> ActionProof {
        self.proof(WRAP_CONTRACT, beneficiary, amount, true, digest_seed)
    }

    pub fn proof(
        &self,
        contract: &str,
        beneficiary: &Addr,
        amount: u128,
        staked: bool,
        digest_seed: u8,
    ) -> ActionProof {
        let record = XferRecord {
            owner: "paired1owner".to_string(),
            quantity: ExtendedAsset::new(amount, DENOM, self.vault.as_str()),
            beneficiary: beneficiary.to_string(),
            staked,
        };
        ActionProof {
            chain_id: paired_chain_id(),
            contract: contract.to_string(),
            action: XFER_ACTION.to_string(),
            payload: to_json_binary(&record).unwrap(),
            receipt_digest: Binary::from([digest_seed; 32]),
        }
    }

    pub fn unstake(&mut self, proof: ActionProof) -> AppResponse {
        self.app
            .execute_contract(
                self.user.clone(),
                self.vault.clone(),
                &ExecuteMsg::Unstake { proof },
                &[],
            )
            .unwrap()
    }

    pub fn process_queue(&mut self, max_count: u32) -> AppResponse {
        self.app
            .execute_contract(
                self.user.clone(),
                self.vault.clone(),
                &ExecuteMsg::ProcessQueue { max_count },
                &[],
            )
            .unwrap()
    }

    pub fn set_matured(&mut self, matured_rex: u128) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.pool.clone(),
                &mock_pool::PoolExecuteMsg::SetMatured {
                    matured_rex: Uint128::new(matured_rex),
                },
                &[],
            )
            .unwrap();
    }

    pub fn set_bridge_valid(&mut self, valid: bool) {
        self.app
            .execute_contract(
                self.admin.clone(),
                self.bridge.clone(),
                &mock_bridge::BridgeExecuteMsg::SetValid { valid },
                &[],
            )
            .unwrap();
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += 1;
        });
    }

    pub fn balance(&self, owner: &Addr) -> BalanceResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.vault,
                &QueryMsg::Balance {
                    owner: owner.to_string(),
                },
            )
            .unwrap()
    }

    pub fn reserve(&self) -> ReserveResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.vault, &QueryMsg::Reserve {})
            .unwrap()
    }

    pub fn stats(&self) -> StatsResponse {
        self.app
            .wrap()
            .query_wasm_smart(&self.vault, &QueryMsg::Stats {})
            .unwrap()
    }

    pub fn queue(&self) -> QueueResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.vault,
                &QueryMsg::Queue {
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap()
    }

    pub fn queue_entry(&self, owner: &Addr) -> QueueEntryResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.vault,
                &QueryMsg::QueueEntry {
                    owner: owner.to_string(),
                },
            )
            .unwrap()
    }

    pub fn is_processed(&self, digest_seed: u8) -> bool {
        let response: lockvault::msg::ProcessedResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.vault,
                &QueryMsg::IsProcessed {
                    digest: Binary::from([digest_seed; 32]),
                },
            )
            .unwrap();
        response.processed
    }

    pub fn bank_balance(&self, account: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(account, DENOM)
            .unwrap()
            .amount
            .u128()
    }
}
