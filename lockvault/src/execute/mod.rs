//! Execute message handlers.

mod account;
mod config;
mod lock;
mod queue;
mod redeem;

pub use account::{execute_close, execute_deposit, execute_open, execute_withdraw};
pub use config::{execute_update_config, validate_chain_id};
pub use lock::execute_lock;
pub use queue::execute_process_queue;
pub use redeem::{execute_stake, execute_unlock, execute_unstake};
