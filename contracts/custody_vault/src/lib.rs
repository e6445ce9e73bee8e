#![no_std]

mod errors;
mod events;
mod quorum;
mod storage;
mod types;
mod vault;


pub use errors::VaultError;
pub use types::{SettleOutcome, Transaction, TxStatus, VaultConfig};
pub use vault::*;
