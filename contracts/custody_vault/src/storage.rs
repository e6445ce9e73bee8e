use soroban_sdk::{Address, Env, Vec};

use crate::errors::VaultError;
use crate::types::{DataKey, Transaction, VaultConfig};

const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Ledger entries outlive the instance bump so history stays readable.
pub(crate) const TRANSACTION_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const TRANSACTION_LIFETIME_THRESHOLD: u32 = TRANSACTION_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<VaultConfig, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(VaultError::NotInitialized)
}

pub fn write_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_owner(env: &Env) -> Result<Address, VaultError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(VaultError::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingOwner)
}

pub fn write_pending_owner(env: &Env, candidate: &Address) {
    env.storage().instance().set(&DataKey::PendingOwner, candidate);
}

pub fn remove_pending_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingOwner);
}

pub fn read_signers(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .unwrap_or(Vec::new(env))
}

pub fn write_signers(env: &Env, signers: &Vec<Address>) {
    env.storage().instance().set(&DataKey::Signers, signers);
}

pub fn transaction_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TxCount)
        .unwrap_or(0u64)
}

/// Reserves the next sequential id. Ids start at 1.
pub fn next_transaction_id(env: &Env) -> u64 {
    let id = transaction_count(env) + 1;
    env.storage().instance().set(&DataKey::TxCount, &id);
    id
}

pub fn read_transaction(env: &Env, tx_id: u64) -> Result<Transaction, VaultError> {
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(tx_id))
        .ok_or(VaultError::UnknownTransaction)
}

pub fn write_transaction(env: &Env, tx: &Transaction) {
    let key = DataKey::Transaction(tx.id);
    env.storage().persistent().set(&key, tx);
    env.storage()
        .persistent()
        .extend_ttl(&key, TRANSACTION_LIFETIME_THRESHOLD, TRANSACTION_BUMP_AMOUNT);
}
