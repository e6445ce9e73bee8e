use soroban_sdk::{log, token, Env};

use crate::errors::VaultError;
use crate::events;
use crate::types::{SettleOutcome, Transaction, VaultConfig};

pub(crate) fn quorum_reached(tx: &Transaction, quorum: u32) -> bool {
    tx.approval_count >= quorum
}

/// Moves `tx.amount` out of custody and marks the record settled.
///
/// The token call runs as a sub-invocation: if it fails the host rolls back
/// only that call, `tx` is left untouched and `TransferFailed` is returned.
pub(crate) fn settle(env: &Env, config: &VaultConfig, tx: &mut Transaction) -> Result<(), VaultError> {
    let token_client = token::Client::new(env, &config.token);
    let vault_address = env.current_contract_address();

    match token_client.try_transfer(&vault_address, &tx.receiver, &tx.amount) {
        Ok(Ok(())) => {
            tx.mark_settled(env.ledger().timestamp());
            events::transaction_settled(env, tx);
            Ok(())
        }
        _ => {
            log!(env, "transfer failed", tx.id, tx.amount);
            events::transfer_failed(env, tx);
            Err(VaultError::TransferFailed)
        }
    }
}

/// Runs after every approval-affecting event.
///
/// A failed transfer keeps the record pending with all approvals intact and
/// is reported as `SettleOutcome::TransferFailed`; it is retried through
/// `execute_transaction` or the next approval.
pub(crate) fn settle_if_reached(env: &Env, config: &VaultConfig, tx: &mut Transaction) -> SettleOutcome {
    if !quorum_reached(tx, config.quorum) {
        return SettleOutcome::Pending;
    }

    match settle(env, config, tx) {
        Ok(()) => SettleOutcome::Settled,
        Err(_) => SettleOutcome::TransferFailed,
    }
}
