use soroban_sdk::{contractevent, Address, Env};

use crate::types::Transaction;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInitialized {
    #[topic]
    pub owner: Address,
    pub quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    #[topic]
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerAdded {
    #[topic]
    pub signer: Address,
    pub signer_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignerRemoved {
    #[topic]
    pub signer: Address,
    pub index: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipOffered {
    #[topic]
    pub owner: Address,
    pub candidate: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipClaimed {
    #[topic]
    pub owner: Address,
    pub previous: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionProposed {
    #[topic]
    pub tx_id: u64,
    pub proposer: Address,
    pub receiver: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionApproved {
    #[topic]
    pub tx_id: u64,
    pub approver: Address,
    pub approval_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionSettled {
    #[topic]
    pub tx_id: u64,
    pub receiver: Address,
    pub amount: i128,
}

/// Quorum was reached but the token refused the transfer.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferFailed {
    #[topic]
    pub tx_id: u64,
    pub receiver: Address,
    pub amount: i128,
}

pub(crate) fn initialized(env: &Env, owner: &Address, quorum: u32) {
    VaultInitialized { owner: owner.clone(), quorum }.publish(env);
}

pub(crate) fn deposited(env: &Env, from: &Address, amount: i128) {
    Deposited { from: from.clone(), amount }.publish(env);
}

pub(crate) fn signer_added(env: &Env, signer: &Address, signer_count: u32) {
    SignerAdded { signer: signer.clone(), signer_count }.publish(env);
}

pub(crate) fn signer_removed(env: &Env, index: u32, signer: &Address) {
    SignerRemoved { signer: signer.clone(), index }.publish(env);
}

pub(crate) fn ownership_offered(env: &Env, owner: &Address, candidate: &Address) {
    OwnershipOffered {
        owner: owner.clone(),
        candidate: candidate.clone(),
    }
    .publish(env);
}

pub(crate) fn ownership_claimed(env: &Env, previous: &Address, owner: &Address) {
    OwnershipClaimed {
        owner: owner.clone(),
        previous: previous.clone(),
    }
    .publish(env);
}

pub(crate) fn transaction_proposed(env: &Env, tx: &Transaction) {
    TransactionProposed {
        tx_id: tx.id,
        proposer: tx.proposer.clone(),
        receiver: tx.receiver.clone(),
        amount: tx.amount,
    }
    .publish(env);
}

pub(crate) fn transaction_approved(env: &Env, tx: &Transaction, approver: &Address) {
    TransactionApproved {
        tx_id: tx.id,
        approver: approver.clone(),
        approval_count: tx.approval_count,
    }
    .publish(env);
}

pub(crate) fn transaction_settled(env: &Env, tx: &Transaction) {
    TransactionSettled {
        tx_id: tx.id,
        receiver: tx.receiver.clone(),
        amount: tx.amount,
    }
    .publish(env);
}

pub(crate) fn transfer_failed(env: &Env, tx: &Transaction) {
    TransferFailed {
        tx_id: tx.id,
        receiver: tx.receiver.clone(),
        amount: tx.amount,
    }
    .publish(env);
}
