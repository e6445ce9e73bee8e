use soroban_sdk::{contracttype, Address, Env, Map};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Owner,
    PendingOwner,
    Signers,
    TxCount,
    Transaction(u64),
}

/// Settings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Token contract whose balance is held in custody
    pub token: Address,
    /// Distinct approvals needed before a transfer executes
    pub quorum: u32,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TxStatus {
    Pending = 0,
    Settled = 1,
}

/// What an approval-affecting call did to the transaction it touched.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SettleOutcome {
    /// Below quorum, nothing moved
    Pending = 0,
    /// Quorum reached and the transfer executed
    Settled = 1,
    /// Quorum reached but the transfer failed; approvals are kept
    TransferFailed = 2,
}

/// A proposed transfer out of custody together with its approval state.
///
/// Records are never deleted; once `Settled` they are kept as history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub amount: i128,
    pub receiver: Address,
    pub proposer: Address,
    pub approvals: Map<Address, bool>,
    pub approval_count: u32,
    pub status: TxStatus,
    pub created_at: u64,
    pub settled_at: Option<u64>,
}

impl Transaction {
    /// New pending record with the proposer counted as first approver.
    pub fn new(env: &Env, id: u64, proposer: Address, receiver: Address, amount: i128) -> Self {
        let mut approvals = Map::new(env);
        approvals.set(proposer.clone(), true);

        Transaction {
            id,
            amount,
            receiver,
            proposer,
            approvals,
            approval_count: 1,
            status: TxStatus::Pending,
            created_at: env.ledger().timestamp(),
            settled_at: None,
        }
    }

    pub fn has_approved(&self, signer: &Address) -> bool {
        self.approvals.get(signer.clone()).unwrap_or(false)
    }

    pub fn is_settled(&self) -> bool {
        self.status == TxStatus::Settled
    }

    pub(crate) fn record_approval(&mut self, signer: &Address) {
        self.approvals.set(signer.clone(), true);
        self.approval_count += 1;
    }

    pub(crate) fn mark_settled(&mut self, timestamp: u64) {
        self.status = TxStatus::Settled;
        self.settled_at = Some(timestamp);
    }
}
