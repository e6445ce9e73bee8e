use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use crate::errors::VaultError;
use crate::events;
use crate::quorum;
use crate::storage;
use crate::types::{SettleOutcome, Transaction, VaultConfig};

pub const MAX_PAGE_SIZE: u32 = 50;

/// Token custody released only on a quorum of signer approvals.
#[contract]
pub struct CustodyVault;

#[contractimpl]
impl CustodyVault {
    /// Sets up the signer set, quorum and custody token. `owner` becomes the
    /// identity allowed to manage signers.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        signers: Vec<Address>,
        quorum: u32,
    ) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        owner.require_auth();

        if signers.is_empty() {
            return Err(VaultError::EmptySignersList);
        }

        if quorum == 0 {
            return Err(VaultError::InvalidQuorum);
        }

        if quorum > signers.len() {
            return Err(VaultError::QuorumExceedsSigners);
        }

        for i in 0..signers.len() {
            for j in (i + 1)..signers.len() {
                if signers.get_unchecked(i) == signers.get_unchecked(j) {
                    return Err(VaultError::DuplicateSigner);
                }
            }
        }

        storage::write_config(&env, &VaultConfig { token, quorum });
        storage::write_owner(&env, &owner);
        storage::write_signers(&env, &signers);
        storage::extend_instance_ttl(&env);

        events::initialized(&env, &owner, quorum);
        Ok(())
    }

    /// Funds the custody pool from `from`.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), VaultError> {
        let config = storage::read_config(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&from, &env.current_contract_address(), &amount);
        storage::extend_instance_ttl(&env);

        events::deposited(&env, &from, amount);
        Ok(())
    }

    // ---- signer registry ----

    pub fn is_valid_signer(env: Env, identity: Address) -> bool {
        Self::signer_index(&storage::read_signers(&env), &identity).is_some()
    }

    pub fn add_valid_signer(env: Env, caller: Address, identity: Address) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;

        let mut signers = storage::read_signers(&env);
        if Self::signer_index(&signers, &identity).is_some() {
            return Err(VaultError::DuplicateSigner);
        }

        signers.push_back(identity.clone());
        storage::write_signers(&env, &signers);
        storage::extend_instance_ttl(&env);

        events::signer_added(&env, &identity, signers.len());
        Ok(())
    }

    /// Removes the signer at `index` and returns it. Approvals it already
    /// recorded on existing transactions keep counting.
    pub fn remove_signer(env: Env, caller: Address, index: u32) -> Result<Address, VaultError> {
        Self::require_owner(&env, &caller)?;
        let config = storage::read_config(&env)?;

        let mut signers = storage::read_signers(&env);
        let removed = signers.get(index).ok_or(VaultError::IndexOutOfRange)?;

        if signers.len() - 1 < config.quorum {
            return Err(VaultError::QuorumExceedsSigners);
        }

        signers.remove(index);
        storage::write_signers(&env, &signers);
        storage::extend_instance_ttl(&env);

        events::signer_removed(&env, index, &removed);
        Ok(removed)
    }

    pub fn signers(env: Env) -> Vec<Address> {
        storage::read_signers(&env)
    }

    // ---- ownership ----

    /// Nominates `candidate`. The current owner keeps every right until the
    /// candidate calls `claim_ownership`; a later nomination replaces this one.
    pub fn transfer_ownership(env: Env, caller: Address, candidate: Address) -> Result<(), VaultError> {
        Self::require_owner(&env, &caller)?;

        storage::write_pending_owner(&env, &candidate);
        storage::extend_instance_ttl(&env);

        events::ownership_offered(&env, &caller, &candidate);
        Ok(())
    }

    pub fn claim_ownership(env: Env, caller: Address) -> Result<(), VaultError> {
        let previous = storage::read_owner(&env)?;
        caller.require_auth();

        match storage::read_pending_owner(&env) {
            Some(pending) if pending == caller => {}
            _ => return Err(VaultError::NotPendingOwner),
        }

        storage::write_owner(&env, &caller);
        storage::remove_pending_owner(&env);
        storage::extend_instance_ttl(&env);

        events::ownership_claimed(&env, &previous, &caller);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, VaultError> {
        storage::read_owner(&env)
    }

    pub fn pending_owner(env: Env) -> Option<Address> {
        storage::read_pending_owner(&env)
    }

    // ---- transactions ----

    /// Proposes sending `amount` to `receiver` and returns the new id with the
    /// settlement outcome. The proposer's approval is recorded immediately, so
    /// with a quorum of one the transfer executes before this returns.
    pub fn initiate_transaction(
        env: Env,
        caller: Address,
        amount: i128,
        receiver: Address,
    ) -> Result<(u64, SettleOutcome), VaultError> {
        let config = storage::read_config(&env)?;
        caller.require_auth();
        Self::require_signer(&env, &caller)?;

        if amount <= 0 || amount > Self::balance_of_vault(&env, &config) {
            return Err(VaultError::InvalidAmount);
        }

        let tx_id = storage::next_transaction_id(&env);
        let mut tx = Transaction::new(&env, tx_id, caller, receiver, amount);
        events::transaction_proposed(&env, &tx);

        let outcome = quorum::settle_if_reached(&env, &config, &mut tx);
        storage::write_transaction(&env, &tx);
        storage::extend_instance_ttl(&env);

        Ok((tx_id, outcome))
    }

    /// Records the caller's approval and settles the transaction if this
    /// approval reaches the quorum. A failed transfer still keeps the approval
    /// and comes back as `SettleOutcome::TransferFailed`.
    pub fn approve_transaction(env: Env, caller: Address, tx_id: u64) -> Result<SettleOutcome, VaultError> {
        let config = storage::read_config(&env)?;
        caller.require_auth();
        Self::require_signer(&env, &caller)?;

        let mut tx = storage::read_transaction(&env, tx_id)?;

        if tx.is_settled() {
            return Err(VaultError::AlreadySettled);
        }

        if tx.has_approved(&caller) {
            return Err(VaultError::AlreadySigned);
        }

        tx.record_approval(&caller);
        events::transaction_approved(&env, &tx, &caller);

        let outcome = quorum::settle_if_reached(&env, &config, &mut tx);
        storage::write_transaction(&env, &tx);
        storage::extend_instance_ttl(&env);

        Ok(outcome)
    }

    /// Retries settlement of a pending transaction that already holds quorum,
    /// e.g. after a transfer failed for lack of funds.
    pub fn execute_transaction(env: Env, caller: Address, tx_id: u64) -> Result<(), VaultError> {
        let config = storage::read_config(&env)?;
        caller.require_auth();
        Self::require_signer(&env, &caller)?;

        let mut tx = storage::read_transaction(&env, tx_id)?;

        if tx.is_settled() {
            return Err(VaultError::AlreadySettled);
        }

        if !quorum::quorum_reached(&tx, config.quorum) {
            return Err(VaultError::InsufficientApprovals);
        }

        quorum::settle(&env, &config, &mut tx)?;
        storage::write_transaction(&env, &tx);
        storage::extend_instance_ttl(&env);

        Ok(())
    }

    pub fn get_all_transactions(env: Env) -> Vec<Transaction> {
        let mut transactions = Vec::new(&env);
        for tx_id in 1..=storage::transaction_count(&env) {
            if let Ok(tx) = storage::read_transaction(&env, tx_id) {
                transactions.push_back(tx);
            }
        }
        transactions
    }

    /// Up to `limit` transactions starting at id `start`, in id order.
    /// `limit` is capped at `MAX_PAGE_SIZE`.
    pub fn get_transactions(env: Env, start: u64, limit: u32) -> Vec<Transaction> {
        let mut transactions = Vec::new(&env);
        let first = start.max(1);
        let last = storage::transaction_count(&env);
        let limit = limit.min(MAX_PAGE_SIZE) as u64;

        let mut tx_id = first;
        while tx_id <= last && tx_id - first < limit {
            if let Ok(tx) = storage::read_transaction(&env, tx_id) {
                transactions.push_back(tx);
            }
            tx_id += 1;
        }
        transactions
    }

    pub fn get_transaction(env: Env, tx_id: u64) -> Result<Transaction, VaultError> {
        storage::read_transaction(&env, tx_id)
    }

    pub fn transaction_count(env: Env) -> u64 {
        storage::transaction_count(&env)
    }

    // ---- views ----

    pub fn quorum(env: Env) -> Result<u32, VaultError> {
        Ok(storage::read_config(&env)?.quorum)
    }

    pub fn token(env: Env) -> Result<Address, VaultError> {
        Ok(storage::read_config(&env)?.token)
    }

    pub fn custody_balance(env: Env) -> Result<i128, VaultError> {
        let config = storage::read_config(&env)?;
        Ok(Self::balance_of_vault(&env, &config))
    }

    fn balance_of_vault(env: &Env, config: &VaultConfig) -> i128 {
        token::Client::new(env, &config.token).balance(&env.current_contract_address())
    }

    fn signer_index(signers: &Vec<Address>, identity: &Address) -> Option<u32> {
        signers.first_index_of(identity.clone())
    }

    fn require_owner(env: &Env, caller: &Address) -> Result<(), VaultError> {
        let owner = storage::read_owner(env)?;
        caller.require_auth();

        if *caller != owner {
            return Err(VaultError::NotOwner);
        }
        Ok(())
    }

    fn require_signer(env: &Env, caller: &Address) -> Result<(), VaultError> {
        if Self::signer_index(&storage::read_signers(env), caller).is_none() {
            return Err(VaultError::NotValidSigner);
        }
        Ok(())
    }
}
