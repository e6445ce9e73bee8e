use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidQuorum = 3,
    EmptySignersList = 4,
    DuplicateSigner = 5,
    QuorumExceedsSigners = 6,
    NotOwner = 7,
    NotPendingOwner = 8,
    NotValidSigner = 9,
    InvalidAmount = 10,
    UnknownTransaction = 11,
    AlreadySettled = 12,
    AlreadySigned = 13,
    IndexOutOfRange = 14,
    TransferFailed = 15,
    InsufficientApprovals = 16,
}
