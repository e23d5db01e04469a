use soroban_sdk::{contracttype, Bytes};

/// The governor settings for managing proposals
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct GovernorSettings {
    /// The votes required to create a proposal.
    pub proposal_threshold: i128,
    /// The delay (in ledgers) from the proposal creation to when the voting period begins. The voting
    /// period start time will be the checkpoint used to account for all votes for the proposal.
    pub vote_delay: u32,
    /// The time (in ledgers) the proposal will be open to vote against. Must be at least one ledger.
    pub vote_period: u32,
}

/// A point in the quorum numerator history
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct QuorumCheckpoint {
    /// The ledger sequence the numerator took effect at
    pub sequence: u32,
    pub numerator: u32,
}

/// The current governor settings, combined with the state of a single account as of the
/// previous ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct SettingsSnapshot {
    pub proposal_threshold: i128,
    pub vote_delay: u32,
    pub vote_period: u32,
    /// The representation data registered for the account with the senate
    pub representation: Bytes,
    /// The voting power of the account at the previous ledger
    pub votes: i128,
    pub is_valid_senator: bool,
    /// If the senate considers the account's representation data valid
    pub is_valid_members: bool,
}
