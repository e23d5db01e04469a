use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::{GovernorSettings, QuorumCheckpoint, SettingsSnapshot};

#[contractclient(name = "GovernorParamsClient")]
pub trait GovernorParams {
    /// Setup the governor parameters contract
    ///
    /// ### Arguments
    /// * `authority` - The address allowed to update parameters, usually the governor executing proposals
    /// * `votes` - The address of the contract used to track votes
    /// * `senate` - The address of the contract tracking representation and senator eligibility
    /// * `settings` - The settings for the governor
    /// * `quorum_numerator` - The initial quorum numerator
    ///
    /// ### Panics
    /// * If the contract is already initialized
    /// * If the settings are invalid
    /// * If the quorum numerator is greater than the quorum denominator
    fn initialize(
        e: Env,
        authority: Address,
        votes: Address,
        senate: Address,
        settings: GovernorSettings,
        quorum_numerator: u32,
    );

    /// Get the address allowed to update parameters
    fn governance_authority(e: Env) -> Address;

    /// Get the current settings of the governor
    fn settings(e: Env) -> GovernorSettings;

    /// Get the delay (in ledgers) between proposal creation and the start of voting
    fn voting_delay(e: Env) -> u32;

    /// Get the time (in ledgers) a proposal is open for voting
    fn voting_period(e: Env) -> u32;

    /// Get the votes required to create a proposal
    fn proposal_threshold(e: Env) -> i128;

    /// (Governance authority only) Set the voting delay
    ///
    /// ### Arguments
    /// * `caller` - The address of the caller
    /// * `vote_delay` - The new voting delay (in ledgers)
    ///
    /// ### Panics
    /// If the caller is not the governance authority
    fn set_voting_delay(e: Env, caller: Address, vote_delay: u32);

    /// (Governance authority only) Set the voting period
    ///
    /// ### Arguments
    /// * `caller` - The address of the caller
    /// * `vote_period` - The new voting period (in ledgers)
    ///
    /// ### Panics
    /// * If the caller is not the governance authority
    /// * If the voting period is zero
    fn set_voting_period(e: Env, caller: Address, vote_period: u32);

    /// (Governance authority only) Set the proposal threshold
    ///
    /// ### Arguments
    /// * `caller` - The address of the caller
    /// * `proposal_threshold` - The votes required to create a proposal
    ///
    /// ### Panics
    /// * If the caller is not the governance authority
    /// * If the proposal threshold is negative
    fn set_proposal_threshold(e: Env, caller: Address, proposal_threshold: i128);

    /// Get the current settings along with the representation, voting power, and eligibility
    /// of an account. Voting power is read at the previous ledger.
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn get_settings(e: Env, account: Address) -> SettingsSnapshot;

    /// Get the current quorum numerator
    fn quorum_numerator(e: Env) -> u32;

    /// Get the quorum numerator in effect at a ledger sequence
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence to get the numerator at
    fn quorum_numerator_at(e: Env, sequence: u32) -> u32;

    /// Get the quorum denominator
    fn quorum_denominator(e: Env) -> u32;

    /// Get the votes required to reach quorum at a ledger sequence. This is the total supply
    /// of votes at the sequence multiplied by the quorum fraction in effect at the sequence,
    /// rounded down.
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence to get the quorum at
    ///
    /// ### Panics
    /// If the votes contract cannot provide the total supply at the sequence
    fn quorum(e: Env, sequence: u32) -> i128;

    /// (Governance authority only) Update the quorum numerator. The new numerator takes
    /// effect at the current ledger.
    ///
    /// ### Arguments
    /// * `caller` - The address of the caller
    /// * `quorum_numerator` - The new quorum numerator
    ///
    /// ### Panics
    /// * If the caller is not the governance authority
    /// * If the numerator is greater than the quorum denominator
    fn update_quorum_numerator(e: Env, caller: Address, quorum_numerator: u32);

    /// Get the history of quorum numerators, oldest first
    fn quorum_checkpoints(e: Env) -> Vec<QuorumCheckpoint>;
}
