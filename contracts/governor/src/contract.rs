use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Vec};

use crate::{
    errors::GovernorError,
    governor::GovernorParams,
    quorum, settings, storage,
    types::{GovernorSettings, QuorumCheckpoint, SettingsSnapshot},
    validation::require_governance_authority,
};

#[contract]
pub struct GovernorParamsContract;

#[contractimpl]
impl GovernorParams for GovernorParamsContract {
    fn initialize(
        e: Env,
        authority: Address,
        votes: Address,
        senate: Address,
        settings: GovernorSettings,
        quorum_numerator: u32,
    ) {
        if storage::get_is_init(&e) {
            panic_with_error!(&e, GovernorError::AlreadyInitializedError);
        }
        settings::require_valid_settings(&e, &settings);
        if quorum_numerator > quorum::quorum_denominator() {
            panic_with_error!(&e, GovernorError::InvalidQuorumFractionError);
        }
        storage::extend_instance(&e);

        storage::set_governance_authority(&e, &authority);
        storage::set_voter_token_address(&e, &votes);
        storage::set_senate_address(&e, &senate);
        storage::set_settings(&e, &settings);
        quorum::update_quorum_numerator(&e, quorum_numerator);
        storage::set_is_init(&e);
    }

    fn governance_authority(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_governance_authority(&e)
    }

    fn settings(e: Env) -> GovernorSettings {
        storage::extend_instance(&e);
        storage::get_settings(&e)
    }

    fn voting_delay(e: Env) -> u32 {
        storage::extend_instance(&e);
        storage::get_settings(&e).vote_delay
    }

    fn voting_period(e: Env) -> u32 {
        storage::extend_instance(&e);
        storage::get_settings(&e).vote_period
    }

    fn proposal_threshold(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_settings(&e).proposal_threshold
    }

    fn set_voting_delay(e: Env, caller: Address, vote_delay: u32) {
        require_governance_authority(&e, &caller);
        storage::extend_instance(&e);

        settings::set_voting_delay(&e, vote_delay);
    }

    fn set_voting_period(e: Env, caller: Address, vote_period: u32) {
        require_governance_authority(&e, &caller);
        storage::extend_instance(&e);

        settings::set_voting_period(&e, vote_period);
    }

    fn set_proposal_threshold(e: Env, caller: Address, proposal_threshold: i128) {
        require_governance_authority(&e, &caller);
        storage::extend_instance(&e);

        settings::set_proposal_threshold(&e, proposal_threshold);
    }

    fn get_settings(e: Env, account: Address) -> SettingsSnapshot {
        storage::extend_instance(&e);
        settings::load_snapshot(&e, &account)
    }

    fn quorum_numerator(e: Env) -> u32 {
        storage::extend_instance(&e);
        quorum::quorum_numerator(&e)
    }

    fn quorum_numerator_at(e: Env, sequence: u32) -> u32 {
        storage::extend_instance(&e);
        quorum::quorum_numerator_at(&e, sequence)
    }

    fn quorum_denominator(e: Env) -> u32 {
        storage::extend_instance(&e);
        quorum::quorum_denominator()
    }

    fn quorum(e: Env, sequence: u32) -> i128 {
        storage::extend_instance(&e);
        quorum::quorum(&e, sequence)
    }

    fn update_quorum_numerator(e: Env, caller: Address, quorum_numerator: u32) {
        require_governance_authority(&e, &caller);
        storage::extend_instance(&e);

        quorum::update_quorum_numerator(&e, quorum_numerator);
    }

    fn quorum_checkpoints(e: Env) -> Vec<QuorumCheckpoint> {
        storage::extend_instance(&e);
        quorum::quorum_checkpoints(&e)
    }
}
