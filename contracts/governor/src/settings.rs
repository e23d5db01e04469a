use soroban_sdk::{log, panic_with_error, Address, Bytes, Env};

use crate::{
    dependencies::{SenateClient, VotesClient},
    errors::GovernorError,
    events::GovernorEvents,
    storage,
    types::{GovernorSettings, SettingsSnapshot},
    validation::require_nonnegative_amount,
};

/// Validate the governor settings
///
/// ### Arguments
/// * `settings` - The settings for the governor
///
/// ### Panics
/// * If the vote_period is zero
/// * If the proposal_threshold is negative
pub fn require_valid_settings(e: &Env, settings: &GovernorSettings) {
    if settings.vote_period == 0 {
        panic_with_error!(e, GovernorError::InvalidSettingsError)
    }
    require_nonnegative_amount(e, settings.proposal_threshold);
}

/// Set the vote delay
///
/// ### Arguments
/// * `vote_delay` - The new vote delay (in ledgers)
pub fn set_voting_delay(e: &Env, vote_delay: u32) {
    let mut settings = storage::get_settings(e);
    let old_vote_delay = settings.vote_delay;
    settings.vote_delay = vote_delay;
    storage::set_settings(e, &settings);

    log!(e, "vote delay set", old_vote_delay, vote_delay);
    GovernorEvents::voting_delay_set(e, old_vote_delay, vote_delay);
}

/// Set the vote period
///
/// ### Arguments
/// * `vote_period` - The new vote period (in ledgers)
///
/// ### Panics
/// If the vote period is zero
pub fn set_voting_period(e: &Env, vote_period: u32) {
    if vote_period == 0 {
        panic_with_error!(e, GovernorError::InvalidSettingsError)
    }
    let mut settings = storage::get_settings(e);
    let old_vote_period = settings.vote_period;
    settings.vote_period = vote_period;
    storage::set_settings(e, &settings);

    log!(e, "vote period set", old_vote_period, vote_period);
    GovernorEvents::voting_period_set(e, old_vote_period, vote_period);
}

/// Set the proposal threshold
///
/// ### Arguments
/// * `proposal_threshold` - The votes required to create a proposal
///
/// ### Panics
/// If the proposal threshold is negative
pub fn set_proposal_threshold(e: &Env, proposal_threshold: i128) {
    require_nonnegative_amount(e, proposal_threshold);
    let mut settings = storage::get_settings(e);
    let old_threshold = settings.proposal_threshold;
    settings.proposal_threshold = proposal_threshold;
    storage::set_settings(e, &settings);

    log!(e, "proposal threshold set", old_threshold, proposal_threshold);
    GovernorEvents::proposal_threshold_set(e, old_threshold, proposal_threshold);
}

/// Load the current settings along with the state of `account` as of the previous ledger.
/// Votes are read from the previous ledger as the current ledger can still change.
///
/// ### Arguments
/// * `account` - The address of the account
pub fn load_snapshot(e: &Env, account: &Address) -> SettingsSnapshot {
    let settings = storage::get_settings(e);
    let sequence = e.ledger().sequence().saturating_sub(1);

    let senate = SenateClient::new(e, &storage::get_senate_address(e));
    let votes_client = VotesClient::new(e, &storage::get_voter_token_address(e));

    let representation = senate.get_representation(account);
    let votes = votes_client.get_past_votes(account, &sequence, &Bytes::new(e));
    let is_valid_senator = senate.is_valid_senator(account);
    let is_valid_members = senate.is_valid_members(&representation);

    SettingsSnapshot {
        proposal_threshold: settings.proposal_threshold,
        vote_delay: settings.vote_delay,
        vote_period: settings.vote_period,
        representation,
        votes,
        is_valid_senator,
        is_valid_members,
    }
}
