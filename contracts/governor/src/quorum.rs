use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{log, panic_with_error, Env, Vec};

use crate::{
    constants::QUORUM_DENOMINATOR,
    dependencies::VotesClient,
    errors::GovernorError,
    events::GovernorEvents,
    storage,
    types::QuorumCheckpoint,
};

/// Get the current quorum numerator. Falls back to the single value numerator until a
/// numerator history exists.
pub fn quorum_numerator(e: &Env) -> u32 {
    let history = storage::get_quorum_history(e);
    if history.is_empty() {
        storage::get_legacy_quorum_numerator(e)
    } else {
        to_numerator(e, history.latest())
    }
}

/// Get the quorum numerator in effect at ledger `sequence`
///
/// ### Arguments
/// * `sequence` - The ledger sequence to get the numerator at
pub fn quorum_numerator_at(e: &Env, sequence: u32) -> u32 {
    let history = storage::get_quorum_history(e);
    if history.is_empty() {
        storage::get_legacy_quorum_numerator(e)
    } else {
        to_numerator(e, history.get_at_ledger(sequence))
    }
}

pub fn quorum_denominator() -> u32 {
    QUORUM_DENOMINATOR
}

/// Get the votes required to reach quorum at ledger `sequence`, rounded down
///
/// ### Arguments
/// * `sequence` - The ledger sequence to calculate the quorum at
///
/// ### Panics
/// If the votes contract cannot produce a total supply for `sequence`
pub fn quorum(e: &Env, sequence: u32) -> i128 {
    let total_supply =
        VotesClient::new(e, &storage::get_voter_token_address(e)).get_past_total_supply(&sequence);
    let numerator = quorum_numerator_at(e, sequence);
    total_supply
        .fixed_mul_floor(numerator as i128, quorum_denominator() as i128)
        .unwrap_or_else(|| panic_with_error!(e, GovernorError::OverflowError))
}

/// Update the quorum numerator, recording it at the current ledger.
///
/// If a single value numerator exists and no history has been recorded yet, it is first
/// recorded at ledger 0, such that historical lookups from before the update still return it.
///
/// ### Arguments
/// * `new_numerator` - The new quorum numerator
///
/// ### Panics
/// If the numerator is greater than the quorum denominator
pub fn update_quorum_numerator(e: &Env, new_numerator: u32) {
    if new_numerator > quorum_denominator() {
        panic_with_error!(e, GovernorError::InvalidQuorumFractionError);
    }

    let mut history = storage::get_quorum_history(e);
    let old_numerator = if history.is_empty() {
        let legacy_numerator = storage::get_legacy_quorum_numerator(e);
        if legacy_numerator != 0 {
            history.push(e, 0, legacy_numerator as u128);
        }
        legacy_numerator
    } else {
        to_numerator(e, history.latest())
    };
    history.push(e, e.ledger().sequence(), new_numerator as u128);
    storage::set_quorum_history(e, &history);

    log!(e, "quorum numerator updated", old_numerator, new_numerator);
    GovernorEvents::quorum_numerator_updated(e, old_numerator, new_numerator);
}

/// Get every recorded quorum numerator, oldest first
pub fn quorum_checkpoints(e: &Env) -> Vec<QuorumCheckpoint> {
    let history = storage::get_quorum_history(e);
    let mut checkpoints = Vec::new(e);
    for pos in 0..history.len() {
        if let Some((sequence, value)) = history.at(pos) {
            checkpoints.push_back(QuorumCheckpoint {
                sequence,
                numerator: to_numerator(e, value),
            });
        }
    }
    checkpoints
}

/// Numerators are validated against the denominator before being recorded
fn to_numerator(e: &Env, value: u128) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic_with_error!(e, GovernorError::InternalError))
}
