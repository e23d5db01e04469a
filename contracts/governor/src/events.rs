use soroban_sdk::{Env, Symbol};

pub struct GovernorEvents {}

impl GovernorEvents {
    /// Emitted when the quorum numerator is updated
    ///
    /// - topics - `["quorum_numerator_updated"]`
    /// - data - `[old_numerator: u32, new_numerator: u32]`
    pub fn quorum_numerator_updated(e: &Env, old_numerator: u32, new_numerator: u32) {
        let topics = (Symbol::new(e, "quorum_numerator_updated"),);
        e.events().publish(topics, (old_numerator, new_numerator));
    }

    /// Emitted when the vote delay is set
    ///
    /// - topics - `["voting_delay_set"]`
    /// - data - `[old_vote_delay: u32, new_vote_delay: u32]`
    pub fn voting_delay_set(e: &Env, old_vote_delay: u32, new_vote_delay: u32) {
        let topics = (Symbol::new(e, "voting_delay_set"),);
        e.events().publish(topics, (old_vote_delay, new_vote_delay));
    }

    /// Emitted when the vote period is set
    ///
    /// - topics - `["voting_period_set"]`
    /// - data - `[old_vote_period: u32, new_vote_period: u32]`
    pub fn voting_period_set(e: &Env, old_vote_period: u32, new_vote_period: u32) {
        let topics = (Symbol::new(e, "voting_period_set"),);
        e.events().publish(topics, (old_vote_period, new_vote_period));
    }

    /// Emitted when the proposal threshold is set
    ///
    /// - topics - `["proposal_threshold_set"]`
    /// - data - `[old_threshold: i128, new_threshold: i128]`
    pub fn proposal_threshold_set(e: &Env, old_threshold: i128, new_threshold: i128) {
        let topics = (Symbol::new(e, "proposal_threshold_set"),);
        e.events().publish(topics, (old_threshold, new_threshold));
    }
}
