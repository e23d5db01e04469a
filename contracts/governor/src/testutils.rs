#![cfg(test)]
use crate::contract::{GovernorParamsContract, GovernorParamsContractClient};
use crate::types::GovernorSettings;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use soroban_sdk::Env;

pub const INITIAL_QUORUM_NUMERATOR: u32 = 51;

pub fn default_settings() -> GovernorSettings {
    GovernorSettings {
        proposal_threshold: 1000,
        vote_delay: 2000,
        vote_period: 3000,
    }
}

/// Creates and initializes a governor parameters contract. The votes and senate
/// contracts are not registered.
/// Returns governor_address, authority, governor settings, and governor client
pub fn create_governor<'a>(
    e: &Env,
) -> (
    Address,
    Address,
    GovernorSettings,
    GovernorParamsContractClient<'a>,
) {
    let address = e.register_contract(None, GovernorParamsContract {});
    let governor: GovernorParamsContractClient<'a> =
        GovernorParamsContractClient::new(e, &address);
    let authority = Address::generate(e);
    let votes = Address::generate(e);
    let senate = Address::generate(e);
    let settings = default_settings();
    governor.initialize(
        &authority,
        &votes,
        &senate,
        &settings,
        &INITIAL_QUORUM_NUMERATOR,
    );
    (address, authority, settings, governor)
}
