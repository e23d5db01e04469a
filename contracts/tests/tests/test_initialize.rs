#[cfg(test)]
use soroban_governor_params::{
    types::{GovernorSettings, QuorumCheckpoint},
    GovernorParamsContract, GovernorParamsContractClient,
};
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, Error, IntoVal, Symbol,
};
use tests::{
    common::{create_governor, default_governor_settings, DEFAULT_QUORUM_NUMERATOR},
    env::EnvTestUtils,
    ONE_DAY_LEDGERS,
};

#[test]
fn test_initialize() {
    let e = Env::default();
    e.set_default_info();

    let settings = default_governor_settings();
    let fixture = create_governor(&e, &settings, DEFAULT_QUORUM_NUMERATOR);
    let governor = &fixture.governor;

    // verify events
    let events = e.events().all();
    let tx_events = vec![&e, events.last().unwrap()];
    assert_eq!(
        tx_events,
        vec![
            &e,
            (
                governor.address.clone(),
                (Symbol::new(&e, "quorum_numerator_updated"),).into_val(&e),
                (0u32, DEFAULT_QUORUM_NUMERATOR).into_val(&e)
            )
        ]
    );

    // verify chain results
    assert_eq!(governor.governance_authority(), fixture.authority);
    assert_eq!(governor.settings(), settings);
    assert_eq!(governor.voting_delay(), settings.vote_delay);
    assert_eq!(governor.voting_period(), settings.vote_period);
    assert_eq!(governor.proposal_threshold(), settings.proposal_threshold);
    assert_eq!(governor.quorum_numerator(), DEFAULT_QUORUM_NUMERATOR);
    assert_eq!(governor.quorum_denominator(), 100);
    assert_eq!(
        governor.quorum_checkpoints(),
        vec![
            &e,
            QuorumCheckpoint {
                sequence: 100,
                numerator: DEFAULT_QUORUM_NUMERATOR
            }
        ]
    );
}

#[test]
fn test_initialize_twice() {
    let e = Env::default();
    e.set_default_info();

    let settings = default_governor_settings();
    let fixture = create_governor(&e, &settings, DEFAULT_QUORUM_NUMERATOR);

    let result = fixture.governor.try_initialize(
        &Address::generate(&e),
        &Address::generate(&e),
        &Address::generate(&e),
        &settings,
        &50,
    );
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(3))));

    // nothing changed
    assert_eq!(fixture.governor.governance_authority(), fixture.authority);
    assert_eq!(fixture.governor.quorum_numerator(), DEFAULT_QUORUM_NUMERATOR);
}

#[test]
fn test_initialize_validates_parameters() {
    let e = Env::default();
    e.set_default_info();

    let address = e.register_contract(None, GovernorParamsContract {});
    let governor = GovernorParamsContractClient::new(&e, &address);
    let authority = Address::generate(&e);
    let votes = Address::generate(&e);
    let senate = Address::generate(&e);

    let zero_period = GovernorSettings {
        vote_period: 0,
        ..default_governor_settings()
    };
    let result = governor.try_initialize(&authority, &votes, &senate, &zero_period, &4);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(200))));

    let negative_threshold = GovernorSettings {
        proposal_threshold: -1,
        ..default_governor_settings()
    };
    let result = governor.try_initialize(&authority, &votes, &senate, &negative_threshold, &4);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(8))));

    let result =
        governor.try_initialize(&authority, &votes, &senate, &default_governor_settings(), &101);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(201))));

    // a failed initialization leaves the contract open for a valid one
    governor.initialize(&authority, &votes, &senate, &default_governor_settings(), &100);
    assert_eq!(governor.quorum_numerator(), 100);
}

#[test]
fn test_readers_across_ledgers() {
    let e = Env::default();
    e.mock_all_auths();
    e.set_default_info();

    let settings = default_governor_settings();
    let fixture = create_governor(&e, &settings, DEFAULT_QUORUM_NUMERATOR);
    let governor = &fixture.governor;
    let start = e.ledger().sequence();

    // only readers are invoked between ledger jumps
    for _ in 0..4 {
        e.jump(ONE_DAY_LEDGERS * 5);

        assert_eq!(governor.governance_authority(), fixture.authority);
        assert_eq!(governor.voting_delay(), settings.vote_delay);
        assert_eq!(governor.voting_period(), settings.vote_period);
        assert_eq!(governor.proposal_threshold(), settings.proposal_threshold);
        assert_eq!(governor.quorum_numerator(), DEFAULT_QUORUM_NUMERATOR);
        assert_eq!(
            governor.quorum_numerator_at(&start),
            DEFAULT_QUORUM_NUMERATOR
        );
        assert_eq!(governor.quorum_denominator(), 100);
        assert_eq!(governor.quorum_checkpoints().len(), 1);
    }

    governor.set_voting_delay(&fixture.authority, &10);
    assert_eq!(governor.voting_delay(), 10);
}
