use soroban_governor_params::types::SettingsSnapshot;
use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};
use tests::{
    common::{create_governor, default_governor_settings, DEFAULT_QUORUM_NUMERATOR},
    env::EnvTestUtils,
};

#[test]
fn test_get_settings() {
    let e = Env::default();
    e.mock_all_auths();
    e.set_default_info();

    let settings = default_governor_settings();
    let fixture = create_governor(&e, &settings, DEFAULT_QUORUM_NUMERATOR);
    let governor = &fixture.governor;
    let votes = &fixture.votes;
    let senate = &fixture.senate;

    let frodo = Address::generate(&e);
    let representation = Bytes::from_array(&e, &[1, 2, 3, 4]);
    senate.set_representation(&frodo, &representation);
    senate.set_senator(&frodo, &true);
    senate.set_valid_members(&representation, &true);

    e.jump(10);
    let sequence = e.ledger().sequence();
    votes.set_past_votes(&frodo, &(sequence - 1), &500_0000000);
    // votes at the current ledger are not used
    votes.set_past_votes(&frodo, &sequence, &900_0000000);

    let snapshot = governor.get_settings(&frodo);
    assert_eq!(
        snapshot,
        SettingsSnapshot {
            proposal_threshold: settings.proposal_threshold,
            vote_delay: settings.vote_delay,
            vote_period: settings.vote_period,
            representation: representation.clone(),
            votes: 500_0000000,
            is_valid_senator: true,
            is_valid_members: true,
        }
    );
}

#[test]
fn test_get_settings_unknown_account() {
    let e = Env::default();
    e.mock_all_auths();
    e.set_default_info();

    let settings = default_governor_settings();
    let fixture = create_governor(&e, &settings, DEFAULT_QUORUM_NUMERATOR);
    let governor = &fixture.governor;

    let samwise = Address::generate(&e);
    e.jump(1);

    let snapshot = governor.get_settings(&samwise);
    assert_eq!(snapshot.proposal_threshold, settings.proposal_threshold);
    assert_eq!(snapshot.vote_delay, settings.vote_delay);
    assert_eq!(snapshot.vote_period, settings.vote_period);
    assert_eq!(snapshot.representation, Bytes::new(&e));
    assert_eq!(snapshot.votes, 0);
    assert!(!snapshot.is_valid_senator);
    assert!(!snapshot.is_valid_members);
}

#[test]
fn test_get_settings_reflects_updates() {
    let e = Env::default();
    e.mock_all_auths();
    e.set_default_info();

    let settings = default_governor_settings();
    let fixture = create_governor(&e, &settings, DEFAULT_QUORUM_NUMERATOR);
    let governor = &fixture.governor;
    let senate = &fixture.senate;

    let frodo = Address::generate(&e);
    let representation = Bytes::from_array(&e, &[7; 8]);
    senate.set_representation(&frodo, &representation);
    // senator eligibility and member validity are reported independently
    senate.set_senator(&frodo, &false);
    senate.set_valid_members(&representation, &true);

    e.jump(1);
    governor.set_voting_delay(&fixture.authority, &50);
    governor.set_proposal_threshold(&fixture.authority, &0);

    let snapshot = governor.get_settings(&frodo);
    assert_eq!(snapshot.vote_delay, 50);
    assert_eq!(snapshot.proposal_threshold, 0);
    assert_eq!(snapshot.vote_period, settings.vote_period);
    assert_eq!(snapshot.representation, representation);
    assert!(!snapshot.is_valid_senator);
    assert!(snapshot.is_valid_members);
}
