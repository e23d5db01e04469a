use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val};

use crate::{checkpoints::CheckpointHistory, constants::ONE_DAY_LEDGERS, types::GovernorSettings};

const AUTHORITY_KEY: &str = "Authority";
const VOTER_TOKEN_ADDRESS_KEY: &str = "Votes";
const SENATE_ADDRESS_KEY: &str = "Senate";
const SETTINGS_KEY: &str = "Settings";
const IS_INIT_KEY: &str = "IsInit";
const QUORUM_KEY: &str = "Quorum";
const QUORUM_HISTORY_KEY: &str = "QuorumHist";

const LEDGER_THRESHOLD_SHARED: u32 = 14 * ONE_DAY_LEDGERS;
const LEDGER_BUMP_SHARED: u32 = 15 * ONE_DAY_LEDGERS;
const LEDGER_THRESHOLD_HISTORY: u32 = 100 * ONE_DAY_LEDGERS;
const LEDGER_BUMP_HISTORY: u32 = 120 * ONE_DAY_LEDGERS;

//********** Storage Utils **********//

/// Bump the instance lifetime by the defined amount
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Instance **********/

/// Check if the contract has been initialized
pub fn get_is_init(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, IS_INIT_KEY))
}

/// Set the contract as initialized
pub fn set_is_init(e: &Env) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, IS_INIT_KEY), &true);
}

/// Set the governance authority address
///
/// ### Arguments
/// * `authority` - The address allowed to update the governor parameters
pub fn set_governance_authority(e: &Env, authority: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, AUTHORITY_KEY), authority);
}

/// Get the governance authority address
pub fn get_governance_authority(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, AUTHORITY_KEY))
        .unwrap_optimized()
}

/// Set the voter token address
///
/// ### Arguments
/// * `voter` - The address of voter contract
pub fn set_voter_token_address(e: &Env, voter: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, VOTER_TOKEN_ADDRESS_KEY), voter);
}

/// Get the voter token address
pub fn get_voter_token_address(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, VOTER_TOKEN_ADDRESS_KEY))
        .unwrap_optimized()
}

/// Set the senate address
///
/// ### Arguments
/// * `senate` - The address of the contract tracking representation and eligibility
pub fn set_senate_address(e: &Env, senate: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, SENATE_ADDRESS_KEY), senate);
}

/// Get the senate address
pub fn get_senate_address(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, SENATE_ADDRESS_KEY))
        .unwrap_optimized()
}

/// Set the contract settings
///
/// ### Arguments
/// * `settings` - The contract settings
pub fn set_settings(e: &Env, settings: &GovernorSettings) {
    e.storage()
        .instance()
        .set::<Symbol, GovernorSettings>(&Symbol::new(e, SETTINGS_KEY), settings);
}

/// Get the contract settings
pub fn get_settings(e: &Env) -> GovernorSettings {
    e.storage()
        .instance()
        .get::<Symbol, GovernorSettings>(&Symbol::new(e, SETTINGS_KEY))
        .unwrap_optimized()
}

/// Get the quorum numerator stored as a single value by deployments that predate the
/// quorum history. Defaults to 0.
pub fn get_legacy_quorum_numerator(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, QUORUM_KEY))
        .unwrap_or(0)
}

/// Set the single value quorum numerator. Only deployments that predate the quorum
/// history wrote this value; it is kept to reproduce that state in tests.
///
/// ### Arguments
/// * `numerator` - The quorum numerator
pub fn set_legacy_quorum_numerator(e: &Env, numerator: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, QUORUM_KEY), numerator);
}

/********** Persistent **********/

/// Get the quorum numerator history
pub fn get_quorum_history(e: &Env) -> CheckpointHistory {
    let key = Symbol::new(e, QUORUM_HISTORY_KEY);
    get_persistent_default::<Symbol, CheckpointHistory, _>(
        e,
        &key,
        || CheckpointHistory::new(e),
        LEDGER_THRESHOLD_HISTORY,
        LEDGER_BUMP_HISTORY,
    )
}

/// Set the quorum numerator history
///
/// ### Arguments
/// * `history` - The quorum numerator history
pub fn set_quorum_history(e: &Env, history: &CheckpointHistory) {
    let key = Symbol::new(e, QUORUM_HISTORY_KEY);
    e.storage()
        .persistent()
        .set::<Symbol, CheckpointHistory>(&key, history);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_HISTORY, LEDGER_BUMP_HISTORY);
}
