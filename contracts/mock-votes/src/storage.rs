use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

#[contracttype]
pub struct PastVotesKey {
    account: Address,
    sequence: u32,
}

#[contracttype]
pub enum MockVotesDataKey {
    PastVotes(PastVotesKey),
    PastTotalSupply(u32),
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    default: V,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default
    }
}

/// Get the voting power of `account` at `sequence`
///
/// ### Arguments
/// * `account` - The address of the account
/// * `sequence` - The ledger sequence number
pub fn get_past_votes(e: &Env, account: &Address, sequence: u32) -> i128 {
    let key = MockVotesDataKey::PastVotes(PastVotesKey {
        account: account.clone(),
        sequence,
    });
    get_persistent_default::<MockVotesDataKey, i128>(
        e,
        &key,
        0_i128,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set the voting power of `account` at `sequence` to `amount`
///
/// ### Arguments
/// * `account` - The address of the account
/// * `sequence` - The ledger sequence number
/// * `amount` - The voting power
pub fn set_past_votes(e: &Env, account: &Address, sequence: u32, amount: &i128) {
    let key = MockVotesDataKey::PastVotes(PastVotesKey {
        account: account.clone(),
        sequence,
    });
    e.storage()
        .persistent()
        .set::<MockVotesDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Get the total supply of votes at `sequence`
///
/// ### Arguments
/// * `sequence` - The ledger sequence number
pub fn get_past_total_supply(e: &Env, sequence: u32) -> i128 {
    let key = MockVotesDataKey::PastTotalSupply(sequence);
    get_persistent_default::<MockVotesDataKey, i128>(
        e,
        &key,
        0_i128,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set the total supply of votes at `sequence` to `amount`
///
/// ### Arguments
/// * `sequence` - The ledger sequence number
/// * `amount` - The total supply
pub fn set_past_total_supply(e: &Env, sequence: u32, amount: &i128) {
    let key = MockVotesDataKey::PastTotalSupply(sequence);
    e.storage()
        .persistent()
        .set::<MockVotesDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}
