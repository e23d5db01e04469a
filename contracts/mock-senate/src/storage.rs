use soroban_sdk::{contracttype, Address, Bytes, Env, IntoVal, TryFromVal, Val};

pub(crate) const LEDGER_THRESHOLD_SHARED: u32 = 172800; // ~ 10 days
pub(crate) const LEDGER_BUMP_SHARED: u32 = 241920; // ~ 14 days

#[contracttype]
pub enum MockSenateDataKey {
    Representation(Address),
    Senator(Address),
    ValidMembers(Bytes),
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

/// Store an entry in persistent storage and bump it
fn set_persistent<K: IntoVal<Env, Val>, V: IntoVal<Env, Val>>(e: &Env, key: &K, value: &V) {
    e.storage().persistent().set::<K, V>(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/// Get the representation data of `account`
///
/// ### Arguments
/// * `account` - The address of the account
pub fn get_representation(e: &Env, account: &Address) -> Bytes {
    let key = MockSenateDataKey::Representation(account.clone());
    get_persistent_default::<MockSenateDataKey, Bytes>(
        e,
        &key,
        Bytes::new(e),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set the representation data of `account`
///
/// ### Arguments
/// * `account` - The address of the account
/// * `representation` - The representation data
pub fn set_representation(e: &Env, account: &Address, representation: &Bytes) {
    let key = MockSenateDataKey::Representation(account.clone());
    set_persistent::<MockSenateDataKey, Bytes>(e, &key, representation);
}

/// Check if `account` is a senator
///
/// ### Arguments
/// * `account` - The address of the account
pub fn get_is_senator(e: &Env, account: &Address) -> bool {
    let key = MockSenateDataKey::Senator(account.clone());
    get_persistent_default::<MockSenateDataKey, bool>(
        e,
        &key,
        false,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set if `account` is a senator
///
/// ### Arguments
/// * `account` - The address of the account
/// * `valid` - If the account is a senator
pub fn set_is_senator(e: &Env, account: &Address, valid: bool) {
    let key = MockSenateDataKey::Senator(account.clone());
    set_persistent::<MockSenateDataKey, bool>(e, &key, &valid);
}

/// Check if `representation` refers to valid members
///
/// ### Arguments
/// * `representation` - The representation data
pub fn get_valid_members(e: &Env, representation: &Bytes) -> bool {
    let key = MockSenateDataKey::ValidMembers(representation.clone());
    get_persistent_default::<MockSenateDataKey, bool>(
        e,
        &key,
        false,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

/// Set if `representation` refers to valid members
///
/// ### Arguments
/// * `representation` - The representation data
/// * `valid` - If the representation refers to valid members
pub fn set_valid_members(e: &Env, representation: &Bytes, valid: bool) {
    let key = MockSenateDataKey::ValidMembers(representation.clone());
    set_persistent::<MockSenateDataKey, bool>(e, &key, &valid);
}
