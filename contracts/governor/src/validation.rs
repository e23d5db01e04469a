use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::{errors::GovernorError, storage};

pub fn require_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, GovernorError::NegativeAmountError);
    }
}

/// Require that `caller` is the governance authority and has authorized the invocation
///
/// ### Panics
/// If the caller is not the governance authority
pub fn require_governance_authority(e: &Env, caller: &Address) {
    if *caller != storage::get_governance_authority(e) {
        log!(e, "caller is not the governance authority", caller.clone());
        panic_with_error!(e, GovernorError::UnauthorizedError);
    }
    caller.require_auth();
}
