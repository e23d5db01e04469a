use crate::storage;
use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, Address, Bytes, Env};

#[contracterror]
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum MockVotesError {
    SequenceNotClosedError = 256,
}

#[contract]
pub struct MockVotes;

pub trait MockVotesTrait {
    /// Get the total supply of voting tokens at a specific ledger sequence number
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence number to get the total supply at
    ///
    /// ### Panics
    /// If the sequence number is greater than or equal to the current ledger sequence
    fn get_past_total_supply(e: Env, sequence: u32) -> i128;

    /// Set the total supply of voting tokens at a specific ledger sequence number
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence number
    /// * `amount` - The total supply at the sequence number
    fn set_past_total_supply(e: Env, sequence: u32, amount: i128);

    /// Get the voting power of an account at a specific ledger sequence number
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `sequence` - The ledger sequence number to get the voting power at
    /// * `params` - Ignored
    fn get_past_votes(e: Env, account: Address, sequence: u32, params: Bytes) -> i128;

    /// Set the voting power of an account at a specific ledger sequence number
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `sequence` - The ledger sequence number
    /// * `amount` - The voting power of the account
    fn set_past_votes(e: Env, account: Address, sequence: u32, amount: i128);
}

#[contractimpl]
impl MockVotesTrait for MockVotes {
    fn get_past_total_supply(e: Env, sequence: u32) -> i128 {
        if sequence >= e.ledger().sequence() {
            panic_with_error!(&e, MockVotesError::SequenceNotClosedError);
        }
        storage::get_past_total_supply(&e, sequence)
    }

    fn set_past_total_supply(e: Env, sequence: u32, amount: i128) {
        storage::set_past_total_supply(&e, sequence, &amount);
    }

    fn get_past_votes(e: Env, account: Address, sequence: u32, _params: Bytes) -> i128 {
        if sequence >= e.ledger().sequence() {
            panic_with_error!(&e, MockVotesError::SequenceNotClosedError);
        }
        storage::get_past_votes(&e, &account, sequence)
    }

    fn set_past_votes(e: Env, account: Address, sequence: u32, amount: i128) {
        storage::set_past_votes(&e, &account, sequence, &amount);
    }
}
