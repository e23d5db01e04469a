use soroban_sdk::{contractclient, Address, Bytes, Env};

/// The subset of the votes contract the governor reads from
#[contractclient(name = "VotesClient")]
pub trait Votes {
    /// Get the total supply of voting tokens at a specific ledger sequence number.
    ///
    /// ### Arguments
    /// * `sequence` - The sequence number to get the total voting token supply at
    fn get_past_total_supply(e: Env, sequence: u32) -> i128;

    /// Get the voting power of an account at a specific ledger sequence number.
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `sequence` - The sequence number to get the voting power at
    /// * `params` - Additional context for the votes contract, empty by default
    fn get_past_votes(e: Env, account: Address, sequence: u32, params: Bytes) -> i128;
}

/// The senate tracks which accounts may act as senators and who they represent
#[contractclient(name = "SenateClient")]
pub trait Senate {
    /// Get the representation data registered for an account
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn get_representation(e: Env, account: Address) -> Bytes;

    /// Check if an account is a valid senator
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn is_valid_senator(e: Env, account: Address) -> bool;

    /// Check if representation data refers to valid members
    ///
    /// ### Arguments
    /// * `representation` - The representation data to check
    fn is_valid_members(e: Env, representation: Bytes) -> bool;
}
