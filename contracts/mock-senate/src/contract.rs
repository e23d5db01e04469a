use crate::storage;
use soroban_sdk::{contract, contractimpl, Address, Bytes, Env};

#[contract]
pub struct MockSenate;

pub trait MockSenateTrait {
    /// Get the representation data registered for an account. Defaults to empty bytes.
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn get_representation(e: Env, account: Address) -> Bytes;

    /// Register representation data for an account
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `representation` - The representation data
    fn set_representation(e: Env, account: Address, representation: Bytes);

    /// Check if an account is a valid senator
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    fn is_valid_senator(e: Env, account: Address) -> bool;

    /// Set if an account is a valid senator
    ///
    /// ### Arguments
    /// * `account` - The address of the account
    /// * `valid` - If the account is a valid senator
    fn set_senator(e: Env, account: Address, valid: bool);

    /// Check if representation data refers to valid members
    ///
    /// ### Arguments
    /// * `representation` - The representation data
    fn is_valid_members(e: Env, representation: Bytes) -> bool;

    /// Set if representation data refers to valid members
    ///
    /// ### Arguments
    /// * `representation` - The representation data
    /// * `valid` - If the representation refers to valid members
    fn set_valid_members(e: Env, representation: Bytes, valid: bool);
}

#[contractimpl]
impl MockSenateTrait for MockSenate {
    fn get_representation(e: Env, account: Address) -> Bytes {
        storage::get_representation(&e, &account)
    }

    fn set_representation(e: Env, account: Address, representation: Bytes) {
        storage::set_representation(&e, &account, &representation);
    }

    fn is_valid_senator(e: Env, account: Address) -> bool {
        storage::get_is_senator(&e, &account)
    }

    fn set_senator(e: Env, account: Address, valid: bool) {
        storage::set_is_senator(&e, &account, valid);
    }

    fn is_valid_members(e: Env, representation: Bytes) -> bool {
        storage::get_valid_members(&e, &representation)
    }

    fn set_valid_members(e: Env, representation: Bytes, valid: bool) {
        storage::set_valid_members(&e, &representation, valid);
    }
}
