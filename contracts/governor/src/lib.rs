#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

pub mod checkpoints;
pub mod constants;
pub mod contract;
pub mod dependencies;
pub mod errors;
pub mod events;
pub mod governor;
pub mod quorum;
pub mod settings;
pub mod storage;
pub mod types;
pub mod validation;

#[cfg(test)]
mod testutils;

pub use contract::*;
