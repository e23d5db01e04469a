pub mod env;

pub const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
