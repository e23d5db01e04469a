pub(crate) const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

/// The denominator of the quorum fraction. Quorum numerators are expressed as a
/// percentage of the total voting supply.
pub const QUORUM_DENOMINATOR: u32 = 100;

/// The number of bits available to a checkpoint value. The remaining 32 bits of the
/// packed u128 hold the ledger sequence.
pub const CHECKPOINT_VALUE_BITS: u32 = 96;
pub const MAX_CHECKPOINT_VALUE: u128 = (1 << CHECKPOINT_VALUE_BITS) - 1;
