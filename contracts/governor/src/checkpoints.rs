use soroban_sdk::{contracttype, panic_with_error, Env, Vec};

use crate::{
    constants::{CHECKPOINT_VALUE_BITS, MAX_CHECKPOINT_VALUE},
    errors::GovernorError,
};

/// A checkpoint packs a ledger sequence and a value into a single u128, where the
/// upper 32 bits are the sequence and the lower 96 bits are the value.
pub trait Checkpoint {
    /// Unpack the checkpoint into (sequence, value)
    fn to_checkpoint_data(self) -> (u32, u128);

    /// Pack a sequence and value into a checkpoint
    ///
    /// ### Panics
    /// If the value does not fit in 96 bits
    fn from_checkpoint_data(e: &Env, sequence: u32, value: u128) -> Self;
}

impl Checkpoint for u128 {
    fn to_checkpoint_data(self) -> (u32, u128) {
        (
            (self >> CHECKPOINT_VALUE_BITS) as u32,
            self & MAX_CHECKPOINT_VALUE,
        )
    }

    fn from_checkpoint_data(e: &Env, sequence: u32, value: u128) -> Self {
        if value > MAX_CHECKPOINT_VALUE {
            panic_with_error!(e, GovernorError::CheckpointValueError);
        }
        ((sequence as u128) << CHECKPOINT_VALUE_BITS) | value
    }
}

/// An append-only history of a value, ordered by the ledger sequence it was recorded at
#[derive(Clone)]
#[contracttype]
pub struct CheckpointHistory {
    pub checkpoints: Vec<u128>,
}

impl CheckpointHistory {
    /// Create an empty history
    pub fn new(e: &Env) -> Self {
        Self {
            checkpoints: Vec::new(e),
        }
    }

    pub fn len(&self) -> u32 {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Get the (sequence, value) of the checkpoint at `pos`, if it exists
    pub fn at(&self, pos: u32) -> Option<(u32, u128)> {
        self.checkpoints
            .get(pos)
            .map(|checkpoint| checkpoint.to_checkpoint_data())
    }

    /// Get the (sequence, value) of the most recent checkpoint, if it exists
    pub fn latest_checkpoint(&self) -> Option<(u32, u128)> {
        self.checkpoints
            .last()
            .map(|checkpoint| checkpoint.to_checkpoint_data())
    }

    /// Get the most recent value, or 0 if the history is empty
    pub fn latest(&self) -> u128 {
        match self.latest_checkpoint() {
            Some((_, value)) => value,
            None => 0,
        }
    }

    /// Record `value` at ledger `sequence`. If the most recent checkpoint was recorded at the
    /// same sequence, its value is replaced instead of adding a new checkpoint.
    ///
    /// Returns the value in effect before the push
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence the value takes effect at
    /// * `value` - The value to record
    ///
    /// ### Panics
    /// * If `sequence` is before the most recent checkpoint
    /// * If `value` does not fit in a checkpoint
    pub fn push(&mut self, e: &Env, sequence: u32, value: u128) -> u128 {
        let checkpoint = u128::from_checkpoint_data(e, sequence, value);
        match self.latest_checkpoint() {
            Some((last_sequence, last_value)) => {
                if last_sequence > sequence {
                    panic_with_error!(e, GovernorError::CheckpointOrderError);
                }
                if last_sequence == sequence {
                    self.checkpoints.set(self.checkpoints.len() - 1, checkpoint);
                } else {
                    self.checkpoints.push_back(checkpoint);
                }
                last_value
            }
            None => {
                self.checkpoints.push_back(checkpoint);
                0
            }
        }
    }

    /// Get the value in effect at ledger `sequence`, or 0 if no checkpoint was recorded at
    /// or before it.
    ///
    /// Checks the most recent checkpoint before searching, as most lookups target recent history.
    ///
    /// ### Arguments
    /// * `sequence` - The ledger sequence to get the value at
    pub fn get_at_ledger(&self, sequence: u32) -> u128 {
        match self.latest_checkpoint() {
            None => 0,
            Some((last_sequence, value)) if last_sequence <= sequence => value,
            Some(_) => match self.upper_lookup(sequence) {
                Some(index) => self.checkpoints.get_unchecked(index).to_checkpoint_data().1,
                None => 0,
            },
        }
    }

    /// Return the index for the most recent checkpoint that is less than or equal to the given sequence.
    ///
    /// ### Arguments
    /// * `sequence` - The maximum sequence to search for
    pub fn upper_lookup(&self, sequence: u32) -> Option<u32> {
        let mut high = self.checkpoints.len();
        let mut low = 0;
        // Binary search for the highest checkpoint with a sequence less than or equal to the given sequence
        while low < high {
            let mid = (low + high) / 2;
            let (entry_sequence, _) = self.checkpoints.get_unchecked(mid).to_checkpoint_data();
            if entry_sequence > sequence {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        if high == 0 {
            None
        } else {
            Some(high - 1)
        }
    }
}
