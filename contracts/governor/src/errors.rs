use soroban_sdk::contracterror;

/// The error codes for the contract.
#[contracterror]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GovernorError {
    // Default errors to align with built-in contract
    InternalError = 1,
    AlreadyInitializedError = 3,

    UnauthorizedError = 4,

    NegativeAmountError = 8,
    OverflowError = 12,

    // Governor parameter errors
    InvalidSettingsError = 200,
    InvalidQuorumFractionError = 201,

    // Checkpoint errors
    CheckpointOrderError = 202,
    CheckpointValueError = 203,
}
