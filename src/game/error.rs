use thiserror::Error;

use crate::game::Phase;

/// Errors produced by the turn engine and board topology.
///
/// `InvalidInput` means a collaborator handed us a value outside its domain
/// and should fail loudly. `InvalidState` means an operation arrived in the
/// wrong lifecycle phase; the session layer recovers by ignoring it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("{what} out of domain: {value}")]
    InvalidInput { what: &'static str, value: u32 },

    #[error("{op} is not valid in the {phase:?} phase")]
    InvalidState { op: &'static str, phase: Phase },

    #[error("cell {cell} is outside the board")]
    OutOfRange { cell: u8 },
}
