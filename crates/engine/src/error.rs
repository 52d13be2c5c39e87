//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidCost`] returned when a cost is negative or would overflow the total.
//! - [`SlotProtected`] returned when removing one of the first two participants.
//! - [`SlotNotFound`] returned when a slot is not in the live roster.
//!
//! None of them is fatal: the ledger is left exactly as it was before the call.
//!
//!  [`InvalidCost`]: LedgerError::InvalidCost
//!  [`SlotProtected`]: LedgerError::SlotProtected
//!  [`SlotNotFound`]: LedgerError::SlotNotFound
use thiserror::Error;

/// Errors raised by [`ParticipantLedger`](crate::ParticipantLedger) commands.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid cost: {0}")]
    InvalidCost(i64),
    #[error("Participant at position {0} cannot be removed")]
    SlotProtected(usize),
    #[error("Participant not found")]
    SlotNotFound,
}

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Description is required")]
    EmptyDescription,
}
