//! Core state of a shared-expense split.
//!
//! - [`ParticipantLedger`] owns who takes part and how much each participant
//!   spent, and derives the total.
//! - [`ExpenseList`] holds the itemized expenses of one detail-screen visit.
//! - [`money`] helpers sanitize, group and parse amount input.

pub use commands::{LedgerCommand, LedgerEvent};
pub use error::{EngineError, LedgerError};
pub use expenses::{Expense, ExpenseList};
pub use ledger::{
    DEFAULT_PARTICIPANTS, PROTECTED_POSITIONS, ParticipantLedger, ParticipantLedgerBuilder,
};
pub use money::{Won, format_amount_input, group_thousands, parse_amount, sanitize_digits};
pub use participant::{DEFAULT_NAME_PREFIX, Participant, Slot, default_name};

mod commands;
mod error;
mod expenses;
mod ledger;
pub mod money;
mod participant;
