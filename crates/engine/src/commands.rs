//! Command messages for the ledger.
//!
//! The presentation layer never touches the cost mapping directly: it sends a
//! [`LedgerCommand`] to [`ParticipantLedger::apply`] and renders the returned
//! [`LedgerEvent`].

use crate::{LedgerError, Participant, ParticipantLedger, Slot, Won};

/// A request to change the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerCommand {
    AddParticipant,
    RemoveParticipant(Slot),
    UpdateCost { slot: Slot, cost: i64 },
}

impl LedgerCommand {
    #[must_use]
    pub fn remove(slot: Slot) -> Self {
        Self::RemoveParticipant(slot)
    }

    #[must_use]
    pub fn update_cost(slot: Slot, cost: i64) -> Self {
        Self::UpdateCost { slot, cost }
    }
}

/// Outcome of a committed [`LedgerCommand`], carrying the new total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerEvent {
    ParticipantAdded { slot: Slot, total: Won },
    ParticipantRemoved { participant: Participant, total: Won },
    CostUpdated { slot: Slot, cost: Won, total: Won },
}

impl LedgerEvent {
    #[must_use]
    pub fn total(&self) -> Won {
        match self {
            Self::ParticipantAdded { total, .. }
            | Self::ParticipantRemoved { total, .. }
            | Self::CostUpdated { total, .. } => *total,
        }
    }
}

impl ParticipantLedger {
    /// Applies `command` and reports what changed.
    ///
    /// Commands run to completion one at a time; a rejected command leaves the
    /// ledger untouched.
    pub fn apply(&mut self, command: LedgerCommand) -> Result<LedgerEvent, LedgerError> {
        match command {
            LedgerCommand::AddParticipant => {
                let slot = self.add_participant();
                Ok(LedgerEvent::ParticipantAdded {
                    slot,
                    total: self.total(),
                })
            }
            LedgerCommand::RemoveParticipant(slot) => {
                let participant = self.remove_participant(slot)?;
                Ok(LedgerEvent::ParticipantRemoved {
                    participant,
                    total: self.total(),
                })
            }
            LedgerCommand::UpdateCost { slot, cost } => {
                let total = self.update_cost(slot, cost)?;
                let cost = self.cost(slot).ok_or(LedgerError::SlotNotFound)?;
                Ok(LedgerEvent::CostUpdated { slot, cost, total })
            }
        }
    }
}
