//! Participant-cost aggregation.
//!
//! [`ParticipantLedger`] is the only owner of the slot → cost mapping. The
//! total is recomputed from the live entries inside every mutating call, so it
//! can never drift from `Σ cost` over the roster.
use slotmap::SlotMap;

use crate::{LedgerError, Participant, Slot, Won, default_name, participant::DEFAULT_NAME_PREFIX};

/// Number of participants a ledger starts with.
pub const DEFAULT_PARTICIPANTS: usize = 2;

/// Roster positions below this value cannot be removed: a split needs at
/// least two parties.
pub const PROTECTED_POSITIONS: usize = 2;

type ResultLedger<T> = Result<T, LedgerError>;

#[derive(Clone, Debug)]
pub struct ParticipantLedger {
    entries: SlotMap<Slot, Participant>,
    roster: Vec<Slot>,
    total: Won,
    created: u32,
    name_prefix: String,
}

impl Default for ParticipantLedger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParticipantLedger {
    /// Return a builder for `ParticipantLedger`.
    pub fn builder() -> ParticipantLedgerBuilder {
        ParticipantLedgerBuilder::default()
    }

    /// Appends a participant with cost 0 and returns its slot.
    ///
    /// The total is unchanged.
    pub fn add_participant(&mut self) -> Slot {
        self.created = self.created.saturating_add(1);
        let name = default_name(&self.name_prefix, self.created);
        let slot = self
            .entries
            .insert_with_key(|slot| Participant::new(slot, name));
        self.roster.push(slot);
        tracing::debug!(
            position = self.roster.len() - 1,
            count = self.roster.len(),
            "participant added"
        );
        slot
    }

    /// Removes `slot` and its cost entry, then recomputes the total.
    ///
    /// The first [`PROTECTED_POSITIONS`] participants are rejected with
    /// [`LedgerError::SlotProtected`]; unknown slots with
    /// [`LedgerError::SlotNotFound`]. In both cases nothing changes.
    pub fn remove_participant(&mut self, slot: Slot) -> ResultLedger<Participant> {
        let position = self.position(slot).ok_or(LedgerError::SlotNotFound)?;
        if position < PROTECTED_POSITIONS {
            tracing::warn!(position, "refusing to remove protected participant");
            return Err(LedgerError::SlotProtected(position));
        }

        let removed = self
            .entries
            .remove(slot)
            .ok_or(LedgerError::SlotNotFound)?;
        self.roster.remove(position);
        self.recompute_total();
        tracing::debug!(
            position,
            count = self.roster.len(),
            total = self.total.value(),
            "participant removed"
        );
        Ok(removed)
    }

    /// Returns `true` when `slot` is live and not protected.
    #[must_use]
    pub fn can_remove(&self, slot: Slot) -> bool {
        self.position(slot)
            .is_some_and(|position| position >= PROTECTED_POSITIONS)
    }

    /// Sets the cost of `slot` and returns the recomputed total.
    ///
    /// Negative costs, and costs that would overflow the total, are rejected
    /// with [`LedgerError::InvalidCost`] before anything is written.
    pub fn update_cost(&mut self, slot: Slot, new_cost: i64) -> ResultLedger<Won> {
        let cost = u64::try_from(new_cost)
            .map(Won::new)
            .map_err(|_| LedgerError::InvalidCost(new_cost))?;

        let current = self
            .entries
            .get(slot)
            .ok_or(LedgerError::SlotNotFound)?
            .cost();
        let others = self.sum_costs_except(slot);
        if others.checked_add(cost).is_none() {
            tracing::warn!(cost = new_cost, "cost would overflow the total");
            return Err(LedgerError::InvalidCost(new_cost));
        }

        if let Some(entry) = self.entries.get_mut(slot) {
            entry.set_cost(cost);
        }
        self.recompute_total();
        tracing::debug!(
            previous = current.value(),
            cost = cost.value(),
            total = self.total.value(),
            "cost updated"
        );
        Ok(self.total)
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.roster.len()
    }

    #[must_use]
    pub fn total(&self) -> Won {
        self.total
    }

    #[must_use]
    pub fn cost(&self, slot: Slot) -> Option<Won> {
        self.entries.get(slot).map(Participant::cost)
    }

    #[must_use]
    pub fn participant(&self, slot: Slot) -> Option<&Participant> {
        self.entries.get(slot)
    }

    /// Current roster position of `slot`, if it is live.
    #[must_use]
    pub fn position(&self, slot: Slot) -> Option<usize> {
        self.roster.iter().position(|live| *live == slot)
    }

    #[must_use]
    pub fn slot_at(&self, position: usize) -> Option<Slot> {
        self.roster.get(position).copied()
    }

    /// Live participants in roster order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.roster.iter().filter_map(|slot| self.entries.get(*slot))
    }

    fn sum_costs_except(&self, excluded: Slot) -> Won {
        self.participants()
            .filter(|p| p.slot() != excluded)
            .map(Participant::cost)
            .sum()
    }

    fn recompute_total(&mut self) {
        self.total = self.participants().map(Participant::cost).sum();
    }
}

/// Builder for [`ParticipantLedger`].
#[derive(Debug)]
pub struct ParticipantLedgerBuilder {
    participants: usize,
    name_prefix: String,
}

impl Default for ParticipantLedgerBuilder {
    fn default() -> Self {
        Self {
            participants: DEFAULT_PARTICIPANTS,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }
}

impl ParticipantLedgerBuilder {
    /// Number of participants to seed. Values below [`PROTECTED_POSITIONS`]
    /// are raised to it.
    #[must_use]
    pub fn participants(mut self, participants: usize) -> Self {
        self.participants = participants;
        self
    }

    #[must_use]
    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    pub fn build(self) -> ParticipantLedger {
        let mut ledger = ParticipantLedger {
            entries: SlotMap::with_key(),
            roster: Vec::new(),
            total: Won::ZERO,
            created: 0,
            name_prefix: self.name_prefix,
        };
        for _ in 0..self.participants.max(PROTECTED_POSITIONS) {
            ledger.add_participant();
        }
        ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn independent_total(ledger: &ParticipantLedger) -> u64 {
        (0..ledger.participant_count())
            .filter_map(|position| ledger.slot_at(position))
            .filter_map(|slot| ledger.cost(slot))
            .map(Won::value)
            .sum()
    }

    #[test]
    fn seeds_two_named_participants() {
        let ledger = ParticipantLedger::default();
        assert_eq!(ledger.participant_count(), 2);
        assert_eq!(ledger.total(), Won::ZERO);
        let names: Vec<_> = ledger.participants().map(|p| p.name().to_string()).collect();
        assert_eq!(names, ["사용자01", "사용자02"]);
    }

    #[test]
    fn builder_never_seeds_below_protected_count() {
        let ledger = ParticipantLedger::builder().participants(0).build();
        assert_eq!(ledger.participant_count(), PROTECTED_POSITIONS);

        let ledger = ParticipantLedger::builder().participants(4).build();
        assert_eq!(ledger.participant_count(), 4);
    }

    #[test]
    fn can_remove_only_past_the_first_two() {
        let mut ledger = ParticipantLedger::default();
        let third = ledger.add_participant();
        assert!(!ledger.can_remove(ledger.slot_at(0).unwrap()));
        assert!(!ledger.can_remove(ledger.slot_at(1).unwrap()));
        assert!(ledger.can_remove(third));

        ledger.remove_participant(third).unwrap();
        assert!(!ledger.can_remove(third));
    }

    #[test]
    fn update_cost_rejects_overflowing_total() {
        let mut ledger = ParticipantLedger::default();
        let first = ledger.slot_at(0).unwrap();
        let second = ledger.slot_at(1).unwrap();
        ledger.update_cost(first, i64::MAX).unwrap();
        ledger.update_cost(second, i64::MAX).unwrap();

        let third = ledger.add_participant();
        assert_eq!(
            ledger.update_cost(third, i64::MAX),
            Err(LedgerError::InvalidCost(i64::MAX))
        );
        assert_eq!(ledger.cost(third), Some(Won::ZERO));
        assert_eq!(ledger.total().value(), independent_total(&ledger));
    }

    #[test]
    fn total_follows_every_mutation() {
        let mut ledger = ParticipantLedger::default();
        let first = ledger.slot_at(0).unwrap();
        let third = ledger.add_participant();
        let fourth = ledger.add_participant();

        ledger.update_cost(first, 1200).unwrap();
        ledger.update_cost(third, 800).unwrap();
        ledger.update_cost(fourth, 50).unwrap();
        assert_eq!(ledger.total().value(), independent_total(&ledger));

        ledger.update_cost(third, 0).unwrap();
        assert_eq!(ledger.total().value(), independent_total(&ledger));

        ledger.remove_participant(fourth).unwrap();
        assert_eq!(ledger.total(), Won::new(1200));
        assert_eq!(ledger.total().value(), independent_total(&ledger));
    }
}
