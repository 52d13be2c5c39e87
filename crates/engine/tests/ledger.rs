use engine::{LedgerCommand, LedgerError, ParticipantLedger, Slot, Won};

fn independent_total(ledger: &ParticipantLedger) -> u64 {
    ledger.participants().map(|p| p.cost().value()).sum()
}

fn slot(ledger: &ParticipantLedger, position: usize) -> Slot {
    ledger
        .slot_at(position)
        .unwrap_or_else(|| panic!("no participant at position {position}"))
}

/// Scenario A end state: two participants, costs [15000, 5000].
fn scenario_a() -> ParticipantLedger {
    let mut ledger = ParticipantLedger::default();
    assert_eq!(ledger.participant_count(), 2);
    assert_eq!(ledger.total(), Won::ZERO);

    let total = ledger.update_cost(slot(&ledger, 0), 15_000).unwrap();
    assert_eq!(total, Won::new(15_000));
    let total = ledger.update_cost(slot(&ledger, 1), 5_000).unwrap();
    assert_eq!(total, Won::new(20_000));
    ledger
}

/// Scenario B end state: a third participant costing 3000.
fn scenario_b() -> (ParticipantLedger, Slot) {
    let mut ledger = scenario_a();
    let third = ledger.add_participant();
    assert_eq!(ledger.participant_count(), 3);
    assert_eq!(ledger.total(), Won::new(20_000));

    ledger.update_cost(third, 3_000).unwrap();
    assert_eq!(ledger.total(), Won::new(23_000));
    (ledger, third)
}

#[test]
fn costs_sum_into_total() {
    let ledger = scenario_a();
    assert_eq!(ledger.total().value(), independent_total(&ledger));
}

#[test]
fn added_participant_takes_next_position() {
    let (ledger, third) = scenario_b();
    assert_eq!(ledger.position(third), Some(2));
    assert_eq!(ledger.cost(third), Some(Won::new(3_000)));
}

#[test]
fn removing_participant_drops_its_cost() {
    let (mut ledger, third) = scenario_b();
    let removed = ledger.remove_participant(third).unwrap();
    assert_eq!(removed.cost(), Won::new(3_000));
    assert_eq!(ledger.participant_count(), 2);
    assert_eq!(ledger.total(), Won::new(20_000));
    assert_eq!(ledger.cost(third), None);
}

#[test]
fn first_two_participants_are_protected() {
    let mut ledger = ParticipantLedger::default();
    for position in 0..2 {
        let protected = slot(&ledger, position);
        assert!(!ledger.can_remove(protected));
        assert_eq!(
            ledger.remove_participant(protected),
            Err(LedgerError::SlotProtected(position))
        );
        assert_eq!(ledger.participant_count(), 2);
        assert_eq!(ledger.total(), Won::ZERO);
    }
}

#[test]
fn protection_holds_with_costs_and_extra_participants() {
    let (mut ledger, _) = scenario_b();
    let before: Vec<_> = ledger.participants().cloned().collect();

    for position in 0..2 {
        let protected = slot(&ledger, position);
        assert!(ledger.remove_participant(protected).is_err());
    }

    let after: Vec<_> = ledger.participants().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(ledger.total(), Won::new(23_000));
}

#[test]
fn negative_cost_is_rejected() {
    let mut ledger = scenario_a();
    let first = slot(&ledger, 0);
    assert_eq!(
        ledger.update_cost(first, -100),
        Err(LedgerError::InvalidCost(-100))
    );
    assert_eq!(ledger.cost(first), Some(Won::new(15_000)));
    assert_eq!(ledger.total(), Won::new(20_000));
}

#[test]
fn zero_cost_is_valid() {
    let mut ledger = scenario_a();
    let total = ledger.update_cost(slot(&ledger, 0), 0).unwrap();
    assert_eq!(total, Won::new(5_000));
}

#[test]
fn stale_slot_is_not_found() {
    let (mut ledger, third) = scenario_b();
    ledger.remove_participant(third).unwrap();

    assert_eq!(
        ledger.remove_participant(third),
        Err(LedgerError::SlotNotFound)
    );
    assert_eq!(
        ledger.update_cost(third, 10),
        Err(LedgerError::SlotNotFound)
    );
    assert!(!ledger.can_remove(third));
    assert_eq!(ledger.participant_count(), 2);
    assert_eq!(ledger.total(), Won::new(20_000));
}

#[test]
fn add_then_remove_newest_restores_previous_state() {
    let (mut ledger, _) = scenario_b();
    let before: Vec<_> = ledger.participants().cloned().collect();
    let total_before = ledger.total();

    let newest = ledger.add_participant();
    ledger.remove_participant(newest).unwrap();

    let after: Vec<_> = ledger.participants().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(ledger.total(), total_before);
    assert_eq!(ledger.cost(newest), None);
}

#[test]
fn removing_middle_participant_keeps_later_identities() {
    let mut ledger = scenario_a();
    let third = ledger.add_participant();
    let fourth = ledger.add_participant();
    ledger.update_cost(third, 100).unwrap();
    ledger.update_cost(fourth, 7).unwrap();
    let fourth_name = ledger.participant(fourth).unwrap().name().to_string();

    ledger.remove_participant(third).unwrap();

    assert_eq!(ledger.position(fourth), Some(2));
    assert_eq!(ledger.cost(fourth), Some(Won::new(7)));
    assert_eq!(ledger.participant(fourth).unwrap().name(), fourth_name);
    assert_eq!(ledger.total(), Won::new(20_007));

    // Still removable at its new position.
    assert!(ledger.can_remove(fourth));
}

#[test]
fn names_are_not_renumbered() {
    let mut ledger = ParticipantLedger::builder().name_prefix("User").build();
    let third = ledger.add_participant();
    ledger.remove_participant(third).unwrap();
    let next = ledger.add_participant();

    assert_eq!(ledger.participant(next).unwrap().name(), "User04");
    assert_ne!(next, third);
}

#[test]
fn reads_are_idempotent() {
    let (ledger, _) = scenario_b();
    assert_eq!(ledger.participant_count(), ledger.participant_count());
    assert_eq!(ledger.total(), ledger.total());
}

#[test]
fn add_always_grows_by_one_without_touching_total() {
    let (mut ledger, _) = scenario_b();
    for _ in 0..10 {
        let count = ledger.participant_count();
        let total = ledger.total();
        ledger.add_participant();
        assert_eq!(ledger.participant_count(), count + 1);
        assert_eq!(ledger.total(), total);
    }
}

/// Small xorshift generator so the sequence is reproducible.
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

#[test]
fn total_matches_sum_over_random_command_sequences() {
    for seed in 1..=20u64 {
        let mut rng = Rng(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut ledger = ParticipantLedger::default();
        let mut retired: Vec<Slot> = Vec::new();

        for _ in 0..300 {
            let count = ledger.participant_count() as u64;
            let command = match rng.below(5) {
                0 => LedgerCommand::AddParticipant,
                1 => {
                    let target = slot(&ledger, rng.below(count) as usize);
                    LedgerCommand::remove(target)
                }
                2 if !retired.is_empty() => {
                    let stale = retired[rng.below(retired.len() as u64) as usize];
                    LedgerCommand::update_cost(stale, 1)
                }
                3 => {
                    let target = slot(&ledger, rng.below(count) as usize);
                    LedgerCommand::update_cost(target, -(rng.below(1_000) as i64) - 1)
                }
                _ => {
                    let target = slot(&ledger, rng.below(count) as usize);
                    LedgerCommand::update_cost(target, rng.below(100_000) as i64)
                }
            };

            let count_before = ledger.participant_count();
            let total_before = ledger.total();
            match ledger.apply(command) {
                Ok(event) => {
                    assert_eq!(event.total(), ledger.total());
                    if let LedgerCommand::RemoveParticipant(removed) = command {
                        retired.push(removed);
                    }
                }
                Err(_) => {
                    assert_eq!(ledger.participant_count(), count_before);
                    assert_eq!(ledger.total(), total_before);
                }
            }

            assert!(ledger.participant_count() >= 2);
            assert_eq!(ledger.total().value(), independent_total(&ledger));
        }
    }
}
