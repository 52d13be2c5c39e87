use slotmap::new_key_type;

use crate::Won;

new_key_type! {
    /// Stable handle of a participant.
    ///
    /// A slot is issued once, at creation, and is never handed out again after
    /// the participant is removed. It is independent from the participant's
    /// position in the roster, which shifts when earlier participants leave.
    pub struct Slot;
}

/// Prefix of generated participant names.
pub const DEFAULT_NAME_PREFIX: &str = "사용자";

/// A live participant of the split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    slot: Slot,
    name: String,
    cost: Won,
}

impl Participant {
    pub(crate) fn new(slot: Slot, name: String) -> Self {
        Self {
            slot,
            name,
            cost: Won::ZERO,
        }
    }

    #[must_use]
    pub fn slot(&self) -> Slot {
        self.slot
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cost(&self) -> Won {
        self.cost
    }

    pub(crate) fn set_cost(&mut self, cost: Won) -> Won {
        std::mem::replace(&mut self.cost, cost)
    }
}

/// Builds the display name for the `ordinal`-th participant (1-based).
///
/// ```rust
/// use engine::default_name;
///
/// assert_eq!(default_name("사용자", 1), "사용자01");
/// assert_eq!(default_name("User", 12), "User12");
/// ```
#[must_use]
pub fn default_name(prefix: &str, ordinal: u32) -> String {
    format!("{prefix}{ordinal:02}")
}
