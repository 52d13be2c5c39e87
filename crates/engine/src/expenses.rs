//! Itemized expenses captured on a participant's detail screen.
//!
//! The list lives only as long as one visit of the screen and is never folded
//! into the [`ParticipantLedger`](crate::ParticipantLedger).
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::{EngineError, Won, money::parse_amount};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: Won,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, Default)]
pub struct ExpenseList {
    items: Vec<Expense>,
}

impl ExpenseList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an expense dated `date`.
    ///
    /// `amount_text` may be grouped (`"1,500"`). Both fields are required; on
    /// error the list is left unchanged.
    pub fn add(
        &mut self,
        description: &str,
        amount_text: &str,
        date: NaiveDate,
    ) -> Result<&Expense, EngineError> {
        if description.trim().is_empty() {
            return Err(EngineError::EmptyDescription);
        }
        let amount = Won::new(parse_amount(amount_text)?);

        self.items.push(Expense {
            id: Uuid::new_v4(),
            description: description.to_string(),
            amount,
            date,
        });
        tracing::debug!(
            amount = amount.value(),
            count = self.items.len(),
            "expense added"
        );

        let last = self.items.len() - 1;
        Ok(&self.items[last])
    }

    /// Same as [`add`](Self::add), dated with the local calendar day.
    pub fn add_today(
        &mut self,
        description: &str,
        amount_text: &str,
    ) -> Result<&Expense, EngineError> {
        self.add(description, amount_text, Local::now().date_naive())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Subtotal of the listed amounts, saturating at `u64::MAX`.
    #[must_use]
    pub fn sum(&self) -> Won {
        self.items.iter().map(|expense| expense.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, 3).unwrap()
    }

    #[test]
    fn add_parses_grouped_amount() {
        let mut list = ExpenseList::new();
        let expense = list.add("Taxi", "12,300", day()).unwrap();
        assert_eq!(expense.description, "Taxi");
        assert_eq!(expense.amount, Won::new(12_300));
        assert_eq!(expense.date, day());

        list.add("Coffee", "4500", day()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.sum(), Won::new(16_800));
    }

    #[test]
    fn entries_get_distinct_ids() {
        let mut list = ExpenseList::new();
        let a = list.add("Lunch", "9000", day()).unwrap().id;
        let b = list.add("Lunch", "9000", day()).unwrap().id;
        assert_ne!(a, b);
    }

    #[test]
    fn both_fields_are_required() {
        let mut list = ExpenseList::new();
        assert_eq!(
            list.add("   ", "1000", day()),
            Err(EngineError::EmptyDescription)
        );
        assert!(matches!(
            list.add("Dinner", "", day()),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(list.is_empty());
        assert_eq!(list.sum(), Won::ZERO);
    }

    #[test]
    fn zero_amount_is_accepted() {
        let mut list = ExpenseList::new();
        list.add("Free refill", "0", day()).unwrap();
        assert_eq!(list.len(), 1);
    }
}
