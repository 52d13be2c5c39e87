use std::{fmt, iter::Sum, str::FromStr};

use crate::EngineError;

/// Suffix used when rendering amounts.
pub const DEFAULT_SUFFIX: &str = "원";

/// Non-negative money amount in **won**.
///
/// Won has no fractional subunit, so the minor unit is the won itself and the
/// amount is stored as a plain integer.
///
/// # Examples
///
/// ```rust
/// use engine::Won;
///
/// let amount = Won::new(15_000);
/// assert_eq!(amount.value(), 15000);
/// assert_eq!(amount.to_string(), "15,000원");
/// ```
///
/// Parsing accepts the grouped form produced by [`format_amount_input`]:
///
/// ```rust
/// use engine::Won;
///
/// assert_eq!("1,234".parse::<Won>().unwrap().value(), 1234);
/// assert!("".parse::<Won>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Won(u64);

impl Won {
    pub const ZERO: Won = Won(0);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Won) -> Option<Won> {
        self.0.checked_add(rhs.0).map(Won)
    }

    /// Renders the grouped amount followed by `suffix` (e.g. `1,500원`).
    #[must_use]
    pub fn format(self, suffix: &str) -> String {
        format!("{}{suffix}", group_thousands(&self.0.to_string()))
    }
}

impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_SUFFIX))
    }
}

/// Saturates at `u64::MAX` instead of overflowing.
impl Sum for Won {
    fn sum<I: Iterator<Item = Won>>(iter: I) -> Self {
        iter.fold(Won::ZERO, |acc, amount| Won(acc.0.saturating_add(amount.0)))
    }
}

impl FromStr for Won {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_amount(s).map(Won)
    }
}

/// Keeps only the ASCII digits of `text`.
#[must_use]
pub fn sanitize_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Inserts a `,` every three digits, counting from the right.
///
/// The input is expected to be digits only (see [`sanitize_digits`]).
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Reformats raw keyboard input for an amount field: digits only, grouped.
///
/// ```rust
/// use engine::format_amount_input;
///
/// assert_eq!(format_amount_input("12a34"), "1,234");
/// ```
#[must_use]
pub fn format_amount_input(text: &str) -> String {
    group_thousands(&sanitize_digits(text))
}

/// Parses a (possibly grouped) amount back into an integer.
///
/// Validation rules:
/// - `,` separators and surrounding whitespace are ignored
/// - at least one digit is required
/// - any other character is rejected
pub fn parse_amount(text: &str) -> Result<u64, EngineError> {
    let empty = || EngineError::InvalidAmount("empty amount".to_string());
    let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
    let overflow = || EngineError::InvalidAmount("amount too large".to_string());

    let digits: String = text.trim().chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(empty());
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    digits.parse::<u64>().map_err(|_| overflow())
}
