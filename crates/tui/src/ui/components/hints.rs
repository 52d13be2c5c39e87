use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Roster hints; `d delete` only appears when the selected row is removable.
pub fn roster(removable: bool) -> Vec<KeyHint> {
    let mut hints = vec![
        KeyHint::new("↑↓", "select"),
        KeyHint::new("a", "add"),
        KeyHint::new("e", "edit cost"),
    ];
    if removable {
        hints.push(KeyHint::new("d", "delete"));
    }
    hints.extend([
        KeyHint::new("Enter", "expenses"),
        KeyHint::new("s", "settle"),
        KeyHint::new("q", "quit"),
    ]);
    hints
}

pub fn cost_edit() -> Vec<KeyHint> {
    vec![
        KeyHint::new("0-9", "amount"),
        KeyHint::new("Enter", "save"),
        KeyHint::new("Esc", "cancel"),
    ]
}

pub fn detail() -> Vec<KeyHint> {
    vec![
        KeyHint::new("a", "add expense"),
        KeyHint::new("Esc", "back"),
        KeyHint::new("q", "quit"),
    ]
}

pub fn form() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("Enter", "save"),
        KeyHint::new("Esc", "cancel"),
    ]
}
