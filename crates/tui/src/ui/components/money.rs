use engine::Won;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Span for a participant cost; zero is dimmed.
#[must_use]
pub fn styled_cost(amount: Won, suffix: &str, theme: &Theme) -> Span<'static> {
    let color = if amount.is_zero() {
        theme.text_muted
    } else {
        theme.text
    };
    Span::styled(amount.format(suffix), Style::default().fg(color))
}

/// Bold span for totals.
#[must_use]
pub fn styled_total(amount: Won, suffix: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        amount.format(suffix),
        Style::default()
            .fg(theme.on_accent)
            .add_modifier(Modifier::BOLD),
    )
}

/// Span for an amount field being typed, with a trailing cursor.
#[must_use]
pub fn amount_input(grouped: &str, suffix: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let cursor = if focused { "│" } else { "" };
    let style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    Span::styled(format!("{grouped}{cursor} {suffix}"), style)
}
