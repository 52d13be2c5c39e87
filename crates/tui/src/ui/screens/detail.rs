use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, Paragraph},
};

use crate::{
    app::{AppState, DetailState, ExpenseForm, FormField},
    ui::{
        components::{card::Card, centered_rect, money::amount_input},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let Some(detail) = state.detail.as_ref() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_expenses(frame, layout[0], state, detail, &theme);

    let button = Line::from(vec![
        Span::styled("[a]", Style::default().fg(theme.accent)),
        Span::raw(" Add expense"),
    ]);
    frame.render_widget(
        Paragraph::new(button).alignment(Alignment::Center),
        layout[1],
    );

    if let Some(form) = detail.form.as_ref() {
        render_form(frame, area, state, form, &theme);
    }
}

fn render_expenses(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    detail: &DetailState,
    theme: &Theme,
) {
    let name = state
        .ledger
        .participant(detail.slot)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| "?".to_string());
    let title = format!("{name} · expenses");
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    if detail.expenses.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No expenses recorded yet",
                Style::default().fg(theme.dim),
            ))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = detail
        .expenses
        .iter()
        .map(|expense| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    expense.date.format("%Y-%m-%d").to_string(),
                    Style::default().fg(theme.dim),
                ),
                Span::raw("  "),
                Span::styled(expense.description.clone(), Style::default().fg(theme.text)),
                Span::raw("  "),
                Span::styled(
                    state.format_won(expense.amount),
                    Style::default().fg(theme.accent),
                ),
            ]))
        })
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    frame.render_widget(List::new(items), rows[0]);

    let subtotal = Line::from(vec![
        Span::styled("Subtotal: ", Style::default().fg(theme.text_muted)),
        Span::styled(
            state.format_won(detail.expenses.sum()),
            Style::default().fg(theme.accent),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(subtotal).alignment(Alignment::Right),
        rows[1],
    );
}

fn render_form(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    form: &ExpenseForm,
    theme: &Theme,
) {
    let popup = centered_rect(48, 9, area);
    frame.render_widget(Clear, popup);

    let card = Card::new("Add expense", theme).focused(true);
    let description_focused = form.focus == FormField::Description;
    let cursor = if description_focused { "│" } else { "" };
    let description_style = if description_focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };

    let mut lines = vec![
        Line::from(Span::styled("Description", Style::default().fg(theme.text))),
        Line::from(Span::styled(
            format!("{}{cursor}", form.description),
            description_style,
        )),
        Line::from(Span::styled("Amount", Style::default().fg(theme.text))),
        Line::from(amount_input(
            &form.amount,
            &state.currency_suffix,
            form.focus == FormField::Amount,
            theme,
        )),
    ];
    if let Some(message) = &form.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.error),
        )));
    }

    card.render_with(frame, popup, Paragraph::new(lines));
}
