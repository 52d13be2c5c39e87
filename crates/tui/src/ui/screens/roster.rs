use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use engine::Participant;

use crate::{
    app::AppState,
    ui::{
        components::{
            card::Card,
            money::{amount_input, styled_cost, styled_total},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Participants
            Constraint::Length(1), // Add button
            Constraint::Length(4), // Total footer
        ])
        .split(area);

    render_participants(frame, layout[0], state, &theme);
    render_add_button(frame, layout[1], &theme);
    render_footer(frame, layout[2], state, &theme);
}

fn render_participants(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let title = format!("Participants ({})", state.ledger.participant_count());
    let card = Card::new(&title, theme);
    let inner = card.inner(area);
    frame.render_widget(card.block(), area);

    let items: Vec<ListItem> = state
        .ledger
        .participants()
        .map(|participant| ListItem::new(participant_row(participant, state, theme)))
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(state.roster.selected.min(items.len() - 1)));
    }

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn participant_row(participant: &Participant, state: &AppState, theme: &Theme) -> Line<'static> {
    let slot = participant.slot();
    let suffix = state.currency_suffix.as_str();

    let cost = match state.roster.editing.as_ref() {
        Some(edit) if edit.slot == slot => amount_input(&edit.buffer, suffix, true, theme),
        _ => styled_cost(participant.cost(), suffix, theme),
    };

    let mut spans = vec![
        Span::styled(
            participant.name().to_string(),
            Style::default().fg(theme.text),
        ),
        Span::raw("  "),
        cost,
    ];

    // The first two participants never get a delete affordance.
    if state.ledger.can_remove(slot) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[d] delete", Style::default().fg(theme.danger)));
    }

    Line::from(spans)
}

fn render_add_button(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let button = Line::from(vec![
        Span::styled("[a]", Style::default().fg(theme.accent)),
        Span::raw(" Add participant"),
    ]);
    frame.render_widget(Paragraph::new(button).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("", theme).focused(true);
    let lines = vec![
        Line::from(vec![
            Span::styled("Total: ", Style::default().fg(theme.text_muted)),
            styled_total(state.ledger.total(), &state.currency_suffix, theme),
        ]),
        Line::from(vec![
            Span::styled("[s]", Style::default().fg(theme.accent)),
            Span::raw(" Settle"),
        ]),
    ];
    card.render_with(
        frame,
        area,
        Paragraph::new(lines).alignment(Alignment::Center),
    );
}
