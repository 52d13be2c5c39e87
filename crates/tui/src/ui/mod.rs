pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, Screen},
    ui::theme::Theme,
};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_title_bar(frame, layout[0], state, &theme);
    match state.screen() {
        Screen::Roster => screens::roster::render(frame, layout[1], state),
        Screen::Detail(_) => screens::detail::render(frame, layout[1], state),
    }
    render_bottom_bar(frame, layout[2], state, &theme);
    components::toast::render(frame, area, state.toast.as_ref());
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", state.screen().label()),
            Style::default()
                .fg(theme.on_accent)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("nbbang", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = match state.screen() {
        Screen::Roster if state.roster.editing.is_some() => components::hints::cost_edit(),
        Screen::Roster => {
            let removable = state
                .selected_slot()
                .is_some_and(|slot| state.ledger.can_remove(slot));
            components::hints::roster(removable)
        }
        Screen::Detail(_) if state.is_text_input() => components::hints::form(),
        Screen::Detail(_) => components::hints::detail(),
    };
    let bar = Paragraph::new(Line::from(components::hints::hints_to_spans(&hints, theme)));
    frame.render_widget(bar, area);
}
