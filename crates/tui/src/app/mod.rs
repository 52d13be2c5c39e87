use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{
    ExpenseList, LedgerCommand, LedgerError, LedgerEvent, ParticipantLedger, Slot, Won,
    format_amount_input, group_thousands, parse_amount, sanitize_digits,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Roster,
    Detail(Slot),
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Roster => "Home",
            Self::Detail(_) => "Expenses",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub expires_at: Instant,
}

/// Cost being typed for one roster row. Only committed on Enter.
#[derive(Debug)]
pub struct CostEdit {
    pub slot: Slot,
    pub buffer: String,
}

#[derive(Debug, Default)]
pub struct RosterState {
    pub selected: usize,
    pub editing: Option<CostEdit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
}

#[derive(Debug)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub focus: FormField,
    pub message: Option<String>,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            focus: FormField::Description,
            message: None,
        }
    }
}

/// State of one visit of a participant's detail screen.
#[derive(Debug)]
pub struct DetailState {
    pub slot: Slot,
    pub expenses: ExpenseList,
    pub form: Option<ExpenseForm>,
}

impl DetailState {
    fn new(slot: Slot) -> Self {
        Self {
            slot,
            expenses: ExpenseList::new(),
            form: None,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub ledger: ParticipantLedger,
    pub stack: Vec<Screen>,
    pub roster: RosterState,
    pub detail: Option<DetailState>,
    pub toast: Option<ToastState>,
    pub currency_suffix: String,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let ledger = ParticipantLedger::builder()
            .participants(config.participants)
            .name_prefix(config.name_prefix.as_str())
            .build();

        Self {
            ledger,
            stack: vec![Screen::Roster],
            roster: RosterState::default(),
            detail: None,
            toast: None,
            currency_suffix: config.currency_suffix.clone(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Roster)
    }

    pub fn selected_slot(&self) -> Option<Slot> {
        self.ledger.slot_at(self.roster.selected)
    }

    pub fn format_won(&self, amount: Won) -> String {
        amount.format(&self.currency_suffix)
    }

    /// Whether typed characters go into a text field instead of shortcuts.
    pub fn is_text_input(&self) -> bool {
        match self.screen() {
            Screen::Roster => self.roster.editing.is_some(),
            Screen::Detail(_) => self
                .detail
                .as_ref()
                .is_some_and(|detail| detail.form.is_some()),
        }
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::new(config),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit() {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }

            self.expire_toast(Instant::now());
        }

        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key, self.state.is_text_input());
        if action == AppAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.state.screen() {
            Screen::Roster => {
                if self.state.roster.editing.is_some() {
                    self.handle_cost_edit(action);
                } else {
                    self.handle_roster(action);
                }
            }
            Screen::Detail(_) => {
                let form_open = self
                    .state
                    .detail
                    .as_ref()
                    .is_some_and(|detail| detail.form.is_some());
                if form_open {
                    self.handle_form(action);
                } else {
                    self.handle_detail(action);
                }
            }
        }
    }

    fn handle_roster(&mut self, action: AppAction) {
        match action {
            AppAction::Up | AppAction::Input('k') => self.select_prev(),
            AppAction::Down | AppAction::Input('j') => self.select_next(),
            AppAction::Submit => {
                if let Some(slot) = self.state.selected_slot() {
                    self.push(Screen::Detail(slot));
                }
            }
            AppAction::Input('a') => {
                if let Some(LedgerEvent::ParticipantAdded { slot, .. }) =
                    self.dispatch(LedgerCommand::AddParticipant)
                {
                    if let Some(position) = self.state.ledger.position(slot) {
                        self.state.roster.selected = position;
                    }
                }
            }
            AppAction::Input('d') => {
                let Some(slot) = self.state.selected_slot() else {
                    return;
                };
                if let Some(LedgerEvent::ParticipantRemoved { participant, .. }) =
                    self.dispatch(LedgerCommand::remove(slot))
                {
                    let last = self.state.ledger.participant_count().saturating_sub(1);
                    self.state.roster.selected = self.state.roster.selected.min(last);
                    self.toast(
                        ToastLevel::Success,
                        format!("Removed {}.", participant.name()),
                    );
                }
            }
            AppAction::Input('e') => {
                if let Some(slot) = self.state.selected_slot() {
                    let cost = self.state.ledger.cost(slot).unwrap_or(Won::ZERO);
                    let buffer = if cost.is_zero() {
                        String::new()
                    } else {
                        format_amount_input(&cost.value().to_string())
                    };
                    self.state.roster.editing = Some(CostEdit { slot, buffer });
                }
            }
            AppAction::Input('s') => {
                // Settlement is out of scope; the button only acknowledges.
                tracing::info!(total = self.state.ledger.total().value(), "settle requested");
                self.toast(ToastLevel::Info, "Settlement is not available yet.");
            }
            _ => {}
        }
    }

    fn handle_cost_edit(&mut self, action: AppAction) {
        let Some(edit) = self.state.roster.editing.as_mut() else {
            return;
        };
        match action {
            AppAction::Input(ch) => {
                edit.buffer.push(ch);
                edit.buffer = format_amount_input(&edit.buffer);
            }
            AppAction::Backspace => edit.buffer = pop_digit(&edit.buffer),
            AppAction::Cancel => self.state.roster.editing = None,
            AppAction::Submit => self.commit_cost(),
            _ => {}
        }
    }

    fn commit_cost(&mut self) {
        let Some(edit) = self.state.roster.editing.take() else {
            return;
        };
        let cost = if edit.buffer.is_empty() {
            Ok(0)
        } else {
            parse_amount(&edit.buffer)
                .map_err(|err| err.to_string())
                .and_then(|value| i64::try_from(value).map_err(|err| err.to_string()))
        };

        match cost {
            Ok(cost) => {
                self.dispatch(LedgerCommand::update_cost(edit.slot, cost));
            }
            Err(message) => self.toast(ToastLevel::Error, message),
        }
    }

    fn handle_detail(&mut self, action: AppAction) {
        match action {
            AppAction::Cancel | AppAction::Input('b') => self.pop(),
            AppAction::Input('a') => {
                if let Some(detail) = self.state.detail.as_mut() {
                    detail.form = Some(ExpenseForm::default());
                }
            }
            _ => {}
        }
    }

    fn handle_form(&mut self, action: AppAction) {
        let Some(detail) = self.state.detail.as_mut() else {
            return;
        };
        let Some(form) = detail.form.as_mut() else {
            return;
        };

        match action {
            AppAction::Input(ch) => match form.focus {
                FormField::Description => form.description.push(ch),
                FormField::Amount => {
                    form.amount.push(ch);
                    form.amount = format_amount_input(&form.amount);
                }
            },
            AppAction::Backspace => match form.focus {
                FormField::Description => {
                    form.description.pop();
                }
                FormField::Amount => form.amount = pop_digit(&form.amount),
            },
            AppAction::NextField | AppAction::Up | AppAction::Down => {
                form.focus = match form.focus {
                    FormField::Description => FormField::Amount,
                    FormField::Amount => FormField::Description,
                };
            }
            AppAction::Cancel => detail.form = None,
            AppAction::Submit => {
                let saved = detail
                    .expenses
                    .add_today(&form.description, &form.amount)
                    .map(|expense| expense.description.clone());
                match saved {
                    Ok(description) => {
                        detail.form = None;
                        self.toast(ToastLevel::Success, format!("Saved {description}."));
                    }
                    Err(err) => form.message = Some(err.to_string()),
                }
            }
            _ => {}
        }
    }

    /// Sends `command` to the ledger, turning rejections into a toast.
    fn dispatch(&mut self, command: LedgerCommand) -> Option<LedgerEvent> {
        match self.state.ledger.apply(command) {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::warn!(?command, %err, "ledger command rejected");
                self.toast(ToastLevel::Error, ledger_message(err));
                None
            }
        }
    }

    fn push(&mut self, screen: Screen) {
        tracing::info!(screen = screen.label(), "navigate");
        if let Screen::Detail(slot) = screen {
            self.state.detail = Some(DetailState::new(slot));
        }
        self.state.stack.push(screen);
    }

    fn pop(&mut self) {
        if self.state.stack.len() <= 1 {
            return;
        }
        self.state.stack.pop();
        self.state.detail = None;
        tracing::info!(screen = self.state.screen().label(), "navigate back");
    }

    fn select_next(&mut self) {
        let count = self.state.ledger.participant_count();
        if count == 0 {
            return;
        }
        self.state.roster.selected = (self.state.roster.selected + 1).min(count - 1);
    }

    fn select_prev(&mut self) {
        self.state.roster.selected = self.state.roster.selected.saturating_sub(1);
    }

    fn toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.state.toast = Some(ToastState {
            message: message.into(),
            level,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self
            .state
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.state.toast = None;
        }
    }
}

/// Drops the last digit of a grouped amount and regroups the rest.
fn pop_digit(grouped: &str) -> String {
    let mut digits = sanitize_digits(grouped);
    digits.pop();
    group_thousands(&digits)
}

fn ledger_message(err: LedgerError) -> String {
    match err {
        LedgerError::SlotProtected(_) => {
            "The first two participants cannot be removed.".to_string()
        }
        LedgerError::SlotNotFound => "Participant not found.".to_string(),
        LedgerError::InvalidCost(cost) => format!("Invalid cost: {cost}"),
    }
}
