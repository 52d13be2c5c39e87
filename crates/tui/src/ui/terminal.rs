use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, stdout};

use crate::error::Result;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub fn setup_terminal() -> Result<AppTerminal> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    tracing::debug!("terminal ready");
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    leave_raw_screen()?;
    terminal.show_cursor()?;
    tracing::debug!("terminal restored");
    Ok(())
}

/// Best effort: tries every step even if one fails, reports the first error.
fn leave_raw_screen() -> io::Result<()> {
    let mut first_err: Option<io::Error> = None;
    if let Err(err) = disable_raw_mode() {
        first_err.get_or_insert(err);
    }
    if let Err(err) = crossterm::execute!(stdout(), LeaveAlternateScreen) {
        first_err.get_or_insert(err);
    }
    first_err.map_or(Ok(()), Err)
}

/// Leaves the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_raw_screen();
        tracing::error!(%info, "panic");
        previous(info);
    }));
}
