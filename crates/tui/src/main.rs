mod app;
mod config;
mod error;
mod logging;
mod ui;

use crate::error::Result;

fn main() -> Result<()> {
    let config = config::load()?;
    let _log_guard = logging::init(&config)?;
    tracing::info!(participants = config.participants, "starting");

    let mut app = app::App::new(&config);
    app.run()?;
    tracing::info!(
        participants = app.state.ledger.participant_count(),
        total = app.state.ledger.total().value(),
        "exiting"
    );
    Ok(())
}
