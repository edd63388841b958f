// Entrypoint for the CLI application.
// - Keeps `main` small: load the catalog, build the state and hand it to
//   the menu loop.
// - Logs go to stderr so stdout only carries the menu transcript.

use std::io::{self, IsTerminal};
use watchlog_cli::{
    config::Config,
    state::AppState,
    ui::{main_menu, LinePrompter, TerminalPrompter},
};

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    setup_tracing();

    // Catalog comes from the file named by `WATCHLOG_CATALOG`, or the
    // built-in table. See `config::Config::from_env`.
    let config = Config::from_env();
    let mut state = AppState::new(config.load_catalog()?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    if stdin.is_terminal() {
        main_menu(&mut state, &mut TerminalPrompter::new(), &mut out)?;
    } else {
        main_menu(&mut state, &mut LinePrompter::new(stdin.lock()), &mut out)?;
    }
    Ok(())
}
