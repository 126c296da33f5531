use std::io::{BufRead, Write};
use tracing::info;
use library_catalog::catalog::controller::handle_line;
use library_catalog::core::controller::AppState;
use library_catalog::core::domain::Configuration;
use library_catalog::core::library::LibraryResult;
use library_catalog::gateway::GatewayPublisherVia;
use library_catalog::utils::logs::setup_tracing;

// Reads one JSON request per line from stdin, e.g.
//   {"action": "add", "title": "Dune", "author": "Herbert"}
//   {"action": "checkout", "title": "Dune"}
// and writes one JSON response per line to stdout.
fn main() -> LibraryResult<()> {
    let config = Configuration::from_env();
    setup_tracing(&config)?;
    info!(branch = config.branch_id.as_str(), "catalog ready");

    let state = AppState::new(config, GatewayPublisherVia::Logs);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(stdout, "{}", handle_line(&state, line.as_str()))?;
        stdout.flush()?;
    }
    Ok(())
}
