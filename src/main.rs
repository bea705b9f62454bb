// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, build the client, hand it to the
//   UI loop.
// - Logging defaults to `warn` so events don't interleave with prompts;
//   use `RUST_LOG=lawvriksh_beta=info` to see request traces.

use crossterm::style::Stylize;
use lawvriksh_beta::{ui::main_menu, BetaClient};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Configured by `LAWVRIKSH_API_URL`, `LAWVRIKSH_MOCK_MODE` and
    // `LAWVRIKSH_API_TIMEOUT_SECS`; see `config::ClientConfig::from_env`.
    let api = BetaClient::from_env()?;
    if api.is_mock() {
        println!("{}", "Mock mode: no requests will reach the server.".yellow());
    }

    main_menu(&api)?;
    Ok(())
}
