//! smssend binary: parse flags, run the send pipeline once, exit.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use smssend::cli::{Cli, EXIT_USAGE, run};

fn init_tracing(debug: bool) {
    // RUST_LOG wins; --debug only sets the default filter.
    let default_filter = if debug { "smssend=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Usage errors exit 3 in this tool; clap's default of 2 is reserved for
    // transport failures. Help and version output still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_tracing(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}
