use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use patternarium::catalog::Catalog;
use patternarium::cli::{run_inspect, Cli, Commands};
use patternarium::menu::MenuController;

fn main() {
    // Nothing below is allowed to take the process down with a panic or an
    // unexplained propagated error.
    if let Err(err) = run() {
        eprintln!("Unexpected error: {err}");
    }
}

fn run() -> patternarium::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let catalog = Catalog::discover();

    match cli.command {
        Some(Commands::Inspect { format }) => {
            let mut stdout = io::stdout();
            run_inspect(&catalog, format, &mut stdout)
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut controller = MenuController::new(catalog, stdin.lock(), stdout.lock());
            controller.run()
        }
    }
}
