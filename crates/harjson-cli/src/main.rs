mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Parse CLI and dispatch; logging is set up inside once config is known.
    if let Err(err) = Cli::run_from_args().await {
        eprintln!("harjson error: {:#}", err);
        std::process::exit(1);
    }
}
