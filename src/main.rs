use clap::Parser;
use std::{io, path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

use swt::commands::run_menu;
use swt::constants::{DEFAULT_WORD_COUNT, OUTPUT_DIR};
use swt::types::{Config, WordCount};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), about = env!("CARGO_PKG_DESCRIPTION"), author = env!("CARGO_PKG_AUTHORS"), version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[arg(short, long, default_value = OUTPUT_DIR, help = "Directory holding the wallet files")]
    dir: PathBuf,
    #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT, help = "Number of mnemonic words for new wallets (12 or 24)")]
    words: u32,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    let word_count = match WordCount::from_words(cli.words) {
        Ok(word_count) => word_count,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = Config::new(cli.dir, word_count);
    let stdin = io::stdin();
    if let Err(e) = run_menu(&config, &mut stdin.lock()) {
        tracing::error!(error = %e, "terminal I/O failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
