use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use log::{info, LevelFilter};
use std::io;
use std::path::PathBuf;

use contact_book::{DeleteConfirmation, Session, SessionConfig, UnknownChoice, VERSION};

#[derive(Parser, Debug)]
#[clap(name = "contact-book", version, about = "Interactive in-memory contact book")]
struct Cli {
    #[clap(long, short, help = "JSON file with session settings")]
    config: Option<PathBuf>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,

    #[clap(long, value_enum, help = "How the YES/NO answer on delete is treated")]
    delete_confirmation: Option<DeleteConfirmation>,

    #[clap(long, value_enum, help = "What to do with a menu choice outside 1 to 6")]
    unknown_choice: Option<UnknownChoice>,

    #[clap(long, help = "Disable colored output")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    // RUST_LOG, when set, takes precedence over --log-level
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .parse_default_env()
        .init();

    let config = load_config(&cli)?;
    info!("contact-book {} starting with {:?}", VERSION, config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()?;

    Ok(())
}

/// Defaults < config file < command-line flags
fn load_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    if let Some(policy) = cli.delete_confirmation {
        config.delete_confirmation = policy;
    }
    if let Some(policy) = cli.unknown_choice {
        config.unknown_choice = policy;
    }
    if cli.no_color || !io::stdout().is_tty() {
        config = config.without_color();
    }

    Ok(config)
}
