use anyhow::Result;
use clap::Parser;
use tic_tac_toe_engine::config::CliConfig;
use tic_tac_toe_engine::{Config, GameInterface, APP_NAME, VERSION};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "N x N tic-tac-toe in the terminal")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Number of fields per row and column
    #[arg(short, long)]
    size: Option<usize>,

    /// Consecutive marks needed to win (defaults to the row size)
    #[arg(short, long)]
    win: Option<usize>,

    /// Colour theme: default, classic or mono
    #[arg(long)]
    theme: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliConfig {
        CliConfig {
            row_size: self.size,
            fields_to_win: self.win,
            theme: self.theme.clone(),
            log_level: None,
            debug: self.debug,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    config.merge_with_cli(cli.overrides());

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting {} v{}", APP_NAME, VERSION);

    config.validate()?;

    let mut game_interface = GameInterface::new(config)?;

    if let Err(e) = game_interface.run() {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    info!("Game session ended");
    Ok(())
}
