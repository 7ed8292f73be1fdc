use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use connect_n::config::AppConfig;
use connect_n::game::{GameSession, Outcome, SessionState};
use connect_n::logging;

/// Replay a list of column drops on a connect-N board and report the result.
#[derive(Parser)]
#[command(name = "connect-n", about = "Replay a connect-N game from a move list")]
struct Cli {
    /// Columns to drop into, in play order (0 = leftmost)
    columns: Vec<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the number of tokens to align
    #[arg(long)]
    win_length: Option<usize>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        app_config.game.width = width;
    }
    if let Some(height) = cli.height {
        app_config.game.height = height;
    }
    if let Some(win_length) = cli.win_length {
        app_config.game.win_length = win_length;
    }
    if let Some(level) = cli.log_level {
        app_config.logging.level = level;
    }
    app_config.validate().context("invalid configuration")?;

    logging::init(app_config.logging.level_filter()?).context("installing logger")?;
    debug!(?app_config, "configuration loaded");

    let mut session = GameSession::new(app_config.game).context("starting game")?;

    for (turn, &column) in cli.columns.iter().enumerate() {
        if session.is_over() {
            bail!(
                "move {} (column {column}) played after the game ended",
                turn + 1
            );
        }
        let player = session.active_player();
        let outcome = session
            .drop_token(column)
            .with_context(|| format!("move {} by {player} in column {column}", turn + 1))?;

        match &outcome {
            Outcome::Continue {
                landing,
                next_player,
            } => info!(turn = turn + 1, %player, x = landing.x, y = landing.y, next = %next_player),
            Outcome::Win { cells, .. } => {
                let landing = outcome.landing();
                info!(turn = turn + 1, %player, x = landing.x, y = landing.y, ?cells, "win")
            }
            Outcome::Draw { .. } => {
                let landing = outcome.landing();
                info!(turn = turn + 1, %player, x = landing.x, y = landing.y, "draw")
            }
        }
    }

    print!("{}", session.board());
    match session.state() {
        SessionState::Won { player, cells } => {
            let cells: Vec<String> = cells.iter().map(|c| format!("({}, {})", c.x, c.y)).collect();
            println!("{player} wins: {}", cells.join(" "));
        }
        SessionState::Draw => println!("Draw"),
        SessionState::AwaitingMove | SessionState::Resolving => {
            println!("{} to move", session.active_player())
        }
    }

    Ok(())
}
