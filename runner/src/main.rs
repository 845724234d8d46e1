mod play;
mod render;
mod watch;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use common::config::{ArcadeConfig, ConfigManager, FileContentConfigProvider};
use common::games::snake::BoardMode;
use common::store::{ArcadeApi, InMemoryStore};
use common::{LivePlayerId, log, logger};

#[derive(Parser)]
#[command(name = "snake_arcade")]
struct Args {
    /// YAML config file; defaults are used when it is missing.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Let the bot play one game and print the final board.
    Play {
        #[arg(long)]
        mode: Option<BoardMode>,

        /// Stop after this many ticks even if the game is still running.
        #[arg(long)]
        max_ticks: Option<u64>,

        #[arg(long, requires = "password")]
        email: Option<String>,

        #[arg(long, requires = "email")]
        password: Option<String>,
    },
    /// Follow a live player.
    Watch {
        #[arg(long)]
        player: Option<String>,

        #[arg(long, default_value_t = 50)]
        ticks: u64,
    },
    /// Print the leaderboard as YAML.
    Leaderboard {
        #[arg(long)]
        mode: Option<BoardMode>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match &args.config {
        Some(path) => {
            let manager: ConfigManager<FileContentConfigProvider, ArcadeConfig> =
                ConfigManager::from_yaml_file(path.clone());
            manager.get_config()?
        }
        None => ArcadeConfig::default(),
    };

    let api = ArcadeApi::new(
        InMemoryStore::seeded(),
        Duration::from_millis(u64::from(config.api.latency_ms)),
    );

    match args.command {
        Command::Play {
            mode,
            max_ticks,
            email,
            password,
        } => {
            let options = play::PlayOptions {
                mode: mode.unwrap_or(config.game.mode),
                max_ticks,
                login: email.zip(password),
            };
            let summary = play::run_play(&config, &api, options).await?;
            log!(
                "Finished after {} ticks with {} points, {} score(s) recorded",
                summary.ticks,
                summary.score,
                summary.recorded
            );
        }
        Command::Watch { player, ticks } => {
            let player = player.map(LivePlayerId::new);
            watch::run_watch(&config, &api, player, ticks).await?;
        }
        Command::Leaderboard { mode } => {
            let entries = api.leaderboard(mode).await;
            print!("{}", serde_yaml_ng::to_string(&entries)?);
        }
    }

    Ok(())
}
