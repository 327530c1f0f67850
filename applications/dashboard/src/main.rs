/// Motive Dashboard - isochronic tones, goal slideshow and past successes
use clap::{Parser, Subcommand};
use motive_assets::AssetClient;
use motive_core::{Affirmation, LocalStore};
use motive_dashboard::{
    config::DashboardConfig,
    dashboard::{Dashboard, Response},
    media::{fetch_tones, RodioMedia},
};
use motive_playback::{HeadlessMedia, MediaElement, TonePlayer};
use motive_rotation::{AFFIRMATIONS_RESOURCE, AFFIRMATIONS_STORE_KEY};
use motive_storage::SqliteLocalStore;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How often the loop checks whether the current tone has finished
const ENDED_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "motive-dashboard")]
#[command(about = "Motivation dashboard with isochronic tones, goals and past successes", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./motive.toml when present)
    #[arg(short, long, global = true, env = "MOTIVE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive dashboard
    Run {
        /// Run without an audio device
        #[arg(long)]
        no_audio: bool,
    },
    /// Inspect or reset the saved past successes
    Wins {
        #[command(subcommand)]
        action: WinsAction,
    },
}

#[derive(Subcommand)]
enum WinsAction {
    /// Print the saved list
    List,
    /// Delete the saved list so the defaults are loaded next start
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout is the dashboard itself
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "motive_dashboard=info,motive_rotation=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = DashboardConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Run { no_audio } => run(config, no_audio).await?,
        Commands::Wins {
            action: WinsAction::List,
        } => list_wins(&config).await?,
        Commands::Wins {
            action: WinsAction::Reset,
        } => reset_wins(&config).await?,
    }

    Ok(())
}

async fn run(config: DashboardConfig, no_audio: bool) -> anyhow::Result<()> {
    tracing::info!("Starting Motive Dashboard");
    tracing::info!("Assets: {}", config.assets.root);

    let store = Arc::new(open_store(&config).await?);
    let assets = AssetClient::new(&config.assets.root)?;

    let mut player = TonePlayer::new(config.playback.clone())?;
    let media: Box<dyn MediaElement> = if no_audio {
        tracing::info!("Audio disabled");
        Box::new(HeadlessMedia::new())
    } else {
        let tones = fetch_tones(&assets, player.tracks()).await;
        match RodioMedia::open(tones) {
            Ok(media) => Box::new(media),
            Err(e) => {
                tracing::warn!(error = %e, "No audio output, continuing without sound");
                Box::new(HeadlessMedia::new())
            }
        }
    };
    player.attach_media(media);

    let (mut dashboard, mut ticks) =
        Dashboard::load(player, store, &assets, config.rotation.interval()).await;

    println!("{}", dashboard.status());
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ended_poll = tokio::time::interval(ENDED_POLL_INTERVAL);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match dashboard.handle_line(&line).await {
                    Response::Show(text) => println!("{text}"),
                    Response::Silent => {}
                    Response::Quit => break,
                }
            }
            Some(tick) = ticks.recv() => {
                if let Some(text) = dashboard.on_tick(tick) {
                    println!("{text}");
                }
            }
            _ = ended_poll.tick() => {
                if let Some(text) = dashboard.poll_media() {
                    println!("{text}");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    dashboard.shutdown();
    Ok(())
}

async fn open_store(config: &DashboardConfig) -> anyhow::Result<SqliteLocalStore> {
    if let Some(parent) = config
        .storage
        .database_path()
        .as_deref()
        .and_then(|p| p.parent())
        .filter(|p| !p.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent).await?;
    }

    let store = SqliteLocalStore::open(&config.storage.database_url).await?;
    tracing::debug!("Database connected");
    Ok(store)
}

async fn list_wins(config: &DashboardConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let Some(saved) = store.get_item(AFFIRMATIONS_STORE_KEY).await? else {
        println!(
            "No saved past successes. The dashboard loads {} from {}.",
            AFFIRMATIONS_RESOURCE, config.assets.root
        );
        return Ok(());
    };

    let wins: Vec<Affirmation> = serde_json::from_str(&saved)?;
    println!("Past successes ({}):", wins.len());
    for win in wins {
        println!("  {} - {}", win.id, win.text);
    }

    Ok(())
}

async fn reset_wins(config: &DashboardConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    if store.remove_item(AFFIRMATIONS_STORE_KEY).await? {
        println!("Saved past successes removed.");
    } else {
        println!("Nothing saved, nothing to reset.");
    }

    Ok(())
}
