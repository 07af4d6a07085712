use std::fs::File;
use std::io;
use std::path::PathBuf;

use folio::Runtime;
use log::{info, warn};
use pagedom::{DomError, Event, Viewport};
use portfolio::config::{ConfigError, PortfolioConfig};
use portfolio::summary::PageSummary;
use portfolio::{page, paths};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Debug, Error)]
enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build page: {0}")]
    Dom(#[from] DomError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_logging() {
    let Some(dir) = paths::log_dir() else {
        return;
    };
    let path = paths::rotate_logs(&dir, paths::MAX_OLD_LOGS).expect("Failed to rotate logs");
    let log_file = File::create(path).expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");
}

fn load_config() -> Result<PortfolioConfig, ConfigError> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(paths::config_file);
    match path {
        Some(path) => PortfolioConfig::load(&path),
        None => Ok(PortfolioConfig::default()),
    }
}

/// Forward JSON events from stdin, one per line, until EOF.
async fn read_events(events: mpsc::Sender<Event>) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<Event>(line) {
            Ok(event) => {
                if events.send(event).await.is_err() {
                    break;
                }
            }
            Err(err) => warn!("Skipping malformed event {:?}: {}", line, err),
        }
    }
    Ok(())
}

async fn run() -> Result<(), Error> {
    let config = load_config()?;

    info!("👋 Hello Developer!");
    info!("Like what you see? Let's work together!");

    let document = page::build(Viewport::default(), page::DEFAULT_HERO_TITLE)?;
    let mut runtime = Runtime::new(document).frame_interval(config.frame_interval());
    let handles = portfolio::install(&mut runtime, &config);

    let (tx, rx) = mpsc::channel(64);
    let reader = tokio::spawn(read_events(tx));
    runtime.run(rx).await;
    if let Ok(Err(err)) = reader.await {
        warn!("Event input failed: {}", err);
    }

    let summary = PageSummary::capture(&runtime, &handles);
    handles.trail.cancel();
    runtime.stop();

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
