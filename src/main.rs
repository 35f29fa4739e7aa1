use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Result;
use folio_core::{Config, PortfolioContent};

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use tui::{EventHandler, TICK_RATE};

/// The terminal belongs to the UI, so logs go to `folio.log` next to the
/// config file.
fn init_logging() -> Result<()> {
    let log_dir = Config::get_config_dir()?;
    fs::create_dir_all(&log_dir)?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("folio.log"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    tracing::info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    // Deep link, e.g. `folio /certificates`
    let initial_path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read config, using defaults");
        Config::new()
    });
    tracing::info!(endpoint = %config.endpoint_url, locale = config.default_locale.as_str(), "configuration loaded");

    let content = PortfolioContent::load(config.content_path.as_deref()).await?;
    let mut app = App::new(&config, content, &initial_path)?;

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new(TICK_RATE);

    let result = async {
        while !app.should_quit {
            terminal.draw(|frame| ui::render(&mut app, frame))?;
            match events.next().await {
                Some(event) => handler::handle_event(&mut app, event).await?,
                None => break,
            }
        }
        anyhow::Ok(())
    }
    .await;

    tui::restore()?;
    tracing::info!("folio closed");
    result
}
