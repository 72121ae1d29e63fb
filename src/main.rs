//! Pinloader - Pinterest media downloader
//!
//! A desktop front end for the Pinterest extraction backend: paste a pin
//! link, pick a quality and save the media.

use anyhow::{Context, Result};
use clap::Parser;
use iced::Application;
use pinloader::api::{ApiBase, ApiClient};
use pinloader::controller::{handle_download, show_result, UiController};
use pinloader::database::{initialize_database, DatabaseManager};
use pinloader::gui::{self, AppFlags};
use pinloader::history;
use pinloader::preferences::ThemePreference;
use pinloader::utils::{self, AppSettings};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Server origin to resolve the API base from (overrides the saved setting)
    #[arg(long)]
    server: Option<String>,

    /// Use this API base as is, skipping host-based resolution
    #[arg(long)]
    api_base: Option<String>,

    /// Extract one pin link, print its download links and exit
    #[arg(long)]
    extract: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Single runtime for the database pool, kept alive for the app lifetime
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;

    let db_path = utils::get_database_path();
    let db_path_str = db_path.to_string_lossy().to_string();
    let db_pool = rt
        .block_on(initialize_database(&db_path_str))
        .with_context(|| format!("Failed to initialize database at {}", db_path_str))?;
    let store = Arc::new(DatabaseManager::new(db_pool));

    let mut settings = rt.block_on(AppSettings::load(store.as_ref())).unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {}", e);
        AppSettings::default()
    });
    if let Some(server) = args.server {
        settings.server_url = Some(server);
    }

    let api_base_locked = args.api_base.is_some();
    let base = match args.api_base {
        Some(base) => ApiBase::parse(&base).with_context(|| {
            format!("--api-base must be an absolute http(s) URL, got '{}'", base)
        })?,
        None => ApiBase::resolve(settings.server_url.as_deref())?,
    };
    info!("Using API base {}", base);
    let api = ApiClient::new(base)?;

    if let Some(url) = args.extract {
        return rt.block_on(extract_cli(&api, store.as_ref(), &settings, &url));
    }

    let theme = rt.block_on(ThemePreference::load(store.as_ref())).unwrap_or_else(|e| {
        warn!("Failed to load theme preference: {}", e);
        ThemePreference::default()
    });
    let history = rt.block_on(history::load_history(store.as_ref())).unwrap_or_else(|e| {
        warn!("Failed to load download history: {}", e);
        Vec::new()
    });

    let flags = AppFlags {
        store,
        runtime: Arc::new(rt),
        api,
        api_base_locked,
        settings,
        theme,
        history,
    };

    // Start the GUI application (synchronous entrypoint)
    gui::PinloaderApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(960.0, 680.0),
            min_size: Some(iced::Size::new(800.0, 540.0)),
            icon: gui::icon::load_icon(),
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(flags)
    })?;

    Ok(())
}

/// Headless extraction: same flow as the Download button, printed to stdout
async fn extract_cli(
    api: &ApiClient,
    store: &DatabaseManager,
    settings: &AppSettings,
    url: &str,
) -> Result<()> {
    let mut controller = UiController::new();
    handle_download(&mut controller, api, store, url).await?;

    let Some(result) = controller.result() else {
        return Ok(());
    };
    let referer = if settings.forward_referer {
        controller.source_url()
    } else {
        None
    };
    let view = show_result(api.base(), result, referer)?;

    println!("{}", view.title);
    for action in &view.actions {
        println!("  [{}] {}  {}", action.ext_badge, action.quality_label, action.href);
    }
    Ok(())
}
