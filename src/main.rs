use staffboard::{
    api::Backend,
    config::load_config,
    pipeline,
    render::{roster_page, RosterTable},
    store::{store_dir, TokenStore},
};
use std::{fs, path::PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = init_logging();

    let env = load_config();
    let backend = Backend::new(env.base_url.clone());
    let store = TokenStore::default_store()?;

    match backend.status() {
        Ok(status) => tracing::info!(%status, "Server reachable"),
        Err(e) => tracing::warn!("Status probe failed: {e}"),
    }

    // A failed chain still produces a page, just with an empty table.
    let mut roster = RosterTable::new();
    if let Err(e) = pipeline::run(&backend, &store, &mut roster) {
        tracing::error!("Roster fetch failed: {e}");
    }

    let page = roster_page(&roster);
    if let Some(parent) = env.page_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&env.page_path, page)?;
    tracing::info!(
        path = %env.page_path.display(),
        rows = roster.row_count(),
        "Roster page written"
    );

    if env.open_browser {
        let url = format!("file://{}", fs::canonicalize(&env.page_path)?.display());
        if webbrowser::open(&url).is_err() {
            tracing::warn!("Failed to open browser automatically");
        }
    }

    Ok(())
}

fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let log_dir = store_dir().unwrap_or_else(|| PathBuf::from("."));
    let _ = fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(log_dir, "staffboard.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}
