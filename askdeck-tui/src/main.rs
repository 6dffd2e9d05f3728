//! askdeck entry point

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use askdeck_core::types::QueryParams;

use backend::{config_dir, AppConfig, Backend, HistoryLocation};
use message::{AppMessage, ListMessage};
use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::load();
    view::theme::set_theme(config.theme);

    // An `askdeck://inbox?...` argument seeds the address bar
    let location = Arc::new(match deep_link_params(std::env::args().nth(1)) {
        Some(params) => HistoryLocation::with_initial(params),
        None => HistoryLocation::new(),
    });

    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = Backend::new(&config, Arc::clone(&location), tx);

    let mut terminal = init_terminal()?;
    let width = terminal.size().map_or(0, |s| s.width);
    let mut app = model::App::new(location, width);

    // Initial data: pins and the first page
    backend.spawn_load_pins();
    update::update(
        &mut app,
        AppMessage::List(ListMessage::Refresh),
        &backend,
    );

    let result = app::run(&mut terminal, &mut app, &backend, &mut rx).await;

    restore_terminal(&mut terminal)?;

    result
}

/// Logs go to a file; the alternate screen owns the terminal
fn init_logging() {
    let dir = config_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    if let Ok(file) = std::fs::File::create(dir.join("askdeck.log")) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

/// Query parameters of a deep-link argument, if one was given
fn deep_link_params(arg: Option<String>) -> Option<QueryParams> {
    let arg = arg?;
    let (_, query) = arg.split_once('?')?;
    let params = QueryParams::parse(query);
    (!params.is_empty()).then_some(params)
}
