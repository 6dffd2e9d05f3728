//! Application main loop
//!
//! Roughly one iteration per 100ms (sooner when input arrives). Each
//! iteration: housekeeping tick, draw, drain settled backend tasks,
//! drain queued back/forward navigations, then poll for input. Async
//! work never blocks the loop; it lands as messages on a later
//! iteration.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run the main loop until the app quits
pub async fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. Expire notices and undo entries
        app.tick(Utc::now());

        // 2. Draw
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. Quit check
        if app.should_quit {
            break;
        }

        // 4. Land settled backend tasks
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg, backend);
        }

        // 5. Replay back/forward navigations queued by the location
        while let Some(state) = app.url.take_navigation() {
            update::replay_link(app, state);
        }

        // 6. Poll input (100ms timeout paces the loop)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, backend);
        }
    }

    Ok(())
}
