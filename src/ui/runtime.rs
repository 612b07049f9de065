use crate::config::Config;
use crate::roster::HttpRosterClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::toast::ToastCenter;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

/// Run the TUI until the user quits.
///
/// Remote intents are awaited on a current-thread runtime before the next
/// key is read, so at most one request is in flight at a time. Failures are
/// already reported through the toast center, so their results are dropped.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = HttpRosterClient::new(&config.api.base_url)?;
    let endpoint = client.collection().to_string();
    let toasts = ToastCenter::new(
        Duration::from_secs(config.ui.toast_seconds),
        config.ui.max_toasts,
    );
    let mut app = App::new(client, toasts, endpoint);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    terminal.draw(|frame| draw(frame, &app))?;
    let _ = runtime.block_on(app.load());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, key) {
                InputAction::None => {}
                InputAction::Submit => {
                    let _ = runtime.block_on(app.submit());
                }
                InputAction::Delete(id) => {
                    let _ = runtime.block_on(app.delete(&id));
                }
            },
            Ok(AppEvent::Paste(text)) => app.paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
