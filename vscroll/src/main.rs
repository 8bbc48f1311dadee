//! vscroll: scroll through very long lists in the terminal.
//!
//! Entry point for the `vscroll` binary. Items come from the file named by the
//! first argument, one per line, or are generated filler text. Only enough
//! item nodes to cover the list panel exist at any time; `vscroll-core`
//! recycles them as the list scrolls.
//!
//! # Startup sequence
//!
//! 1. Load config and install logging. Both are safe before terminal init.
//! 2. Load items. An empty list is rejected here, before the terminal is touched.
//! 3. `install_panic_hook()` restores the terminal before the panic message prints.
//! 4. `register_sigterm()` returns `Arc<AtomicBool>` polled in the event loop.
//! 5. `init_tui()` enters alternate screen and enables raw mode.
//! 6. Create event channel and `spawn_event_task()`.
//!
//! The list engine itself is built on the first render, once the list panel's
//! height is known.
//!
//! # Safety
//!
//! `restore_tui()` is called after the event loop exits (normal quit, SIGTERM,
//! or channel close). The loop never uses `?`; a `terminal.draw()` error is
//! carried out as the loop's value so `restore_tui()` is still reached.

mod app;
mod config;
mod content;
mod event;
mod logging;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use tracing::info;
use vscroll_core::ConfigurationError;

use ui::keybindings::{handle_key, handle_mouse, KeyAction};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Step 1: config + logging.
    let config = config::load(&config::config_path());
    logging::init(&config);
    let theme = theme::Theme::from_name(&config.theme);

    // Step 2: items.
    let items = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => content::load_items(&path)?,
        None => content::sample_items(config.item_count),
    };
    if items.is_empty() {
        return Err(std::io::Error::other(ConfigurationError::EmptyList));
    }
    info!(items = items.len(), item_rows = config.item_rows, "starting");
    let mut state = app::AppState::new(Arc::from(items), config.item_rows);

    // Step 3: panic hook installed first; the innermost hook restores terminal.
    tui::install_panic_hook();

    // Step 4: SIGTERM flag, polled in the 50ms heartbeat arm below.
    let term_flag = tui::register_sigterm()?;

    // Step 5: enter alternate screen and raw mode.
    let mut terminal = tui::init_tui()?;

    // Step 6: create event channel and spawn the background event task.
    let (tx, mut rx) = event::channel();
    event::spawn_event_task(tx);

    // Event loop. Exits only via `break`, never via `?`.
    let outcome: std::io::Result<()> = 'event_loop: loop {
        tokio::select! {
            // Heartbeat: SIGTERM is checked at least every 50ms even when idle.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop Ok(());
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event::AppEvent::Render) => {
                        // Exactly one draw() call per Render event, never elsewhere.
                        if let Err(e) = terminal.draw(|frame| ui::render(frame, &mut state, &theme)) {
                            break 'event_loop Err(e);
                        }
                    }
                    Some(event::AppEvent::Key(key)) => {
                        if handle_key(key, &mut state) == KeyAction::Quit {
                            break 'event_loop Ok(());
                        }
                    }
                    Some(event::AppEvent::Mouse(mouse)) => {
                        handle_mouse(mouse, &mut state);
                    }
                    Some(event::AppEvent::Resize(_, _)) => {
                        // The panel height changes with the terminal; the next
                        // render rebuilds the engine for it.
                        state.invalidate_viewport();
                    }
                    Some(event::AppEvent::Quit) | None => break 'event_loop Ok(()),
                }
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop Ok(());
                }
            }
        }
    };

    // Restore the terminal at the single exit point of the loop.
    tui::restore_tui()?;
    info!("exiting");
    outcome
}
