use super::{render, App};
use crate::Result;
use anyhow::Context;
use ratatui::crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

static SCREEN_TAKEN: AtomicBool = AtomicBool::new(false);

/// Whether the terminal UI currently owns the screen. Log output written to the terminal while
/// this is true would be drawn over the UI.
pub fn screen_taken() -> bool {
    SCREEN_TAKEN.load(Ordering::Relaxed)
}

/// Marks the screen as taken for as long as it is alive.
struct ScreenGuard;

impl ScreenGuard {
    fn take() -> Self {
        SCREEN_TAKEN.store(true, Ordering::Relaxed);
        ScreenGuard
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        SCREEN_TAKEN.store(false, Ordering::Relaxed);
    }
}

/// Takes over the terminal and runs `app` until the user quits or a save fails. The terminal is
/// restored in both cases.
pub async fn run(mut app: App) -> Result<App> {
    debug!("Starting the terminal UI");
    let guard = ScreenGuard::take();
    let result = match ratatui::try_init().context("Unable to initialize the terminal") {
        Ok(mut terminal) => {
            let result = event_loop(&mut terminal, &mut app).await;
            ratatui::restore();
            result
        }
        Err(e) => Err(e),
    };
    drop(guard);
    debug!("Terminal UI stopped");
    result.map(|_| app)
}

async fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.quit() {
        terminal
            .draw(|frame| render::draw(frame, app))
            .context("Unable to draw the terminal UI")?;
        // The runtime has a single thread and nothing else is scheduled on it, so waiting for
        // input here blocks nothing.
        if let Event::Key(key) = event::read().context("Unable to read terminal input")? {
            app.handle_key(key).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_guard_mutes_while_alive() {
        assert!(!screen_taken());
        let guard = ScreenGuard::take();
        assert!(screen_taken());
        drop(guard);
        assert!(!screen_taken());
    }
}
