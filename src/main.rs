//! Contact Form TUI - an accessible contact form in the terminal
//!
//! Validates each field as focus leaves it, reports errors inline and
//! through live announcements, and simulates a submission with a
//! dismissible success acknowledgment.

mod app;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::FormConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Idle poll interval when no timer is pending sooner
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_form_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = FormConfig::load()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Wait no longer than the next timer deadline
fn poll_duration(next_deadline: Option<Instant>, now: Instant) -> Duration {
    next_deadline
        .map(|deadline| deadline.saturating_duration_since(now))
        .map_or(POLL_INTERVAL, |until| until.min(POLL_INTERVAL))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Fire due timers before drawing so the frame reflects them
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        let wait = poll_duration(app.form.next_deadline(), Instant::now());
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key, Instant::now()),
                Event::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_idle_interval() {
        assert_eq!(poll_duration(None, Instant::now()), POLL_INTERVAL);
    }

    #[test]
    fn test_poll_until_near_deadline() {
        let now = Instant::now();
        let wait = poll_duration(Some(now + Duration::from_millis(30)), now);
        assert_eq!(wait, Duration::from_millis(30));
    }

    #[test]
    fn test_poll_past_deadline_is_zero() {
        let now = Instant::now();
        assert_eq!(poll_duration(Some(now), now + Duration::from_millis(5)), Duration::ZERO);
    }

    #[test]
    fn test_poll_far_deadline_capped() {
        let now = Instant::now();
        let wait = poll_duration(Some(now + Duration::from_secs(5)), now);
        assert_eq!(wait, POLL_INTERVAL);
    }
}
