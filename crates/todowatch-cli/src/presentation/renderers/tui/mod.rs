mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use todowatch_runtime::{PollEngine, PollEvent};
use todowatch_types::Filter;

use app::AppState;

/// Static facts about the watched endpoint, shown in the header/footer
pub struct WatchContext {
    pub provider_id: String,
    pub endpoint: String,
    pub interval: Duration,
}

pub struct TuiWatchView;

impl TuiWatchView {
    pub fn run(
        engine: Arc<Mutex<PollEngine>>,
        events: Receiver<PollEvent>,
        context: &WatchContext,
    ) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let mut app_state =
            AppState::new(context.provider_id.clone(), context.endpoint.clone());
        app_state.add_message(format!(
            "👀 Watching {} every {} ms",
            context.endpoint,
            context.interval.as_millis()
        ));

        let mut should_quit = false;

        let tick_rate = Duration::from_millis(250);
        let mut last_tick = Instant::now();

        while !should_quit {
            while let Ok(poll_event) = events.try_recv() {
                match poll_event {
                    PollEvent::Started => {}
                    PollEvent::Updated { count } => {
                        app_state.poll_count += 1;
                        app_state.add_message(format!("✨ Refreshed: {} item(s)", count));
                    }
                    PollEvent::Failed(message) => {
                        app_state.failure_count += 1;
                        app_state.add_message(format!("❌ Poll failed: {}", message));
                    }
                }
            }

            {
                let engine = lock(&engine);
                app_state.apply_snapshot(&engine.snapshot());
            }

            terminal.draw(|f| {
                ui::draw(f, &mut app_state);
            })?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            should_quit = true;
                        }
                        KeyCode::Char('a') => {
                            lock(&engine).set_filter(Filter::All);
                        }
                        KeyCode::Char('c') => {
                            lock(&engine).set_filter(Filter::Completed);
                        }
                        KeyCode::Char('i') => {
                            lock(&engine).set_filter(Filter::Incomplete);
                        }
                        KeyCode::Char('p') => {
                            let enabled = lock(&engine).toggle_auto_refresh(Instant::now());
                            app_state.add_message(if enabled {
                                "▶ Auto-refresh resumed".to_string()
                            } else {
                                "⏸ Auto-refresh paused".to_string()
                            });
                        }
                        KeyCode::Char('r') => {
                            lock(&engine).request_refresh();
                        }
                        _ => {}
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}

fn lock(engine: &Arc<Mutex<PollEngine>>) -> std::sync::MutexGuard<'_, PollEngine> {
    match engine.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
