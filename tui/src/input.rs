//! Input handling for the RestReveal TUI.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tracing::debug;

use restreveal_engine::{App, Phase};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Lines moved by PgUp/PgDn on the results screen.
const PAGE_LINES: u16 = 10;

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the frame
/// loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a blocked send in the input thread returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued events into `app`. Returns `true` when the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        if apply_event(app, &ev) {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` when the app should exit.
pub fn apply_event(app: &mut App, event: &Event) -> bool {
    let Event::Key(key) = event else {
        return app.should_quit();
    };
    // Handle press + repeat events (ignore releases)
    if key.kind == KeyEventKind::Release {
        return app.should_quit();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return true;
    }

    match app.phase() {
        Phase::Intro => handle_intro(app, *key),
        Phase::InProgress { .. } => handle_questionnaire(app, *key),
        Phase::Results => handle_results(app, *key),
    }
    app.should_quit()
}

fn handle_intro(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.start(),
        KeyCode::Char('e' | 'E') => app.toggle_edition(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        other => debug!(key = ?other, "unbound key on intro"),
    }
}

fn handle_questionnaire(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.focus_next(),
        KeyCode::Left | KeyCode::Char('h') => app.highlight_lower(),
        KeyCode::Right | KeyCode::Char('l') => app.highlight_higher(),
        KeyCode::Char(c @ '0'..='9') => {
            let value = c.to_digit(10).map_or(0, |d| d as u8);
            app.rate_focused(value);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.rate_highlighted(),
        KeyCode::Tab | KeyCode::Char('n') => app.request_next(),
        KeyCode::BackTab | KeyCode::Char('p') => app.request_previous(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        other => debug!(key = ?other, "unbound key in questionnaire"),
    }
}

fn handle_results(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r' | 'R') => app.restart(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(1),
        KeyCode::PageUp => app.scroll_results_up(PAGE_LINES),
        KeyCode::PageDown => app.scroll_results_down(PAGE_LINES),
        KeyCode::Home => app.scroll_results_up(u16::MAX),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        other => debug!(key = ?other, "unbound key on results"),
    }
}
