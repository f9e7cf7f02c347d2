//! RestReveal CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`restreveal_engine`] (application state) and
//! [`restreveal_tui`] (rendering), providing RAII-based terminal management
//! with guaranteed cleanup.
//!
//! ```text
//! main() -> Settings::resolve -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! A fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`restreveal_tui::InputPump`])
//! 3. Advance timers and pending transitions (`app.tick()`)
//! 4. Render frame

use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    iter,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use restreveal_engine::{App, RestRevealConfig, Settings};
use restreveal_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let target = LogTarget::open(&log_file_candidates());

    let Some((log_path, file)) = target.file else {
        // No file: stay silent rather than paint over the alternate screen.
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .with(env_filter)
        .init();

    tracing::info!(
        path = %log_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "restreveal starting"
    );
    for skipped in target.skipped {
        tracing::warn!("{skipped}");
    }
}

/// Where log output goes, plus the candidates that were tried and refused.
struct LogTarget {
    file: Option<(PathBuf, File)>,
    skipped: Vec<String>,
}

impl LogTarget {
    fn open(candidates: &[PathBuf]) -> Self {
        let mut skipped = Vec::new();

        for candidate in candidates {
            if let Some(dir) = candidate.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                skipped.push(format!("log dir {} unavailable: {err}", dir.display()));
                continue;
            }

            match OpenOptions::new().create(true).append(true).open(candidate) {
                Ok(file) => {
                    return Self {
                        file: Some((candidate.clone(), file)),
                        skipped,
                    };
                }
                Err(err) => {
                    skipped.push(format!(
                        "log file {} unavailable: {err}",
                        candidate.display()
                    ));
                }
            }
        }

        Self {
            file: None,
            skipped,
        }
    }
}

fn log_file_candidates() -> Vec<PathBuf> {
    let fallback = PathBuf::from(".restreveal").join("logs").join("restreveal.log");

    RestRevealConfig::path()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join("logs").join("restreveal.log"))
        .into_iter()
        .chain(iter::once(fallback))
        .collect()
}

fn load_settings() -> Settings {
    let config = match RestRevealConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Using default settings: {err}");
            None
        }
    };
    Settings::resolve(config.as_ref())
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are restored on drop, so the terminal
/// stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let mut app = App::new(load_settings());

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = result {
        tracing::error!("Exited with error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend + Write,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
