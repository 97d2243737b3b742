//! socialfeed — preview a profile's post feed in the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌──────────┐  LoadMsg   ┌──────────┐  draw()  ┌──────────┐
//! │  load.rs │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (tokio)  │  (channel) │ (state)  │          │ (render) │
//! └──────────┘            └──────────┘          └──────────┘
//!                              ▲
//!                              │ handle_key_event()
//!                         ┌──────────┐
//!                         │ input.rs │
//!                         └──────────┘
//! ```
//!
//! * **`socialfeed` (lib)** — the fallback pipeline; see its crate docs.
//! * **`load`** — runs one feed load on the tokio runtime.
//! * **`app`** — owns UI state and implements `FeedRenderer`.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`plain`** — `--plain` output, no terminal setup.
//! * **`main`** — parse args, load config, set up logging and the terminal,
//!   and run the event loop.

mod app;
mod input;
mod load;
mod plain;
mod ui;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::App;
use load::LoadMsg;
use plain::PlainRenderer;
use socialfeed::{FallbackOrchestrator, FeedConfig, FeedController, FeedRenderer, Locale};

const USER_AGENT: &str = concat!("socialfeed/", env!("CARGO_PKG_VERSION"));

#[derive(Parser, Debug)]
#[command(name = "socialfeed", version, about = "Preview a social profile's post feed")]
struct Cli {
    /// Profile handle to load (overrides SOCIALFEED_HANDLE).
    handle: Option<String>,

    /// Print one line per post instead of opening the terminal UI.
    #[arg(long)]
    plain: bool,

    /// Write logs to this file while the terminal UI is open.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Label language: en or tr (overrides SOCIALFEED_LOCALE).
    #[arg(long)]
    locale: Option<Locale>,
}

// ---------------------------------------------------------------------------
// RAII terminal guard
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Plain mode logs to stderr.  The TUI owns the screen, so it only logs when
/// given a file.
fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,socialfeed=debug".into())
    };

    if cli.plain {
        tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    } else if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    // -- configuration -------------------------------------------------------
    let mut config = FeedConfig::from_env();
    if let Some(handle) = &cli.handle {
        config.handle = handle.clone();
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if !config.paid_api_enabled() {
        tracing::info!("SOCIALFEED_API_KEY not set; the paid API source will be skipped");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let controller = FeedController::new(
        FallbackOrchestrator::standard(&config, http),
        config.handle.clone(),
    );

    if cli.plain {
        let mut renderer = PlainRenderer::new(io::stdout().lock());
        runtime.block_on(controller.load_into(&mut renderer));
        return Ok(());
    }

    install_panic_hook();

    // -- start the one load for this session --------------------------------
    let rx = load::spawn(runtime.handle(), controller);

    // -- terminal setup (RAII: Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(config.handle.clone());

    // -- main event loop -----------------------------------------------------
    // ~10 fps: drain load messages, render, poll input.
    let tick_rate = Duration::from_millis(100);

    loop {
        while let Ok(msg) = rx.try_recv() {
            match msg {
                LoadMsg::Loaded(cards) => app.render(cards),
            }
        }

        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    Ok(())
}
