//! Swipe row playground.
//!
//! Two demo rows that reveal actions when dragged left with the mouse.
//! Run with `RUST_LOG=swipe_row=debug` to trace drag decisions on stderr.

mod app;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use swipe_row::config::PlaygroundConfig;
use swipe_row::ui::{layout::PlaygroundLayout, theme::Theme};
use swipe_row::SwipeRow;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};

const HINT: &str = "drag a row left: reveal actions | tab: focus | enter: activate | q: quit";

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Swipeable row playground")]
struct Cli {
    /// px per terminal column (an 80px action is 80 / this columns wide).
    #[arg(long = "cell-width")]
    cell_width: Option<f64>,

    /// Elastic bleed past the drag bounds (0 = hard stop, 1 = free).
    #[arg(long)]
    elastic: Option<f64>,

    /// Frame interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,
}

impl Cli {
    /// Flags override whatever the config file said.
    fn apply(&self, config: &mut PlaygroundConfig) {
        if let Some(w) = self.cell_width {
            config.cell_width_px = w.clamp(1.0, 64.0);
        }
        if let Some(e) = self.elastic {
            config.drag_elastic = e.clamp(0.0, 1.0);
        }
        if let Some(t) = self.tick_ms {
            config.tick_ms = t.clamp(5, 200);
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the TUI
        .init();

    let cli = Cli::parse();
    let mut config = PlaygroundConfig::load();
    cli.apply(&mut config);
    tracing::debug!(?config, "playground config");

    let tick_rate = Duration::from_millis(config.tick_ms);
    let mut state = AppState::new(config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stdout_handle = stdout();
    execute!(
        stdout_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(tick_rate);
    let mut last_frame = Instant::now();

    // ── event loop ────────────────────────────────────────────
    loop {
        let now = Instant::now();
        handler::advance(&mut state, now.duration_since(last_frame));
        last_frame = now;
        state.drain_notices();

        terminal.draw(|frame| {
            state.terminal_area = frame.area();
            let layout = PlaygroundLayout::from_area(frame.area(), state.rows.len());

            let block = Block::default()
                .title(" swipe-row playground ")
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            frame.render_widget(block, layout.list_area);

            let cell_width = state.config.cell_width_px;
            let focus = state.focus;
            for (idx, (row, area)) in state.rows.iter_mut().zip(&layout.rows).enumerate() {
                let focused = focus.filter(|f| f.row == idx).map(|f| f.button);
                let widget = SwipeRow::from_props(Line::from(row.content.as_str()), row.props.clone())
                    .cell_width(cell_width)
                    .focused(focused);
                frame.render_stateful_widget(widget, *area, &mut row.state);
            }

            let status_text = state.status_message.as_deref().unwrap_or(HINT);
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(&mut state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
            AppEvent::PointerLost => handler::release_drag(&mut state),
            AppEvent::Resize(_, _) | AppEvent::Tick => {}
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    Ok(())
}
