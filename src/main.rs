//! Terminal minesweeper runner (default binary).
//!
//! The board is drawn on a software canvas every frame and presented with
//! crossterm; mouse clicks on the canvas reveal cells. Quit with `q`, `Esc`
//! or `Ctrl-C`.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use minesweeper::config::RunConfig;
use minesweeper::core::{BoardConfig, FrameTicker, GameSession};
use minesweeper::input::{is_dismiss, map_mouse_event, should_quit};
use minesweeper::term::{fit_pixel_ratio, FrameBuffer, GameView, TerminalRenderer, Viewport};
use minesweeper::types::{Outcome, FRAME_MS};

fn main() -> Result<()> {
    let run_config = RunConfig::from_env();
    init_logging(&run_config)?;

    let board = BoardConfig::default();
    board.validate().context("invalid board configuration")?;

    let viewport = TerminalRenderer::viewport()?;
    let ratio =
        fit_pixel_ratio(viewport, &board).context("cannot fit the board in this terminal")?;
    let mut rng = run_config.bomb_rng();
    let session = GameSession::new(&board, ratio, &mut rng)?;
    let view = GameView::new(&board, ratio)?;
    tracing::info!(ratio, width = viewport.width, height = viewport.height, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, view, viewport);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install the log subscriber if a log file was requested.
///
/// The game owns the terminal, so logs never go to stdout.
fn init_logging(config: &RunConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    mut session: GameSession,
    mut view: GameView,
    mut viewport: Viewport,
) -> Result<()> {
    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let mut ticker = FrameTicker::new(FRAME_MS);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    // End-of-game message box; blocks the board until dismissed.
    let mut message: Option<Outcome> = None;

    loop {
        // Input, waiting at most until the next frame is due.
        let timeout = Duration::from_millis(ticker.remaining_ms(now_ms()));
        if event::poll(timeout)? {
            let ev = event::read()?;

            if let Event::Key(key) = ev {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
            }

            if let Event::Resize(w, h) = ev {
                viewport = Viewport::new(w, h);
                term.invalidate();
            } else if message.is_some() {
                if is_dismiss(&ev) {
                    message = None;
                }
            } else if let Event::Mouse(mouse) = ev {
                if let Some(pointer) = map_mouse_event(mouse, &view.layout(viewport)) {
                    session.handle_pointer(pointer, now_ms());
                }
            }
        }

        // Deferred notification.
        if let Some(outcome) = session.poll_notification(now_ms()) {
            message = Some(outcome);
        }

        // Frame.
        if ticker.tick(now_ms()) {
            view.render_into(session.grid(), session.status(), message, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
