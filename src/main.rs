mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use display::Viewport;
use volley_shooter::config::GameConfig;
use volley_shooter::constants::{FALLBACK_RENDER_HEIGHT, FALLBACK_RENDER_WIDTH};
use volley_shooter::entities::ShellEvent;
use volley_shooter::input::Key;
use volley_shooter::session::{GameOver, Session};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS
const LOG_FILE: &str = "volley_shooter.log";

/// Terminal key → game key.  Unbound keys map to `None` but still count as a
/// key event for the contact check.
fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Logs go to a file: the terminal belongs to the renderer.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match File::create(LOG_FILE) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        Err(e) => eprintln!("could not open {LOG_FILE}: {e}; logging disabled"),
    }
}

fn log_events(events: Vec<ShellEvent>) {
    for ev in events {
        match ev {
            ShellEvent::ScoreChanged(score) => tracing::debug!(score, "score changed"),
            ShellEvent::GameOver { score } => tracing::info!(score, "game over published"),
            other => tracing::trace!(event = ?other, "shell event"),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns when the user quits.
///
/// Each frame drains pending key events (each key-down is one action),
/// advances the session by the real elapsed time, then redraws.  On game over
/// the notice blocks until a key arrives and the session restarts.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session<StdRng>,
    view: &Viewport,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    session.start();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let mut ended: Option<GameOver> = None;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Release {
                continue;
            }
            if is_quit(&code, modifiers) {
                return Ok(());
            }
            if let Some(over) = session.handle_key(map_key(&code)) {
                ended = Some(over);
                break;
            }
        }

        // ── Advance simulated time ────────────────────────────────────────────
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis() as u64;
        last = now;
        if ended.is_none() {
            ended = session.advance(elapsed);
        }

        log_events(session.drain_events());
        display::render(out, view, session.state())?;

        if let Some(over) = ended {
            display::draw_game_over(out, view, over.score)?;
            if wait_for_key(rx)? {
                return Ok(());
            }
            session.restart();
            log_events(session.drain_events());
            last = Instant::now();
            continue;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

/// Block until a key press.  Returns `true` if it was a quit key.
fn wait_for_key(rx: &mpsc::Receiver<Event>) -> std::io::Result<bool> {
    // Drop keys that were already queued when the notice went up.
    while rx.try_recv().is_ok() {}
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind, modifiers, .. }))
                if kind != KeyEventKind::Release =>
            {
                return Ok(is_quit(&code, modifiers));
            }
            Ok(_) => {}
            Err(_) => return Ok(true),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    let config = GameConfig::load();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, config, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    config: GameConfig,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let view = match terminal::size() {
        Ok((cols, rows)) => Viewport::new(cols, rows, config.cell_width_px, config.cell_height_px),
        Err(e) => {
            tracing::warn!(error = %e, "terminal size unavailable; using fallback viewport");
            Viewport::from_render_size(
                FALLBACK_RENDER_WIDTH,
                FALLBACK_RENDER_HEIGHT,
                config.cell_width_px,
                config.cell_height_px,
            )
        }
    };
    let (width, height) = view.render_size();

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config, width, height, rng);
    game_loop(out, &mut session, &view, rx)
}
