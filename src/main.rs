use std::fs::File;
use std::io::{self, Stdout, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, terminal,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kaagtali::audio::{Cue, Speaker};
use kaagtali::render::{self, Canvas};
use kaagtali::{AppError, GameSession, Input, SceneView, Tuning};

#[derive(Parser)]
#[command(name = "kaagtali", version)]
#[command(about = "Guide Kaagtali the crow through the silver gaps")]
struct Cli {
    /// Seed for obstacle heights (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation and display rate
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Disable sound
    #[arg(long)]
    mute: bool,

    /// Write logs to this file, filtered by RUST_LOG (default "info")
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

// ── Terminal ────────────────────────────────────────────────────────────────

/// Raw mode and the alternate screen for as long as it lives.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        )?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

enum Command {
    Game(Input),
    Quit,
}

fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k') => Some(Command::Game(Input::Flap)),
        KeyCode::Char('r') | KeyCode::Enter => Some(Command::Game(Input::Restart)),
        _ => None,
    }
}

// ── Main ────────────────────────────────────────────────────────────────────

fn init_logging(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn run(cli: Cli) -> Result<(), AppError> {
    if cli.fps == 0 {
        return Err(AppError::ZeroFps);
    }
    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    let mut session = GameSession::new(Tuning::default())?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, fps = cli.fps, mute = cli.mute, "kaagtali starting");

    let speaker = if cli.mute {
        Speaker::muted()
    } else {
        Speaker::open_or_silent()
    };

    let mut term = TerminalGuard::enter()?;
    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(cols, rows);

    let frame_dur = Duration::from_secs(1) / cli.fps;

    loop {
        let frame_start = Instant::now();

        // Input
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match command_for(key) {
                    Some(Command::Quit) => {
                        info!(best = session.best(), "quit");
                        return Ok(());
                    }
                    Some(Command::Game(input)) => {
                        let response = session.handle_input(input);
                        if let Some(cue) = Cue::for_response(response) {
                            speaker.play(cue);
                        }
                    }
                    None => {}
                },
                Event::Resize(c, r) => canvas.resize(c, r),
                _ => {}
            }
        }

        // Update
        let report = session.step(&mut rng);
        for cue in Cue::for_tick(&report) {
            speaker.play(cue);
        }

        // Render
        render::paint(&mut canvas, &SceneView::capture(&session));
        canvas.flush(&mut term.out)?;

        // Frame pacing
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("kaagtali: {e}");
        std::process::exit(1);
    }
}
