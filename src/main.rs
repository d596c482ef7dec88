mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::LevelFilter;

use display::Screen;
use space_game::{Direction, GameConfig, GameModel};

/// Dodge and shoot your way through an asteroid field.
#[derive(Parser, Debug)]
#[command(name = "space_game", version)]
struct Cli {
    /// JSON file overriding the default game constants.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the spawn generator; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Where event log lines are written.
    #[arg(long, default_value = "space_game.log")]
    log_file: PathBuf,

    /// Milliseconds per simulation tick.
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,
}

// ── Input dispatch ────────────────────────────────────────────────────────────

enum Command {
    Move(Direction),
    Fire,
    TogglePause,
    Quit,
    Invalid,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Command {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Esc => Command::Quit,
        KeyCode::Char(c) => match c.to_ascii_uppercase() {
            'W' => Command::Move(Direction::Up),
            'S' => Command::Move(Direction::Down),
            'A' => Command::Move(Direction::Left),
            'D' => Command::Move(Direction::Right),
            'F' => Command::Fire,
            'P' => Command::TogglePause,
            'Q' => Command::Quit,
            _ => Command::Invalid,
        },
        _ => Command::Invalid,
    }
}

/// Apply one command. Returns `true` when the player asked to quit.
fn handle_command(model: &mut GameModel, screen: &mut Screen, command: Command) -> bool {
    match command {
        Command::Move(direction) => {
            if let Err(err) = model.move_ship(direction) {
                screen.push_log(err.to_string());
            }
        }
        Command::Fire => model.fire_bullet(),
        Command::TogglePause => {
            screen.paused = !screen.paused;
            if screen.paused {
                log::info!("Game paused.");
                screen.push_log("Game paused.");
            }
        }
        Command::Quit => return true,
        Command::Invalid => screen.push_log("Invalid input. Use W, A, S, D, F, or P."),
    }
    false
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Render, then advance the simulation, once per frame until the player quits.
fn game_loop<W: Write>(
    out: &mut W,
    model: &mut GameModel,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> std::io::Result<()> {
    let mut screen = Screen::default();
    let mut tick: u64 = 0;

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) = ev {
                let command = command_for(code, modifiers);
                // Only pause/quit get through while paused.
                if screen.paused && matches!(command, Command::Move(_) | Command::Fire) {
                    continue;
                }
                if handle_command(model, &mut screen, command) {
                    return Ok(());
                }
            }
        }

        display::render(out, model, &screen)?;

        if !screen.paused {
            tick += 1;
            model.tick(tick);
        }

        for event in model.drain_events() {
            screen.push_log(event.to_string());
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = simple_logging::log_to_file(&cli.log_file, LevelFilter::Info) {
        eprintln!("Could not open log file {}: {}", cli.log_file.display(), err);
    }

    let config = match &cli.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}: {}", path.display(), err);
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };

    let mut model = match cli.seed {
        Some(seed) => GameModel::with_seed(config, seed),
        None => GameModel::new(config),
    };
    log::info!("Game started (seed: {:?})", cli.seed);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let frame = Duration::from_millis(cli.tick_ms.max(1));
    let result = game_loop(&mut out, &mut model, &rx, frame);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let ship = model.ship();
    log::info!(
        "Game over: score {}, health {}, level {}",
        ship.score(),
        ship.health(),
        model.level()
    );
    result
}
