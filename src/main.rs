mod input;
mod ui;

use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use yaiba::minigame::{YaibaDifficulty, YaibaSession};
use yaiba::navigation::{Destination, Navigator};
use yaiba::utils::persistence::{yaiba_dir, FileStore, MemoryStore, ScoreStore, HIGH_SCORE_KEY};
use yaiba::utils::version_line;
use yaiba::Settings;

use input::InputResult;
use ui::yaiba_scene::CELL_PX_WIDTH;

/// How long to wait for input before redrawing.
const FRAME_POLL_MS: u64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    GameMenu,
    Yaiba,
}

impl Navigator for Screen {
    fn navigate(&mut self, destination: Destination) {
        tracing::info!(?destination, "navigating away from {:?}", self);
        *self = match destination {
            Destination::Home => Screen::Home,
            Destination::GameMenu => Screen::GameMenu,
        };
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "yaiba",
    about = "Wings no Yaiba - tap to fly between the pillars",
    disable_version_flag = true
)]
struct Cli {
    /// Starting level (easy, medium, hard). Overrides settings.json.
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<YaibaDifficulty>,

    /// Forget the stored high score before starting.
    #[arg(long)]
    reset_best: bool,

    /// Print version information and exit.
    #[arg(short = 'v', long)]
    version: bool,
}

fn parse_difficulty(value: &str) -> Result<YaibaDifficulty, String> {
    YaibaDifficulty::from_key(value)
        .ok_or_else(|| format!("unknown difficulty '{}' (expected easy, medium or hard)", value))
}

/// Log to ~/.yaiba/yaiba.log; stdout belongs to the TUI.
fn init_logging() {
    let Ok(dir) = yaiba_dir() else {
        return;
    };
    let Ok(file) = File::create(dir.join("yaiba.log")) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn open_store() -> Box<dyn ScoreStore> {
    match FileStore::open_default() {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "using score storage");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "no durable storage, high score will not survive restart");
            Box::new(MemoryStore::new())
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", version_line());
        return Ok(());
    }

    init_logging();
    tracing::info!("{}", version_line());

    let settings = Settings::load_or_default();
    let profiles = settings.profile_table().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to built-in difficulty tuning");
        Default::default()
    });
    let difficulty = cli.difficulty.unwrap_or(settings.difficulty);

    let mut store = open_store();
    if cli.reset_best {
        store.remove(HIGH_SCORE_KEY)?;
        tracing::info!("best score cleared");
    }

    let mut session = YaibaSession::new(store, difficulty, profiles);
    let mut screen = Screen::Yaiba;
    let mut rng = rand::thread_rng();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut screen, &mut session, &mut rng);

    restore_terminal();
    terminal.show_cursor()?;
    result
}

fn run<S: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    screen: &mut Screen,
    session: &mut YaibaSession<S>,
    rng: &mut impl rand::Rng,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let area = terminal.size()?;
        session.set_viewport_width(u32::from(area.width) * CELL_PX_WIDTH);

        terminal.draw(|frame| ui::draw(frame, *screen, session.game()))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(key, screen, session, rng) == InputResult::Quit {
                        tracing::info!(best_score = session.game().best_score, "quitting");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(mouse, area, *screen, session, rng),
                _ => {}
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        // Only the game screen ticks; entering it from the menu remounts the round.
        if *screen == Screen::Yaiba {
            session.tick(dt_ms, rng);
        }
    }
}
