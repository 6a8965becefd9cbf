//! Twelve Snakes - terminal front-end
//!
//! Runs one session in the terminal: keyboard players steer with their key
//! groups, the arena is drawn with ratatui and the action log and tracing
//! output go to a log file so they do not fight the alternate screen.

use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction as LayoutDirection, Layout};
use ratatui::Terminal;

use twelve_snakes::core::config::GameConfig;
use twelve_snakes::core::error::Result;
use twelve_snakes::interface::SystemClock;
use twelve_snakes::rules::GameMode;
use twelve_snakes::simulation::Session;
use twelve_snakes::ui::terminal::{header, log_panel, score_table, ArenaView};
use twelve_snakes::ui::{Canvas, Command, GameUI, KeyboardInput, LogCategory, Screen};

/// Twelve-player snake arena in the terminal
#[derive(Parser, Debug)]
#[command(name = "twelve-snakes")]
#[command(about = "Multiplayer snake arena with five game modes")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Game mode
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Lives per player in battle-royale
    #[arg(long)]
    max_lives: Option<i32>,

    /// Score that ends a score-attack game
    #[arg(long)]
    max_score: Option<i32>,

    /// Session length in seconds for the timed modes
    #[arg(long)]
    max_time: Option<u64>,

    /// Extra frame waits per tick (0-20)
    #[arg(long)]
    slowdown: Option<u8>,

    /// Random seed for deterministic food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Where tracing output is written
    #[arg(long, default_value = "twelve-snakes.log")]
    log_file: PathBuf,

    /// Print the final standings as JSON on exit
    #[arg(long)]
    summary: bool,
}

type Term = Terminal<CrosstermBackend<Stdout>>;

fn build_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(max_lives) = args.max_lives {
        config.max_lives = max_lives;
    }
    if let Some(max_score) = args.max_score {
        config.max_score = max_score;
    }
    if let Some(max_time) = args.max_time {
        config.max_time_seconds = max_time;
    }
    if let Some(slowdown) = args.slowdown {
        config.slowdown = slowdown;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(path: &PathBuf) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("twelve_snakes=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = build_config(&args)?;
    init_logging(&args.log_file)?;

    tracing::info!("Twelve Snakes starting ({})", config.mode.label());

    let mut clock = SystemClock::new();
    let mut session = Session::new(config, &clock);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let outcome = run(&mut terminal, &mut session, &mut clock);

    // Restore the terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome?;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&session.standings())?);
    }
    tracing::info!("Twelve Snakes exiting after {} ticks", session.current_tick);
    Ok(())
}

fn run(terminal: &mut Term, session: &mut Session, clock: &mut SystemClock) -> Result<()> {
    let mut canvas = Canvas::new();
    let mut input = KeyboardInput::new();
    let mut ui = GameUI::new();
    let mut frames_waited: u64 = 0;

    session.redraw(&mut canvas);

    loop {
        let frame = Duration::from_millis(session.config.frame_millis);
        let frame_start = Instant::now();

        // Drain every key that arrives during this frame
        while let Some(remaining) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(remaining)? {
                break;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match input.handle_key(key.code) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::SpeedUp) => {
                    let slowdown = session.speed_up();
                    tracing::debug!("Slowdown {}", slowdown);
                }
                Some(Command::SlowDown) => {
                    let slowdown = session.slow_down();
                    tracing::debug!("Slowdown {}", slowdown);
                }
                Some(Command::ClearScores) if ui.screen == Screen::Scores => {
                    session.clear_scores();
                    ui.log(session.current_tick, "Scores cleared".to_string(), LogCategory::System);
                }
                Some(Command::ClearScores) => {}
                Some(Command::ToggleScores) if ui.screen == Screen::GameOver => {
                    session.reset(&*clock, &mut canvas);
                    canvas.clear();
                    session.redraw(&mut canvas);
                    ui.screen = Screen::Arena;
                    input.end_tick();
                }
                Some(Command::ToggleScores) => {
                    ui.toggle_scores();
                    // Mode timers do not run while the score view is up
                    if ui.is_paused() {
                        clock.pause();
                    } else {
                        clock.resume();
                    }
                }
                None => {}
            }
        }

        frames_waited += 1;
        if !ui.is_paused() && frames_waited > u64::from(session.config.slowdown) {
            frames_waited = 0;
            let events = session.step(&input, &*clock, &mut canvas)?;
            ui.record(&events);
            input.end_tick();
        }

        if ui.needs_redraw {
            canvas.clear();
            session.redraw(&mut canvas);
            ui.needs_redraw = false;
        }

        draw(terminal, session, &canvas, &ui, &*clock)?;
    }
}

fn draw(
    terminal: &mut Term,
    session: &Session,
    canvas: &Canvas,
    ui: &GameUI,
    clock: &SystemClock,
) -> Result<()> {
    let elapsed = session.elapsed_seconds(clock);
    let standings = session.standings();

    terminal.draw(|f| {
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(f.size());
        let body = Layout::default()
            .direction(LayoutDirection::Horizontal)
            .constraints([Constraint::Length(canvas.width() as u16 + 2), Constraint::Min(0)])
            .split(rows[1]);

        f.render_widget(
            header(
                session.config.mode,
                session.config.slowdown,
                elapsed,
                session.hazard.is_active(),
            ),
            rows[0],
        );

        match ui.screen {
            Screen::Arena => f.render_widget(ArenaView { canvas }, body[0]),
            Screen::Scores => f.render_widget(
                score_table(&standings, "Scores", "Enter to resume, z to clear scores"),
                body[0],
            ),
            Screen::GameOver => f.render_widget(
                score_table(&standings, "Game Over", "Enter for a new game, Esc to quit"),
                body[0],
            ),
        }

        let log_rows = body[1].height.saturating_sub(2) as usize;
        f.render_widget(log_panel(ui, log_rows), body[1]);
    })?;
    Ok(())
}
