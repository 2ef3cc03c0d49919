use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use flappy::build_info;
use flappy::input::{map_key, HostAction, KeyState};
use flappy::ui::render_game;
use flappy::{AppConfig, Game, RandomSource, UniformSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

struct Options {
    seed: Option<u64>,
    config_dir: PathBuf,
}

fn print_help() {
    println!("Flappy - terminal arcade game\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --seed <n>        Seed pipe generation for a repeatable run");
    println!("  --config <dir>    Config directory (default: config)");
    println!("  --version         Show version information");
    println!("  --help            Show this help message\n");
    println!("Tuning can also be set with FLAPPY_GAME__<FIELD>, e.g. FLAPPY_GAME__GRAVITY=0.5");
}

fn parse_args() -> Options {
    let mut options = Options {
        seed: None,
        config_dir: PathBuf::from("config"),
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match args.next().and_then(|s| s.parse().ok()) {
                Some(seed) => options.seed = Some(seed),
                None => {
                    eprintln!("--seed expects an unsigned integer");
                    std::process::exit(1);
                }
            },
            "--config" => match args.next() {
                Some(dir) => options.config_dir = PathBuf::from(dir),
                None => {
                    eprintln!("--config expects a directory");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'flappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }
    options
}

fn main() -> io::Result<()> {
    let options = parse_args();

    // stderr only, so `flappy 2> flappy.log` keeps the screen clean
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load_from(&options.config_dir).unwrap_or_else(|e| {
        log::warn!("{}. Using defaults.", e);
        AppConfig::default()
    });
    let source = match options.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    log::info!(
        "starting {}x{} seed={:?} frame={}ms",
        config.game.screen_width,
        config.game.screen_height,
        options.seed,
        config.window.frame_ms
    );
    let mut game = Game::new(config.game.clone(), source);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(cursor::Hide)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut game, &config);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.backend_mut().execute(cursor::Show)?;

    match &result {
        Ok(()) => log::info!("quit at frame {} with score {}", game.frame, game.score),
        Err(e) => log::error!("terminal error: {}", e),
    }
    result
}

fn run<S: UniformSource>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut Game<S>,
    config: &AppConfig,
) -> io::Result<()> {
    let frame_duration = Duration::from_millis(config.window.frame_ms);

    loop {
        let frame_start = Instant::now();

        // Drain input without blocking the frame
        let mut keys = KeyState::default();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    HostAction::Jump => keys.jump = true,
                    HostAction::Quit => return Ok(()),
                    HostAction::None => {}
                }
            }
        }

        game.update(&keys);

        terminal.draw(|frame| {
            let area = frame.size();
            render_game(frame, area, game, &config.window.title);
        })?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}
