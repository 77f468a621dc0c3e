use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyflap::audio::NullSink;
use skyflap::core::constants::LOG_FILE;
use skyflap::input::{is_force_quit, map_key};
use skyflap::utils::build_info;
use skyflap::utils::persistence::data_path;
use skyflap::{App, GameConfig, PlayerPrefs, SceneName};
use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyflap - Terminal Flappy Bird\n");
                println!("Usage: skyflap [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyflap --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = match GameConfig::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config)?;

    let settings = PlayerPrefs::load_default()?;
    let mut app = App::new(config, NullSink, Box::new(settings))?;
    app.start(SceneName::MainMenu)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = app.shutdown() {
        log::error!("Failed to save settings on exit: {}", e);
    }
    log::info!("Skyflap exiting");
    result
}

/// Log to ~/.skyflap/skyflap.log; stderr belongs to the terminal UI.
fn init_logging(config: &GameConfig) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_path(LOG_FILE)?)?;
    env_logger::builder()
        .filter_level(config.log_filter())
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    log::info!("{} starting", build_info::version_line());
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let frame_interval = Duration::from_secs_f32(app.config().frame_interval());
    let mut last_frame = Instant::now();

    while app.is_running() {
        terminal.draw(|frame| skyflap::ui::draw(frame, app))?;

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if is_force_quit(key) {
                        break;
                    }
                    if let Some(input) = map_key(key, app.current_scene()) {
                        app.handle(input)?;
                    }
                }
            }
        }

        let now = Instant::now();
        if now.duration_since(last_frame) >= frame_interval {
            let delta = now.duration_since(last_frame).as_secs_f32();
            last_frame = now;
            app.update(delta)?;
        }
    }
    Ok(())
}
