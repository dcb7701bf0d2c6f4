use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gym_flappy::assets::load_logo;
use gym_flappy::build_info;
use gym_flappy::cli::{self, CliCommand, RunOptions};
use gym_flappy::core::{GameConfig, SIM_RAISE_HOLD_FRAMES};
use gym_flappy::gesture::{
    GestureSource, PoseEstimator, PoseGestureSource, ReplayEstimator, SimulatedArms,
    SimulatedPose,
};
use gym_flappy::input::{map_key, InputAction};
use gym_flappy::logging;
use gym_flappy::scene::Game;
use gym_flappy::ui;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Instant;
use tracing::{error, info};

fn main() -> io::Result<()> {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Help) => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'gym-flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = options.log.clone().or_else(logging::default_log_path) {
        if let Err(e) = logging::init_tracing(&path) {
            eprintln!("Warning: logging disabled ({}): {}", path.display(), e);
        }
    }
    info!(version = %build_info::version_line(), "starting");

    let config = load_config(&options);
    let logo = options.logo.as_deref().and_then(load_logo);

    // The keyboard handle is always wired up; it only moves the bird with the simulated pose.
    let arms = SimulatedArms::new();
    let estimator: Box<dyn PoseEstimator> = match &options.replay {
        Some(path) => match ReplayEstimator::open(path, options.looping) {
            Ok(replay) => {
                info!(path = %path.display(), frames = replay.len(), "replaying landmarks");
                Box::new(replay)
            }
            Err(e) => {
                eprintln!("Could not read recording {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(SimulatedPose::new(arms.clone(), SIM_RAISE_HOLD_FRAMES)),
    };
    let gesture = PoseGestureSource::new(estimator, config.raise_margin);
    let mut game = Game::new(config, gesture, StdRng::from_entropy());

    install_panic_hook();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut game, &arms, logo.as_deref());

    game.shutdown();
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    info!(
        sessions = game.sessions_played(),
        high_score = game.high_score(),
        "exiting"
    );
    result
}

/// An explicit `--config` must load; the default location falls back to defaults.
fn load_config(options: &RunOptions) -> GameConfig {
    match &options.config {
        Some(path) => match GameConfig::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                eprintln!("Invalid config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => GameConfig::load_default(),
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Leave the alternate screen before the panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        error!(panic = %panic_info, "panicked");
        default_hook(panic_info);
    }));
}

/// Draw, read keys and tick at the current scene's frame rate until quit.
fn run<B: Backend, G: GestureSource, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut Game<G, R>,
    arms: &SimulatedArms,
    logo: Option<&[String]>,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    while !game.is_quit() {
        terminal.draw(|frame| ui::draw(frame, &game.view(), logo))?;

        let timeout = game.frame_interval().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(game.kind(), key) {
                    InputAction::Command(command) => {
                        if game.handle_command(command).is_some() {
                            last_tick = Instant::now();
                        }
                    }
                    InputAction::RaiseArms => arms.raise(),
                    InputAction::None => {}
                }
            }
        }

        if last_tick.elapsed() >= game.frame_interval() {
            game.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
