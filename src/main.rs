/// Entry point and game loop.

mod config;
mod domain;
mod error;
mod sim;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{debug, error, info};

use config::GameConfig;
use domain::rng::{RandomSource, SeededRng};
use error::GameError;
use sim::event::GameEvent;
use sim::step;
use sim::world::{Phase, WorldState};
use ui::input::{read_command, Command};
use ui::renderer::{event_message, Renderer, INVALID_KEY};

#[derive(Parser, Debug)]
#[command(name = "stargrid", version, about = "Reach G, collect *, avoid E")]
struct Args {
    /// Path to a config.toml (default: search next to the binary, then CWD)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible game (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How the loop ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome {
    Won,
    Lost,
    InputClosed,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = GameConfig::load(args.config.as_deref());
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Err(e) = config.validate() {
        let e = GameError::from(e);
        error!("{e}");
        eprintln!("{e}");
        return;
    }

    let mut rng = SeededRng::from_seed_or_clock(config.seed);
    info!("seed {}", rng.seed());

    let mut world = WorldState::new_game(&config, &mut rng);
    let mut renderer = Renderer::new(io::stdout());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    match game_loop(&mut world, &mut rng, &config, &mut input, &mut renderer) {
        Ok(outcome) => {
            info!("game ended: {outcome:?} score {} turns {}", world.score, world.turns);
            if let Err(e) = renderer.summary(&world) {
                error!("could not print summary: {e}");
            }
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Game error: {e}");
        }
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = match verbosity {
        0 => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
        v => {
            let mut b = env_logger::Builder::new();
            b.filter_level(if v == 1 { log::LevelFilter::Debug } else { log::LevelFilter::Trace });
            b
        }
    };
    builder.init();
}

fn game_loop<R: BufRead, W: Write>(
    world: &mut WorldState,
    rng: &mut dyn RandomSource,
    config: &GameConfig,
    input: &mut R,
    renderer: &mut Renderer<W>,
) -> Result<Outcome, GameError> {
    loop {
        renderer.render(world)?;

        if let Some(event) = step::check_overlap(world) {
            announce(renderer, &event)?;
            return Ok(outcome_of(world.phase));
        }

        renderer.prompt()?;
        let dir = match read_command(input)? {
            Command::Move(dir) => dir,
            Command::Empty => continue,
            Command::Invalid(c) => {
                debug!("rejected key {c:?}");
                renderer.message(INVALID_KEY)?;
                pause(config.timing.invalid_input_pause);
                continue;
            }
            Command::Eof => {
                debug!("input closed on turn {}", world.turns);
                return Ok(Outcome::InputClosed);
            }
        };

        let events = step::step(world, dir, rng, config);
        process_events(renderer, world, config, &events)?;

        if world.phase.is_over() {
            return Ok(outcome_of(world.phase));
        }
    }
}

fn process_events<W: Write>(
    renderer: &mut Renderer<W>,
    world: &WorldState,
    config: &GameConfig,
    events: &[GameEvent],
) -> Result<(), GameError> {
    for event in events {
        match event {
            GameEvent::ReachedGoal | GameEvent::EnemyContact => {
                renderer.render(world)?;
                announce(renderer, event)?;
            }
            GameEvent::AllStarsCollected => {
                announce(renderer, event)?;
                pause(config.timing.all_collected_pause);
            }
            _ => {}
        }
    }
    Ok(())
}

fn announce<W: Write>(renderer: &mut Renderer<W>, event: &GameEvent) -> Result<(), GameError> {
    if let Some(text) = event_message(event) {
        renderer.announce(text)?;
    }
    Ok(())
}

fn outcome_of(phase: Phase) -> Outcome {
    match phase {
        Phase::Won => Outcome::Won,
        Phase::Lost => Outcome::Lost,
        Phase::Running => Outcome::InputClosed,
    }
}

fn pause(d: Duration) {
    if !d.is_zero() {
        std::thread::sleep(d);
    }
}
