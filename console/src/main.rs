mod analyze;
mod config;
mod prompt;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{Board, FirstPlayerMode, Mark};
use tictactoe_common::{log, logger};

use config::{Config, get_config_manager};
use prompt::Prompter;
use runner::{GameMode, GameOptions, run_game, setup_players};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstArg {
    Random,
    PlayerOne,
    PlayerTwo,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Random => FirstPlayerMode::Random,
            FirstArg::PlayerOne => FirstPlayerMode::PlayerOne,
            FirstArg::PlayerTwo => FirstPlayerMode::PlayerTwo,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Console tic-tac-toe against a minimax bot that never loses")]
struct Args {
    /// Skip the menu and start this mode directly.
    #[arg(long, value_enum)]
    mode: Option<GameMode>,
    /// Player name for single player mode.
    #[arg(long)]
    name: Option<String>,
    /// Who moves first; overrides the config.
    #[arg(long, value_enum)]
    first: Option<FirstArg>,
    #[arg(long)]
    seed: Option<u64>,
    /// Print the engine's outlook for every open cell before each human move.
    #[arg(long)]
    hints: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Analyze a position such as "OO-/XX-/---" and exit.
    #[arg(long)]
    board: Option<String>,
    /// Side to move for --board.
    #[arg(long, value_enum, default_value_t = MarkArg::O)]
    mover: MarkArg,
}

fn init_logging(args: &Args, config: &Config) {
    if !args.verbose && !config.logging.enabled {
        return;
    }
    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    init_logging(&args, &config);
    log!(
        "Loaded config from {}",
        config_manager.content_provider().path().display()
    );

    if let Some(board) = &args.board {
        let board: Board = board.parse()?;
        analyze::print_analysis(&mut io::stdout(), &board, args.mover.into())?;
        return Ok(());
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let mode = match args.mode {
        Some(mode) => mode,
        None => match prompter.ask_menu()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };
    log!("Mode: {:?}", mode);

    if let Some(name) = &args.name {
        config::validate_name(name)?;
    }

    let (player_one, player_two) = setup_players(
        &mut prompter,
        mode,
        args.name.clone(),
        config.player_name.as_deref(),
    )?;

    if mode == GameMode::Single && config.player_name.as_deref() != Some(player_one.name.as_str())
    {
        config.player_name = Some(player_one.name.clone());
        match config_manager.set_config(&config) {
            Ok(()) => log!("Saved player name to config"),
            Err(e) => log!("Failed to save config: {}", e),
        }
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let options = GameOptions {
        first_player: args.first.map(Into::into).unwrap_or(config.first_player),
        show_hints: args.hints || config.show_hints,
    };

    run_game(&mut prompter, player_one, player_two, &options, &mut rng)?;
    Ok(())
}
