use clap::{Parser, Subcommand};
#[cfg(feature = "perft")]
use pawnshop::game::perft::PerftConfig;
use pawnshop::{
    game::{action::CoordinateMove, state::GameState},
    selfplay::{self_play, SelfPlayConfig},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plays moves in coordinate notation from the initial position, then shows
    /// the resulting game (DEFAULT)
    Play {
        /// Moves to play, such as e2e4
        moves: Vec<String>,
        /// Number of plies to take back once all moves are played
        #[arg(short, long, default_value_t = 0)]
        undo: usize,
    },
    /// Runs perft (generating all moves up to a certain depth)
    Perft {
        /// Maximum depth to reach
        depth: u8,
        /// Shows move count for each move from the starting position
        #[arg(short)]
        divide: bool,
        /// Generates moves for each depth up to the maximum
        #[arg(short)]
        iterative: bool,
        /// Show timing information
        #[arg(long)]
        bench: bool,
        /// Counts legal moves at horizon nodes instead of playing each of them
        #[arg(short)]
        bulk: bool,

        /// Does not show the board and other decorations
        #[arg(long)]
        no_board: bool,
    },
    /// Plays a batch of games made of random legal moves
    SelfPlay {
        /// Number of games to play
        #[arg(short, long, default_value_t = 1)]
        games: usize,
        /// Seed of the first game, following games use the next seeds
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Stops a game after this many plies
        #[arg(short, long, default_value_t = 400)]
        max_plies: usize,
    },
}

pub fn main() {
    let args = Arguments::parse();
    env_logger::init();

    match args.command.unwrap_or(Command::Play {
        moves: vec![],
        undo: 0,
    }) {
        Command::Play { moves, undo } => {
            let mut state = GameState::initial();
            for notation in &moves {
                let candidate = match notation.parse::<CoordinateMove>() {
                    Ok(coordinates) => coordinates.to_move(state.board()),
                    Err(e) => {
                        log::error!("Could not read move {notation}: {e}");
                        std::process::exit(1)
                    }
                };
                let Some(mv) = state
                    .legal_moves()
                    .into_iter()
                    .find(|mv| *mv == candidate)
                else {
                    log::error!("Illegal move: {notation}");
                    std::process::exit(1)
                };
                log::info!("{} plays {mv}", state.side_to_move());
                state.apply(mv);
            }
            for _ in 0..undo {
                state.undo();
            }

            let legal = state.legal_moves();
            println!("{state}");
            if let Some(last) = state.last_move() {
                println!("last move: {last}");
            }
            if state.is_checkmate() {
                println!("checkmate, {} wins", state.side_to_move().inverse());
            } else if state.is_stalemate() {
                println!("stalemate");
            } else {
                let legal = legal.iter().map(|mv| mv.notation()).collect::<Vec<_>>();
                println!("legal moves ({}): {}", legal.len(), legal.join(" "));
            }
        }
        #[cfg(feature = "perft")]
        Command::Perft {
            depth,
            divide,
            iterative,
            bench,
            bulk,
            no_board,
        } => {
            PerftConfig::default()
                .with_depth(depth)
                .divide_moves(divide)
                .iterative_deepening(iterative)
                .benchmark(bench)
                .bulk_counting(bulk)
                .show_board(!no_board)
                .go(&mut GameState::initial());
        }
        #[cfg(not(feature = "perft"))]
        Command::Perft { .. } => {
            eprintln!("Pawnshop has not been compiled with feature `perft`");
        }
        Command::SelfPlay {
            games,
            seed,
            max_plies,
        } => {
            let config = SelfPlayConfig::new()
                .with_seed(seed)
                .with_max_plies(max_plies);
            for (game, record) in self_play(games, config).into_iter().enumerate() {
                let moves = record
                    .moves
                    .iter()
                    .map(|mv| mv.notation())
                    .collect::<Vec<_>>();
                println!(
                    "game {game} ({} plies): {}\n\t{}",
                    moves.len(),
                    record.outcome,
                    moves.join(" ")
                );
            }
        }
    }
}
