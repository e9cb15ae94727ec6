//! # Random self-play
//!
//! Plays games made of uniformly random legal moves, mostly useful to exercise
//! the rules engine on positions no one would write by hand.

use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::game::{action::Move, colour::Colour, state::GameState};

/// How a self-play game ended.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Outcome {
    Checkmate { winner: Colour },
    Stalemate,
    /// The game was stopped after reaching the configured number of plies.
    PlyLimit,
}
impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Self::Stalemate => write!(f, "stalemate"),
            Self::PlyLimit => write!(f, "stopped at ply limit"),
        }
    }
}

/// Moves played during a game and its outcome.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

/// Builder pattern to configure self-play games.
#[derive(Clone, Copy, Debug)]
pub struct SelfPlayConfig {
    pub max_plies: usize,
    pub seed: u64,
}
impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            seed: 0,
        }
    }
}
impl SelfPlayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops games after this many plies.
    pub fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Seeds the random move picker, making games reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Plays a single game from the initial position.
    pub fn go(&self) -> GameRecord {
        let mut state = GameState::initial();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.play_out(&mut state, &mut rng)
    }

    /// Plays random moves from the given state until the game ends or the ply
    /// limit is reached. The state is left at the final position.
    pub fn play_out(&self, state: &mut GameState, rng: &mut SmallRng) -> GameRecord {
        let mut moves = vec![];
        let outcome = loop {
            let legal = state.legal_moves();
            if state.is_checkmate() {
                break Outcome::Checkmate {
                    winner: state.side_to_move().inverse(),
                };
            }
            if state.is_stalemate() {
                break Outcome::Stalemate;
            }
            if moves.len() >= self.max_plies {
                break Outcome::PlyLimit;
            }
            // Non-empty: neither checkmate nor stalemate.
            let Some(&mv) = legal.choose(rng) else {
                break Outcome::Stalemate;
            };
            state.apply(mv);
            moves.push(mv);
        };
        log::debug!("self-play game over after {} plies: {outcome}", moves.len());

        GameRecord { moves, outcome }
    }
}

/// Plays a batch of games, seeding each from the configured seed plus its index.
pub fn self_play(games: usize, config: SelfPlayConfig) -> Vec<GameRecord> {
    (0..games)
        .map(|game| {
            config
                .with_seed(config.seed.wrapping_add(game as u64))
                .go()
        })
        .collect()
}
