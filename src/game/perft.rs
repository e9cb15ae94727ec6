//! # Perft testing/benchmarking

use std::time::Instant;

use super::state::GameState;

/// Builder pattern to configure a Perft test.
#[derive(Clone, Debug, Default)]
pub struct PerftConfig {
    pub depth: u8,
    pub iterative: bool,
    pub bulk_counting: bool,
    pub divide: bool,

    pub bench: bool,

    pub show_board: bool,
}
impl PerftConfig {
    /// Whether to show the board at the start of the run.
    ///
    /// Should be disabled when trying to parse the output.
    pub fn show_board(mut self, value: bool) -> Self {
        self.show_board = value;
        self
    }

    /// Sets the maximum depth of the perft run.
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    /// If set to true, the run will start from all depth between 1 and the maximum.
    pub fn iterative_deepening(mut self, value: bool) -> Self {
        self.iterative = value;
        self
    }

    /// If set to true, simply returns the number of the legal moves at horizon nodes.
    pub fn bulk_counting(mut self, value: bool) -> Self {
        self.bulk_counting = value;
        self
    }

    /// Shows perft results per legal move at the starting position.
    pub fn divide_moves(mut self, value: bool) -> Self {
        self.divide = value;
        self
    }

    /// Measures the time it takes to complete one depth.
    pub fn benchmark(mut self, value: bool) -> Self {
        self.bench = value;
        self
    }

    /// Runs a Perft test on the given game, printing results to stdout.
    ///
    /// Returns the node count of the deepest run.
    pub fn go(&self, state: &mut GameState) -> u64 {
        if self.show_board {
            println!("{state}\n");
        }

        let mut nodes = 0;
        for depth in (if self.iterative { 1 } else { self.depth })..=self.depth {
            if self.iterative && self.divide {
                println!("====== DEPTH {depth} ======")
            }
            let start = Instant::now();
            nodes = if depth == 0 {
                1
            } else {
                state
                    .legal_moves()
                    .into_iter()
                    .map(|mv| {
                        state.apply(mv);
                        let mv_nodes = perft_rec(state, depth - 1, self.bulk_counting);
                        state.undo();
                        if self.divide {
                            println!("{mv}: {mv_nodes} nodes");
                        }
                        mv_nodes
                    })
                    .sum()
            };
            let elapsed = start.elapsed().as_secs_f64();
            println!("depth {depth}: {nodes} nodes");
            if self.bench {
                println!(
                    "\ttook {} ({})",
                    human_readable_time(elapsed),
                    human_readable_nps(nodes as f64 / elapsed)
                );
            }
        }
        // Leave the terminal flags as they were for the root position.
        state.legal_moves();
        nodes
    }
}

/// Counts the leaf nodes of the legal move tree of the given depth.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    let nodes = perft_rec(state, depth, true);
    state.legal_moves();
    nodes
}

/// Traverses all nodes accessible from a given position, returning the number of
/// nodes traversed.
fn perft_rec(state: &mut GameState, depth_left: u8, bulk_counting: bool) -> u64 {
    if depth_left == 0 {
        1
    } else if depth_left == 1 && bulk_counting {
        state.legal_moves().len() as u64
    } else {
        state
            .legal_moves()
            .into_iter()
            .map(|mv| {
                state.apply(mv);
                let mv_nodes = perft_rec(state, depth_left - 1, bulk_counting);
                state.undo();
                mv_nodes
            })
            .sum()
    }
}

fn human_readable_time(secs: f64) -> String {
    if secs < 0.000_001 {
        format!("{:.3}ns", secs * 1_000_000_000.)
    } else if secs < 0.001 {
        format!("{:.3}μs", secs * 1_000_000.)
    } else if secs < 1. {
        format!("{:.3}ms", secs * 1_000.)
    } else {
        format!("{secs:.3}s")
    }
}

fn human_readable_nps(nps: f64) -> String {
    if nps > 1_000_000_000. {
        format!("{:.3}Gnps", nps / 1_000_000_000.)
    } else if nps > 1_000_000. {
        format!("{:.3}Mnps", nps / 1_000_000.)
    } else if nps > 1_000. {
        format!("{:.3}Knps", nps / 1_000.)
    } else {
        format!("{nps:.3}nps")
    }
}
