//! # Pawnshop
//! A chess rules engine: board representation, legal move generation, making and
//! unmaking moves, and checkmate/stalemate detection.
//!
//! It is meant to be driven by a presentation layer, which queries legal moves,
//! matches user input against them and renders the resulting state.

pub mod game;
pub mod selfplay;
