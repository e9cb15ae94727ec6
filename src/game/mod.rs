//! # Chess API
//! This module contains everything Chess related: the board, moves and the game
//! state with its rules.

pub mod action;
pub mod board;
pub mod castling_rights;
pub mod colour;
mod movegen;
#[cfg(feature = "perft")]
pub mod perft;
pub mod piece;
pub mod square;
pub mod state;
