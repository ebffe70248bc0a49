#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
mod cell;
mod common;
mod config;
mod game;
mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
mod resolver;
mod ship;
mod stack;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, Grid, Word};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use placement::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use resolver::*;
pub use ship::*;
pub use stack::*;
#[cfg(feature = "std")]
pub use ui::*;
