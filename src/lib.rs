// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod fs;
mod vec2d;

use std::error::Error;

use crate::config::SolverConfig;
use crate::level::Level;
use crate::solver::{SolverErr, SolverOk};

pub trait LoadLevel {
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    fn solve(&self, config: SolverConfig) -> Result<SolverOk, SolverErr>;
}
