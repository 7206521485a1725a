//! Configuration, logging and command line tools around `tiler-core`.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
mod config;
pub mod utils;

pub use config::*;
