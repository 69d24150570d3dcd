//! Subcommand modules for the `colsel` binary.

pub mod blocks;
pub mod codon;
pub mod gapscore;
pub mod select;
pub mod stat;
pub mod trim;
pub mod utils;
