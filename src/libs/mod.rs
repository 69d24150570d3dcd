pub mod alignment;
pub mod block;
pub mod codon;
pub mod error;
pub mod io;
pub mod report;
pub mod score;
pub mod select;
