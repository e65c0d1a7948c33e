//! Stats module for aggregate item counts
//!
//! Folds the loaded items into per-dimension frequency tables. The filter menu
//! renders these tables as checkbox counts.

mod aggregate;
mod tally;

pub use aggregate::{Stats, aggregate, aggregate_loads};
pub use tally::Tally;
