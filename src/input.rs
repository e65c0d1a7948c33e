pub mod loader;
mod paths;

pub use loader::{LoadingState, StashLoader};
pub use paths::expand_inputs;
