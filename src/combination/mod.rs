//! Combination module split into submodules

pub mod constants;
mod display;
mod errors;
mod state;

pub use errors::CombinationError;
pub use state::Combination;
