//! Utils module split into submodules

mod binomial;
mod errors;
mod validation;

pub use binomial::binomial;
pub use errors::UtilsError;
pub use validation::validate_size;
