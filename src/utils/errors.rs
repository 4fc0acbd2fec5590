use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Combination size {size} is outside {min}..={max}")]
    SizeOutOfRange { size: usize, min: usize, max: usize },
}
