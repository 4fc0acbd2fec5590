use thiserror::Error;

use crate::combination::CombinationError;
use crate::utils::UtilsError;

#[derive(Error, Debug)]
pub enum PrinterError {
    #[error("Failed to write combinations: {0}")]
    Io(#[from] std::io::Error),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Combination error: {0}")]
    CombinationError(#[from] CombinationError),
}
