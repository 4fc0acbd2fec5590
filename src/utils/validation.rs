use log::{debug, warn};

use crate::combination::constants::{MAX_SIZE, MIN_SIZE};
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the size is zero or larger than the number of
/// positions a combination can hold.
pub fn validate_size(size: usize) -> Result<(), UtilsError> {
    debug!("Validating combination size: {}", size);

    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        warn!(
            "Combination size out of range: size={}, min={}, max={}",
            size, MIN_SIZE, MAX_SIZE
        );
        return Err(UtilsError::SizeOutOfRange {
            size,
            min: MIN_SIZE,
            max: MAX_SIZE,
        });
    }

    Ok(())
}
