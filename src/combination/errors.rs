use thiserror::Error;

/// Errors raised while building a combination
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombinationError {
    #[error("Combination cannot hold more than {capacity} digits (depth {depth})")]
    CapacityExceeded { depth: usize, capacity: usize },
    #[error("Cannot place a digit at depth {depth} with only {len} digits set")]
    DepthSkipped { depth: usize, len: usize },
    #[error("Not a decimal digit: {0}")]
    InvalidDigit(u8),
    #[error("Digit {digit} does not follow {previous} in increasing order")]
    NotIncreasing { previous: u8, digit: u8 },
}
