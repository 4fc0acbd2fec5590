//! print_combn - Print every strictly increasing combination of decimal digits
//!
//! For each size n from 1 to 9, every n-element subset of {0, ..., 9} is written
//! in ascending order as a run of ASCII digits. Combinations are streamed as they
//! are found; nothing but the partial combination is kept in memory.

pub mod combination;
pub mod printer;
pub mod utils;

use std::io::{self, BufWriter};

// Re-export the main public API
pub use combination::{Combination, CombinationError};
pub use printer::{CombinationPrinter, OutputStyle, PrinterError};
pub use utils::{UtilsError, binomial, validate_size};

/// Print every strictly increasing combination of `n` digits to standard output
///
/// Each combination is written as `n` ASCII digits followed by a newline, in
/// ascending order.
///
/// # Errors
///
/// This function will return an error if:
/// * `n` is outside `1..=9`
/// * Writing to standard output fails
///
/// # Examples
///
/// ```no_run
/// use print_combn::print_combinations;
///
/// // Prints 01, 02, ..., 89 on separate lines
/// print_combinations(2).expect("stdout is writable");
/// ```
pub fn print_combinations(n: usize) -> Result<(), PrinterError> {
    let mut printer = CombinationPrinter::new(BufWriter::new(io::stdout().lock()));
    printer.print_combinations(n)?;
    printer.flush()
}

/// Print the combinations of every size from 1 through 9 to standard output
///
/// # Errors
///
/// Returns an error if writing to standard output fails.
pub fn print_all(style: OutputStyle) -> Result<(), PrinterError> {
    let mut printer = CombinationPrinter::with_style(BufWriter::new(io::stdout().lock()), style);
    printer.print_all()?;
    printer.flush()
}
