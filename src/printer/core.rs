use std::io::Write;

use log::{debug, info};

use crate::combination::Combination;
use crate::combination::constants::{DIGIT_COUNT, MAX_DIGIT, MAX_SIZE, MIN_SIZE};
use crate::printer::errors::PrinterError;
use crate::printer::style::OutputStyle;
use crate::utils::{binomial, validate_size};

/// Streams strictly increasing digit combinations to a writer
pub struct CombinationPrinter<W: Write> {
    out: W,
    style: OutputStyle,
}

impl<W: Write> CombinationPrinter<W> {
    /// Create a printer using the default one-per-line layout
    pub fn new(out: W) -> Self {
        Self::with_style(out, OutputStyle::default())
    }

    pub fn with_style(out: W, style: OutputStyle) -> Self {
        Self { out, style }
    }

    pub fn style(&self) -> OutputStyle {
        self.style
    }

    /// Print every size from 1 through 9, smallest first.
    ///
    /// Returns the total number of combinations written.
    ///
    /// # Errors
    ///
    /// Stops at the first write failure.
    pub fn print_all(&mut self) -> Result<usize, PrinterError> {
        info!(
            "Printing combinations of sizes {}..={} ({:?} style)",
            MIN_SIZE, MAX_SIZE, self.style
        );

        let mut total = 0;
        for size in MIN_SIZE..=MAX_SIZE {
            total += self.print_combinations(size)?;
        }

        info!("Printed {} combinations", total);
        Ok(total)
    }

    /// Print every strictly increasing combination of `size` digits in
    /// ascending order.
    ///
    /// Returns the number of combinations written.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is outside 1..=9 (nothing is written in that
    /// case) or if the writer fails.
    pub fn print_combinations(&mut self, size: usize) -> Result<usize, PrinterError> {
        validate_size(size)?;
        debug!(
            "Expecting {} combinations of size {}",
            binomial(DIGIT_COUNT, size as u64),
            size
        );

        let mut combination = Combination::new();
        let mut written = 0;
        self.descend(&mut combination, size, 0, 0, &mut written)?;
        self.out.write_all(self.style.group_end())?;

        info!("Size {}: {} combinations", size, written);
        Ok(written)
    }

    pub fn flush(&mut self) -> Result<(), PrinterError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn descend(
        &mut self,
        combination: &mut Combination,
        size: usize,
        depth: usize,
        first_candidate: u8,
        written: &mut usize,
    ) -> Result<(), PrinterError> {
        if depth == size {
            self.emit(combination, *written)?;
            *written += 1;
            return Ok(());
        }

        for candidate in first_candidate..=MAX_DIGIT {
            combination.place(depth, candidate)?;
            self.descend(combination, size, depth + 1, candidate + 1, written)?;
        }

        Ok(())
    }

    fn emit(&mut self, combination: &Combination, index: usize) -> Result<(), PrinterError> {
        if index > 0 {
            self.out.write_all(self.style.separator())?;
        }
        combination.write_ascii(&mut self.out)?;
        self.out.write_all(self.style.terminator())?;
        Ok(())
    }
}
