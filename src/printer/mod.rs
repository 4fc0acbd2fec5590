mod core;
mod errors;
mod style;

pub use core::CombinationPrinter;
pub use errors::PrinterError;
pub use style::OutputStyle;

#[cfg(test)]
mod tests;
