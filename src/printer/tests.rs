use std::collections::HashSet;
use std::io::{self, Write};

use crate::printer::{CombinationPrinter, OutputStyle, PrinterError};
use crate::utils::{UtilsError, binomial};

fn render(size: usize) -> String {
    let mut printer = CombinationPrinter::new(Vec::new());
    let result = printer.print_combinations(size);
    assert!(result.is_ok(), "size {} failed: {:?}", size, result);
    String::from_utf8(printer.into_inner()).unwrap_or_default()
}

fn render_all(style: OutputStyle) -> String {
    let mut printer = CombinationPrinter::with_style(Vec::new(), style);
    let result = printer.print_all();
    assert!(matches!(result, Ok(1022)), "got {:?}", result);
    String::from_utf8(printer.into_inner()).unwrap_or_default()
}

/// Writer that fails once it has accepted `budget` bytes
struct FailingWriter {
    budget: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn size_one_prints_each_digit() {
    assert_eq!(render(1), "0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n");
}

#[test]
fn size_two_starts_and_ends_as_expected() {
    let output = render(2);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.get(..3), Some(&["01", "02", "03"][..]));
    assert_eq!(lines.last(), Some(&"89"));
}

#[test]
fn size_nine_has_ten_lines() {
    let output = render(9);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines.first(), Some(&"012345678"));
    assert_eq!(lines.last(), Some(&"123456789"));
}

#[test]
fn counts_match_binomial() {
    for size in 1..=9 {
        let mut printer = CombinationPrinter::new(Vec::new());
        let written = printer.print_combinations(size);
        assert!(matches!(written, Ok(n) if n as u64 == binomial(10, size as u64)));

        let output = String::from_utf8(printer.into_inner()).unwrap_or_default();
        assert_eq!(output.lines().count() as u64, binomial(10, size as u64));
    }
}

#[test]
fn lines_are_strictly_increasing_digits_of_expected_length() {
    for size in 1..=9 {
        for line in render(size).lines() {
            assert_eq!(line.len(), size, "line {:?}", line);
            assert!(line.bytes().all(|b| b.is_ascii_digit()), "line {:?}", line);
            assert!(
                line.as_bytes().windows(2).all(|w| w[0] < w[1]),
                "line {:?} not increasing",
                line
            );
        }
    }
}

#[test]
fn lines_are_unique_sorted_and_complete() {
    for size in 1..=9 {
        let output = render(size);
        let lines: Vec<&str> = output.lines().collect();

        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted, "size {} not in ascending order", size);

        let unique: HashSet<&str> = lines.iter().copied().collect();
        assert_eq!(unique.len(), lines.len(), "size {} has duplicates", size);

        // Every n-subset of {0..9} as a bitmask
        let expected: HashSet<String> = (0u32..1024)
            .filter(|mask| mask.count_ones() as usize == size)
            .map(|mask| {
                (0u8..10)
                    .filter(|&bit| mask & (1u32 << bit) != 0)
                    .map(|bit| char::from(b'0' + bit))
                    .collect()
            })
            .collect();
        let actual: HashSet<String> = lines.iter().map(|s| s.to_string()).collect();
        assert_eq!(actual, expected, "size {}", size);
    }
}

#[test]
fn print_all_emits_groups_in_size_order() {
    let output = render_all(OutputStyle::Lines);
    let sizes: Vec<usize> = output.lines().map(str::len).collect();
    assert_eq!(sizes.len(), 1022);
    assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    assert!(!output.contains("\n\n"), "no blank lines between groups");
    assert!(output.starts_with("0\n1\n"));
    assert!(output.ends_with("012345689\n012345789\n012346789\n012356789\n012456789\n013456789\n023456789\n123456789\n"));
}

#[test]
fn list_style_joins_each_group_on_one_line() {
    let mut printer = CombinationPrinter::with_style(Vec::new(), OutputStyle::List);
    assert!(matches!(printer.print_combinations(1), Ok(10)));
    assert!(matches!(printer.print_combinations(9), Ok(10)));
    let output = String::from_utf8(printer.into_inner()).unwrap_or_default();
    assert_eq!(
        output,
        "0, 1, 2, 3, 4, 5, 6, 7, 8, 9\n\
         012345678, 012345679, 012345689, 012345789, 012346789, \
         012356789, 012456789, 013456789, 023456789, 123456789\n"
    );
}

#[test]
fn list_style_print_all_has_one_line_per_size() {
    let output = render_all(OutputStyle::List);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 9);
    for (size, line) in (1..=9).zip(&lines) {
        let entries: Vec<&str> = line.split(", ").collect();
        assert_eq!(entries.len() as u64, binomial(10, size as u64));
        assert!(entries.iter().all(|e| e.len() == size));
    }
}

#[test]
fn default_style_is_lines() {
    let printer = CombinationPrinter::new(Vec::new());
    assert_eq!(printer.style(), OutputStyle::Lines);
}

#[test]
fn out_of_range_sizes_write_nothing() {
    for size in [0, 10] {
        let mut printer = CombinationPrinter::new(Vec::new());
        let result = printer.print_combinations(size);
        assert!(matches!(
            result,
            Err(PrinterError::UtilsError(UtilsError::SizeOutOfRange { size: s, .. })) if s == size
        ));
        assert!(printer.into_inner().is_empty());
    }
}

#[test]
fn write_failure_is_reported() {
    let mut printer = CombinationPrinter::new(FailingWriter { budget: 5 });
    let result = printer.print_all();
    assert!(matches!(
        result,
        Err(PrinterError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe
    ));
}
