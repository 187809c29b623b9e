//! Byte frequency counting.
//!
//! A [`FrequencyTable`] records how many times each of the 256 possible byte
//! values occurs in a source stream. It is the only metadata the decoder
//! needs: the Huffman tree is rebuilt from frequencies alone, so both sides
//! must count (and later merge) identically.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Number of distinct symbols in the byte alphabet
pub const SYMBOL_COUNT: usize = 256;

/// Occurrence counts for every possible byte value.
///
/// `table.get(s)` is the number of times byte `s` appeared in the source.
/// A count of zero means the symbol is absent and never enters the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    /// Creates an all-zero table
    pub fn new() -> Self {
        FrequencyTable {
            counts: [0; SYMBOL_COUNT],
        }
    }

    /// Counts the bytes of an in-memory buffer
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Counts the bytes of a reader, consuming it to end of stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for byte in reader.bytes() {
            table.counts[byte? as usize] += 1;
        }
        Ok(table)
    }

    /// Counts the bytes of a file.
    ///
    /// # Errors
    ///
    /// Returns `SourceNotFound` if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::source_not_found(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Returns the count for one symbol
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sets the count for one symbol
    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Adds one occurrence of a symbol
    pub fn increment(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    /// Total number of symbol occurrences (the length of the source stream).
    ///
    /// Tables counted from real data cannot overflow; tables parsed from a
    /// header are validated with [`FrequencyTable::checked_total`] first.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Total occurrences, or `None` if the sum overflows `u64`
    pub fn checked_total(&self) -> Option<u64> {
        self.counts
            .iter()
            .try_fold(0u64, |acc, &count| acc.checked_add(count))
    }

    /// Number of symbols with a non-zero count
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterates over `(symbol, count)` pairs with non-zero counts, in
    /// ascending symbol order
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_counts_from_bytes() {
        let table = FrequencyTable::from_bytes(b"aabccc");
        assert_eq!(table.get(b'a'), 2);
        assert_eq!(table.get(b'b'), 1);
        assert_eq!(table.get(b'c'), 3);
        assert_eq!(table.get(b'd'), 0);
        assert_eq!(table.total(), 6);
        assert_eq!(table.distinct(), 3);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let table = FrequencyTable::from_bytes(b"");
        assert_eq!(table, FrequencyTable::new());
        assert_eq!(table.total(), 0);
        assert_eq!(table.distinct(), 0);
    }

    #[test]
    fn test_from_reader_matches_from_bytes() {
        let data = b"the quick brown fox";
        let from_reader = FrequencyTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(from_reader, FrequencyTable::from_bytes(data));
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let err = FrequencyTable::from_file("/no/such/file").unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }

    #[test]
    fn test_checked_total_detects_overflow() {
        let mut table = FrequencyTable::new();
        table.set(0, u64::MAX);
        assert_eq!(table.checked_total(), Some(u64::MAX));
        table.set(1, 2);
        assert_eq!(table.checked_total(), None);
    }

    #[test]
    fn test_iter_nonzero_is_ascending() {
        let table = FrequencyTable::from_bytes(b"zebra");
        let symbols: Vec<u8> = table.iter_nonzero().map(|(s, _)| s).collect();
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
    }
}
