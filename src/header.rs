//! Frequency header serialization.
//!
//! The compressed file starts with one ASCII line listing every non-zero
//! `(symbol, frequency)` pair, space separated, in ascending symbol order:
//! `"97 3 98 4 99 2"` for the bytes of `"aaabbbbcc"`. An all-zero table
//! serializes to an empty line. This line is the only metadata persisted;
//! the decoder rebuilds the tree from it.

use crate::error::{Error, Result};
use crate::frequency::{FrequencyTable, SYMBOL_COUNT};

/// Serializes a frequency table to its header line (without the newline)
pub fn encode_header(freqs: &FrequencyTable) -> String {
    let mut parts = Vec::with_capacity(freqs.distinct() * 2);
    for (symbol, freq) in freqs.iter_nonzero() {
        parts.push(symbol.to_string());
        parts.push(freq.to_string());
    }
    parts.join(" ")
}

/// Parses a header line back into a frequency table.
///
/// An empty (or all-whitespace) line decodes to the all-zero table.
///
/// # Errors
///
/// Returns `MalformedHeader` on an odd token count, a non-numeric token,
/// a symbol value outside the byte range, or frequencies whose sum
/// overflows `u64` (the decoder relies on that sum terminating its loop).
pub fn parse_header(line: &str) -> Result<FrequencyTable> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() % 2 != 0 {
        return Err(Error::malformed_header(format!(
            "odd token count {} in {:?}",
            tokens.len(),
            line
        )));
    }
    let mut table = FrequencyTable::new();
    for pair in tokens.chunks_exact(2) {
        let symbol: usize = pair[0]
            .parse()
            .map_err(|_| Error::malformed_header(format!("invalid symbol token {:?}", pair[0])))?;
        if symbol >= SYMBOL_COUNT {
            return Err(Error::malformed_header(format!(
                "symbol {symbol} out of byte range"
            )));
        }
        let freq: u64 = pair[1].parse().map_err(|_| {
            Error::malformed_header(format!("invalid frequency token {:?}", pair[1]))
        })?;
        table.set(symbol as u8, freq);
    }
    if table.checked_total().is_none() {
        return Err(Error::malformed_header("frequency total overflows u64"));
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_example() {
        let freqs = FrequencyTable::from_bytes(b"aaabbbbcc");
        assert_eq!(encode_header(&freqs), "97 3 98 4 99 2");
    }

    #[test]
    fn test_all_zero_encodes_to_empty_line() {
        assert_eq!(encode_header(&FrequencyTable::new()), "");
    }

    #[test]
    fn test_round_trip() {
        let freqs = FrequencyTable::from_bytes(b"huffman headers round trip");
        let parsed = parse_header(&encode_header(&freqs)).unwrap();
        assert_eq!(parsed, freqs);
    }

    #[test]
    fn test_empty_line_round_trip() {
        let parsed = parse_header("").unwrap();
        assert_eq!(parsed, FrequencyTable::new());
    }

    #[test]
    fn test_odd_token_count_is_rejected() {
        let err = parse_header("97 3 98").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_non_numeric_token_is_rejected() {
        assert!(matches!(
            parse_header("97 three").unwrap_err(),
            Error::MalformedHeader(_)
        ));
        assert!(matches!(
            parse_header("x 3").unwrap_err(),
            Error::MalformedHeader(_)
        ));
    }

    #[test]
    fn test_out_of_range_symbol_is_rejected() {
        let err = parse_header("256 1").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let err = parse_header("0 18446744073709551615 1 2").unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
        // The maximum count alone still parses.
        let table = parse_header("0 18446744073709551615").unwrap();
        assert_eq!(table.get(0), u64::MAX);
    }
}
