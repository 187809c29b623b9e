//! Bit-level file I/O.
//!
//! The compressed format is a text header line followed by packed code
//! bits. [`BitWriter`] writes literal text and accumulates `'0'`/`'1'`
//! code characters into a bit buffer that is packed MSB-first and flushed
//! on [`BitWriter::close`]; [`BitReader`] reads the header line back and
//! then serves the packed bytes one bit at a time, MSB-first, so the two
//! sides agree bit-for-bit.
//!
//! Both types are generic over the underlying stream so tests can run
//! against in-memory cursors instead of files.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bitvec::prelude::*;

use crate::error::{Error, Result};

/// Writes text and packed bits to a destination stream
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    bits: BitVec<u8, Msb0>,
}

impl BitWriter<BufWriter<File>> {
    /// Creates (or truncates) a file and wraps it in a buffered bit writer
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> BitWriter<W> {
    /// Wraps an arbitrary writer
    pub fn new(inner: W) -> Self {
        BitWriter {
            inner,
            bits: BitVec::new(),
        }
    }

    /// Writes a string as literal characters
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.inner.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Appends code characters to the bit buffer, one bit per character.
    /// The buffer is packed and written only on `close`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `code` contains a character other than
    /// `'0'` or `'1'`.
    pub fn write_code(&mut self, code: &str) -> Result<()> {
        for ch in code.chars() {
            match ch {
                '0' => self.bits.push(false),
                '1' => self.bits.push(true),
                _ => {
                    return Err(Error::invalid_input(format!(
                        "non-binary code character {ch:?}"
                    )))
                }
            }
        }
        Ok(())
    }

    /// Pads the final partial byte with zero bits, writes the packed
    /// bytes, and flushes the destination.
    pub fn close(mut self) -> Result<()> {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
        self.inner.write_all(self.bits.as_raw_slice())?;
        self.inner.flush()?;
        Ok(())
    }
}

/// Reads a text header line and then individual bits from a source stream
#[derive(Debug)]
pub struct BitReader<R: BufRead> {
    inner: R,
    current: u8,
    remaining: u8,
}

impl BitReader<BufReader<File>> {
    /// Opens a file for bit-level reading.
    ///
    /// # Errors
    ///
    /// Returns `SourceNotFound` if the file does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::source_not_found(path.display().to_string()),
            _ => Error::Io(e),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> BitReader<R> {
    /// Wraps an arbitrary buffered reader
    pub fn new(inner: R) -> Self {
        BitReader {
            inner,
            current: 0,
            remaining: 0,
        }
    }

    /// Reads up to and consuming a newline, returning the line without it
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        self.inner.read_line(&mut line)?;
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Reads the next bit, MSB-first within each byte.
    ///
    /// # Errors
    ///
    /// Returns `TruncatedStream` when the source is exhausted.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.remaining == 0 {
            let mut byte = [0u8; 1];
            let n = self.inner.read(&mut byte)?;
            if n == 0 {
                return Err(Error::TruncatedStream("bit source exhausted".to_string()));
            }
            self.current = byte[0];
            self.remaining = 8;
        }
        self.remaining -= 1;
        Ok((self.current >> self.remaining) & 1 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn written(header: &str, code: &str) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut writer = BitWriter::new(&mut out);
            writer.write_str(header).unwrap();
            writer.write_code(code).unwrap();
            writer.close().unwrap();
        }
        out
    }

    #[test]
    fn test_bits_pack_msb_first() {
        let out = written("", "10110000");
        assert_eq!(out, vec![0b1011_0000]);
    }

    #[test]
    fn test_partial_byte_is_zero_padded() {
        let out = written("", "101");
        assert_eq!(out, vec![0b1010_0000]);
    }

    #[test]
    fn test_header_then_bits() {
        let out = written("97 3\n", "11");
        assert_eq!(&out[..5], b"97 3\n");
        assert_eq!(out[5], 0b1100_0000);
    }

    #[test]
    fn test_reader_round_trips_writer() {
        let out = written("12 5 40 1\n", "0110100");
        let mut reader = BitReader::new(Cursor::new(out));
        assert_eq!(reader.read_line().unwrap(), "12 5 40 1");
        let mut bits = String::new();
        for _ in 0..7 {
            bits.push(if reader.read_bit().unwrap() { '1' } else { '0' });
        }
        assert_eq!(bits, "0110100");
        // The padding bit is still readable, then the stream ends.
        assert!(!reader.read_bit().unwrap());
        assert!(matches!(
            reader.read_bit().unwrap_err(),
            Error::TruncatedStream(_)
        ));
    }

    #[test]
    fn test_write_code_rejects_non_binary_characters() {
        let mut out = Vec::new();
        let mut writer = BitWriter::new(&mut out);
        assert!(matches!(
            writer.write_code("01x1").unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_read_line_on_empty_stream() {
        let mut reader = BitReader::new(Cursor::new(Vec::new()));
        assert_eq!(reader.read_line().unwrap(), "");
    }

    #[test]
    fn test_open_missing_file() {
        let err = BitReader::open("/no/such/file.huff").unwrap_err();
        assert!(matches!(err, Error::SourceNotFound(_)));
    }
}
