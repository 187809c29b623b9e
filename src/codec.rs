//! Encode and decode orchestration.
//!
//! Encoding reads the source once, counts frequencies, builds the tree and
//! code table, then writes the frequency header plus the translated code
//! stream to two destinations: a human-readable mirror (the codes as
//! literal `'0'`/`'1'` text) and the packed binary file. Decoding reads
//! the header back, rebuilds the identical tree, and walks it bit by bit
//! until exactly `sum(frequencies)` symbols have been emitted — there is
//! no end-of-stream marker in the bit stream itself.

use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::bitio::{BitReader, BitWriter};
use crate::code::{build_code_table, CodeTable};
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::header::{encode_header, parse_header};
use crate::tree::{build_huffman_tree, HuffmanNode};

/// Translates a byte buffer to its concatenated code string
pub fn encode_to_bit_string(data: &[u8], codes: &CodeTable) -> String {
    let mut bits = String::new();
    for &byte in data {
        bits.push_str(codes.code(byte));
    }
    bits
}

/// Derives the packed-output path for a readable mirror path by inserting
/// `_compressed` before the file extension (`out.txt` -> `out_compressed.txt`)
pub fn compressed_output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}_compressed.{}", ext.to_string_lossy()),
        None => format!("{stem}_compressed"),
    };
    path.with_file_name(name)
}

/// Compresses `input`, writing the readable mirror to `output` and the
/// packed stream to `compressed`.
///
/// The source is read into memory once and that buffer feeds both the
/// frequency pass and the translation pass, so a file changing between
/// passes cannot desynchronize the header from the code stream.
///
/// # Errors
///
/// Returns `SourceNotFound` if `input` cannot be opened; I/O errors from
/// either destination propagate as `Io`.
pub fn huffman_encode<P, Q, R>(input: P, output: Q, compressed: R) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let input = input.as_ref();
    let data = fs::read(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::source_not_found(input.display().to_string()),
        _ => Error::Io(e),
    })?;

    let freqs = FrequencyTable::from_bytes(&data);
    let header = encode_header(&freqs);
    let bits = match build_huffman_tree(&freqs)? {
        Some(tree) => encode_to_bit_string(&data, &build_code_table(&tree)),
        None => String::new(),
    };
    debug!(
        "encoding {}: {} bytes, {} distinct symbols, {} code bits",
        input.display(),
        data.len(),
        freqs.distinct(),
        bits.len()
    );

    let mut mirror = BufWriter::new(File::create(output.as_ref())?);
    mirror.write_all(header.as_bytes())?;
    mirror.write_all(b"\n")?;
    mirror.write_all(bits.as_bytes())?;
    mirror.flush()?;

    let mut writer = BitWriter::create(compressed.as_ref())?;
    writer.write_str(&header)?;
    writer.write_str("\n")?;
    writer.write_code(&bits)?;
    writer.close()?;

    info!(
        "encoded {} ({} bytes) -> {} packed bits",
        input.display(),
        data.len(),
        bits.len()
    );
    Ok(())
}

/// Decodes exactly `total` symbols from a bit reader by walking the tree.
///
/// A `1` bit descends right, a `0` bit descends left; reaching a leaf
/// emits its symbol and resets the walk to the root. A tree that is a
/// bare leaf consumes one bit per symbol, mirroring the single-bit code
/// the encoder assigns it.
///
/// # Errors
///
/// Returns `TruncatedStream` if the bit source runs out before `total`
/// symbols have been emitted.
pub fn decode_symbols<R: BufRead>(
    reader: &mut BitReader<R>,
    root: &HuffmanNode,
    total: u64,
) -> Result<Vec<u8>> {
    // The total comes from the untrusted header; cap the preallocation so
    // an absurd claimed count is caught by the truncation check instead of
    // aborting on allocation.
    const MAX_PREALLOC: u64 = 1 << 20;
    let mut out = Vec::with_capacity(total.min(MAX_PREALLOC) as usize);
    if let HuffmanNode::Leaf { symbol, .. } = root {
        while (out.len() as u64) < total {
            reader
                .read_bit()
                .map_err(|e| truncation_context(e, out.len(), total))?;
            out.push(*symbol);
        }
        return Ok(out);
    }
    let mut current = root;
    while (out.len() as u64) < total {
        match current {
            HuffmanNode::Leaf { symbol, .. } => {
                out.push(*symbol);
                current = root;
            }
            HuffmanNode::Internal { left, right, .. } => {
                let bit = reader
                    .read_bit()
                    .map_err(|e| truncation_context(e, out.len(), total))?;
                current = if bit { right } else { left };
            }
        }
    }
    Ok(out)
}

fn truncation_context(err: Error, decoded: usize, total: u64) -> Error {
    match err {
        Error::TruncatedStream(_) => Error::TruncatedStream(format!(
            "decoded {decoded} of {total} symbols before the bit stream ended"
        )),
        other => other,
    }
}

/// Decompresses the packed file `input` into `output`.
///
/// The output file is only created once the full symbol stream has been
/// decoded, so a corrupt input leaves no partial output behind.
///
/// # Errors
///
/// Returns `SourceNotFound` if `input` cannot be opened, `MalformedHeader`
/// if its header line does not parse, and `TruncatedStream` if the bit
/// stream ends early.
pub fn huffman_decode<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let input = input.as_ref();
    let mut reader = BitReader::open(input)?;
    let freqs = parse_header(&reader.read_line()?)?;
    let total = freqs.total();
    let decoded = match build_huffman_tree(&freqs)? {
        Some(tree) => decode_symbols(&mut reader, &tree, total)?,
        None => Vec::new(),
    };
    debug!(
        "decoding {}: {} distinct symbols, {} total",
        input.display(),
        freqs.distinct(),
        total
    );

    fs::write(output.as_ref(), &decoded)?;
    info!(
        "decoded {} -> {} ({} bytes)",
        input.display(),
        output.as_ref().display(),
        decoded.len()
    );
    Ok(())
}
