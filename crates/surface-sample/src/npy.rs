//! Minimal `.npy` (NumPy array file) encoding for little-endian `f32` data.
//!
//! # Format
//!
//! - Bytes 0-5: Magic `\x93NUMPY`
//! - Bytes 6-7: Format version (1.0 is written; 1.0 and 2.0 are read)
//! - Header length: `u16` (v1) or `u32` (v2), little-endian
//! - Header: Python dict literal, space padded and `\n` terminated so the
//!   data starts on a 64-byte boundary
//! - Data: C-order `<f4` values

use std::io::{self, Read, Write};

use crate::error::{SampleError, SampleResult};

const MAGIC: &[u8; 6] = b"\x93NUMPY";
const ALIGNMENT: usize = 64;
const DESCR: &str = "<f4";
/// Values encoded per `write_all` call.
const CHUNK_LEN: usize = 4096;

/// Write `data` as an `f32` array of the given `shape`.
pub fn write_f32<W: Write>(writer: &mut W, shape: &[usize], data: &[f32]) -> io::Result<()> {
    let expected: usize = shape.iter().product();
    if expected != data.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "shape {shape:?} holds {expected} values, got {}",
                data.len()
            ),
        ));
    }

    let header = header_text(shape);
    let header_len = u16::try_from(header.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "npy header too long"))?;

    writer.write_all(MAGIC)?;
    writer.write_all(&[1, 0])?;
    writer.write_all(&header_len.to_le_bytes())?;
    writer.write_all(header.as_bytes())?;

    let mut bytes = Vec::with_capacity(CHUNK_LEN * 4);
    for chunk in data.chunks(CHUNK_LEN) {
        bytes.clear();
        for value in chunk {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        writer.write_all(&bytes)?;
    }
    Ok(())
}

/// Read an `f32` array, returning its shape and values.
pub fn read_f32<R: Read>(reader: &mut R) -> SampleResult<(Vec<usize>, Vec<f32>)> {
    let mut preamble = [0u8; 8];
    reader.read_exact(&mut preamble).map_err(truncated)?;
    if &preamble[..6] != MAGIC {
        return Err(npy_error("missing magic string"));
    }

    let header_len = match preamble[6] {
        1 => {
            let mut len = [0u8; 2];
            reader.read_exact(&mut len).map_err(truncated)?;
            usize::from(u16::from_le_bytes(len))
        }
        2 => {
            let mut len = [0u8; 4];
            reader.read_exact(&mut len).map_err(truncated)?;
            usize::try_from(u32::from_le_bytes(len))
                .map_err(|_| npy_error("header length overflows"))?
        }
        major => return Err(npy_error(format!("unsupported version {major}"))),
    };

    let mut header = vec![0u8; header_len];
    reader.read_exact(&mut header).map_err(truncated)?;
    let header = String::from_utf8(header).map_err(|_| npy_error("header is not UTF-8"))?;

    if dict_value(&header, "descr")?.trim_matches(['\'', '"']) != DESCR {
        return Err(npy_error(format!("expected dtype {DESCR}: {header}")));
    }
    if dict_value(&header, "fortran_order")? != "False" {
        return Err(npy_error("fortran order is not supported"));
    }
    let shape = parse_shape(dict_value(&header, "shape")?)?;

    let count: usize = shape.iter().product();
    let mut bytes = vec![0u8; count * 4];
    reader.read_exact(&mut bytes).map_err(truncated)?;
    let data = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    Ok((shape, data))
}

fn header_text(shape: &[usize]) -> String {
    let dims = match shape {
        [single] => format!("{single},"),
        _ => shape
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    };
    let mut header =
        format!("{{'descr': '{DESCR}', 'fortran_order': False, 'shape': ({dims}), }}");

    // Preamble is magic (6) + version (2) + length (2); the newline ends the header.
    let unpadded = MAGIC.len() + 4 + header.len() + 1;
    let padding = (ALIGNMENT - unpadded % ALIGNMENT) % ALIGNMENT;
    header.extend(std::iter::repeat_n(' ', padding));
    header.push('\n');
    header
}

/// Raw text of `key`'s value in a flat Python dict literal.
fn dict_value<'a>(header: &'a str, key: &str) -> SampleResult<&'a str> {
    let pattern = format!("'{key}':");
    let start = header
        .find(&pattern)
        .ok_or_else(|| npy_error(format!("header has no '{key}'")))?
        + pattern.len();
    let rest = header[start..].trim_start();
    let end = if rest.starts_with('(') {
        rest.find(')').map(|i| i + 1)
    } else {
        rest.find([',', '}'])
    }
    .ok_or_else(|| npy_error(format!("unterminated value for '{key}'")))?;
    Ok(rest[..end].trim())
}

fn parse_shape(text: &str) -> SampleResult<Vec<usize>> {
    let inner = text
        .strip_prefix('(')
        .and_then(|t| t.strip_suffix(')'))
        .ok_or_else(|| npy_error(format!("malformed shape {text}")))?;
    inner
        .split(',')
        .map(str::trim)
        .filter(|dim| !dim.is_empty())
        .map(|dim| {
            dim.parse()
                .map_err(|_| npy_error(format!("malformed dimension {dim}")))
        })
        .collect()
}

fn npy_error(message: impl Into<String>) -> SampleError {
    SampleError::Npy {
        message: message.into(),
    }
}

#[allow(clippy::needless_pass_by_value)]
fn truncated(e: io::Error) -> SampleError {
    npy_error(format!("truncated file: {e}"))
}
