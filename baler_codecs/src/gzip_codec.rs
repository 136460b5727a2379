use std::io::{Cursor, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use baler_core::{Codec, Encoding, Result};

use crate::util::{codec_error, drain_into};

/// Leading bytes of every gzip member (RFC 1952).
const MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Default compression level (flate2's balanced setting).
pub const DEFAULT_LEVEL: u32 = 6;

/// DEFLATE codec behind gzip framing.
///
/// The balanced default of the set: moderate ratio, moderate speed, and a
/// self-describing two-byte signature.
///
/// Best for: general text, JSON, logs, mixed structured data.
pub struct GzipCodec {
    /// Compression level (0 = store, 9 = smallest).
    pub level: u32,
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl Codec for GzipCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Gzip
    }

    fn name(&self) -> &'static str {
        "gzip"
    }

    fn version(&self) -> &'static str {
        "flate2/1"
    }

    fn compressed_len_bound(&self, len: usize) -> usize {
        // deflate stored-block worst case (the zlib compressBound shape)
        // plus slack for the 18-byte gzip header and trailer.
        len + (len >> 12) + (len >> 14) + (len >> 25) + 32
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let capacity = output.len();
        let mut encoder = GzEncoder::new(Cursor::new(output), Compression::new(self.level));
        encoder
            .write_all(input)
            .map_err(|e| codec_error("gzip", e, capacity))?;
        let cursor = encoder
            .finish()
            .map_err(|e| codec_error("gzip", e, capacity))?;
        Ok(cursor.position() as usize)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        drain_into(GzDecoder::new(input), output, "gzip")
    }

    fn matches(&self, buf: &[u8]) -> bool {
        buf.starts_with(&MAGIC)
    }
}
