use std::io::{Cursor, Write};

use xz2::read::XzDecoder;
use xz2::write::XzEncoder;

use baler_core::{Codec, Encoding, Result};

use crate::util::{codec_error, drain_into};

/// Leading bytes of an xz stream header.
const MAGIC: [u8; 6] = [0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];

/// Default preset level. The set's "spend CPU to save bytes" slot, so the
/// highest preset.
pub const DEFAULT_LEVEL: u32 = 9;

/// LZMA2 codec behind the xz container.
///
/// Slowest encoder in the set and usually the smallest output.
///
/// Best for: cold data written once and read rarely.
pub struct XzCodec {
    /// Preset level (0-9).
    pub level: u32,
}

impl Default for XzCodec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
        }
    }
}

impl Codec for XzCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Xz
    }

    fn name(&self) -> &'static str {
        "xz"
    }

    fn version(&self) -> &'static str {
        "xz2/0.1"
    }

    fn compressed_len_bound(&self, len: usize) -> usize {
        // the lzma_stream_buffer_bound shape: uncompressed LZMA2 chunks
        // plus stream framing.
        len + len / 3 + 128
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let capacity = output.len();
        let mut encoder = XzEncoder::new(Cursor::new(output), self.level);
        encoder
            .write_all(input)
            .map_err(|e| codec_error("xz", e, capacity))?;
        let cursor = encoder
            .finish()
            .map_err(|e| codec_error("xz", e, capacity))?;
        Ok(cursor.position() as usize)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        drain_into(XzDecoder::new(input), output, "xz")
    }

    fn matches(&self, buf: &[u8]) -> bool {
        buf.starts_with(&MAGIC)
    }
}
