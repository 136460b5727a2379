use std::io::{self, Cursor, Write};

use lz4_flex::frame::{Error as FrameError, FrameDecoder, FrameEncoder};

use baler_core::{Codec, Encoding, Error, Result};

use crate::util::{codec_error, drain_into};

/// LZ4 frame magic number (0x184D2204, little-endian on the wire).
const MAGIC: [u8; 4] = [0x04, 0x22, 0x4d, 0x18];

/// Nominal frame block size, used only for the bound computation.
const FRAME_BLOCK: usize = 64 * 1024;

/// LZ4 codec using the self-describing frame format.
///
/// Fastest decompression of the set - the pick when decode latency matters
/// more than size reduction. The frame format (rather than a bare block)
/// is used so the output carries a magic prefix the sniffer can key on.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn encoding(&self) -> Encoding {
        Encoding::Lz4
    }

    fn name(&self) -> &'static str {
        "lz4"
    }

    fn version(&self) -> &'static str {
        "lz4_flex/0.11"
    }

    fn compressed_len_bound(&self, len: usize) -> usize {
        // worst-case single-block expansion, plus a 4-byte size header per
        // frame block and slack for the frame header and end mark.
        lz4_flex::block::get_maximum_output_size(len) + 4 * (len / FRAME_BLOCK + 1) + 32
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let capacity = output.len();
        let mut encoder = FrameEncoder::new(Cursor::new(output));
        encoder
            .write_all(input)
            .map_err(|e| codec_error("lz4", e, capacity))?;
        let cursor = encoder.finish().map_err(|e| frame_error(e, capacity))?;
        Ok(cursor.position() as usize)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        drain_into(FrameDecoder::new(input), output, "lz4")
    }

    fn matches(&self, buf: &[u8]) -> bool {
        buf.starts_with(&MAGIC)
    }
}

fn frame_error(e: FrameError, capacity: usize) -> Error {
    match e {
        FrameError::IoError(source) => codec_error("lz4", source, capacity),
        other => Error::Codec {
            codec: "lz4",
            source: io::Error::new(io::ErrorKind::InvalidData, other),
        },
    }
}
