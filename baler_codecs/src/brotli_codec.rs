use std::io::{Cursor, Read};

use brotli::enc::BrotliEncoderParams;

use baler_core::{Codec, Encoding, Result};

use crate::util::{codec_error, drain_into};

/// Default quality and window, tuned for ratio on text payloads.
pub const DEFAULT_QUALITY: u32 = 11;
pub const DEFAULT_LG_WINDOW: u32 = 22;

const BUFFER_SIZE: usize = 4096;

/// How many leading bytes the trial decode in `matches` examines.
const SNIFF_INPUT_CAP: usize = 4 * 1024;
/// Decoded bytes at which the trial decode declares the stream plausible.
const SNIFF_OUTPUT_CAP: usize = 64 * 1024;

/// Brotli codec over the raw stream format.
///
/// Its built-in static dictionary is biased toward ASCII text, which makes
/// it the short-string/text slot of the set. The raw stream carries no
/// magic prefix, so detection is a bounded trial decode and inherently
/// best-effort.
pub struct BrotliCodec {
    /// Quality (0-11).
    pub quality: u32,
    /// Log2 of the sliding window size.
    pub lg_window: u32,
}

impl Default for BrotliCodec {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            lg_window: DEFAULT_LG_WINDOW,
        }
    }
}

impl Codec for BrotliCodec {
    fn encoding(&self) -> Encoding {
        Encoding::Brotli
    }

    fn name(&self) -> &'static str {
        "brotli"
    }

    fn version(&self) -> &'static str {
        "brotli/8"
    }

    fn compressed_len_bound(&self, len: usize) -> usize {
        // uncompressed-metablock worst case plus stream header slack.
        len + (len >> 10) + 64
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let capacity = output.len();
        let params = BrotliEncoderParams {
            quality: self.quality as i32,
            lgwin: self.lg_window as i32,
            ..BrotliEncoderParams::default()
        };
        let mut source = input;
        let mut sink = Cursor::new(output);
        // The one-shot entry point surfaces sink-full errors; the writer
        // wrapper only flushes its tail on drop, where errors vanish.
        brotli::BrotliCompress(&mut source, &mut sink, &params)
            .map_err(|e| codec_error("brotli", e, capacity))?;
        Ok(sink.position() as usize)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        drain_into(brotli::Decompressor::new(input, BUFFER_SIZE), output, "brotli")
    }

    /// Bounded trial decode.
    ///
    /// Accepts when the decoder finishes the prefix cleanly or keeps
    /// producing output up to the cap. Misses valid streams whose first
    /// `SNIFF_INPUT_CAP` bytes do not decode cleanly on their own, and can
    /// claim arbitrary binary data that happens to parse.
    fn matches(&self, buf: &[u8]) -> bool {
        if buf.is_empty() {
            return false;
        }
        let take = buf.len().min(SNIFF_INPUT_CAP);
        let mut decoder = brotli::Decompressor::new(&buf[..take], BUFFER_SIZE);
        let mut scratch = [0u8; 4096];
        let mut decoded = 0usize;
        loop {
            match decoder.read(&mut scratch) {
                Ok(0) => return true,
                Ok(n) => {
                    decoded += n;
                    if decoded >= SNIFF_OUTPUT_CAP {
                        return true;
                    }
                }
                Err(_) => return false,
            }
        }
    }
}
