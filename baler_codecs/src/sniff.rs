//! Stream-format detection from leading bytes.

use baler_core::Encoding;
use log::trace;

use crate::codec_for;

/// Signature check order: most distinctive signature first, so a short
/// prefix never shadows a longer one, with the headerless brotli trial
/// decode last.
const SNIFF_ORDER: [Encoding; 4] = [
    Encoding::Xz,
    Encoding::Lz4,
    Encoding::Gzip,
    Encoding::Brotli,
];

/// Best-guess identity of the codec that produced `buf`.
///
/// Falls back to [`Encoding::None`] when no codec claims the buffer.
/// Detection is positive for the self-describing formats (xz, lz4 frame,
/// gzip) and heuristic for brotli, which has no magic prefix: arbitrary
/// binary data can be misattributed to it, and brotli streams longer than
/// the trial-decode window can be missed. Never fails.
pub fn detect(buf: &[u8]) -> Encoding {
    for encoding in SNIFF_ORDER {
        if codec_for(encoding).matches(buf) {
            trace!("sniffed {encoding} ({} byte buffer)", buf.len());
            return encoding;
        }
    }
    Encoding::None
}

/// Whether `buf` looks like the output of any known codec.
pub fn is_compressed(buf: &[u8]) -> bool {
    detect(buf) != Encoding::None
}

/// Whether `buf` looks like the output of `encoding` specifically.
pub fn is_encoding(buf: &[u8], encoding: Encoding) -> bool {
    detect(buf) == encoding
}
