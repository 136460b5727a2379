//! Bundled codec implementations, the registry that resolves them, and
//! the dispatch, sniffing, and benchmarking layers built on top.
//!
//! The registry is a fixed table: one immutable, process-lifetime codec
//! per [`Encoding`] variant. Adding a codec means adding a variant and a
//! registry arm; nothing is discovered dynamically.

mod brotli_codec;
mod gzip_codec;
mod lz4_codec;
mod passthrough;
mod util;
mod xz_codec;

pub mod bench;
pub mod ops;
pub mod sniff;

pub use brotli_codec::BrotliCodec;
pub use gzip_codec::GzipCodec;
pub use lz4_codec::Lz4Codec;
pub use passthrough::PassThroughCodec;
pub use xz_codec::XzCodec;

pub use bench::{
    find_fastest_compressor, find_fastest_decompressor, find_smallest_compressor, measure,
    Measure, MeasureOptions, NO_COMPRESSION_THRESHOLD,
};
pub use ops::{
    compress, compress_bound, compress_into, decompress, decompress_into, extension_of, name_of,
    version_of,
};
pub use sniff::{detect, is_compressed, is_encoding};

use baler_core::{Codec, Encoding, Result};

static NONE: PassThroughCodec = PassThroughCodec;
static BROTLI: BrotliCodec = BrotliCodec {
    quality: brotli_codec::DEFAULT_QUALITY,
    lg_window: brotli_codec::DEFAULT_LG_WINDOW,
};
static LZ4: Lz4Codec = Lz4Codec;
static GZIP: GzipCodec = GzipCodec {
    level: gzip_codec::DEFAULT_LEVEL,
};
static XZ: XzCodec = XzCodec {
    level: xz_codec::DEFAULT_LEVEL,
};

/// Resolve the codec implementation for an encoding.
///
/// Total over [`Encoding`]. Descriptors are immutable statics, safe to
/// share across threads without locking.
pub fn codec_for(encoding: Encoding) -> &'static dyn Codec {
    match encoding {
        Encoding::None => &NONE,
        Encoding::Brotli => &BROTLI,
        Encoding::Lz4 => &LZ4,
        Encoding::Gzip => &GZIP,
        Encoding::Xz => &XZ,
    }
}

/// Resolve a codec from its stable wire id, as stored by container
/// formats. Fails with `UnknownCodecId` for ids outside the known set.
pub fn codec_by_id(id: u16) -> Result<&'static dyn Codec> {
    Encoding::from_id(id).map(codec_for)
}
