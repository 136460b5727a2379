use baler_core::{Codec, Encoding, Error, Result};

/// No-op codec: output is the input, byte for byte.
///
/// Kept in the registry so "store uncompressed" flows through the same
/// dispatch path as the real codecs, and so selection has somewhere to
/// fall back to when no candidate clears the ratio threshold.
pub struct PassThroughCodec;

impl Codec for PassThroughCodec {
    fn encoding(&self) -> Encoding {
        Encoding::None
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn compressed_len_bound(&self, len: usize) -> usize {
        len
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        copy(input, output)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        copy(input, output)
    }

    // matches() stays false: raw bytes never positively identify themselves.
}

fn copy(input: &[u8], output: &mut [u8]) -> Result<usize> {
    if output.len() < input.len() {
        return Err(Error::OutputTooSmall {
            capacity: output.len(),
        });
    }
    output[..input.len()].copy_from_slice(input);
    Ok(input.len())
}
