//! Dispatch operations: the slice-based low-level surface and the
//! buffer-owning convenience layer on top of it.

use baler_core::{Encoding, Result};
use log::debug;

use crate::codec_for;

/// Compress `input` into the caller-provided `output` slice, returning
/// the compressed size.
///
/// Fails with `OutputTooSmall` when `output` cannot hold the result;
/// sizing `output` with [`compress_bound`] makes that impossible.
pub fn compress_into(encoding: Encoding, input: &[u8], output: &mut [u8]) -> Result<usize> {
    let n = codec_for(encoding).compress_to(input, output)?;
    debug!("{encoding}: compressed {} -> {n} bytes", input.len());
    Ok(n)
}

/// Decompress `input` into the caller-provided `output` slice, returning
/// the decoded size.
///
/// Compressed streams do not record their decoded length here; `output`
/// must be pre-sized from out-of-band knowledge (typically an enclosing
/// container format). A stream larger than `output` fails with
/// `OutputTooSmall`.
pub fn decompress_into(encoding: Encoding, input: &[u8], output: &mut [u8]) -> Result<usize> {
    let n = codec_for(encoding).decompress_to(input, output)?;
    debug!("{encoding}: decompressed {} -> {n} bytes", input.len());
    Ok(n)
}

/// Upper bound on the compressed size of any `len`-byte input.
///
/// Pure and infallible; the true compressed size never exceeds it.
pub fn compress_bound(encoding: Encoding, len: usize) -> usize {
    codec_for(encoding).compressed_len_bound(len)
}

/// Human-readable codec name.
pub fn name_of(encoding: Encoding) -> &'static str {
    codec_for(encoding).name()
}

/// Version of the library backing a codec.
pub fn version_of(encoding: Encoding) -> &'static str {
    codec_for(encoding).version()
}

/// Preferred file extension for a codec's output.
pub fn extension_of(encoding: Encoding) -> &'static str {
    encoding.extension()
}

/// Compress `input` into a fresh buffer: sized at the worst case, packed,
/// then shrunk to the actual compressed size.
pub fn compress(encoding: Encoding, input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; compress_bound(encoding, input.len())];
    let n = compress_into(encoding, input, &mut output)?;
    output.truncate(n);
    Ok(output)
}

/// Decompress `input`, whose decoded size `raw_len` the caller supplies.
///
/// `raw_len` may overshoot; the result is truncated to what the stream
/// actually produced. Undershooting fails with `OutputTooSmall`.
pub fn decompress(encoding: Encoding, input: &[u8], raw_len: usize) -> Result<Vec<u8>> {
    let mut output = vec![0u8; raw_len];
    let n = decompress_into(encoding, input, &mut output)?;
    output.truncate(n);
    Ok(output)
}
