use crate::encoding::Encoding;
use crate::error::Result;

/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Is identified by a stable [`Encoding`] variant.
/// - Operates on whole buffers in one shot; no cross-call state.
/// - Must satisfy `decompress_to(compress_to(x)) == x` over its supported
///   input domain, and its `compressed_len_bound` must dominate the true
///   compressed size for every input of that length. A bound violation is
///   a bug in the codec, not a caller error.
///
/// Implementations are immutable process-lifetime values; the registry
/// hands out `&'static dyn Codec` and concurrent readers need no locking.
pub trait Codec: Send + Sync {
    /// The encoding this codec implements.
    fn encoding(&self) -> Encoding;

    /// Human-readable codec name.
    fn name(&self) -> &'static str;

    /// Version of the backing library.
    fn version(&self) -> &'static str;

    /// Upper bound on compressed size for a `len`-byte input. Used to size
    /// output buffers before calling [`compress_to`](Codec::compress_to).
    fn compressed_len_bound(&self, len: usize) -> usize;

    /// Compress `input` into `output`, returning the compressed size.
    ///
    /// Fails with `OutputTooSmall` when `output` cannot hold the result
    /// (retryable after resizing) and `Codec` when the backing library
    /// rejects the input.
    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Decompress `input` into `output`, returning the decoded size.
    ///
    /// The compressed stream does not carry its decoded size; `output`
    /// must be pre-sized by the caller from out-of-band knowledge. A
    /// stream that keeps going past the end of `output` is reported as
    /// `OutputTooSmall`.
    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Whether `buf` starts with this codec's stream signature.
    ///
    /// The default is `false`: a format with no self-describing header
    /// never positively claims a buffer.
    fn matches(&self, _buf: &[u8]) -> bool {
        false
    }
}
