use std::io::{self, Read};

use baler_core::{Error, Result};

/// Decode an entire stream into a caller-sized slice.
///
/// Returns the number of bytes written, which may be less than
/// `output.len()`. When the slice fills up exactly, a one-byte probe read
/// distinguishes a stream that ended on the boundary from one that keeps
/// going; the latter is `OutputTooSmall`.
pub(crate) fn drain_into<R: Read>(
    mut decoder: R,
    output: &mut [u8],
    codec: &'static str,
) -> Result<usize> {
    let mut filled = 0usize;
    loop {
        if filled == output.len() {
            let mut probe = [0u8; 1];
            return match decoder.read(&mut probe) {
                Ok(0) => Ok(filled),
                Ok(_) => Err(Error::OutputTooSmall {
                    capacity: output.len(),
                }),
                Err(source) => Err(Error::Codec { codec, source }),
            };
        }
        match decoder.read(&mut output[filled..]) {
            Ok(0) => return Ok(filled),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(Error::Codec { codec, source }),
        }
    }
}

/// Map an encoder error against a fixed-capacity sink. `WriteZero` means
/// the sink ran out of room, which is the recoverable `OutputTooSmall`;
/// anything else is a codec failure.
pub(crate) fn codec_error(codec: &'static str, source: io::Error, capacity: usize) -> Error {
    if source.kind() == io::ErrorKind::WriteZero {
        Error::OutputTooSmall { capacity }
    } else {
        Error::Codec { codec, source }
    }
}
