//! Benchmarking and per-payload codec selection.
//!
//! [`measure`] runs every candidate codec against a sample payload and
//! produces one record per candidate; the `find_*` selectors pick a
//! winner for one objective. Candidates are always an explicit
//! caller-supplied list (see [`baler_core::encoding::ENCODINGS`] for the
//! stock priority order), processed strictly in order, with ties going to
//! the earliest candidate.

use std::fmt;
use std::time::{Duration, Instant};

use baler_core::{Codec, Encoding};
use log::debug;
use serde::Serialize;

use crate::codec_for;

/// Minimum size reduction, in percent, below which compressing is not
/// worth the CPU and the decoder dependency.
pub const NO_COMPRESSION_THRESHOLD: f64 = 5.0;

/// Which parts of a benchmark run to perform.
///
/// Decode timing always performs an untimed encode first; the compressed
/// bytes have to come from somewhere. Verification applies only when both
/// encode and decode were requested.
#[derive(Clone, Copy, Debug)]
pub struct MeasureOptions {
    pub encode: bool,
    pub decode: bool,
    pub verify: bool,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            encode: true,
            decode: true,
            verify: true,
        }
    }
}

impl MeasureOptions {
    /// Encode-only run, as used by the compression-oriented selectors.
    pub fn encode_only() -> Self {
        Self {
            encode: true,
            decode: false,
            verify: false,
        }
    }

    /// Decode-focused run, as used by [`find_fastest_decompressor`].
    pub fn decode_only() -> Self {
        Self {
            encode: false,
            decode: true,
            verify: false,
        }
    }
}

/// One benchmark record for one candidate codec. Transient; referenced
/// back to the codec only by encoding.
#[derive(Clone, Debug, Serialize)]
pub struct Measure {
    pub encoding: Encoding,
    /// Size reduction as a percentage: 0 means no change, negative means
    /// the output grew.
    pub ratio: f64,
    pub enc_time: Duration,
    pub dec_time: Duration,
    /// Scratch bytes allocated for the encode (the bound-sized buffer).
    pub mem_usage: usize,
    /// False when the codec failed during the run, or when a requested
    /// round-trip verification did not reproduce the input byte for byte.
    pub pass: bool,
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: ratio={:.2}% enctime={:.3}ms dectime={:.3}ms",
            if self.pass { " OK " } else { "FAIL" },
            self.encoding,
            self.ratio,
            self.enc_time.as_secs_f64() * 1e3,
            self.dec_time.as_secs_f64() * 1e3,
        )
    }
}

/// Benchmark every candidate against `original`, in order.
///
/// A failing candidate never aborts the rest of the run: it is reported
/// with `pass == false` and the remaining candidates are measured
/// normally.
pub fn measure(original: &[u8], candidates: &[Encoding], opts: MeasureOptions) -> Vec<Measure> {
    candidates
        .iter()
        .map(|&encoding| measure_codec(codec_for(encoding), original, opts))
        .collect()
}

fn measure_codec(codec: &dyn Codec, original: &[u8], opts: MeasureOptions) -> Measure {
    let mut record = Measure {
        encoding: codec.encoding(),
        ratio: 0.0,
        enc_time: Duration::ZERO,
        dec_time: Duration::ZERO,
        mem_usage: 0,
        pass: true,
    };

    // Encode first in all modes; decode needs the compressed bytes.
    let mut zipped = None;
    if opts.encode || opts.decode {
        let cap = codec.compressed_len_bound(original.len());
        record.mem_usage = cap;
        let start = Instant::now();
        let mut buf = vec![0u8; cap];
        match codec.compress_to(original, &mut buf) {
            Ok(n) => {
                buf.truncate(n);
                if opts.encode {
                    record.enc_time = start.elapsed();
                    record.ratio = if original.is_empty() {
                        0.0
                    } else {
                        100.0 * (1.0 - n as f64 / original.len() as f64)
                    };
                }
                zipped = Some(buf);
            }
            Err(err) => {
                debug!("{}: encode failed during measure: {err}", record.encoding);
                record.pass = false;
            }
        }
    }

    if opts.decode {
        if let Some(zipped) = &zipped {
            let start = Instant::now();
            match unzip(codec, zipped, original.len()) {
                Ok(unzipped) => {
                    record.dec_time = start.elapsed();
                    if opts.verify && opts.encode && unzipped != original {
                        debug!("{}: round-trip mismatch during measure", record.encoding);
                        record.pass = false;
                    }
                }
                Err(err) => {
                    debug!("{}: decode failed during measure: {err}", record.encoding);
                    record.pass = false;
                }
            }
        }
    }

    record
}

fn unzip(codec: &dyn Codec, zipped: &[u8], raw_len: usize) -> baler_core::Result<Vec<u8>> {
    let mut output = vec![0u8; raw_len];
    let n = codec.decompress_to(zipped, &mut output)?;
    output.truncate(n);
    Ok(output)
}

/// From an existing record set: the passing record with the greatest
/// ratio, provided it clears [`NO_COMPRESSION_THRESHOLD`]; otherwise
/// [`Encoding::None`].
pub fn pick_smallest(records: &[Measure]) -> Encoding {
    let mut choice = Encoding::None;
    let mut best = 0.0f64;
    for record in records {
        if record.pass && record.ratio > best && record.ratio >= NO_COMPRESSION_THRESHOLD {
            best = record.ratio;
            choice = record.encoding;
        }
    }
    choice
}

/// From an existing record set: the passing record with the lowest encode
/// time.
pub fn pick_fastest_encode(records: &[Measure]) -> Encoding {
    let mut choice = Encoding::None;
    let mut best = Duration::MAX;
    for record in records {
        if record.pass && record.enc_time < best {
            best = record.enc_time;
            choice = record.encoding;
        }
    }
    choice
}

/// From an existing record set: the passing record with the lowest decode
/// time.
pub fn pick_fastest_decode(records: &[Measure]) -> Encoding {
    let mut choice = Encoding::None;
    let mut best = Duration::MAX;
    for record in records {
        if record.pass && record.dec_time < best {
            best = record.dec_time;
            choice = record.encoding;
        }
    }
    choice
}

/// The candidate that shrinks `original` the most, or [`Encoding::None`]
/// when nothing clears the ratio threshold.
pub fn find_smallest_compressor(original: &[u8], candidates: &[Encoding]) -> Encoding {
    pick_smallest(&measure(original, candidates, MeasureOptions::encode_only()))
}

/// The candidate that encodes `original` fastest.
pub fn find_fastest_compressor(original: &[u8], candidates: &[Encoding]) -> Encoding {
    pick_fastest_encode(&measure(original, candidates, MeasureOptions::encode_only()))
}

/// The candidate that decodes its own encoding of `original` fastest.
pub fn find_fastest_decompressor(original: &[u8], candidates: &[Encoding]) -> Encoding {
    pick_fastest_decode(&measure(original, candidates, MeasureOptions::decode_only()))
}
