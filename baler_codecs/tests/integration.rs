//! End-to-end tests over the real registry: round-trips across every
//! encoding and size class, bound guarantees, sniffer behavior, buffer
//! sizing failure modes, and payload-driven selection.

use baler_codecs::{
    codec_by_id, codec_for, compress, compress_bound, compress_into, decompress, detect,
    find_fastest_compressor, find_fastest_decompressor, find_smallest_compressor, is_compressed,
    is_encoding, measure, name_of, version_of, MeasureOptions,
};
use baler_core::{Codec, Encoding, Error, ENCODINGS};

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

/// Generate `len` highly compressible bytes (repeating pattern).
fn compressible_bytes(len: usize) -> Vec<u8> {
    let pattern = b"the quick brown fox jumps over the lazy dog. ";
    (0..len).map(|i| pattern[i % pattern.len()]).collect()
}

// -- round trips -----------------------------------------------------------

#[test]
fn round_trip_compressible_data_all_encodings() {
    for size in [0usize, 1, 64, 4096, 70_000] {
        let data = compressible_bytes(size);
        for encoding in ENCODINGS {
            let zipped = compress(encoding, &data).unwrap();
            let unzipped = decompress(encoding, &zipped, data.len()).unwrap();
            assert_eq!(
                unzipped, data,
                "{encoding} should round-trip {size} compressible bytes"
            );
        }
    }
}

#[test]
fn round_trip_random_data_all_encodings() {
    let data = pseudo_random_bytes(16 * 1024, 0xDEAD_BEEF);
    for encoding in ENCODINGS {
        let zipped = compress(encoding, &data).unwrap();
        let unzipped = decompress(encoding, &zipped, data.len()).unwrap();
        assert_eq!(unzipped, data, "{encoding} should round-trip random bytes");
    }
}

#[test]
fn passthrough_is_lossless_and_always_available() {
    for data in [&b""[..], &b"x"[..], &pseudo_random_bytes(1000, 7)[..]] {
        let zipped = compress(Encoding::None, data).unwrap();
        assert_eq!(zipped, data);
        assert_eq!(decompress(Encoding::None, &zipped, data.len()).unwrap(), data);
    }
}

#[test]
fn empty_input_packs_and_unpacks_everywhere() {
    for encoding in ENCODINGS {
        let zipped = compress(encoding, b"").unwrap();
        let unzipped = decompress(encoding, &zipped, 0).unwrap();
        assert!(unzipped.is_empty(), "{encoding} empty round-trip");
    }
}

#[test]
fn context_aliases_compress_identically_to_their_targets() {
    let data = compressible_bytes(2048);
    assert_eq!(
        compress(Encoding::DEFAULT, &data).unwrap(),
        compress(Encoding::Gzip, &data).unwrap()
    );
    assert_eq!(
        compress(Encoding::FAST, &data).unwrap(),
        compress(Encoding::Lz4, &data).unwrap()
    );
}

// -- bound guarantee -------------------------------------------------------

#[test]
fn bound_always_covers_the_actual_compressed_size() {
    for size in [0usize, 1, 17, 1000, 65_536 + 7] {
        for data in [compressible_bytes(size), pseudo_random_bytes(size, 99)] {
            for encoding in ENCODINGS {
                let bound = compress_bound(encoding, data.len());
                // compressing into a bound-sized buffer must never fail
                let mut output = vec![0u8; bound];
                let n = compress_into(encoding, &data, &mut output).unwrap();
                assert!(
                    n <= bound,
                    "{encoding}: compressed {n} bytes from {size}, bound said {bound}"
                );
            }
        }
    }
}

// -- buffer sizing failure modes -------------------------------------------

#[test]
fn undersized_output_buffer_is_a_recoverable_error() {
    let data = compressible_bytes(10_000);
    let mut tiny = [0u8; 4];
    let err = compress_into(Encoding::Gzip, &data, &mut tiny).unwrap_err();
    assert!(matches!(err, Error::OutputTooSmall { .. }), "got {err}");

    // retry at the bound succeeds
    let mut sized = vec![0u8; compress_bound(Encoding::Gzip, data.len())];
    compress_into(Encoding::Gzip, &data, &mut sized).unwrap();
}

#[test]
fn undersized_decode_buffer_is_a_recoverable_error() {
    let data = compressible_bytes(10_000);
    let zipped = compress(Encoding::Gzip, &data).unwrap();
    let err = decompress(Encoding::Gzip, &zipped, data.len() / 2).unwrap_err();
    assert!(matches!(err, Error::OutputTooSmall { .. }), "got {err}");
}

#[test]
fn oversized_decode_buffer_truncates_to_the_stream() {
    let data = compressible_bytes(4096);
    let zipped = compress(Encoding::Xz, &data).unwrap();
    let unzipped = decompress(Encoding::Xz, &zipped, data.len() + 100).unwrap();
    assert_eq!(unzipped, data);
}

#[test]
fn malformed_streams_are_rejected_not_fatal() {
    let garbage = b"this is not a compressed stream at all, just prose";
    for encoding in [Encoding::Brotli, Encoding::Lz4, Encoding::Gzip, Encoding::Xz] {
        assert!(
            decompress(encoding, garbage, 256).is_err(),
            "{encoding} should reject garbage input"
        );
    }
}

// -- sniffer ---------------------------------------------------------------

#[test]
fn sniffer_recovers_self_describing_formats() {
    let data = compressible_bytes(3000);
    for encoding in [Encoding::Gzip, Encoding::Xz, Encoding::Lz4] {
        let zipped = compress(encoding, &data).unwrap();
        assert_eq!(detect(&zipped), encoding, "{encoding} signature");
        assert!(is_compressed(&zipped));
        assert!(is_encoding(&zipped, encoding));
    }
}

#[test]
fn brotli_trial_decode_accepts_its_own_small_output() {
    let zipped = compress(Encoding::Brotli, b"a short ascii-ish payload").unwrap();
    assert!(codec_for(Encoding::Brotli).matches(&zipped));
    assert!(is_compressed(&zipped));
}

#[test]
fn plain_data_detects_as_uncompressed() {
    assert_eq!(detect(b""), Encoding::None);
    assert_eq!(detect(b"<!DOCTYPE html>"), Encoding::None);
    assert_eq!(detect(&compressible_bytes(500)), Encoding::None);
    assert!(!is_compressed(b"hello world"));
}

// -- registry lookups ------------------------------------------------------

#[test]
fn lookups_are_total_over_the_known_set() {
    for encoding in ENCODINGS {
        assert!(!name_of(encoding).is_empty());
        assert!(!version_of(encoding).is_empty());
        assert_eq!(codec_by_id(encoding.id()).unwrap().encoding(), encoding);
    }
    assert_eq!(name_of(Encoding::Gzip), "gzip");
}

#[test]
fn unknown_wire_id_resolution_fails_cleanly() {
    assert!(matches!(codec_by_id(99), Err(Error::UnknownCodecId(99))));
}

// -- benchmark & selection -------------------------------------------------

#[test]
fn measure_produces_one_ordered_record_per_candidate() {
    let data = compressible_bytes(8192);
    let candidates = [Encoding::Gzip, Encoding::Lz4, Encoding::None];
    let records = measure(&data, &candidates, MeasureOptions::default());
    assert_eq!(records.len(), candidates.len());
    for (record, &candidate) in records.iter().zip(&candidates) {
        assert_eq!(record.encoding, candidate);
        assert!(record.pass, "{candidate} should verify on compressible data");
    }
    // real codecs shrink the repeating pattern, the identity does not
    assert!(records[0].ratio > 0.0);
    assert!(records[1].ratio > 0.0);
    assert_eq!(records[2].ratio, 0.0);
}

#[test]
fn smallest_selection_prefers_a_real_codec_on_compressible_data() {
    let data = compressible_bytes(16_384);
    let choice = find_smallest_compressor(&data, &ENCODINGS);
    assert_ne!(choice, Encoding::None);
}

#[test]
fn smallest_selection_falls_back_on_incompressible_data() {
    // high-entropy input: nothing clears the 5% threshold
    let data = pseudo_random_bytes(16_384, 0x1234_5678);
    assert_eq!(find_smallest_compressor(&data, &ENCODINGS), Encoding::None);
}

#[test]
fn fastest_selectors_return_a_candidate() {
    let data = compressible_bytes(8192);
    let candidates = [Encoding::Lz4, Encoding::Gzip];
    assert!(candidates.contains(&find_fastest_compressor(&data, &candidates)));
    assert!(candidates.contains(&find_fastest_decompressor(&data, &candidates)));
}
