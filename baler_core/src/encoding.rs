use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A supported compression encoding.
///
/// Each variant names one backing codec library. A second, per-context
/// taxonomy is layered on top as associated constants ([`Encoding::FAST`],
/// [`Encoding::DEFAULT`], ...), so callers can ask for an intent and get a
/// concrete codec. Every alias resolves to exactly one variant;
/// [`Encoding::None`] belongs to both taxonomies and is the identity
/// transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Uncompressed
    None,
    /// Brotli raw stream (.br) - text-biased dictionary coding, no magic prefix
    Brotli,
    /// LZ4 frame (.lz4) - fastest decode
    Lz4,
    /// DEFLATE behind gzip framing (.gz)
    Gzip,
    /// LZMA2 behind the xz container (.xz) - smallest output, slowest encode
    Xz,
}

/// Stock candidate list for benchmarking and selection, cheapest encoders
/// first. The ordering doubles as the tie-break preference: selectors keep
/// the earliest candidate on equal scores.
pub const ENCODINGS: [Encoding; 5] = [
    Encoding::Lz4,
    Encoding::Brotli,
    Encoding::Gzip,
    Encoding::Xz,
    Encoding::None,
];

impl Encoding {
    /// Per-context aliases. Each names an intent and resolves to one
    /// library identity.
    pub const UNCOMPRESSED: Encoding = Encoding::None;
    /// Short ASCII-heavy payloads.
    pub const ASCII: Encoding = Encoding::Brotli;
    /// Throughput over ratio.
    pub const FAST: Encoding = Encoding::Lz4;
    /// Balanced ratio and speed.
    pub const DEFAULT: Encoding = Encoding::Gzip;
    /// Ratio over throughput.
    pub const EXTRA: Encoding = Encoding::Xz;

    /// Stable numeric id, as stored by container formats.
    pub fn id(self) -> u16 {
        match self {
            Encoding::None => 0,
            Encoding::Brotli => 1,
            Encoding::Lz4 => 2,
            Encoding::Gzip => 3,
            Encoding::Xz => 4,
        }
    }

    /// Resolve a stable numeric id back to an encoding.
    pub fn from_id(id: u16) -> Result<Self, Error> {
        match id {
            0 => Ok(Encoding::None),
            1 => Ok(Encoding::Brotli),
            2 => Ok(Encoding::Lz4),
            3 => Ok(Encoding::Gzip),
            4 => Ok(Encoding::Xz),
            other => Err(Error::UnknownCodecId(other)),
        }
    }

    /// Canonical lowercase token, also what [`Display`](fmt::Display) and
    /// [`FromStr`] use.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::None => "none",
            Encoding::Brotli => "brotli",
            Encoding::Lz4 => "lz4",
            Encoding::Gzip => "gzip",
            Encoding::Xz => "xz",
        }
    }

    /// Preferred file extension for this encoding's output.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Encoding::None => "",
            Encoding::Brotli => ".br",
            Encoding::Lz4 => ".lz4",
            Encoding::Gzip => ".gz",
            Encoding::Xz => ".xz",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = Error;

    /// Accepts both library tokens ("gzip", "lz4") and context tokens
    /// ("fast", "default"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "raw" | "uncompressed" => Ok(Encoding::UNCOMPRESSED),
            "br" | "brotli" | "ascii" => Ok(Encoding::ASCII),
            "lz4" | "fast" => Ok(Encoding::FAST),
            "gz" | "gzip" | "deflate" | "default" => Ok(Encoding::DEFAULT),
            "xz" | "lzma" | "extra" => Ok(Encoding::EXTRA),
            other => Err(Error::UnknownCodecName(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_aliases_resolve_to_library_identities() {
        assert_eq!(Encoding::UNCOMPRESSED, Encoding::None);
        assert_eq!(Encoding::ASCII, Encoding::Brotli);
        assert_eq!(Encoding::FAST, Encoding::Lz4);
        assert_eq!(Encoding::DEFAULT, Encoding::Gzip);
        assert_eq!(Encoding::EXTRA, Encoding::Xz);
    }

    #[test]
    fn wire_id_round_trips() {
        for encoding in ENCODINGS {
            assert_eq!(Encoding::from_id(encoding.id()).unwrap(), encoding);
        }
    }

    #[test]
    fn unknown_wire_id_is_an_error() {
        assert!(matches!(
            Encoding::from_id(42),
            Err(Error::UnknownCodecId(42))
        ));
    }

    #[test]
    fn parse_accepts_library_and_context_tokens() {
        assert_eq!("gzip".parse::<Encoding>().unwrap(), Encoding::Gzip);
        assert_eq!("gz".parse::<Encoding>().unwrap(), Encoding::Gzip);
        assert_eq!("default".parse::<Encoding>().unwrap(), Encoding::Gzip);
        assert_eq!("fast".parse::<Encoding>().unwrap(), Encoding::Lz4);
        assert_eq!("LZMA".parse::<Encoding>().unwrap(), Encoding::Xz);
        assert_eq!("brotli".parse::<Encoding>().unwrap(), Encoding::Brotli);
        assert_eq!("none".parse::<Encoding>().unwrap(), Encoding::None);
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert!("zpaq".parse::<Encoding>().is_err());
        assert!("".parse::<Encoding>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for encoding in ENCODINGS {
            assert_eq!(encoding.as_str().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn extensions() {
        assert_eq!(Encoding::Gzip.extension(), ".gz");
        assert_eq!(Encoding::Xz.extension(), ".xz");
        assert_eq!(Encoding::None.extension(), "");
    }
}
