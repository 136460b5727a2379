//! Minimal single-buffer container format.
//!
//! The codec layer deliberately defines no persisted format and requires
//! the decoded length out of band. This header is the CLI's answer: it
//! records which codec produced the payload and how many bytes it decodes
//! back to.

/// Magic bytes of a baler container file.
pub const MAGIC: &[u8; 8] = b"BALER1\n\x00";

/// Container format version written by this binary.
pub const CONTAINER_VERSION: u16 = 1;

/// Fixed header size in bytes:
///   magic[8] + version:u16 + codec_id:u16 + raw_len:u64 + reserved[4] = 24
pub const HEADER_SIZE: usize = 24;

/// Decoded representation of the 24-byte container header.
#[derive(Debug, Clone)]
pub struct Header {
    pub version: u16,
    /// Stable wire id of the codec that produced the payload.
    pub codec_id: u16,
    /// Decompressed payload length in bytes.
    pub raw_len: u64,
}

impl Header {
    /// Serialize to exactly `HEADER_SIZE` bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..8].copy_from_slice(MAGIC);
        buf[8..10].copy_from_slice(&self.version.to_le_bytes());
        buf[10..12].copy_from_slice(&self.codec_id.to_le_bytes());
        buf[12..20].copy_from_slice(&self.raw_len.to_le_bytes());
        // reserved[4] stays zero
        buf
    }

    /// Deserialize from `HEADER_SIZE` bytes, checking magic and version.
    pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> anyhow::Result<Self> {
        if &buf[..8] != MAGIC {
            anyhow::bail!("bad magic bytes: not a baler container");
        }
        let header = Self {
            version: u16::from_le_bytes(buf[8..10].try_into()?),
            codec_id: u16::from_le_bytes(buf[10..12].try_into()?),
            raw_len: u64::from_le_bytes(buf[12..20].try_into()?),
        };
        if header.version != CONTAINER_VERSION {
            anyhow::bail!(
                "unsupported container version {} (only version {} is supported)",
                header.version,
                CONTAINER_VERSION
            );
        }
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_round_trips() {
        let header = Header {
            version: CONTAINER_VERSION,
            codec_id: 3,
            raw_len: 123_456,
        };
        let parsed = Header::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(parsed.version, CONTAINER_VERSION);
        assert_eq!(parsed.codec_id, 3);
        assert_eq!(parsed.raw_len, 123_456);
    }

    #[test]
    fn bad_magic_is_rejected() {
        let mut bytes = Header {
            version: CONTAINER_VERSION,
            codec_id: 0,
            raw_len: 0,
        }
        .to_bytes();
        bytes[0] = b'X';
        let err = Header::from_bytes(&bytes).unwrap_err().to_string();
        assert!(err.contains("magic"), "unexpected error: {err}");
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let bytes = Header {
            version: 9,
            codec_id: 0,
            raw_len: 0,
        }
        .to_bytes();
        assert!(Header::from_bytes(&bytes).is_err());
    }
}
