pub mod codec;
pub mod encoding;
pub mod error;

pub use codec::Codec;
pub use encoding::{Encoding, ENCODINGS};
pub use error::{Error, Result};
