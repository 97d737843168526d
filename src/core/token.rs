//! core::token
//!
//! Compact textual tokens for hash digests.
//!
//! # Encoding
//!
//! Digests are rendered with the URL-safe Base64 alphabet
//! (`A-Z a-z 0-9 - _`) and no `=` padding. A trailing group of one or two
//! bytes emits only the characters that carry input bits, so an 8-byte
//! digest always becomes exactly [`TOKEN_LEN`] characters.
//!
//! # Example
//!
//! ```
//! use graphkeys::core::token::{encode, Token};
//!
//! let token: Token = encode(&[0u8; 8]);
//! assert_eq!(token.as_str(), "AAAAAAAAAAA");
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

/// Size in bytes of the digest a token is derived from.
pub const DIGEST_LEN: usize = 8;

/// Length in characters of a token rendered from a [`DIGEST_LEN`] digest.
pub const TOKEN_LEN: usize = 11;

/// Symbols a token may contain, in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// An unpadded, URL-safe Base64 rendering of a 64-bit digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    /// Get the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Encode a digest as a token.
pub fn encode(digest: &[u8; DIGEST_LEN]) -> Token {
    Token(encode_bytes(digest))
}

/// Encode an arbitrary byte buffer with the token alphabet, without padding.
///
/// Total over all inputs; the empty buffer encodes to the empty string.
pub fn encode_bytes(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
