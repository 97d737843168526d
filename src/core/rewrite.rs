//! core::rewrite
//!
//! Key rewriting grammar for vertex keys, edge keys, and edge references.
//!
//! # Grammar
//!
//! - Vertex key `prefix:local` becomes `prefix:<hash(local)>`; a key
//!   without `:` is hashed whole.
//! - Edge key `prefix:middle:suffix` becomes `prefix:<hash(middle)>:suffix`;
//!   a key without `:` is hashed whole, a key with exactly one `:` is
//!   rejected.
//! - Reference `collection/key` becomes `collection/<vertex rewrite of key>`;
//!   a reference without `/` is rejected.
//!
//! Only the first separator counts. Everything after it, including further
//! separators, belongs to the hashed (or suffix) segment.
//!
//! # Example
//!
//! ```
//! use graphkeys::core::rewrite::KeyRewriter;
//!
//! let rewriter = KeyRewriter::default();
//! assert_eq!(rewriter.rewrite_vertex_key("user:42"), "user:jvUItEYBMwI");
//! assert_eq!(rewriter.rewrite_reference("user/42").unwrap(), "user/jvUItEYBMwI");
//! assert!(rewriter.rewrite_edge_key("only:one").is_err());
//! ```

use thiserror::Error;

use super::hasher::KeyHasher;

/// Separator between a key's partition prefix and its local part.
pub const KEY_SEPARATOR: char = ':';

/// Separator between a reference's collection name and its key.
pub const REFERENCE_SEPARATOR: char = '/';

/// A key or reference that does not match the rewriting grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("edge key '{0}' has a prefix but no second ':' separator")]
    MissingEdgeKeySeparator(String),

    #[error("reference '{0}' has no '/' separator")]
    MissingReferenceSeparator(String),
}

/// Applies the rewriting grammar with a fixed [`KeyHasher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyRewriter {
    hasher: KeyHasher,
}

impl KeyRewriter {
    /// Create a rewriter around `hasher`.
    pub const fn new(hasher: KeyHasher) -> Self {
        Self { hasher }
    }

    /// The hasher used for local key segments.
    pub fn hasher(&self) -> &KeyHasher {
        &self.hasher
    }

    /// Rewrite a vertex key. Total: every string is a valid vertex key.
    pub fn rewrite_vertex_key(&self, key: &str) -> String {
        match key.split_once(KEY_SEPARATOR) {
            Some((prefix, local)) => {
                let token = self.hasher.hash(local.as_bytes());
                let mut out = String::with_capacity(prefix.len() + 1 + token.as_str().len());
                out.push_str(prefix);
                out.push(KEY_SEPARATOR);
                out.push_str(token.as_str());
                out
            }
            None => self.hasher.hash(key.as_bytes()).into_string(),
        }
    }

    /// Rewrite an edge key.
    ///
    /// # Errors
    ///
    /// Returns `RewriteError::MissingEdgeKeySeparator` if the key contains
    /// exactly one `:`.
    pub fn rewrite_edge_key(&self, key: &str) -> Result<String, RewriteError> {
        let Some((prefix, rest)) = key.split_once(KEY_SEPARATOR) else {
            return Ok(self.hasher.hash(key.as_bytes()).into_string());
        };
        let (middle, suffix) = rest
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| RewriteError::MissingEdgeKeySeparator(key.to_string()))?;

        let token = self.hasher.hash(middle.as_bytes());
        let mut out =
            String::with_capacity(prefix.len() + token.as_str().len() + suffix.len() + 2);
        out.push_str(prefix);
        out.push(KEY_SEPARATOR);
        out.push_str(token.as_str());
        out.push(KEY_SEPARATOR);
        out.push_str(suffix);
        Ok(out)
    }

    /// Rewrite a `collection/key` reference, keeping the collection verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RewriteError::MissingReferenceSeparator` if there is no `/`.
    pub fn rewrite_reference(&self, reference: &str) -> Result<String, RewriteError> {
        let (collection, local) = reference
            .split_once(REFERENCE_SEPARATOR)
            .ok_or_else(|| RewriteError::MissingReferenceSeparator(reference.to_string()))?;

        let key = self.rewrite_vertex_key(local);
        let mut out = String::with_capacity(collection.len() + 1 + key.len());
        out.push_str(collection);
        out.push(REFERENCE_SEPARATOR);
        out.push_str(&key);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(s: &str) -> String {
        KeyHasher::default().hash(s.as_bytes()).into_string()
    }

    #[test]
    fn rewriter_uses_given_hasher() {
        let seeded = KeyRewriter::new(KeyHasher::new(1));
        assert_eq!(seeded.hasher().seed(), 1);
        assert_eq!(
            seeded.rewrite_vertex_key("42"),
            KeyHasher::new(1).hash(b"42").into_string()
        );
        assert_ne!(seeded.rewrite_vertex_key("42"), hash("42"));
    }

    #[test]
    fn vertex_key_with_prefix() {
        let r = KeyRewriter::default();
        assert_eq!(r.rewrite_vertex_key("user:42"), "user:jvUItEYBMwI");
        assert!(r.rewrite_vertex_key("shard7:abc").starts_with("shard7:"));
    }

    #[test]
    fn vertex_key_without_prefix_is_hashed_whole() {
        let r = KeyRewriter::default();
        assert_eq!(r.rewrite_vertex_key("42"), "jvUItEYBMwI");
        assert_eq!(r.rewrite_vertex_key(""), hash(""));
    }

    #[test]
    fn vertex_key_splits_at_first_colon_only() {
        let r = KeyRewriter::default();
        assert_eq!(r.rewrite_vertex_key("a:b:c"), format!("a:{}", hash("b:c")));
        assert_eq!(r.rewrite_vertex_key(":x"), format!(":{}", hash("x")));
        assert_eq!(r.rewrite_vertex_key("p:"), format!("p:{}", hash("")));
    }

    #[test]
    fn edge_key_three_segments() {
        let r = KeyRewriter::default();
        let key = r.rewrite_edge_key("e:99:a").unwrap();
        assert_eq!(key, "e:IXjn2X5r-lU:a");

        let key = r.rewrite_edge_key("c1:mid:suffix").unwrap();
        assert!(key.starts_with("c1:"));
        assert!(key.ends_with(":suffix"));
    }

    #[test]
    fn edge_key_suffix_keeps_further_colons() {
        let r = KeyRewriter::default();
        assert_eq!(
            r.rewrite_edge_key("c:m:s:t").unwrap(),
            format!("c:{}:s:t", hash("m"))
        );
        assert_eq!(r.rewrite_edge_key("c::").unwrap(), format!("c:{}:", hash("")));
    }

    #[test]
    fn edge_key_without_colon_is_hashed_whole() {
        let r = KeyRewriter::default();
        assert_eq!(r.rewrite_edge_key("12345").unwrap(), hash("12345"));
    }

    #[test]
    fn edge_key_with_one_colon_is_rejected() {
        let r = KeyRewriter::default();
        assert_eq!(
            r.rewrite_edge_key("onlyoneColon:x"),
            Err(RewriteError::MissingEdgeKeySeparator(
                "onlyoneColon:x".to_string()
            ))
        );
    }

    #[test]
    fn reference_rewrites_local_key() {
        let r = KeyRewriter::default();
        assert_eq!(r.rewrite_reference("user/42").unwrap(), "user/jvUItEYBMwI");
        assert_eq!(
            r.rewrite_reference("users/shard7:abc").unwrap(),
            format!("users/shard7:{}", hash("abc"))
        );
    }

    #[test]
    fn reference_agrees_with_vertex_key() {
        let r = KeyRewriter::default();
        for key in ["42", "shard:9", "x/y", ""] {
            let reference = format!("coll/{}", key);
            assert_eq!(
                r.rewrite_reference(&reference).unwrap(),
                format!("coll/{}", r.rewrite_vertex_key(key))
            );
        }
    }

    #[test]
    fn reference_without_slash_is_rejected() {
        let r = KeyRewriter::default();
        assert!(matches!(
            r.rewrite_reference("user42"),
            Err(RewriteError::MissingReferenceSeparator(_))
        ));
    }
}
