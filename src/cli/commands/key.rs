//! key command - Print the rewritten form of a single key

use crate::core::hasher::{KeyHasher, DEFAULT_SEED};
use crate::core::rewrite::{KeyRewriter, RewriteError};
use anyhow::{Context as _, Result};

/// Which grammar to apply to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// `prefix:local` or bare vertex key
    Vertex,
    /// `prefix:middle:suffix` or bare edge key
    Edge,
    /// `collection/key` reference
    Reference,
}

/// Rewrite `value` with the same hasher the streaming commands use.
///
/// # Errors
///
/// Returns an error if `value` violates the chosen grammar.
pub fn rewrite_key(kind: KeyKind, value: &str) -> Result<String, RewriteError> {
    let rewriter = KeyRewriter::new(KeyHasher::new(DEFAULT_SEED));
    match kind {
        KeyKind::Vertex => Ok(rewriter.rewrite_vertex_key(value)),
        KeyKind::Edge => rewriter.rewrite_edge_key(value),
        KeyKind::Reference => rewriter.rewrite_reference(value),
    }
}

/// Print the rewritten form of `value` to standard output.
pub fn key(kind: KeyKind, value: &str) -> Result<()> {
    let rewritten = rewrite_key(kind, value).context("Cannot rewrite key")?;
    println!("{}", rewritten);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind() {
        assert_eq!(
            rewrite_key(KeyKind::Vertex, "user:42").unwrap(),
            "user:jvUItEYBMwI"
        );
        assert_eq!(
            rewrite_key(KeyKind::Edge, "e:99:a").unwrap(),
            "e:IXjn2X5r-lU:a"
        );
        assert_eq!(
            rewrite_key(KeyKind::Reference, "user/7").unwrap(),
            "user/GFEMsQxolwg"
        );
    }

    #[test]
    fn grammar_errors_surface() {
        assert!(rewrite_key(KeyKind::Edge, "a:b").is_err());
        assert!(rewrite_key(KeyKind::Reference, "ab").is_err());
    }
}
