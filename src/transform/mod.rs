//! transform
//!
//! Per-record rewriting of vertex and edge documents.
//!
//! # Field Policy
//!
//! Each record kind has a small table mapping system field names to a
//! [`FieldAction`]. Fields not in the table pass through unchanged and in
//! their original position.
//!
//! | field   | vertex       | edge         |
//! |---------|--------------|--------------|
//! | `_id`   | drop         | drop         |
//! | `_rev`  | drop         | drop         |
//! | `_key`  | vertex key   | edge key     |
//! | `_from` | keep         | reference    |
//! | `_to`   | keep         | reference    |
//!
//! # Failure
//!
//! A record either transforms completely or not at all; a failed record
//! never yields a partial document. A line that repeats a top-level field
//! name is rejected. Repeated names inside nested objects keep the last
//! value.

pub mod audit;

pub use audit::AuditEntry;

use serde::de::{self, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::core::rewrite::{KeyRewriter, RewriteError};

/// A decoded JSON object with insertion-ordered fields.
pub type Document = serde_json::Map<String, Value>;

/// Errors that reject a single record.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("field '{0}' appears more than once")]
    DuplicateField(String),

    #[error("field '{field}' must be a string")]
    NotAString { field: String },

    #[error("vertex has no _key field")]
    MissingKey,

    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

/// Kind of records in a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Vertex,
    Edge,
}

/// What to do with a field of a given name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAction {
    /// Pass through unchanged
    Keep,
    /// Omit from the output
    Drop,
    /// Rewrite as a vertex key and record an audit entry
    VertexKey,
    /// Rewrite as an edge key
    EdgeKey,
    /// Rewrite as a `collection/key` reference
    Reference,
}

const VERTEX_FIELDS: &[(&str, FieldAction)] = &[
    ("_id", FieldAction::Drop),
    ("_rev", FieldAction::Drop),
    ("_key", FieldAction::VertexKey),
];

const EDGE_FIELDS: &[(&str, FieldAction)] = &[
    ("_id", FieldAction::Drop),
    ("_rev", FieldAction::Drop),
    ("_key", FieldAction::EdgeKey),
    ("_from", FieldAction::Reference),
    ("_to", FieldAction::Reference),
];

impl RecordKind {
    /// Field actions for this kind; unlisted fields are kept.
    pub fn field_table(self) -> &'static [(&'static str, FieldAction)] {
        match self {
            RecordKind::Vertex => VERTEX_FIELDS,
            RecordKind::Edge => EDGE_FIELDS,
        }
    }

    /// Action for a field name.
    pub fn action(self, field: &str) -> FieldAction {
        self.field_table()
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, action)| *action)
            .unwrap_or(FieldAction::Keep)
    }

    /// Plural noun used in progress messages.
    pub fn plural(self) -> &'static str {
        match self {
            RecordKind::Vertex => "vertices",
            RecordKind::Edge => "edges",
        }
    }
}

/// Handling of vertex documents without a `_key` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Reject the record as malformed
    #[default]
    Reject,
    /// Write the record without an audit entry
    PassThrough,
}

impl MissingKeyPolicy {
    /// Parse a policy from its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "reject" => Some(MissingKeyPolicy::Reject),
            "pass-through" => Some(MissingKeyPolicy::PassThrough),
            _ => None,
        }
    }

    /// Config name of the policy.
    pub fn name(self) -> &'static str {
        match self {
            MissingKeyPolicy::Reject => "reject",
            MissingKeyPolicy::PassThrough => "pass-through",
        }
    }
}

/// A successfully transformed record.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    /// Rewritten document
    pub document: Document,
    /// Audit entry (vertices with `_key` only)
    pub audit: Option<AuditEntry>,
}

/// Rewrites documents of one [`RecordKind`].
#[derive(Debug, Clone)]
pub struct RecordTransformer {
    kind: RecordKind,
    rewriter: KeyRewriter,
    missing_key: MissingKeyPolicy,
}

impl RecordTransformer {
    /// Create a transformer for `kind` records.
    pub fn new(kind: RecordKind, rewriter: KeyRewriter) -> Self {
        Self {
            kind,
            rewriter,
            missing_key: MissingKeyPolicy::default(),
        }
    }

    /// Set the handling of vertices without `_key`.
    pub fn with_missing_key(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }

    /// The record kind this transformer handles.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Parse one JSON line and transform it.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a JSON object, repeats a field
    /// name, or violates the key grammar.
    pub fn transform_line(&self, line: &str) -> Result<Transformed, TransformError> {
        let fields: UniqueFields = serde_json::from_str(line)?;
        if let Some(field) = fields.duplicate {
            return Err(TransformError::DuplicateField(field));
        }
        self.transform(fields.document)
    }

    /// Transform a decoded document.
    ///
    /// # Errors
    ///
    /// Returns an error if a key or reference field is not a string, does
    /// not match its grammar, or (under [`MissingKeyPolicy::Reject`]) a
    /// vertex has no `_key`.
    pub fn transform(&self, document: Document) -> Result<Transformed, TransformError> {
        let mut output = Document::new();
        let mut audit = None;
        let mut saw_key = false;

        for (field, value) in document {
            match self.kind.action(&field) {
                FieldAction::Keep => {
                    output.insert(field, value);
                }
                FieldAction::Drop => {}
                FieldAction::VertexKey => {
                    let original = into_string(&field, value)?;
                    let key = self.rewriter.rewrite_vertex_key(&original);
                    audit = Some(AuditEntry::new(key.clone(), original));
                    saw_key = true;
                    output.insert(field, Value::String(key));
                }
                FieldAction::EdgeKey => {
                    let original = into_string(&field, value)?;
                    let key = self.rewriter.rewrite_edge_key(&original)?;
                    saw_key = true;
                    output.insert(field, Value::String(key));
                }
                FieldAction::Reference => {
                    let original = into_string(&field, value)?;
                    let reference = self.rewriter.rewrite_reference(&original)?;
                    output.insert(field, Value::String(reference));
                }
            }
        }

        if self.kind == RecordKind::Vertex
            && !saw_key
            && self.missing_key == MissingKeyPolicy::Reject
        {
            return Err(TransformError::MissingKey);
        }

        Ok(Transformed {
            document: output,
            audit,
        })
    }
}

fn into_string(field: &str, value: Value) -> Result<String, TransformError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(TransformError::NotAString {
            field: field.to_string(),
        }),
    }
}

/// A top-level JSON object, plus the first field name it repeats.
struct UniqueFields {
    document: Document,
    duplicate: Option<String>,
}

impl<'de> Deserialize<'de> for UniqueFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_map(UniqueFieldsVisitor)
    }
}

struct UniqueFieldsVisitor;

impl<'de> Visitor<'de> for UniqueFieldsVisitor {
    type Value = UniqueFields;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut document = Document::new();
        let mut duplicate = None;

        while let Some(field) = map.next_key::<String>()? {
            let value: Value = map.next_value()?;
            if document.contains_key(&field) {
                duplicate.get_or_insert(field);
            } else {
                document.insert(field, value);
            }
        }

        Ok(UniqueFields {
            document,
            duplicate,
        })
    }
}
