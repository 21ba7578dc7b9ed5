// Narrow filter expressions.
//
// A narrow is an ordered list of operator/operand pairs describing a
// filtered view of a conversation. This module holds the closed set of
// filter kinds and the capability-based resolution of the direct-message
// operator; serialization lives in `link`.

pub mod hash;
pub mod link;

/// Lowest capability level at which the server understands the modern `dm`
/// operator. Older servers get the legacy `pm-with` spelling.
pub const DM_OPERATOR_CAPABILITY: u32 = 177;

/// One filter kind plus its operand.
///
/// The set is closed and serialization matches it exhaustively, so adding a
/// kind is a compile-time-checked change rather than a runtime gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Narrow {
    /// All messages in one stream, by id.
    Stream(u64),
    /// All messages under one topic.
    Topic(String),
    /// A direct-message conversation, modern `dm` operator.
    /// Operand is the non-empty, caller-sorted list of participant ids.
    DmModern(Vec<u64>),
    /// A direct-message conversation, legacy `pm-with` operator.
    DmLegacy(Vec<u64>),
    /// A direct-message conversation whose operator spelling is not yet
    /// chosen. Must be resolved against the server capability level before
    /// serialization; reaching the serializer unresolved is a bug.
    Dm(Vec<u64>),
    /// A single message, by id.
    MessageId(u64),
}

impl Narrow {
    /// Pick the operator spelling for unresolved direct-message filters.
    /// Every other kind passes through unchanged.
    pub fn resolve_dm(self, capability_level: u32) -> Narrow {
        match self {
            Narrow::Dm(ids) if capability_level >= DM_OPERATOR_CAPABILITY => Narrow::DmModern(ids),
            Narrow::Dm(ids) => Narrow::DmLegacy(ids),
            other => other,
        }
    }
}

/// A filter element: a kind plus its negation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowElement {
    pub filter: Narrow,
    pub negated: bool,
}

impl NarrowElement {
    pub fn new(filter: Narrow) -> Self {
        Self { filter, negated: false }
    }

    /// Flip the element to its negated form.
    pub fn negate(mut self) -> Self {
        self.negated = true;
        self
    }
}

/// An ordered filter expression. Order is significant: it defines the order
/// of the URL fragment's segments.
pub type NarrowExpression = Vec<NarrowElement>;
