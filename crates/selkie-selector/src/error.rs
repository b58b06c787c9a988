//! Error types for selector construction.

use thiserror::Error;

use crate::SelectorPartKind;

/// Errors raised when a part is added to a compound selector.
///
/// Both are raised by the call that adds the offending part, never at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The requested part sorts before a part already in the selector.
    #[error(
        "selector parts must appear in the order: element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        /// Kind of the part that was requested.
        requested: SelectorPartKind,
        /// Highest kind already present in the selector.
        after: SelectorPartKind,
    },

    /// A single-occurrence kind was requested a second time.
    #[error("element, id and pseudo-element must not occur more than once in a selector")]
    CardinalityViolation {
        /// The repeated kind.
        kind: SelectorPartKind,
    },
}

/// Result type for selector construction.
pub type Result<T> = std::result::Result<T, SelectorError>;
