//! Order and cardinality rules for compound selectors.
//!
//! A legal compound selector lists its parts in non-decreasing
//! [`SelectorPartKind`] order, so the last part of a chain is also its
//! highest-ordered part, and a single-occurrence kind can only already be
//! present if it is the last part. That makes the check a pure function of
//! the chain's last kind and the requested kind.

use crate::{Result, SelectorError, SelectorPartKind};

/// Decide whether a part of kind `requested` may follow a chain whose last
/// part has kind `current` (`None` for the empty chain).
///
/// # Errors
///
/// - [`SelectorError::OrderViolation`] if `requested` sorts before `current`.
/// - [`SelectorError::CardinalityViolation`] if `requested` is element, id or
///   pseudo-element and the chain already ends with that kind.
pub const fn check_order(
    current: Option<SelectorPartKind>,
    requested: SelectorPartKind,
) -> Result<()> {
    let Some(current) = current else {
        return Ok(());
    };

    if requested.position() < current.position() {
        return Err(SelectorError::OrderViolation {
            requested,
            after: current,
        });
    }

    if requested.position() == current.position() && requested.is_single_occurrence() {
        return Err(SelectorError::CardinalityViolation { kind: requested });
    }

    Ok(())
}
