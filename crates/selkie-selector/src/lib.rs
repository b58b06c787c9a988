//! Fluent builder for CSS compound and complex selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Immutable fragments that can be shared and extended independently
//!   - Order checking: parts must follow
//!     `element, id, class, attribute, pseudo-class, pseudo-element`
//!   - Cardinality checking: element, id and pseudo-element at most once
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining rendered selectors with descendant, child and sibling combinators
//!   - Arbitrary nesting of joined selectors
//!
//! # Not Implemented
//!
//! - Parsing selector strings
//! - Matching selectors against a document
//! - Specificity
//!
//! # Example
//!
//! ```
//! use selkie_selector::{Render, combine, element};
//!
//! let link = element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.render(), r#"a[href$=".png"]:focus"#);
//!
//! let rows = combine(&element("table")?.id("data")?, ">", &element("tr")?);
//! assert_eq!(rows.render(), "table#data > tr");
//! # Ok::<(), selkie_selector::SelectorError>(())
//! ```

/// Combinators and combined selectors per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Construction errors.
pub mod error;
/// Compound selector fragments per [§ 4.2](https://www.w3.org/TR/selectors-4/#compound).
pub mod fragment;
/// Selector part kinds.
pub mod kind;
/// Order and cardinality rules.
pub mod order;
/// The rendering seam and the compound-or-combined [`Selector`].
pub mod selector;

pub use combinator::{Combinator, CombinedSelector, combine};
pub use error::{Result, SelectorError};
pub use fragment::{
    SelectorFragment, SelectorPart, attr, class, element, id, pseudo_class, pseudo_element,
    selector,
};
pub use kind::SelectorPartKind;
pub use order::check_order;
pub use selector::{Render, Selector};
