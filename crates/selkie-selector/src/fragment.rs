//! Compound selector fragments.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator."
//!
//! A [`SelectorFragment`] is one step of a compound selector chain. Adding a
//! part never touches the receiver: it returns a new fragment whose parts
//! list shares every earlier part with the receiver and which caches
//! `prefix + part` as its rendered string. Only the fragment handle owns a
//! rendering; the shared part nodes hold nothing but parts, so a chain of
//! `n` parts costs `O(n)` memory. Several chains can branch from one prefix.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::order::check_order;
use crate::{Render, Result, SelectorPartKind};

/// A simple selector: a kind and the raw payload the caller supplied for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorPart {
    /// The kind of simple selector.
    pub kind: SelectorPartKind,
    /// The raw payload, e.g. `main` for `#main`.
    pub value: String,
}

impl SelectorPart {
    /// Create a part of the given kind.
    #[must_use]
    pub fn new(kind: SelectorPartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Byte length of this part once rendered.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.kind.prefix().len() + self.value.len() + self.kind.suffix().len()
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), self.value, self.kind.suffix())
    }
}

/// A node of the persistent, last-to-first list of parts.
struct Node {
    part: SelectorPart,
    parent: Option<Arc<Node>>,
}

impl Drop for Node {
    // Unlink the list iteratively; the default drop recurses once per part.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = Arc::into_inner(node).and_then(|mut node| node.parent.take());
        }
    }
}

/// Iterator over a chain's parts, last to first.
struct RevParts<'a> {
    cursor: Option<&'a Node>,
}

impl<'a> Iterator for RevParts<'a> {
    type Item = &'a SelectorPart;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.parent.as_deref();
        Some(&node.part)
    }
}

/// One accumulated step of a compound selector chain.
///
/// The empty fragment (see [`selector`]) is the entry point; it renders to
/// the empty string and accepts any part.
///
/// ```
/// use selkie_selector::{Render, selector};
///
/// let sel = selector().element("div")?.id("main")?.class("container")?;
/// assert_eq!(sel.render(), "div#main.container");
/// # Ok::<(), selkie_selector::SelectorError>(())
/// ```
#[derive(Clone, Default)]
pub struct SelectorFragment {
    last: Option<Arc<Node>>,
    /// The rendering of every part, computed once at construction.
    rendered: String,
    /// Byte length of the rendering before the last part.
    prefix_len: usize,
}

impl SelectorFragment {
    /// The empty fragment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: None,
            rendered: String::new(),
            prefix_len: 0,
        }
    }

    /// Extend the chain with a part of `kind`.
    ///
    /// # Errors
    ///
    /// Returns the error from [`check_order`] when `kind` may not follow the
    /// last part of this chain.
    pub fn push(&self, kind: SelectorPartKind, value: impl Into<String>) -> Result<Self> {
        check_order(self.kind(), kind)?;

        let part = SelectorPart::new(kind, value);
        let mut rendered = String::with_capacity(self.rendered.len() + part.rendered_len());
        rendered.push_str(&self.rendered);
        Ok(self.link(part, rendered))
    }

    /// Like [`push`](Self::push), but consumes the receiver and reuses its
    /// rendering buffer, so building a long chain in a loop stays linear.
    ///
    /// # Errors
    ///
    /// Same as [`push`](Self::push).
    pub fn push_owned(mut self, kind: SelectorPartKind, value: impl Into<String>) -> Result<Self> {
        check_order(self.kind(), kind)?;

        let part = SelectorPart::new(kind, value);
        let rendered = std::mem::take(&mut self.rendered);
        Ok(self.link(part, rendered))
    }

    /// Append `part` to `rendered` (this chain's rendering) and link it after
    /// the last part.
    fn link(&self, part: SelectorPart, mut rendered: String) -> Self {
        let prefix_len = rendered.len();
        part.kind.render_into(&part.value, &mut rendered);
        Self {
            last: Some(Arc::new(Node {
                part,
                parent: self.last.clone(),
            })),
            rendered,
            prefix_len,
        }
    }

    /// Add a type selector, e.g. `div`.
    ///
    /// # Errors
    ///
    /// Fails with a cardinality violation if the chain already has an element,
    /// and with an order violation if any other part has been added.
    pub fn element(&self, value: impl Into<String>) -> Result<Self> {
        self.push(SelectorPartKind::Element, value)
    }

    /// Add an id selector, rendered as `#value`.
    ///
    /// # Errors
    ///
    /// Fails with a cardinality violation after another id, and with an order
    /// violation after a class, attribute, pseudo-class or pseudo-element.
    pub fn id(&self, value: impl Into<String>) -> Result<Self> {
        self.push(SelectorPartKind::Id, value)
    }

    /// Add a class selector, rendered as `.value`. Repeatable.
    ///
    /// # Errors
    ///
    /// Fails with an order violation after an attribute, pseudo-class or
    /// pseudo-element.
    pub fn class(&self, value: impl Into<String>) -> Result<Self> {
        self.push(SelectorPartKind::Class, value)
    }

    /// Add an attribute selector, rendered as `[value]`. Repeatable.
    ///
    /// # Errors
    ///
    /// Fails with an order violation after a pseudo-class or pseudo-element.
    pub fn attr(&self, value: impl Into<String>) -> Result<Self> {
        self.push(SelectorPartKind::Attribute, value)
    }

    /// Add a pseudo-class, rendered as `:value`. Repeatable.
    ///
    /// # Errors
    ///
    /// Fails with an order violation after a pseudo-element.
    pub fn pseudo_class(&self, value: impl Into<String>) -> Result<Self> {
        self.push(SelectorPartKind::PseudoClass, value)
    }

    /// Add a pseudo-element, rendered as `::value`.
    ///
    /// # Errors
    ///
    /// Fails with a cardinality violation if the chain already has a
    /// pseudo-element.
    pub fn pseudo_element(&self, value: impl Into<String>) -> Result<Self> {
        self.push(SelectorPartKind::PseudoElement, value)
    }

    /// Kind of the last part, `None` for the empty fragment.
    #[must_use]
    pub fn kind(&self) -> Option<SelectorPartKind> {
        self.last.as_deref().map(|node| node.part.kind)
    }

    /// Raw payload of the last part, `None` for the empty fragment.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.last.as_deref().map(|node| node.part.value.as_str())
    }

    /// Everything rendered before the last part.
    #[must_use]
    pub fn rendered_prefix(&self) -> &str {
        &self.rendered[..self.prefix_len]
    }

    /// The fragment preceding this one, `None` for the empty fragment.
    ///
    /// Shares its parts with this fragment and copies only the prefix rendering.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let node = self.last.as_deref()?;
        let prefix_len = node
            .parent
            .as_deref()
            .map_or(0, |parent| self.prefix_len - parent.part.rendered_len());
        Some(Self {
            last: node.parent.clone(),
            rendered: self.rendered_prefix().to_owned(),
            prefix_len,
        })
    }

    /// The cached rendering of the whole chain.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Whether this is the empty fragment.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Number of parts in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rev_parts().count()
    }

    /// All parts of the chain, first to last.
    #[must_use]
    pub fn parts(&self) -> Vec<&SelectorPart> {
        let mut parts: Vec<&SelectorPart> = self.rev_parts().collect();
        parts.reverse();
        parts
    }

    fn rev_parts(&self) -> RevParts<'_> {
        RevParts {
            cursor: self.last.as_deref(),
        }
    }
}

impl PartialEq for SelectorFragment {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str() && self.rev_parts().eq(other.rev_parts())
    }
}

impl Eq for SelectorFragment {}

impl Render for SelectorFragment {
    fn render(&self) -> String {
        self.as_str().to_owned()
    }
}

impl fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorFragment")
            .field("parts", &self.parts())
            .field("rendered", &self.as_str())
            .finish()
    }
}

impl Serialize for SelectorFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SelectorFragment", 2)?;
        state.serialize_field("parts", &self.parts())?;
        state.serialize_field("rendered", self.as_str())?;
        state.end()
    }
}

/// The empty builder entry point.
#[must_use]
pub const fn selector() -> SelectorFragment {
    SelectorFragment::new()
}

/// Start a chain with a type selector.
///
/// # Errors
///
/// Never fails on the empty chain; the `Result` matches the chained form.
pub fn element(value: impl Into<String>) -> Result<SelectorFragment> {
    selector().element(value)
}

/// Start a chain with an id selector.
///
/// # Errors
///
/// Never fails on the empty chain; the `Result` matches the chained form.
pub fn id(value: impl Into<String>) -> Result<SelectorFragment> {
    selector().id(value)
}

/// Start a chain with a class selector.
///
/// # Errors
///
/// Never fails on the empty chain; the `Result` matches the chained form.
pub fn class(value: impl Into<String>) -> Result<SelectorFragment> {
    selector().class(value)
}

/// Start a chain with an attribute selector.
///
/// # Errors
///
/// Never fails on the empty chain; the `Result` matches the chained form.
pub fn attr(value: impl Into<String>) -> Result<SelectorFragment> {
    selector().attr(value)
}

/// Start a chain with a pseudo-class.
///
/// # Errors
///
/// Never fails on the empty chain; the `Result` matches the chained form.
pub fn pseudo_class(value: impl Into<String>) -> Result<SelectorFragment> {
    selector().pseudo_class(value)
}

/// Start a chain with a pseudo-element.
///
/// # Errors
///
/// Never fails on the empty chain; the `Result` matches the chained form.
pub fn pseudo_element(value: impl Into<String>) -> Result<SelectorFragment> {
    selector().pseudo_element(value)
}
