//! The [`Render`] seam shared by compound and combined selectors.

use std::fmt;

use serde::Serialize;

use crate::{Combinator, CombinedSelector, SelectorFragment};

/// Anything that can produce a final selector string.
pub trait Render {
    /// The selector string. Calling this repeatedly yields the same result.
    fn render(&self) -> String;
}

/// Either a compound selector chain or a combined selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    /// A compound selector, e.g. `div#main.container`.
    Compound(SelectorFragment),
    /// Selectors joined by a combinator, e.g. `ul > li`.
    Combined(CombinedSelector),
}

impl Selector {
    /// Join this selector with `right`, this one on the left.
    #[must_use]
    pub fn combine(&self, combinator: impl Into<Combinator>, right: &impl Render) -> Self {
        Self::Combined(CombinedSelector::new(self, combinator, right))
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::Compound(SelectorFragment::new())
    }
}

impl From<SelectorFragment> for Selector {
    fn from(fragment: SelectorFragment) -> Self {
        Self::Compound(fragment)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Self::Combined(combined)
    }
}

impl Render for Selector {
    fn render(&self) -> String {
        match self {
            Self::Compound(fragment) => fragment.render(),
            Self::Combined(combined) => combined.render(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(fragment) => fmt::Display::fmt(fragment, f),
            Self::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}
