//! Selector part kinds and their canonical order.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// The kind of a simple selector inside a compound selector.
///
/// Variants are declared in the order they must appear in a compound selector,
/// so the derived `Ord` is the canonical order:
/// `Element < Id < Class < Attribute < PseudoClass < PseudoElement`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SelectorPartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The payload is everything between the brackets, written verbatim.
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attr", serialize = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement,
}

impl SelectorPartKind {
    /// Position of this kind in the canonical order, starting at 0 for `Element`.
    #[must_use]
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// Element, id and pseudo-element may occur at most once per compound selector.
    #[must_use]
    pub const fn is_single_occurrence(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the payload.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the payload (only attribute selectors close a bracket).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// Append the rendering of `value` as this kind to `out`.
    pub fn render_into(self, value: &str, out: &mut String) {
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }

    /// Render `value` as this kind, e.g. `Class` + `"nav"` is `.nav`.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        let mut out =
            String::with_capacity(self.prefix().len() + value.len() + self.suffix().len());
        self.render_into(value, &mut out);
        out
    }
}
