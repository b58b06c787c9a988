//! Combinators and complex selectors.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;

use serde::{Serialize, Serializer};

use crate::Render;

/// A combinator token joining two selectors.
///
/// Tokens outside the four standard combinators are kept verbatim in
/// [`Combinator::Other`] and rendered as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// `A B`: B is an arbitrary descendant of A. Token `" "`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`: B is a direct child of A. Token `">"`.
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`: B immediately follows A. Token `"+"`.
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`: B follows A, not necessarily immediately. Token `"~"`.
    SubsequentSibling,

    /// Any other token, accepted without validation.
    Other(String),
}

impl Combinator {
    /// The textual token written between the two selectors.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Other(token) => token,
        }
    }

    /// Whether this is one of the four combinators defined by Selectors Level 4.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        match token {
            " " => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Combinator {
    fn from(token: String) -> Self {
        match Self::from(token.as_str()) {
            Self::Other(_) => Self::Other(token),
            standard => standard,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for Combinator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

/// Two rendered selectors joined by a combinator.
///
/// Rendering is always `left + " " + token + " " + right`, whatever the
/// token is, so the descendant combinator renders with three spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CombinedSelector {
    left: String,
    combinator: Combinator,
    right: String,
}

impl CombinedSelector {
    /// Join `left` and `right` with `combinator`.
    #[must_use]
    pub fn new<L, R>(left: &L, combinator: impl Into<Combinator>, right: &R) -> Self
    where
        L: Render + ?Sized,
        R: Render + ?Sized,
    {
        Self {
            left: left.render(),
            combinator: combinator.into(),
            right: right.render(),
        }
    }

    /// Rendering of the left-hand selector.
    #[must_use]
    pub fn left(&self) -> &str {
        &self.left
    }

    /// The joining combinator.
    #[must_use]
    pub const fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    /// Rendering of the right-hand selector.
    #[must_use]
    pub fn right(&self) -> &str {
        &self.right
    }
}

impl Render for CombinedSelector {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator, self.right)
    }
}

/// Join two selectors with a combinator token.
///
/// Either side may itself be a combined selector. The token is not
/// validated; see [`Combinator::Other`].
///
/// ```
/// use selkie_selector::{Render, combine, element};
///
/// let joined = combine(&element("h1")?, "+", &element("p")?);
/// assert_eq!(joined.render(), "h1 + p");
/// # Ok::<(), selkie_selector::SelectorError>(())
/// ```
#[must_use]
pub fn combine<L, R>(left: &L, combinator: impl Into<Combinator>, right: &R) -> CombinedSelector
where
    L: Render + ?Sized,
    R: Render + ?Sized,
{
    CombinedSelector::new(left, combinator, right)
}
