//! Step tokens and folding them into a selector.
//!
//! A step is either a part, written `kind:value` (`element:div`, `id:main`,
//! `attr:href$=".png"`), or a combinator, written `@` followed by its token
//! (`@>`, `@+`, `@~`, and a bare `@` for the descendant combinator).
//! Combinators fold left: `a @+ b @~ c` joins `a + b` with `c`.

use std::str::FromStr;

use selkie_common::warning::warn_once;
use selkie_selector::{Combinator, Selector, SelectorError, SelectorFragment, SelectorPartKind};
use strum::IntoEnumIterator;
use thiserror::Error;

/// Problems with the step list given on the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    /// A part token without a `kind:` prefix.
    #[error("expected `kind:value` or `@combinator`, got `{0}`")]
    Malformed(String),

    /// A part token whose kind is not recognised.
    #[error("unknown part kind `{kind}` (expected one of: {expected})")]
    UnknownKind {
        /// The kind as written.
        kind: String,
        /// Comma-separated list of accepted kinds.
        expected: String,
    },

    /// A combinator with no compound selector on its left.
    #[error("combinator `{0}` has no selector on its left")]
    MissingLeft(String),

    /// The step list ends with a combinator.
    #[error("combinator `{0}` has no selector on its right")]
    MissingRight(String),

    /// The builder rejected a part.
    #[error("step {index} (`{token}`): {source}")]
    Rejected {
        /// 1-based position of the step.
        index: usize,
        /// The step as written.
        token: String,
        /// The builder's error.
        source: SelectorError,
    },

    /// No parts were given.
    #[error("no selector parts given")]
    Empty,
}

/// One parsed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Add a part to the current compound selector.
    Part(SelectorPartKind, String),
    /// Close the current compound selector and join it to the next one.
    Combine(Combinator),
}

impl FromStr for Step {
    type Err = StepError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(combinator) = token.strip_prefix('@') {
            let combinator = if combinator.is_empty() { " " } else { combinator };
            return Ok(Self::Combine(Combinator::from(combinator)));
        }

        let (kind, value) = token
            .split_once(':')
            .ok_or_else(|| StepError::Malformed(token.to_owned()))?;
        let kind = kind.parse().map_err(|_| StepError::UnknownKind {
            kind: kind.to_owned(),
            expected: SelectorPartKind::iter()
                .map(|part_kind| part_kind.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })?;
        Ok(Self::Part(kind, value.to_owned()))
    }
}

/// Fold step tokens into a selector.
///
/// Warns (once per distinct input) about empty part values and about
/// combinator tokens outside the standard four; both are still used as given.
pub fn build<S: AsRef<str>>(tokens: &[S]) -> Result<Selector, StepError> {
    let mut joined: Option<(Selector, Combinator)> = None;
    let mut current = SelectorFragment::new();

    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        match token.parse::<Step>()? {
            Step::Part(kind, value) => {
                if value.is_empty() {
                    warn_once("build", &format!("empty {kind} value in `{token}`"));
                }
                current = std::mem::take(&mut current)
                    .push_owned(kind, value)
                    .map_err(|source| StepError::Rejected {
                        index: i + 1,
                        token: token.to_owned(),
                        source,
                    })?;
            }
            Step::Combine(combinator) => {
                if current.is_empty() {
                    return Err(StepError::MissingLeft(combinator.token().to_owned()));
                }
                if !combinator.is_standard() {
                    warn_once(
                        "combine",
                        &format!("non-standard combinator `{combinator}` used verbatim"),
                    );
                }
                let left = close(joined.take(), std::mem::take(&mut current));
                joined = Some((left, combinator));
            }
        }
    }

    match joined {
        Some((_, combinator)) if current.is_empty() => {
            Err(StepError::MissingRight(combinator.token().to_owned()))
        }
        None if current.is_empty() => Err(StepError::Empty),
        joined => Ok(close(joined, current)),
    }
}

/// Join the pending left side, if any, with the finished compound selector.
fn close(joined: Option<(Selector, Combinator)>, compound: SelectorFragment) -> Selector {
    match joined {
        Some((left, combinator)) => left.combine(combinator, &compound),
        None => Selector::Compound(compound),
    }
}
