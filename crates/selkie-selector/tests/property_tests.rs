//! Property tests for selector construction.

use quickcheck_macros::quickcheck;
use selkie_selector::{Render, SelectorError, SelectorFragment, SelectorPartKind, selector};
use strum::IntoEnumIterator;

fn kind_from_byte(byte: u8) -> SelectorPartKind {
    let kinds: Vec<SelectorPartKind> = SelectorPartKind::iter().collect();
    kinds[usize::from(byte) % kinds.len()]
}

/// What a chain of `kinds` should produce, judged against every part added so
/// far rather than only the last one.
fn expected_outcome(kinds: &[SelectorPartKind]) -> Result<(), SelectorError> {
    for (i, &requested) in kinds.iter().enumerate() {
        let earlier = &kinds[..i];
        if let Some(&after) = earlier.iter().filter(|&&k| k > requested).max() {
            return Err(SelectorError::OrderViolation { requested, after });
        }
        if requested.is_single_occurrence() && earlier.contains(&requested) {
            return Err(SelectorError::CardinalityViolation { kind: requested });
        }
    }
    Ok(())
}

fn build(kinds: &[SelectorPartKind]) -> Result<SelectorFragment, SelectorError> {
    kinds
        .iter()
        .enumerate()
        .try_fold(selector(), |chain, (i, &kind)| chain.push(kind, format!("v{i}")))
}

#[quickcheck]
fn prop_valid_sequences_render_as_concatenation(bytes: Vec<u8>) -> bool {
    let mut kinds: Vec<SelectorPartKind> = bytes.into_iter().map(kind_from_byte).collect();
    kinds.sort();
    kinds.dedup_by(|a, b| a == b && a.is_single_occurrence());

    let expected: String = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| kind.render(&format!("v{i}")))
        .collect();

    build(&kinds).is_ok_and(|sel| sel.render() == expected && sel.render() == sel.render())
}

#[quickcheck]
fn prop_arbitrary_sequences_fail_exactly_when_expected(bytes: Vec<u8>) -> bool {
    let kinds: Vec<SelectorPartKind> = bytes.into_iter().map(kind_from_byte).collect();
    // The highest earlier kind is always the last accepted kind, so both
    // errors carry the same data whichever way they are computed.
    build(&kinds).map(|_| ()) == expected_outcome(&kinds)
}

#[quickcheck]
fn prop_branches_do_not_affect_each_other(bytes: Vec<u8>, left: u8, right: u8) -> bool {
    let mut kinds: Vec<SelectorPartKind> = bytes.into_iter().map(kind_from_byte).collect();
    kinds.sort();
    kinds.dedup_by(|a, b| a == b && a.is_single_occurrence());
    let Ok(base) = build(&kinds) else {
        return false;
    };
    let before = base.render();

    let left = base.push(kind_from_byte(left), "left");
    let right = base.push(kind_from_byte(right), "right");

    let left_ok = left
        .ok()
        .is_none_or(|sel| sel.rendered_prefix() == before && sel.value() == Some("left"));
    let right_ok = right
        .ok()
        .is_none_or(|sel| sel.rendered_prefix() == before && sel.value() == Some("right"));

    left_ok && right_ok && base.render() == before
}
