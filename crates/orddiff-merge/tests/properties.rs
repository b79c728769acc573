//! Property tests: both merge shapes against the hash-based reference.

use std::collections::HashSet;
use std::ops::ControlFlow;

use proptest::prelude::*;

use orddiff_merge::{
    check_strictly_ascending, symmetric_difference, symmetric_difference_for_each, traverse,
    IterCursor, Tag,
};
use orddiff_testkit::oracle::{hash_symmetric_difference, reference_tags};
use orddiff_testkit::strategies::{overlapping_pair, sorted_pair, unordered_vec};
use orddiff_testkit::{counted, init_tracing, FixtureConfig};

fn pulled(left: &[i32], right: &[i32]) -> Vec<Tag<i32>> {
    symmetric_difference(left.iter().copied(), right.iter().copied()).collect()
}

fn pushed(left: &[i32], right: &[i32]) -> Vec<Tag<i32>> {
    let mut out = Vec::new();
    let _ = symmetric_difference_for_each(left.iter().copied(), right.iter().copied(), |t| {
        out.push(t);
        ControlFlow::Continue(())
    });
    out
}

proptest! {
    #[test]
    fn value_set_matches_hash_baseline((left, right) in sorted_pair(48)) {
        let got: HashSet<i32> = pulled(&left, &right).into_iter().map(Tag::into_inner).collect();
        prop_assert_eq!(got, hash_symmetric_difference(&left, &right));
    }

    #[test]
    fn tagged_output_matches_reference((left, right) in overlapping_pair(64)) {
        prop_assert_eq!(pulled(&left, &right), reference_tags(&left, &right));
    }

    #[test]
    fn output_strictly_ascending((left, right) in sorted_pair(48)) {
        let out = pulled(&left, &right);
        prop_assert!(out.windows(2).all(|w| w[0].as_inner() < w[1].as_inner()));
    }

    #[test]
    fn no_value_has_both_tags((left, right) in overlapping_pair(64)) {
        let out = pulled(&left, &right);
        let lefts: HashSet<i32> = out.iter().filter(|t| t.is_left()).map(|t| *t.as_inner()).collect();
        let rights: HashSet<i32> = out.iter().filter(|t| t.is_right()).map(|t| *t.as_inner()).collect();
        prop_assert!(lefts.is_disjoint(&rights));
        prop_assert!(lefts.iter().all(|v| left.contains(v) && !right.contains(v)));
        prop_assert!(rights.iter().all(|v| right.contains(v) && !left.contains(v)));
    }

    #[test]
    fn end_is_sticky((left, right) in sorted_pair(16), extra in 1usize..8) {
        let mut it = symmetric_difference(left, right);
        while it.next().is_some() {}
        for _ in 0..extra {
            prop_assert_eq!(it.next(), None);
        }
    }

    #[test]
    fn identical_inputs_yield_nothing((left, _) in sorted_pair(48)) {
        prop_assert!(pulled(&left, &left).is_empty());
        prop_assert!(pushed(&left, &left).is_empty());
    }

    #[test]
    fn push_equals_pull((left, right) in overlapping_pair(64)) {
        prop_assert_eq!(pushed(&left, &right), pulled(&left, &right));
    }

    #[test]
    fn push_equals_pull_on_unordered_input(left in unordered_vec(24), right in unordered_vec(24)) {
        let out = pulled(&left, &right);
        prop_assert!(out.len() <= left.len() + right.len());
        prop_assert_eq!(pushed(&left, &right), out);
    }

    #[test]
    fn early_stop_observes_prefix_and_pulls_no_further(
        (left, right) in overlapping_pair(32),
        k in 1usize..40,
    ) {
        let full = pulled(&left, &right);

        let (l_src, l_count) = counted(left.clone());
        let (r_src, r_count) = counted(right.clone());
        let mut seen = Vec::new();
        let flow = traverse(IterCursor::new(l_src), IterCursor::new(r_src), Ord::cmp, |t| {
            seen.push(t);
            if seen.len() == k {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        let (l_src, l_expected) = counted(left);
        let (r_src, r_expected) = counted(right);
        let prefix: Vec<_> = symmetric_difference(l_src, r_src).take(k).collect();

        prop_assert_eq!(flow.is_break(), k <= full.len());
        prop_assert_eq!(seen.len(), k.min(full.len()));
        prop_assert_eq!(&seen[..], &full[..seen.len()]);
        prop_assert_eq!(&seen, &prefix);
        prop_assert_eq!(l_count.get(), l_expected.get());
        prop_assert_eq!(r_count.get(), r_expected.get());
    }

    #[test]
    fn strategy_inputs_pass_order_check((left, right) in sorted_pair(48)) {
        prop_assert_eq!(check_strictly_ascending(&left), Ok(left.len()));
        prop_assert_eq!(check_strictly_ascending(&right), Ok(right.len()));
    }
}

#[test]
fn classic_fixture_matches_baseline() {
    init_tracing();
    let (left, right) = FixtureConfig::default().pair();
    let got = pulled(&left, &right);
    assert_eq!(got, reference_tags(&left, &right));
    assert_eq!(pushed(&left, &right), got);
}

#[test]
fn random_fixture_matches_baseline() {
    init_tracing();
    let (left, right) = FixtureConfig::small().random_pair();
    assert_eq!(pulled(&left, &right), reference_tags(&left, &right));
}

#[test]
fn concrete_scenarios() {
    let cases: [(&[i32], &[i32], Vec<Tag<i32>>); 5] = [
        (&[1, 2, 4, 5], &[1, 3, 4, 5], vec![Tag::Left(2), Tag::Right(3)]),
        (&[], &[1, 2, 3], vec![Tag::Right(1), Tag::Right(2), Tag::Right(3)]),
        (
            &[1, 3, 5],
            &[2, 4, 6],
            vec![
                Tag::Left(1),
                Tag::Right(2),
                Tag::Left(3),
                Tag::Right(4),
                Tag::Left(5),
                Tag::Right(6),
            ],
        ),
        (&[1, 2, 3], &[1, 2, 3], vec![]),
        (&[5], &[], vec![Tag::Left(5)]),
    ];
    for (left, right, expected) in cases {
        assert_eq!(pulled(left, right), expected, "pull {left:?} vs {right:?}");
        assert_eq!(pushed(left, right), expected, "push {left:?} vs {right:?}");
    }
}
