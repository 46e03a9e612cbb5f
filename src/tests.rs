use std::collections::{BTreeSet, VecDeque};

use quickcheck::{quickcheck, TestResult};

use crate::{iter, iter_mut, Adapter, Leaf};

/// Pulls from the back when the op is true and from the front otherwise,
/// then drains whatever is left from the front.
fn drive<I: DoubleEndedIterator>(mut it: I, ops: &[bool]) -> Vec<I::Item> {
    let mut out = vec![];
    for &back in ops {
        let item = if back { it.next_back() } else { it.next() };
        match item {
            None => break,
            Some(item) => out.push(item),
        }
    }
    out.extend(it);
    out
}

/// The same traversal as `drive`, over a model of the remaining elements.
fn drive_model<T>(mut model: VecDeque<T>, ops: &[bool]) -> Vec<T> {
    drive(model.drain(..).collect::<Vec<T>>().into_iter(), ops)
}

fn is_odd(x: &i32) -> bool {
    x % 2 != 0
}

#[test]
fn prop_collect_reproduces_source() {
    fn p(xs: Vec<i32>) -> bool {
        let got: Vec<i32> = iter(&xs).map(|&x| x).collect();
        let set: BTreeSet<i32> = xs.iter().cloned().collect();
        let got_set: Vec<&i32> = iter(&set).collect();
        got == xs && got_set == set.iter().collect::<Vec<&i32>>()
    }
    quickcheck(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_chain_is_concatenation() {
    fn p(a: Vec<i32>, b: Vec<i32>) -> bool {
        let got: Vec<&i32> = iter(&a).chain(iter(&b)).collect();
        let expected: Vec<&i32> = a.iter().chain(b.iter()).collect();
        let back: Vec<&i32> = iter(&a).chain(iter(&b)).reverse().collect();
        let expected_back: Vec<&i32> =
            a.iter().chain(b.iter()).rev().collect();
        got == expected && back == expected_back
    }
    quickcheck(p as fn(Vec<i32>, Vec<i32>) -> bool);
}

#[test]
fn prop_zip_count_is_min() {
    fn p(a: Vec<i32>, b: Vec<u8>) -> bool {
        let n = iter(&a).zip(iter(&b)).count();
        n == a.len().min(b.len())
    }
    quickcheck(p as fn(Vec<i32>, Vec<u8>) -> bool);
}

#[test]
fn prop_enumerate_direction_independent() {
    fn p(xs: Vec<i32>, ops: Vec<bool>) -> bool {
        let mut got = drive(iter(&xs).enumerate().into_iter(), &ops);
        got.sort();
        let expected: Vec<(usize, &i32)> = xs.iter().enumerate().collect();
        got == expected
    }
    quickcheck(p as fn(Vec<i32>, Vec<bool>) -> bool);
}

#[test]
fn prop_filter_is_subsequence() {
    fn p(xs: Vec<i32>, ops: Vec<bool>) -> bool {
        let fwd: Vec<&i32> = iter(&xs).filter(|x| is_odd(x)).collect();
        let expected: Vec<&i32> = xs.iter().filter(|x| is_odd(x)).collect();
        let model: VecDeque<&i32> = expected.iter().cloned().collect();
        let mixed =
            drive(iter(&xs).filter(|x| is_odd(x)).into_iter(), &ops);
        fwd == expected && mixed == drive_model(model, &ops)
    }
    quickcheck(p as fn(Vec<i32>, Vec<bool>) -> bool);
}

#[test]
fn prop_reverse_involution() {
    fn p(xs: Vec<i32>) -> bool {
        let twice: Vec<&i32> = iter(&xs).reverse().reverse().collect();
        let once: Vec<&i32> = iter(&xs).reverse().collect();
        twice == xs.iter().collect::<Vec<_>>()
            && once == xs.iter().rev().collect::<Vec<_>>()
    }
    quickcheck(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_take_count() {
    fn p(xs: Vec<i32>, n: usize) -> bool {
        let n = n % 64;
        iter(&xs).take(n).count() == n.min(xs.len())
    }
    quickcheck(p as fn(Vec<i32>, usize) -> bool);
}

#[test]
fn prop_skip_take_window() {
    fn p(xs: Vec<i32>, s: usize, t: usize) -> bool {
        let (s, t) = (s % 32, t % 32);
        let got: Vec<&i32> = iter(&xs).skip(s).take(t).collect();
        let expected: Vec<&i32> = xs.iter().skip(s).take(t).collect();
        got == expected
    }
    quickcheck(p as fn(Vec<i32>, usize, usize) -> bool);
}

#[test]
fn prop_step_by_same_positions() {
    fn p(xs: Vec<i32>, step: usize, ops: Vec<bool>) -> TestResult {
        let step = step % 8;
        if step == 0 {
            return TestResult::discard();
        }
        let expected: Vec<&i32> = xs.iter().step_by(step).collect();
        let fwd: Vec<&i32> = iter(&xs).step_by(step).collect();
        let mut bwd: Vec<&i32> =
            iter(&xs).step_by(step).reverse().collect();
        bwd.reverse();
        let model: VecDeque<&i32> = expected.iter().cloned().collect();
        let mixed = drive(iter(&xs).step_by(step).into_iter(), &ops);
        let mixed_ok = mixed == drive_model(model, &ops);
        TestResult::from_bool(fwd == expected && bwd == expected && mixed_ok)
    }
    quickcheck(p as fn(Vec<i32>, usize, Vec<bool>) -> TestResult);
}

// Stacks that mix eager skipping, alignment and counting on both ends.
#[test]
fn prop_compound_double_ended_stack() {
    fn p(
        xs: Vec<i32>,
        skip: usize,
        step: usize,
        ops: Vec<bool>,
    ) -> TestResult {
        let (skip, step) = (skip % 8, step % 5);
        if step == 0 {
            return TestResult::discard();
        }
        let expected: VecDeque<(usize, &i32)> = xs
            .iter()
            .rev()
            .skip(skip)
            .step_by(step)
            .enumerate()
            .filter(|&(_, x)| is_odd(x))
            .collect();
        let chain = iter(&xs)
            .reverse()
            .skip(skip)
            .step_by(step)
            .enumerate()
            .filter(|&(_, x)| is_odd(x));
        let got = drive(chain.into_iter(), &ops);
        TestResult::from_bool(got == drive_model(expected, &ops))
    }
    quickcheck(p as fn(Vec<i32>, usize, usize, Vec<bool>) -> TestResult);
}

#[test]
fn prop_distance_stays_exact() {
    fn p(xs: Vec<i32>, step: usize, ops: Vec<bool>) -> TestResult {
        let step = step % 4;
        if step == 0 {
            return TestResult::discard();
        }
        let mut it = iter(&xs).step_by(step).enumerate().into_iter();
        let mut remaining = xs.iter().step_by(step).count();
        for &back in &ops {
            if it.size_hint() != (remaining, Some(remaining)) {
                return TestResult::failed();
            }
            let item = if back { it.next_back() } else { it.next() };
            if item.is_none() {
                break;
            }
            remaining -= 1;
        }
        TestResult::from_bool(it.len() == remaining)
    }
    quickcheck(p as fn(Vec<i32>, usize, Vec<bool>) -> TestResult);
}

#[test]
fn prop_take_counts_both_ends() {
    fn p(xs: Vec<i32>, n: usize, ops: Vec<bool>) -> bool {
        let n = n % 16;
        let got = drive(iter(&xs).take(n).into_iter(), &ops);
        let mut model: VecDeque<&i32> = xs.iter().collect();
        let mut expected: Vec<&i32> = vec![];
        for &back in ops.iter().chain(std::iter::repeat(&false)) {
            if expected.len() == n || model.is_empty() {
                break;
            }
            let item =
                if back { model.pop_back() } else { model.pop_front() };
            expected.extend(item);
        }
        got == expected
    }
    quickcheck(p as fn(Vec<i32>, usize, Vec<bool>) -> bool);
}

#[test]
fn prop_partition_preserves_order() {
    fn p(xs: Vec<i32>) -> bool {
        let (odd, even): (Vec<i32>, Vec<i32>) =
            iter(&xs).map(|&x| x).partition(is_odd);
        let (e_odd, e_even): (Vec<i32>, Vec<i32>) =
            xs.iter().cloned().partition(is_odd);
        odd == e_odd && even == e_even
    }
    quickcheck(p as fn(Vec<i32>) -> bool);
}

#[test]
fn prop_mutable_map_matches_std() {
    fn p(xs: Vec<i32>, step: usize) -> TestResult {
        let step = step % 4;
        if step == 0 {
            return TestResult::discard();
        }
        let mut got = xs.clone();
        iter_mut(&mut got).reverse().step_by(step).for_each(|x| {
            *x = x.wrapping_mul(2);
        });
        let mut expected = xs.clone();
        expected.iter_mut().rev().step_by(step).for_each(|x| {
            *x = x.wrapping_mul(2);
        });
        TestResult::from_bool(got == expected)
    }
    quickcheck(p as fn(Vec<i32>, usize) -> TestResult);
}

#[test]
fn prop_position_and_find_agree() {
    fn p(xs: Vec<u8>, needle: u8) -> bool {
        let pos = Leaf::new(xs.iter().cloned()).position(|x| x == needle);
        let found = iter(&xs).find(|&&x| x == needle);
        pos == xs.iter().position(|&x| x == needle)
            && found.is_some() == pos.is_some()
    }
    quickcheck(p as fn(Vec<u8>, u8) -> bool);
}
