#![allow(dead_code)]

use foliation::{Subset, Value};
use itertools::Itertools;

/// Exhaustive search: all subsets of `values` (of exactly `size` elements if given) summing to `target`.
pub fn brute_force(values: &[Value], target: Value, size: Option<usize>) -> Vec<Subset> {
    values
        .iter()
        .copied()
        .powerset()
        .filter(|subset| match size {
            Some(s) => subset.len() == s,
            None => true,
        })
        .filter(|subset| subset.iter().sum::<Value>() == target)
        .collect()
}

pub fn sorted(mut subsets: Vec<Subset>) -> Vec<Subset> {
    subsets.sort();
    subsets
}
