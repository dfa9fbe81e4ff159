use crate::layer::{Subset, Witnesses};
use crate::modulus::Precision;
use std::iter::FusedIterator;

/// The subsets found by an enumeration query, by increasing cardinality.
///
/// The sequence is finite and can only be traversed once.
/// When the precision is [`Precision::Modular`], some subsets may only match the target
/// modulo the working modulus.
#[derive(Debug)]
pub struct Enumeration {
    buckets: std::vec::IntoIter<Witnesses>,
    current: std::vec::IntoIter<Subset>,
    remaining: usize,
    precision: Precision,
}

impl Enumeration {
    pub(crate) fn new(buckets: Vec<Witnesses>, precision: Precision) -> Self {
        let remaining = buckets.iter().map(|b| b.0.len()).sum();
        Enumeration {
            buckets: buckets.into_iter(),
            current: Vec::new().into_iter(),
            remaining,
            precision,
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl Iterator for Enumeration {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        loop {
            if let Some(subset) = self.current.next() {
                self.remaining -= 1;
                return Some(subset);
            }
            self.current = self.buckets.next()?.0.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Enumeration {}

impl FusedIterator for Enumeration {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_buckets() {
        let buckets = vec![
            Witnesses(vec![vec![1]]),
            Witnesses(vec![]),
            Witnesses(vec![vec![2, 3], vec![4, 5]]),
        ];
        let mut subsets = Enumeration::new(buckets, Precision::Exact);
        assert_eq!(subsets.len(), 3);
        assert_eq!(subsets.next(), Some(vec![1]));
        assert_eq!(subsets.len(), 2);
        assert_eq!(subsets.collect::<Vec<_>>(), vec![vec![2, 3], vec![4, 5]]);
    }

    #[test]
    fn empty() {
        let mut subsets = Enumeration::new(vec![], Precision::Modular);
        assert_eq!(subsets.precision(), Precision::Modular);
        assert_eq!(subsets.next(), None);
        assert_eq!(subsets.next(), None);
    }
}
