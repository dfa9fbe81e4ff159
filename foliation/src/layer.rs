//! Layers of the accumulator and the content of their entries.
//!
//! A layer gathers all subsets of a given cardinality, grouped by the residue of their sum.
//! What is kept for each group depends on the [`Bucket`] implementation: a bare count
//! ([`Count`]) when only existence or multiplicity matters, or the subsets themselves
//! ([`Witnesses`]) when they must be reconstructed.

use crate::modulus::Residue;
use crate::Value;
use hashbrown::HashMap;

/// A subset of the input, as the sequence of its values in the order they were encountered.
pub type Subset = Vec<Value>;

/// Information kept about the subsets that share a cardinality and a residue.
pub trait Bucket: Default {
    /// The bucket representing only the empty subset.
    fn empty_subset() -> Self;

    /// Adds to `self` every subset of `source` extended with `item`.
    ///
    /// Returns the number of new subsets that had to be materialized.
    fn extend_from(&mut self, source: &Self, item: Value) -> u64;

    /// Number of subsets represented by this bucket.
    fn multiplicity(&self) -> u64;
}

/// Number of subsets. Saturates at `u64::MAX`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Count(pub u64);

impl Bucket for Count {
    fn empty_subset() -> Self {
        Count(1)
    }

    fn extend_from(&mut self, source: &Self, _item: Value) -> u64 {
        self.0 = self.0.saturating_add(source.0);
        0
    }

    fn multiplicity(&self) -> u64 {
        self.0
    }
}

/// The subsets themselves, in the order in which they were completed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Witnesses(pub Vec<Subset>);

impl Bucket for Witnesses {
    fn empty_subset() -> Self {
        Witnesses(vec![Subset::new()])
    }

    fn extend_from(&mut self, source: &Self, item: Value) -> u64 {
        self.0.reserve(source.0.len());
        for subset in &source.0 {
            let mut extended = Subset::with_capacity(subset.len() + 1);
            extended.extend_from_slice(subset);
            extended.push(item);
            self.0.push(extended);
        }
        source.0.len() as u64
    }

    fn multiplicity(&self) -> u64 {
        self.0.len() as u64
    }
}

/// All subsets of a given cardinality, indexed by the residue of their sum.
/// Only populated residues have an entry.
#[derive(Clone, Debug)]
pub struct Layer<B> {
    entries: HashMap<Residue, B>,
}

impl<B: Bucket> Layer<B> {
    pub fn new() -> Self {
        Layer {
            entries: HashMap::new(),
        }
    }

    /// The layer of cardinality 0: the empty subset at residue 0.
    pub fn base() -> Self {
        let mut layer = Self::new();
        layer.entries.insert(0, B::empty_subset());
        layer
    }

    pub fn get(&self, residue: Residue) -> Option<&B> {
        self.entries.get(&residue)
    }

    pub fn contains(&self, residue: Residue) -> bool {
        self.entries.contains_key(&residue)
    }

    /// Number of populated residues.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Residue, &B)> + '_ {
        self.entries.iter().map(|(&r, b)| (r, b))
    }

    pub(crate) fn bucket_mut(&mut self, residue: Residue) -> &mut B {
        self.entries.entry(residue).or_default()
    }

    pub(crate) fn take(&mut self, residue: Residue) -> Option<B> {
        self.entries.remove(&residue)
    }
}

impl<B: Bucket> Default for Layer<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut dest = Count::default();
        assert_eq!(dest.extend_from(&Count(3), 7), 0);
        assert_eq!(dest.extend_from(&Count::empty_subset(), -2), 0);
        assert_eq!(dest.multiplicity(), 4);

        let mut full = Count(u64::MAX - 1);
        full.extend_from(&Count(5), 1);
        assert_eq!(full, Count(u64::MAX));
    }

    #[test]
    fn witnesses_are_extended_in_order() {
        let source = Witnesses(vec![vec![1], vec![2, 3]]);
        let mut dest = Witnesses(vec![vec![4]]);
        assert_eq!(dest.extend_from(&source, 9), 2);
        assert_eq!(dest, Witnesses(vec![vec![4], vec![1, 9], vec![2, 3, 9]]));
        assert_eq!(dest.multiplicity(), 3);
        // the source is left untouched
        assert_eq!(source.0.len(), 2);
    }

    #[test]
    fn base_layer() {
        let counts: Layer<Count> = Layer::base();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(0), Some(&Count(1)));
        assert!(!counts.contains(1));

        let mut witnesses: Layer<Witnesses> = Layer::base();
        assert_eq!(witnesses.take(0), Some(Witnesses(vec![vec![]])));
        assert!(witnesses.is_empty());
    }
}
