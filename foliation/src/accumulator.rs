//! The layered residue accumulator.
//!
//! The accumulator maintains one [`Layer`] per subset cardinality `0..=upper`.
//! After `i` elements have been absorbed, the entry of layer `k` at residue `r` describes
//! the subsets of size `k` of those `i` elements whose sum is congruent to `r` modulo `m`.
//!
//! Absorbing an element `x` moves, for each `k` from `upper` down to `1`, every entry of layer
//! `k - 1` at residue `r` into layer `k` at residue `r + x`. Layers are visited from the highest
//! cardinality down so that layer `k - 1` is still in its previous state when it is read:
//! an element can thus never be counted twice in the same subset. The layers are updated
//! in place, without any copy of the previous state.

use crate::error::{FoliationError, Result};
use crate::layer::{Bucket, Layer};
use crate::modulus::{Modulus, Residue};
use crate::stats::Stats;
use crate::Value;
use std::time::Instant;

/// The cardinalities considered when looking for a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Subsets of any size, up to the number of elements.
    AnySize,
    /// Only subsets of exactly this size.
    Exactly(usize),
}

impl Scope {
    /// Largest cardinality that must be tracked for an input of `n` elements.
    pub fn upper(self, n: usize) -> usize {
        match self {
            Scope::AnySize => n,
            Scope::Exactly(s) => s,
        }
    }

    pub fn contains(self, k: usize) -> bool {
        match self {
            Scope::AnySize => true,
            Scope::Exactly(s) => k == s,
        }
    }
}

pub struct Accumulator<B> {
    modulus: Modulus,
    /// Layer `k` holds the subsets of cardinality `k`.
    layers: Vec<Layer<B>>,
    /// Maximum number of materialized subsets, if any.
    witness_limit: Option<u64>,
    stats: Stats,
}

impl<B: Bucket> Accumulator<B> {
    /// Creates an accumulator tracking cardinalities `0..=upper`, where only the empty subset is known.
    pub fn new(upper: usize, modulus: Modulus) -> Self {
        let mut layers = Vec::with_capacity(upper + 1);
        layers.push(Layer::base());
        layers.resize_with(upper + 1, Layer::new);
        Accumulator {
            modulus,
            layers,
            witness_limit: None,
            stats: Stats::default(),
        }
    }

    /// Fails with [`FoliationError::TooManyWitnesses`] as soon as more than `limit` subsets are materialized.
    pub fn with_witness_limit(mut self, limit: usize) -> Self {
        self.witness_limit = Some(limit as u64);
        self
    }

    pub fn modulus(&self) -> Modulus {
        self.modulus
    }

    /// Highest tracked cardinality.
    pub fn upper(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn layer(&self, cardinality: usize) -> &Layer<B> {
        &self.layers[cardinality]
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Number of populated (layer, residue) entries.
    pub fn num_entries(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    /// Extends the state with a new element of the input.
    ///
    /// On error, the state is left partially updated and must be discarded.
    pub fn absorb(&mut self, item: Value) -> Result<()> {
        let start = Instant::now();
        let modulus = self.modulus;
        let shift = modulus.residue(item);
        // after `i` elements, no layer above `i` can be populated
        let processed = self.stats.num_elements as usize;
        let top = self.upper().min(processed + 1);

        for k in (1..=top).rev() {
            let (below, above) = self.layers.split_at_mut(k);
            let source = &below[k - 1];
            let target = &mut above[0];
            for (residue, bucket) in source.iter() {
                let stored = target
                    .bucket_mut(modulus.add(residue, shift))
                    .extend_from(bucket, item);
                self.stats.num_witnesses += stored;
                if let Some(limit) = self.witness_limit {
                    if self.stats.num_witnesses > limit {
                        return Err(FoliationError::TooManyWitnesses { limit: limit as usize });
                    }
                }
            }
        }

        let entries = self.num_entries() as u64;
        self.stats.record_sweep(entries, start.elapsed());
        tracing::trace!(item, entries, "absorbed element");
        Ok(())
    }

    /// Absorbs all elements in order.
    pub fn absorb_all(&mut self, items: &[Value]) -> Result<()> {
        for &item in items {
            self.absorb(item)?;
        }
        Ok(())
    }

    /// Cardinalities in `scope` with at least one subset at `residue`.
    pub fn matching_layers(&self, residue: Residue, scope: Scope) -> impl Iterator<Item = usize> + '_ {
        self.layers
            .iter()
            .enumerate()
            .filter(move |&(k, layer)| scope.contains(k) && layer.contains(residue))
            .map(|(k, _)| k)
    }

    /// True if some subset in `scope` has a sum congruent to `residue`.
    pub fn contains(&self, residue: Residue, scope: Scope) -> bool {
        self.matching_layers(residue, scope).next().is_some()
    }

    /// Number of subsets in `scope` whose sum is congruent to `residue`. Saturates at `u64::MAX`.
    pub fn multiplicity(&self, residue: Residue, scope: Scope) -> u64 {
        self.matching_layers(residue, scope)
            .filter_map(|k| self.layers[k].get(residue))
            .fold(0u64, |acc, bucket| acc.saturating_add(bucket.multiplicity()))
    }

    /// Consumes the accumulator, returning the buckets at `residue` of all layers in `scope`,
    /// by increasing cardinality.
    pub fn into_matches(self, residue: Residue, scope: Scope) -> Vec<B> {
        self.layers
            .into_iter()
            .enumerate()
            .filter(|&(k, _)| scope.contains(k))
            .filter_map(|(_, mut layer)| layer.take(residue))
            .collect()
    }
}
