//! Queries over an instance of the subset-sum problem.

use crate::accumulator::{Accumulator, Scope};
use crate::error::{FoliationError, Result};
use crate::layer::{Bucket, Count, Witnesses};
use crate::modulus::{Modulus, ModulusPolicy, Precision, SumRange};
use crate::params::{MAX_WITNESSES, PRINT_STATS};
use crate::witnesses::Enumeration;
use crate::Value;

/// An input sequence, a target sum and the parameters of the search.
///
/// Each query builds its own accumulator and discards it before returning:
/// running the same query twice gives the same answer, and independent queries
/// can be run concurrently from different threads.
#[derive(Clone, Debug)]
pub struct Instance {
    values: Vec<Value>,
    target: Value,
    size: Option<i64>,
    modulus: ModulusPolicy,
    witness_limit: Option<usize>,
}

/// Answer to an existence query, together with the conditions under which it was obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Whether some subset in scope has a sum congruent to the target.
    pub found: bool,
    /// Number of such subsets (saturating).
    pub multiplicity: u64,
    pub modulus: Modulus,
    /// If [`Precision::Modular`], a positive answer may be due to a residue collision.
    pub precision: Precision,
}

/// Validated parameters of a query.
struct Plan {
    scope: Scope,
    modulus: Modulus,
    precision: Precision,
}

impl Instance {
    pub fn new(values: Vec<Value>, target: Value) -> Self {
        Instance {
            values,
            target,
            size: None,
            modulus: ModulusPolicy::default(),
            witness_limit: None,
        }
    }

    /// Only consider subsets with exactly `size` elements.
    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Track sums modulo `m` instead of deriving the modulus heuristically.
    pub fn with_modulus(self, m: Value) -> Self {
        self.with_modulus_policy(ModulusPolicy::Fixed(m))
    }

    pub fn with_modulus_policy(mut self, policy: ModulusPolicy) -> Self {
        self.modulus = policy;
        self
    }

    /// Maximum number of subsets stored by [`Instance::enumerate`].
    /// Defaults to the `FOLIATION_MAX_WITNESSES` parameter.
    pub fn with_witness_limit(mut self, limit: usize) -> Self {
        self.witness_limit = Some(limit);
        self
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn target(&self) -> Value {
        self.target
    }

    pub fn size(&self) -> Option<i64> {
        self.size
    }

    /// The cardinalities in which a match is looked for.
    pub fn scope(&self) -> Result<Scope> {
        match self.size {
            None => Ok(Scope::AnySize),
            Some(size) if size < 0 => Err(FoliationError::NegativeSize { size }),
            Some(size) if size as u64 > self.values.len() as u64 => Err(FoliationError::SizeExceedsLength {
                size,
                len: self.values.len(),
            }),
            Some(size) => Ok(Scope::Exactly(size as usize)),
        }
    }

    /// The modulus the queries run with and whether it guarantees exact answers.
    pub fn modulus(&self) -> Result<(Modulus, Precision)> {
        let modulus = self.modulus.resolve(&self.values, self.target)?;
        let precision = modulus.precision_for(&SumRange::of(&self.values, self.target));
        Ok((modulus, precision))
    }

    fn plan(&self) -> Result<Plan> {
        let scope = self.scope()?;
        let (modulus, precision) = self.modulus()?;
        tracing::debug!(%modulus, %precision, ?scope, "query plan");
        if !precision.is_exact() && !matches!(self.modulus, ModulusPolicy::Fixed(_)) {
            let range = SumRange::of(&self.values, self.target);
            tracing::warn!(
                "modulus {} does not separate all sums in [{}, {}], positive answers may be spurious",
                modulus,
                range.lo,
                range.hi
            );
        }
        Ok(Plan {
            scope,
            modulus,
            precision,
        })
    }

    fn accumulate<B: Bucket>(&self, plan: &Plan, witness_limit: Option<usize>) -> Result<Accumulator<B>> {
        let _span = tracing::span!(
            tracing::Level::DEBUG,
            "foliation",
            n = self.values.len(),
            target = self.target
        )
        .entered();
        let mut acc = Accumulator::new(plan.scope.upper(self.values.len()), plan.modulus);
        if let Some(limit) = witness_limit {
            acc = acc.with_witness_limit(limit);
        }
        acc.absorb_all(&self.values)?;
        if PRINT_STATS.get() {
            tracing::info!("statistics\n{}", acc.stats());
        }
        Ok(acc)
    }

    /// Whether some subset in scope has a sum congruent to the target.
    pub fn exists(&self) -> Result<bool> {
        self.solve().map(|verdict| verdict.found)
    }

    /// Number of subsets in scope whose sum is congruent to the target.
    pub fn count(&self) -> Result<u64> {
        self.solve().map(|verdict| verdict.multiplicity)
    }

    pub fn solve(&self) -> Result<Verdict> {
        let plan = self.plan()?;
        let acc: Accumulator<Count> = self.accumulate(&plan, None)?;
        let residue = plan.modulus.residue(self.target);
        let multiplicity = acc.multiplicity(residue, plan.scope);
        Ok(Verdict {
            found: multiplicity > 0,
            multiplicity,
            modulus: plan.modulus,
            precision: plan.precision,
        })
    }

    /// All subsets in scope whose sum is congruent to the target, by increasing cardinality.
    ///
    /// Fails with [`FoliationError::TooManyWitnesses`] if more subsets than the witness limit
    /// would have to be stored along the way.
    pub fn enumerate(&self) -> Result<Enumeration> {
        let plan = self.plan()?;
        let limit = self.witness_limit.unwrap_or_else(|| MAX_WITNESSES.get());
        let acc: Accumulator<Witnesses> = self.accumulate(&plan, Some(limit))?;
        let residue = plan.modulus.residue(self.target);
        Ok(Enumeration::new(acc.into_matches(residue, plan.scope), plan.precision))
    }
}

/// Whether a subset of `values` (of exactly `size` elements if given) has a sum congruent to `target`
/// modulo the heuristic modulus.
pub fn exists(values: &[Value], target: Value, size: Option<i64>) -> Result<bool> {
    with_size(Instance::new(values.to_vec(), target), size).exists()
}

/// The subsets of `values` (of exactly `size` elements if given) whose sum is congruent to `target`
/// modulo the heuristic modulus.
pub fn enumerate(values: &[Value], target: Value, size: Option<i64>) -> Result<Enumeration> {
    with_size(Instance::new(values.to_vec(), target), size).enumerate()
}

fn with_size(instance: Instance, size: Option<i64>) -> Instance {
    match size {
        Some(size) => instance.with_size(size),
        None => instance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        let values = [1, 2, 3];
        assert_eq!(
            Instance::new(values.to_vec(), 3).with_size(-1).exists(),
            Err(FoliationError::NegativeSize { size: -1 })
        );
        assert_eq!(
            Instance::new(values.to_vec(), 3).with_size(4).exists(),
            Err(FoliationError::SizeExceedsLength { size: 4, len: 3 })
        );
        assert_eq!(
            Instance::new(values.to_vec(), 3).with_modulus(0).enumerate().map(|e| e.count()),
            Err(FoliationError::NonPositiveModulus { modulus: 0 })
        );
        assert_eq!(Instance::new(values.to_vec(), 3).with_size(3).scope(), Ok(Scope::Exactly(3)));
    }

    #[test]
    fn empty_subset() {
        let values = [4, 5, 6];
        assert_eq!(exists(&values, 0, Some(0)), Ok(true));
        let exact = Instance::new(values.to_vec(), 7).with_size(0).with_modulus_policy(ModulusPolicy::Covering);
        assert_eq!(exact.exists(), Ok(false));
        assert_eq!(exact.enumerate().map(|e| e.count()), Ok(0));
        let empty = Instance::new(values.to_vec(), 0).with_size(0).enumerate().unwrap();
        assert_eq!(empty.collect::<Vec<_>>(), vec![Vec::<Value>::new()]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(exists(&[], 0, None), Ok(true));
        let covering = Instance::new(Vec::new(), 5).with_modulus_policy(ModulusPolicy::Covering);
        assert_eq!(covering.exists(), Ok(false));
    }

    #[test]
    fn verdict() {
        let instance = Instance::new(vec![3, 1, 4, 2], 5).with_modulus(100);
        let verdict = instance.solve().unwrap();
        // {3, 2}, {1, 4}
        assert_eq!(
            verdict,
            Verdict {
                found: true,
                multiplicity: 2,
                modulus: Modulus::new(100).unwrap(),
                precision: Precision::Exact,
            }
        );
        assert_eq!(instance.count(), Ok(2));
        assert_eq!(instance.clone().with_size(3).count(), Ok(0));
    }

    #[test]
    fn heuristic_modulus_on_negative_target() {
        // min(-10 + 1, 200) is clamped to 1, under which every subset matches
        let instance = Instance::new(vec![5, 7], -10);
        assert_eq!(instance.modulus(), Ok((Modulus::ONE, Precision::Modular)));
        assert_eq!(instance.count(), Ok(4));
    }

    #[test]
    fn witness_limit() {
        let instance = Instance::new(vec![1; 12], 6).with_modulus(100).with_witness_limit(50);
        assert_eq!(
            instance.enumerate().map(|e| e.count()),
            Err(FoliationError::TooManyWitnesses { limit: 50 })
        );
        // the same query in existence mode is not subject to the limit: C(12, 6) subsets
        assert_eq!(instance.count(), Ok(924));
    }
}
