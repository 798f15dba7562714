//! Validated probability tables shared by the darts and slots generators.

use std::collections::HashSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::DomainError;

/// Sampler over a probability table whose entries sum to exactly one.
///
/// Probabilities are validated as exact decimals; sampling converts them to
/// `f64` weights once at construction.
#[derive(Debug, Clone)]
pub struct WeightedTable {
    index: WeightedIndex<f64>,
}

impl WeightedTable {
    /// Validate `(name, probability)` pairs and build a sampler.
    ///
    /// # Errors
    /// Returns an error if the table is empty, names repeat, a probability
    /// falls outside `[0, 1]`, or the probabilities do not sum to one.
    pub fn try_new<'a>(
        table: &'static str,
        entries: impl IntoIterator<Item = (&'a str, Decimal)>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let mut sum = Decimal::ZERO;
        let mut weights = Vec::new();

        for (name, probability) in entries {
            if !seen.insert(name) {
                return Err(DomainError::DuplicateEntry {
                    table,
                    entry: name.to_string(),
                });
            }
            if probability < Decimal::ZERO || probability > Decimal::ONE {
                return Err(DomainError::ProbabilityOutOfRange {
                    table,
                    entry: name.to_string(),
                    probability,
                });
            }
            sum += probability;
            weights.push(probability.to_f64().unwrap_or(0.0));
        }

        if weights.is_empty() {
            return Err(DomainError::EmptyTable { table });
        }
        if sum != Decimal::ONE {
            return Err(DomainError::ProbabilitySum { table, sum });
        }

        let index =
            WeightedIndex::new(weights).map_err(|_| DomainError::ProbabilitySum { table, sum })?;
        Ok(Self { index })
    }

    /// Draw an entry index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}
