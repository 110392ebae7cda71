//! Combination Enumerator.
//!
//! Produces the Cartesian product of a list of dimensions. It provides:
//! 1. **Combinations:** Ordered `name -> value` selections, one value per dimension.
//! 2. **Lazy iteration:** An odometer over value indices; nothing is materialized up front.
//! 3. **Ordering:** Lexicographic by declaration order with the *last* dimension varying fastest.
//!
//! The ordering is observable: run names are derived from it and must be identical
//! across invocations so previous and current test lists can be compared.

use std::iter::FusedIterator;

use crate::common::Value;
use crate::sweep::dimension::Dimension;

/// One point of a sweep: exactly one value for every declared dimension, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Combination {
    pairs: Vec<(String, Value)>,
}

impl Combination {
    /// Builds a combination from explicit `(name, value)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the value selected for `name`, if the dimension exists.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Number of dimensions in the combination.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` for the combination of zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates dimension names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    /// Consumes the combination and returns its pairs.
    pub fn into_pairs(self) -> Vec<(String, Value)> {
        self.pairs
    }
}

/// Number of combinations `dimensions` enumerates to.
///
/// The product of all value-list lengths: zero if any dimension is empty, one for an
/// empty dimension list. Saturates at `usize::MAX`.
pub fn combination_count(dimensions: &[Dimension]) -> usize {
    dimensions
        .iter()
        .fold(1usize, |acc, d| acc.saturating_mul(d.len()))
}

/// Enumerates the Cartesian product of `dimensions`.
///
/// # Arguments
///
/// * `dimensions` - Dimensions in declaration order.
///
/// # Returns
///
/// A lazy iterator yielding [`combination_count`] combinations, last dimension fastest.
pub fn enumerate(dimensions: &[Dimension]) -> Combinations<'_> {
    let remaining = combination_count(dimensions);
    Combinations {
        dimensions,
        indices: vec![0; dimensions.len()],
        remaining,
        exhausted: remaining == 0,
    }
}

/// Lazy Cartesian-product iterator returned by [`enumerate`].
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    dimensions: &'a [Dimension],
    indices: Vec<usize>,
    remaining: usize,
    exhausted: bool,
}

impl Combinations<'_> {
    /// Steps the odometer; marks the iterator exhausted when the first digit carries out.
    fn advance(&mut self) {
        for (digit, dim) in self.indices.iter_mut().zip(self.dimensions).rev() {
            *digit += 1;
            if *digit < dim.len() {
                return;
            }
            *digit = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.exhausted {
            return None;
        }
        let pairs = self
            .dimensions
            .iter()
            .zip(&self.indices)
            .map(|(dim, &i)| (dim.name.clone(), dim.values[i].clone()))
            .collect();
        self.advance();
        self.remaining = self.remaining.saturating_sub(1);
        Some(Combination { pairs })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (self.remaining, Some(self.remaining))
        }
    }
}

impl ExactSizeIterator for Combinations<'_> {}

impl FusedIterator for Combinations<'_> {}
