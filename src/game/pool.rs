use std::collections::HashSet;

use rand::Rng;

use crate::error::GenerateError;

/// The working set of board indexes not yet assigned to any category.
///
/// Successive draws consume the pool in place, so no two draws over the same
/// pool can ever hand out the same index.
#[derive(Debug, Clone)]
pub struct IndexPool {
    indexes: Vec<usize>,
}

impl IndexPool {
    /// Create a pool holding every index in `[0, size)`.
    pub fn new(size: usize) -> Self {
        IndexPool {
            indexes: (0..size).collect(),
        }
    }

    /// Number of indexes still available.
    pub fn len(&self) -> usize {
        self.indexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }

    /// Check whether an index is still available.
    pub fn contains(&self, index: usize) -> bool {
        self.indexes.contains(&index)
    }

    /// Draw `amount` indexes uniformly at random without replacement,
    /// removing them from the pool.
    pub fn draw<R: Rng>(
        &mut self,
        rng: &mut R,
        amount: usize,
    ) -> Result<HashSet<usize>, GenerateError> {
        if amount > self.indexes.len() {
            return Err(GenerateError::InsufficientIndexes {
                requested: amount,
                available: self.indexes.len(),
            });
        }

        // Partial Fisher-Yates: swap_remove keeps the backing vector dense.
        let mut chosen = HashSet::with_capacity(amount);
        for _ in 0..amount {
            let i = rng.random_range(0..self.indexes.len());
            chosen.insert(self.indexes.swap_remove(i));
        }
        Ok(chosen)
    }
}
