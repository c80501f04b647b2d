/// Lazy lexicographic iterator over the `size`-element subsets of a pool.
///
/// Subsets are produced in increasing order of their index vectors, so for a
/// sorted pool the output is sorted both within and across subsets. The
/// iterator keeps only an index vector as state and can be rewound with
/// [`Combinations::reset`].
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: Vec<u64>,
    size: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    /// Creates an iterator over the `size`-subsets of `pool`.
    pub fn new(pool: Vec<u64>, size: usize) -> Self {
        let exhausted = size > pool.len();
        Self {
            pool,
            size,
            indices: (0..size).collect(),
            exhausted,
        }
    }

    /// Subset size produced by this iterator.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rewinds to the first subset.
    pub fn reset(&mut self) {
        self.indices = (0..self.size).collect();
        self.exhausted = self.size > self.pool.len();
    }

    fn advance(&mut self) {
        let n = self.pool.len();
        let k = self.size;
        let mut pos = k;
        while pos > 0 {
            pos -= 1;
            if self.indices[pos] != pos + n - k {
                self.indices[pos] += 1;
                for next in pos + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                return;
            }
        }
        self.exhausted = true;
    }
}

impl Iterator for Combinations {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.iter().map(|&idx| self.pool[idx]).collect();
        self.advance();
        Some(current)
    }
}

/// Chains [`Combinations`] over every size in `min_size..=max_size`.
#[derive(Debug, Clone)]
pub struct SubsetSweep {
    pool: Vec<u64>,
    next_size: usize,
    max_size: usize,
    current: Option<Combinations>,
}

impl SubsetSweep {
    /// Creates a sweep; empty when `min_size > max_size`.
    pub fn new(pool: Vec<u64>, min_size: usize, max_size: usize) -> Self {
        Self {
            pool,
            next_size: min_size,
            max_size,
            current: None,
        }
    }
}

impl Iterator for SubsetSweep {
    type Item = Vec<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(subset) = self.current.as_mut().and_then(Iterator::next) {
                return Some(subset);
            }
            if self.next_size > self.max_size || self.next_size > self.pool.len() {
                return None;
            }
            self.current = Some(Combinations::new(self.pool.clone(), self.next_size));
            self.next_size += 1;
        }
    }
}
