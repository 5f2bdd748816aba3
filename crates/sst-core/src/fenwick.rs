/// Binary indexed tree over signed counts, 0-based indices.
#[derive(Clone, Debug)]
pub struct FenwickTree {
    tree: Vec<i64>,
    n: usize,
}

impl FenwickTree {
    pub fn new(size: usize) -> Self {
        Self {
            tree: vec![0; size + 1],
            n: size,
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn update(&mut self, index: usize, delta: i64) {
        let mut idx = index + 1;
        while idx <= self.n {
            self.tree[idx] += delta;
            idx += idx & idx.wrapping_neg();
        }
    }

    /// Sum of `[0, index]`. Indices past the end are clamped.
    pub fn prefix_sum(&self, index: usize) -> i64 {
        let mut idx = (index + 1).min(self.n);
        let mut sum = 0;
        while idx > 0 {
            sum += self.tree[idx];
            idx -= idx & idx.wrapping_neg();
        }
        sum
    }

    /// Sum of `[lo, hi]`; zero when `lo > hi`.
    pub fn range_sum(&self, lo: usize, hi: usize) -> i64 {
        if lo > hi {
            return 0;
        }
        let below = if lo == 0 { 0 } else { self.prefix_sum(lo - 1) };
        self.prefix_sum(hi) - below
    }
}
