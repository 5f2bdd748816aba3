/// Sorted, deduplicated coordinate axis mapping raw values to dense ranks.
///
/// Ranks preserve order: `a < b` iff `rank_of(a) < rank_of(b)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompressedAxis {
    values: Vec<i64>,
}

impl CompressedAxis {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dense rank of `value`, or `None` if it is not on the axis.
    pub fn rank_of(&self, value: i64) -> Option<usize> {
        self.values.binary_search(&value).ok()
    }

    /// Raw value at `rank`.
    pub fn value(&self, rank: usize) -> Option<i64> {
        self.values.get(rank).copied()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}
