use crate::rng::RandomSource;

/// Ordered entries with relative integer weights.
///
/// Weights need not sum to 100. Selection draws uniformly in `[1, total]` and
/// walks the entries in insertion order; the first entry whose cumulative
/// weight reaches the draw wins, so ties resolve to the earlier entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedTable<T> {
    entries: Vec<(T, u32)>,
}

impl<T> WeightedTable<T> {
    pub fn new(entries: Vec<(T, u32)>) -> Self {
        Self { entries }
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|(_, w)| u64::from(*w)).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, u32)> {
        self.entries.iter().map(|(item, w)| (item, *w))
    }

    /// Resolve a draw in `[1, total]` to an entry.
    pub fn resolve(&self, draw: u64) -> Option<&T> {
        let mut cumulative = 0u64;
        for (item, weight) in &self.entries {
            cumulative += u64::from(*weight);
            if draw <= cumulative && *weight > 0 {
                return Some(item);
            }
        }
        None
    }

    /// Pick an entry. Returns `None` when the total weight is zero.
    pub fn select(&self, rng: &mut (impl RandomSource + ?Sized)) -> Option<&T> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }
        let upper = u32::try_from(total).unwrap_or(u32::MAX);
        let draw = rng.range(1, upper);
        self.resolve(u64::from(draw))
    }
}

impl<T> Default for WeightedTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<(T, u32)> for WeightedTable<T> {
    fn from_iter<I: IntoIterator<Item = (T, u32)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
