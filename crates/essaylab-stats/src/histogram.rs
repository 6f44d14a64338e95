use std::collections::HashMap;

/// Occurrence counts for each distinct value in a dataset.
///
/// Values are de-duplicated with exact floating-point equality on their bit
/// patterns: `0.0` and `-0.0` are distinct entries, and every `NaN` payload is
/// counted under a single `NaN` entry.
///
/// The underlying map has no ordering; use [`ValueHistogram::sorted`] when the
/// values must be presented in order.
#[derive(Debug, Clone, Default)]
pub struct ValueHistogram {
    counts: HashMap<ValueKey, u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ValueKey(u64);

impl ValueKey {
    fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(f64::NAN.to_bits())
        } else {
            Self(value.to_bits())
        }
    }

    fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl ValueHistogram {
    /// Creates a histogram counting every value in `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use essaylab_stats::histogram::ValueHistogram;
    /// let histogram = ValueHistogram::new([3.0, 1.0, 3.0, 3.0]);
    /// assert_eq!(histogram.count(3.0), 3);
    /// assert_eq!(histogram.count(1.0), 1);
    /// assert_eq!(histogram.count(2.0), 0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut histogram = Self::default();
        for value in values {
            histogram.insert(value);
        }
        histogram
    }

    /// Records one occurrence of `value`.
    pub fn insert(&mut self, value: f64) {
        *self.counts.entry(ValueKey::new(value)).or_insert(0) += 1;
    }

    /// Number of occurrences recorded for `value`.
    #[must_use]
    pub fn count(&self, value: f64) -> u64 {
        self.counts.get(&ValueKey::new(value)).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct_values(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of values inserted.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over `(value, count)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts.iter().map(|(key, count)| (key.value(), *count))
    }

    /// Returns `(value, count)` entries sorted ascending by value.
    ///
    /// Ordering follows [`f64::total_cmp`], so `-0.0` sorts before `0.0` and
    /// `NaN` sorts last.
    ///
    /// # Examples
    ///
    /// ```
    /// # use essaylab_stats::histogram::ValueHistogram;
    /// let histogram = ValueHistogram::new([2.0, 1.0, 2.0]);
    /// assert_eq!(histogram.sorted(), vec![(1.0, 1), (2.0, 2)]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> Vec<(f64, u64)> {
        let mut entries = self.iter().collect::<Vec<_>>();
        entries.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        entries
    }
}

impl FromIterator<f64> for ValueHistogram {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        let histogram = ValueHistogram::new(std::iter::empty());
        assert!(histogram.is_empty());
        assert_eq!(histogram.distinct_values(), 0);
        assert_eq!(histogram.total_count(), 0);
        assert!(histogram.sorted().is_empty());
    }

    #[test]
    fn test_counts_duplicates() {
        let histogram = ValueHistogram::new([1.0, 1.0, 2.0]);
        assert_eq!(histogram.distinct_values(), 2);
        assert_eq!(histogram.count(1.0), 2);
        assert_eq!(histogram.count(2.0), 1);
        assert_eq!(histogram.total_count(), 3);
    }

    #[test]
    fn test_total_count_matches_input_len() {
        let values = (0..100).map(|i| f64::from(i % 7) * 0.5).collect::<Vec<_>>();
        let histogram = values.iter().copied().collect::<ValueHistogram>();
        assert_eq!(histogram.total_count(), 100);
        assert_eq!(histogram.distinct_values(), 7);
    }

    #[test]
    fn test_exact_equality() {
        let histogram = ValueHistogram::new([0.1 + 0.2, 0.3]);
        assert_eq!(histogram.distinct_values(), 2);
    }

    #[test]
    fn test_signed_zero_is_distinct() {
        let histogram = ValueHistogram::new([0.0, -0.0, 0.0]);
        assert_eq!(histogram.distinct_values(), 2);
        assert_eq!(histogram.count(0.0), 2);
        assert_eq!(histogram.count(-0.0), 1);
        let sorted = histogram.sorted();
        assert!(sorted[0].0.is_sign_negative());
        assert!(sorted[1].0.is_sign_positive());
    }

    #[test]
    fn test_nan_collapses_to_single_entry() {
        let other_nan = f64::from_bits(f64::NAN.to_bits() | 1);
        let histogram = ValueHistogram::new([f64::NAN, other_nan, 1.0]);
        assert_eq!(histogram.distinct_values(), 2);
        assert_eq!(histogram.count(f64::NAN), 2);
        let sorted = histogram.sorted();
        assert_eq!(sorted[0], (1.0, 1));
        assert!(sorted[1].0.is_nan());
    }

    #[test]
    fn test_sorted_is_ascending() {
        let histogram = ValueHistogram::new([5.0, -1.0, 3.0, 5.0, 0.5]);
        let values = histogram.sorted().into_iter().map(|(v, _)| v).collect::<Vec<_>>();
        assert_eq!(values, vec![-1.0, 0.5, 3.0, 5.0]);
    }
}
