/// Computes the arithmetic mean of `values`.
///
/// This is a plain sum-then-divide. An empty dataset divides zero by zero and
/// yields `NaN`; callers that need a defined value must check for emptiness
/// themselves.
///
/// # Examples
///
/// ```
/// # use essaylab_stats::descriptive;
/// assert_eq!(descriptive::mean([2.0, 4.0, 6.0]), 4.0);
/// assert!(descriptive::mean(std::iter::empty()).is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_values() {
        assert_eq!(mean([2.0, 4.0, 6.0]), 4.0);
        assert_eq!(mean([-1.5]), -1.5);
    }

    #[test]
    fn test_mean_of_empty_is_nan() {
        assert!(mean(std::iter::empty()).is_nan());
    }

    #[test]
    fn test_mean_propagates_nan() {
        assert!(mean([1.0, f64::NAN, 3.0]).is_nan());
    }
}
