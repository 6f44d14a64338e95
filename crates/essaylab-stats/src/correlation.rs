/// Computes the Pearson correlation coefficient of paired observations.
///
/// Each item is an `(x, y)` pair. Both means are taken over all pairs, then the
/// coefficient is `Σ(dx·dy) / sqrt(Σdx² · Σdy²)`.
///
/// No degenerate input is special-cased: if either sequence is constant (or the
/// input is empty) the denominator is zero and the result is `NaN`.
///
/// # Examples
///
/// ```
/// # use essaylab_stats::correlation;
/// let r = correlation::pearson([(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]);
/// assert!((r + 1.0).abs() < 1e-12);
///
/// let constant = correlation::pearson([(1.0, 5.0), (2.0, 5.0)]);
/// assert!(constant.is_nan());
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let pairs = pairs.into_iter().collect::<Vec<_>>();
    let n = pairs.len() as f64;

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut prod = 0.0;
    let mut x_sum_sq = 0.0;
    let mut y_sum_sq = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        prod += dx * dy;
        x_sum_sq += dx * dx;
        y_sum_sq += dy * dy;
    }

    prod / (x_sum_sq * y_sum_sq).sqrt()
}
