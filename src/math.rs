use num::Float;

/// Value returned by [`defuzzify`](crate::defuzzify()) when the activations
/// carry no weight at all (nothing fired, or every degree is zero).
pub const ZERO_WEIGHT_FALLBACK: f64 = 0.;

/// Limits a degree to `[0, 1]`.
#[inline]
pub fn clamp(degree: f64) -> f64 {
    clamp_to(degree, 0., 1.)
}

/// Limits `degree` to `[min, max]`. Unlike `f64::clamp` this never panics,
/// a NaN input collapses onto `max`.
#[inline]
pub fn clamp_to(degree: f64, min: f64, max: f64) -> f64 {
    degree.min(max).max(min)
}

/// Weighted mean of `(weight, value)` pairs. Returns `None` when the weights
/// sum to zero.
///
/// Weights are normalised before they are applied, so a single pair with a
/// non zero weight returns its value bit for bit.
pub(crate) fn weighted_average<F>(pairs: impl IntoIterator<Item = (F, F)> + Clone) -> Option<F>
where
    F: Float,
{
    let total = pairs
        .clone()
        .into_iter()
        .fold(F::zero(), |acc, (weight, _)| acc + weight);

    if total == F::zero() {
        return None;
    }

    let mean = pairs
        .into_iter()
        .fold(F::zero(), |acc, (weight, value)| acc + weight / total * value);

    Some(mean)
}

#[test]
fn test_clamp() {
    assert_eq!(clamp(-0.3), 0.);
    assert_eq!(clamp(0.25), 0.25);
    assert_eq!(clamp(1.7), 1.);
    assert_eq!(clamp_to(12., 0., 10.), 10.);
    assert_eq!(clamp_to(-4., -2., 2.), -2.);
    assert_eq!(clamp(f64::NAN), 1.);
}

#[test]
fn test_weighted_average() {
    assert_eq!(weighted_average(Vec::<(f64, f64)>::new()), None);
    assert_eq!(weighted_average([(0., 20.), (0., 80.)]), None);
    assert_eq!(weighted_average([(0.3, 42.)]), Some(42.));
    assert_eq!(weighted_average([(1., 0.), (1., 100.)]), Some(50.));
    assert_eq!(weighted_average([(0.5f32, 0.), (0.5, 20.), (0., 50.)]), Some(10.));
}
