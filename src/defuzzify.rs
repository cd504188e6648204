use tracing::debug;

use crate::centroids::Centroids;
use crate::error::Result;
use crate::math::{weighted_average, ZERO_WEIGHT_FALLBACK};
use crate::rules::Activations;

/// Collapses the activations into one crisp value: the centroid of every
/// activated output set, weighted by its degree.
///
/// Every activation needs a centroid, including ones with zero degree;
/// otherwise this fails with
/// [`FuzzyError::CentroidNotFound`](crate::FuzzyError::CentroidNotFound).
/// When the degrees sum to zero the result is [`ZERO_WEIGHT_FALLBACK`].
pub fn defuzzify(activations: &Activations, centroids: &Centroids) -> Result<f64> {
    let weighted = activations
        .iter()
        .map(|(name, degree)| centroids.centroid(name).map(|centroid| (degree, centroid)))
        .collect::<Result<Vec<_>>>()?;

    match weighted_average(weighted.iter().copied()) {
        Some(crisp) => {
            debug!(activations = weighted.len(), crisp, "defuzzified");

            Ok(crisp)
        },
        None => {
            debug!(
                activations = weighted.len(),
                fallback = ZERO_WEIGHT_FALLBACK,
                "no activation weight, using fallback"
            );

            Ok(ZERO_WEIGHT_FALLBACK)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;

    fn fan_speeds() -> Centroids {
        [("off", 0.), ("low", 20.), ("medium", 50.), ("high", 80.)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_empty_activations() {
        assert_eq!(defuzzify(&Activations::new(), &fan_speeds()), Ok(0.));
        assert_eq!(defuzzify(&Activations::new(), &Centroids::new()), Ok(0.));
    }

    #[test]
    fn test_all_zero_activations() {
        let activations = [("low", 0.), ("high", 0.)].into_iter().collect();

        assert_eq!(defuzzify(&activations, &fan_speeds()), Ok(ZERO_WEIGHT_FALLBACK));
    }

    #[test]
    fn test_scale_endpoints() {
        let off = [("off", 1.)].into_iter().collect();
        let high = [("high", 1.)].into_iter().collect();

        assert_eq!(defuzzify(&off, &fan_speeds()), Ok(0.));
        assert_eq!(defuzzify(&high, &fan_speeds()), Ok(80.));
    }

    #[test]
    fn test_single_activation_is_its_centroid() {
        let activations = [("medium", 0.1)].into_iter().collect();

        assert_eq!(defuzzify(&activations, &fan_speeds()), Ok(50.));
    }

    #[test]
    fn test_weighted_centroid() {
        let activations = [("off", 0.5), ("low", 0.5), ("medium", 0.), ("high", 0.)]
            .into_iter()
            .collect();

        assert_eq!(defuzzify(&activations, &fan_speeds()), Ok(10.));
    }

    #[test]
    fn test_centroid_invoked_once_per_set() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut centroids = fan_speeds();

        centroids.insert("boost", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            100.
        });

        let activations = [("boost", 1.), ("off", 1.)].into_iter().collect();

        assert_eq!(defuzzify(&activations, &centroids), Ok(50.));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_centroid() {
        let activations = [("off", 0.), ("turbo", 0.)].into_iter().collect();

        assert_eq!(
            defuzzify(&activations, &fan_speeds()),
            Err(FuzzyError::CentroidNotFound {
                name: "turbo".to_owned()
            })
        );
    }
}
