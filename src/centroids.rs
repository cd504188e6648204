use std::collections::HashMap;
use std::fmt;

use crate::error::{FuzzyError, Result};

/// Produces the representative crisp value of one output set.
pub type CentroidFn = Box<dyn Fn() -> f64 + Send + Sync>;

/// Centroid functions of the output sets, keyed by set name. The centroids
/// chosen here define the scale of the crisp output.
#[derive(Default)]
pub struct Centroids(HashMap<String, CentroidFn>);

impl Centroids {
    pub fn new() -> Self {
        Centroids(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Centroids(HashMap::with_capacity(capacity))
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, centroid: F)
    where
        F: Fn() -> f64 + Send + Sync + 'static,
    {
        self.0.insert(name.into(), Box::new(centroid));
    }

    /// Shorthand for a centroid that is a fixed value.
    pub fn insert_value(&mut self, name: impl Into<String>, value: f64) {
        self.insert(name, move || value);
    }

    /// Invokes the centroid function registered for `name`.
    pub fn centroid(&self, name: &str) -> Result<f64> {
        let centroid = self.0.get(name).ok_or_else(|| FuzzyError::CentroidNotFound {
            name: name.to_owned(),
        })?;

        Ok(centroid())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Centroids {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut centroids = Centroids::new();

        for (name, value) in iter {
            centroids.insert_value(name, value);
        }

        centroids
    }
}

impl fmt::Debug for Centroids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

#[test]
fn test_centroid_lookup() {
    let mut centroids: Centroids = [("off", 0.), ("low", 20.)].into_iter().collect();
    centroids.insert("high", || 40. * 2.);

    assert_eq!(centroids.len(), 3);
    assert_eq!(centroids.centroid("low"), Ok(20.));
    assert_eq!(centroids.centroid("high"), Ok(80.));
    assert_eq!(
        centroids.centroid("medium"),
        Err(FuzzyError::CentroidNotFound {
            name: "medium".to_owned()
        })
    );
}
