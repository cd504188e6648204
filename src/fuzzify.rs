use std::collections::HashMap;

use tracing::trace;

use crate::error::{FuzzyError, Result};
use crate::terms::Terms;

/// Membership degrees of crisp input(s), keyed by fuzzy set name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MembershipSet(pub(crate) HashMap<String, f64>);

impl MembershipSet {
    pub fn new() -> Self {
        MembershipSet(HashMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, degree: f64) {
        self.0.insert(name.into(), degree);
    }

    /// Degree of `name`. A missing set is a configuration error, never an
    /// implicit zero.
    pub fn degree(&self, name: &str) -> Result<f64> {
        self.0.get(name).copied().ok_or_else(|| FuzzyError::SetNotFound {
            name: name.to_owned(),
        })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Moves every degree of `other` into `self`. Fails without modifying
    /// `self` if both define the same set name.
    pub fn merge(&mut self, other: MembershipSet) -> Result<()> {
        if let Some(name) = other.0.keys().find(|name| self.0.contains_key(*name)) {
            return Err(FuzzyError::DuplicateSet { name: name.clone() });
        }

        self.0.extend(other.0);

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, degree)| (name.as_str(), *degree))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for MembershipSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        MembershipSet(iter.into_iter().map(|(name, degree)| (name.into(), degree)).collect())
    }
}

/// Evaluates every membership function of `terms` at `value`.
///
/// No terms means an empty set, not an error. A panic inside a membership
/// function is not caught here.
pub fn fuzzify(value: f64, terms: &Terms) -> MembershipSet {
    let memberships = terms
        .0
        .iter()
        .map(|(name, membership)| {
            let degree = membership(value);

            trace!(value, set = %name, degree, "fuzzified");

            (name.clone(), degree)
        })
        .collect();

    MembershipSet(memberships)
}
