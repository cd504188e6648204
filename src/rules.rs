use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::fuzzify::MembershipSet;

/// "If the input is in `input` then the output is in `output`."
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Rule {
    pub input: String,
    pub output: String,
}

impl Rule {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Rule {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl<I: Into<String>, O: Into<String>> From<(I, O)> for Rule {
    fn from((input, output): (I, O)) -> Self {
        Rule::new(input, output)
    }
}

/// An ordered rule base. Serializes as a plain list of rules.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Rules(pub(crate) Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Rules(Vec::with_capacity(capacity))
    }

    pub fn add(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.0.push(Rule::new(input, output));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<R: Into<Rule>> FromIterator<R> for Rules {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Rules(iter.into_iter().map(Into::into).collect())
    }
}

/// Aggregated degree of each output set that at least one rule targets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Activations(pub(crate) HashMap<String, f64>);

impl Activations {
    pub fn new() -> Self {
        Activations(HashMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, degree: f64) {
        self.0.insert(name.into(), degree);
    }

    /// `None` means no rule maps to `name`, which is not the same as a zero
    /// activation.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
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

impl<S: Into<String>> FromIterator<(S, f64)> for Activations {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Activations(iter.into_iter().map(|(name, degree)| (name.into(), degree)).collect())
    }
}

/// Fires every rule against `memberships` and max-aggregates the results per
/// output set.
///
/// Rules run in list order and the first rule whose input set is missing
/// aborts with [`FuzzyError::SetNotFound`](crate::FuzzyError::SetNotFound).
/// Max is commutative and associative so order has no effect on a
/// successful result.
pub fn apply_rules(memberships: &MembershipSet, rules: &Rules) -> Result<Activations> {
    let mut activations = HashMap::with_capacity(rules.len());

    for rule in &rules.0 {
        let degree = memberships.degree(&rule.input)?;
        let activation = activations.entry(rule.output.clone()).or_insert(0.);

        *activation = f64::max(*activation, degree);

        trace!(input = %rule.input, output = %rule.output, degree, "rule fired");
    }

    debug!(rules = rules.len(), outputs = activations.len(), "applied rules");

    Ok(Activations(activations))
}
