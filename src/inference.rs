use tracing::debug;

use crate::centroids::Centroids;
use crate::defuzzify::defuzzify;
use crate::error::{FuzzyError, Result};
use crate::fuzzify::{fuzzify, MembershipSet};
use crate::inputs::Inputs;
use crate::outputs::Outputs;
use crate::rules::{apply_rules, Rules};
use crate::variable::Variables;

/// A complete fuzzy system: input variables, rule base and output centroids.
///
/// Evaluation only reads the tables, so a single `Inference` can serve any
/// number of threads at once.
#[derive(Debug)]
pub struct Inference {
    vars: Variables,
    rules: Rules,
    centroids: Centroids,
}

impl Inference {
    pub fn new(vars: Variables, rules: Rules, centroids: Centroids) -> Self {
        Self { vars, rules, centroids }
    }

    pub fn variables(&self) -> &Variables {
        &self.vars
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn centroids(&self) -> &Centroids {
        &self.centroids
    }

    /// Fuzzifies every provided input, merges the membership sets, fires the
    /// rules and defuzzifies.
    ///
    /// Variables with no input contribute no sets, so rules that refer to
    /// them fail with [`FuzzyError::SetNotFound`].
    pub fn eval(&self, inputs: &Inputs) -> Result<Outputs> {
        let mut memberships = MembershipSet::new();

        for (key, value) in &inputs.0 {
            let var = self.vars.0.get(*key).ok_or(FuzzyError::UnknownVariable)?;

            memberships.merge(fuzzify(*value, var.terms()))?;
        }

        debug!(inputs = inputs.len(), sets = memberships.len(), "fuzzified inputs");

        let activations = apply_rules(&memberships, &self.rules)?;
        let crisp = defuzzify(&activations, &self.centroids)?;

        Ok(Outputs::new(memberships, activations, crisp))
    }
}
