use crate::fuzzify::MembershipSet;
use crate::rules::Activations;

/// Result of one [`Inference::eval`](crate::Inference::eval), with the
/// intermediate stages kept for inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct Outputs {
    memberships: MembershipSet,
    activations: Activations,
    crisp: f64,
}

impl Outputs {
    pub(crate) fn new(memberships: MembershipSet, activations: Activations, crisp: f64) -> Self {
        Self {
            memberships,
            activations,
            crisp,
        }
    }

    /// Merged membership degrees of every input that was provided.
    pub fn memberships(&self) -> &MembershipSet {
        &self.memberships
    }

    pub fn activations(&self) -> &Activations {
        &self.activations
    }

    /// The defuzzified value, on the scale set by the centroids.
    pub fn crisp(&self) -> f64 {
        self.crisp
    }
}
