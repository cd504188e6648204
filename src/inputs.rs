use std::collections::HashMap;

use crate::variable::{Variable, VariableKey};

/// Crisp values for one evaluation, keyed by input variable.
#[derive(Clone, Debug, Default)]
pub struct Inputs(pub(crate) HashMap<VariableKey, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Sets the crisp value of `var`, replacing any earlier value.
    pub fn add(&mut self, var: Variable, val: f64) {
        self.0.insert(var.0, val);
    }

    pub fn get(&self, var: Variable) -> Option<f64> {
        self.0.get(&var.0).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
