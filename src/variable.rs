use slotmap::{new_key_type, SlotMap};

use crate::terms::Terms;

new_key_type! {
    /// A variable key
    pub struct VariableKey;
}

/// Handle to an input variable registered in [`Variables`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Variable(pub(crate) VariableKey);

/// Registry of the input variables of a fuzzy system, each with the family
/// of fuzzy sets its crisp value is fuzzified against.
#[derive(Debug, Default)]
pub struct Variables(pub(crate) SlotMap<VariableKey, InputVariable>);

impl Variables {
    pub fn new() -> Self {
        Self(SlotMap::with_key())
    }

    pub fn add(&mut self, name: impl Into<String>, terms: Terms) -> Variable {
        let key = self.0.insert(InputVariable {
            name: name.into(),
            terms,
        });

        Variable(key)
    }

    pub fn get(&self, var: Variable) -> Option<&InputVariable> {
        self.0.get(var.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Variable, &InputVariable)> {
        self.0.iter().map(|(key, var)| (Variable(key), var))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug)]
pub struct InputVariable {
    name: String,
    terms: Terms,
}

impl InputVariable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terms(&self) -> &Terms {
        &self.terms
    }
}

#[test]
fn test_variables() {
    let mut wow_terms = Terms::new();

    wow_terms.insert("no_weight", |x| if x == 0. { 1. } else { 0. });
    wow_terms.insert("weight", |x| if x == 1. { 1. } else { 0. });

    let mut vars = Variables::new();
    let altitude = vars.add("altitude", Terms::new());
    let wow = vars.add("weight_on_wheels", wow_terms);

    assert_eq!(vars.len(), 2);
    assert_ne!(altitude, wow);
    assert_eq!(vars.get(wow).map(InputVariable::name), Some("weight_on_wheels"));
    assert_eq!(vars.get(wow).map(|var| var.terms().len()), Some(2));
    assert!(vars.get(altitude).is_some_and(|var| var.terms().is_empty()));
}
