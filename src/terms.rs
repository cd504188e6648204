use std::collections::HashMap;
use std::fmt;

/// A membership function: maps a crisp value onto a degree in `[0, 1]`.
///
/// The function is responsible for keeping its own output in range, usually
/// via [`clamp`](crate::clamp). Degrees are never re-clamped after the call.
pub type MembershipFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// The named fuzzy sets (linguistic terms) of one input variable, each with
/// its membership function.
#[derive(Default)]
pub struct Terms(pub(crate) HashMap<String, MembershipFn>);

impl Terms {
    pub fn new() -> Self {
        Terms(HashMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Terms(HashMap::with_capacity(capacity))
    }

    /// Registers `membership` under `name`, replacing any earlier function
    /// of the same name.
    pub fn insert<F>(&mut self, name: impl Into<String>, membership: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.0.insert(name.into(), Box::new(membership));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S, F> FromIterator<(S, F)> for Terms
where
    S: Into<String>,
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = (S, F)>>(iter: I) -> Self {
        let mut terms = Terms::new();

        for (name, membership) in iter {
            terms.insert(name, membership);
        }

        terms
    }
}

impl fmt::Debug for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

#[test]
fn test_terms_insert_replaces() {
    let mut terms = Terms::with_capacity(2);

    terms.insert("cold", |x: f64| x);
    terms.insert("cold", |_| 0.25);
    terms.insert("hot", |_| 1.);

    assert_eq!(terms.len(), 2);
    assert!(terms.contains("cold"));
    assert!(!terms.contains("warm"));
    assert_eq!((terms.0["cold"])(10.), 0.25);
}
