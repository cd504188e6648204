//! Mamdani-style fuzzy inference over caller-supplied functions.
//!
//! Evaluation runs in three pure stages:
//!
//! 1. [`fuzzify()`] turns a crisp value into a [`MembershipSet`] by calling each
//!    named membership function of a [`Terms`] family.
//! 2. [`apply_rules`] fires single-antecedent [`Rules`] against the membership
//!    set and max-aggregates them into [`Activations`].
//! 3. [`defuzzify()`] averages the [`Centroids`] of the activated output sets,
//!    weighted by degree. If no weight is left it returns
//!    [`ZERO_WEIGHT_FALLBACK`].
//!
//! [`Inference`] wires the stages together for systems with several input
//! [`Variables`].
//!
//! ```
//! use fuzzy_inference::{clamp, defuzzify, fuzzify, apply_rules, Centroids, Rules, Terms};
//!
//! let mut temperature = Terms::new();
//! temperature.insert("cold", |x| clamp((20. - x) / 20.));
//! temperature.insert("hot", |x| clamp((x - 10.) / 20.));
//!
//! let rules: Rules = [("cold", "low"), ("hot", "high")].into_iter().collect();
//! let fan_speed: Centroids = [("low", 20.), ("high", 80.)].into_iter().collect();
//!
//! let memberships = fuzzify(0., &temperature);
//! let activations = apply_rules(&memberships, &rules)?;
//!
//! assert_eq!(defuzzify(&activations, &fan_speed)?, 20.);
//! # Ok::<(), fuzzy_inference::FuzzyError>(())
//! ```

mod centroids;
mod defuzzify;
mod error;
mod fuzzify;
mod inference;
mod inputs;
mod math;
mod outputs;
mod rules;
mod terms;
mod variable;

pub use centroids::{CentroidFn, Centroids};
pub use defuzzify::defuzzify;
pub use error::{FuzzyError, Result};
pub use fuzzify::{fuzzify, MembershipSet};
pub use inference::Inference;
pub use inputs::Inputs;
pub use math::{clamp, clamp_to, ZERO_WEIGHT_FALLBACK};
pub use outputs::Outputs;
pub use rules::{apply_rules, Activations, Rule, Rules};
pub use terms::{MembershipFn, Terms};
pub use variable::{InputVariable, Variable, VariableKey, Variables};
