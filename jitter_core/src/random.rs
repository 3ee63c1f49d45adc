//! Probability sampling

use rand::Rng;

/// Return `true` with the given probability
///
/// Probabilities of 1.0 or more always return `true` and 0.0 or less always
/// return `false`, without drawing.
pub fn random_boolean_value(true_probability: f64) -> bool {
    random_boolean_value_with_rng(true_probability, &mut rand::thread_rng())
}

/// [`random_boolean_value`] drawing from a caller-supplied generator
pub fn random_boolean_value_with_rng(true_probability: f64, rng: &mut impl Rng) -> bool {
    if true_probability >= 1.0 {
        return true;
    }
    if true_probability <= 0.0 {
        return false;
    }

    rng.gen::<f64>() < true_probability
}
