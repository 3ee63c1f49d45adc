//! Effective HP - Survivability against steady damage
//!
//! Formula:
//! - effective_hp = hp / (1 - damage_reduction) / (1 - evade_chance)
//!
//! Full reduction or full evasion makes the defender unkillable.

/// Effective HP reported for a defender that cannot be damaged
pub const UNKILLABLE_EFFECTIVE_HP: f64 = i32::MAX as f64;

/// Calculate a defender's effective HP
///
/// # Arguments
/// * `hp` - The defender's current HP
/// * `damage_reduction` - Fraction of damage prevented (0.25 = 25%)
/// * `evade_chance` - Probability of evading a hit
///
/// # Returns
/// [`UNKILLABLE_EFFECTIVE_HP`] when either reduction or evasion reaches 1.0
pub fn victim_effective_hp(hp: i32, damage_reduction: f64, evade_chance: f64) -> f64 {
    if evade_chance >= 1.0 || damage_reduction >= 1.0 {
        return UNKILLABLE_EFFECTIVE_HP;
    }

    f64::from(hp) / (1.0 - damage_reduction) / (1.0 - evade_chance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_mitigation() {
        assert!((victim_effective_hp(250, 0.0, 0.0) - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduction_and_evasion() {
        // 100 / 0.5 / 0.5 = 400
        let ehp = victim_effective_hp(100, 0.5, 0.5);
        assert!((ehp - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_reduction_lowers_ehp() {
        // Taking 25% extra damage: 100 / 1.25 = 80
        let ehp = victim_effective_hp(100, -0.25, 0.0);
        assert!((ehp - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unkillable() {
        assert_eq!(victim_effective_hp(100, 1.0, 0.0), UNKILLABLE_EFFECTIVE_HP);
        assert_eq!(victim_effective_hp(100, 0.0, 1.0), UNKILLABLE_EFFECTIVE_HP);
        assert_eq!(victim_effective_hp(0, 2.0, 5.0), UNKILLABLE_EFFECTIVE_HP);
        assert_eq!(UNKILLABLE_EFFECTIVE_HP, 2_147_483_647.0);
    }

    proptest! {
        #[test]
        fn full_evasion_is_unkillable(hp in any::<i32>(), reduction in -10.0f64..10.0, evade in 1.0f64..10.0) {
            prop_assert_eq!(victim_effective_hp(hp, reduction, evade), UNKILLABLE_EFFECTIVE_HP);
        }

        #[test]
        fn full_reduction_is_unkillable(hp in any::<i32>(), reduction in 1.0f64..10.0, evade in -10.0f64..10.0) {
            prop_assert_eq!(victim_effective_hp(hp, reduction, evade), UNKILLABLE_EFFECTIVE_HP);
        }

        #[test]
        fn mitigation_never_lowers_positive_hp(hp in 1..100_000i32, reduction in 0.0f64..0.99, evade in 0.0f64..0.99) {
            prop_assert!(victim_effective_hp(hp, reduction, evade) >= f64::from(hp));
        }
    }
}
