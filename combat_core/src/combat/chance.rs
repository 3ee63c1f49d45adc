//! Hit and crit chance - contested stat ratios
//!
//! Both chances use the same ratio:
//! - chance = attacker_stat / (attacker_stat + defender_stat)
//!
//! Non-positive stats short-circuit to a fixed boundary instead of dividing.

/// Calculate the chance that an attack connects
///
/// # Arguments
/// * `attacker_hit` - The attacker's hit rating
/// * `victim_evade` - The defender's evade rating
///
/// # Returns
/// Probability in `[0, 1]`. An attacker with no hit rating never misses,
/// regardless of the defender's evade.
pub fn attack_hit_rate(attacker_hit: i32, victim_evade: i32) -> f64 {
    if attacker_hit <= 0 {
        return 1.0;
    }
    if victim_evade <= 0 {
        return 0.0;
    }

    contested_ratio(attacker_hit, victim_evade)
}

/// Calculate the chance that an attack is a critical strike
///
/// # Arguments
/// * `attacker_crit` - The attacker's crit rating
/// * `victim_resistance` - The defender's crit resistance
///
/// # Returns
/// Probability in `[0, 1]`
pub fn attacker_crit_chance(attacker_crit: i32, victim_resistance: i32) -> f64 {
    if attacker_crit <= 0 {
        return 0.0;
    }
    if victim_resistance <= 0 {
        return 1.0;
    }

    contested_ratio(attacker_crit, victim_resistance)
}

// Sum in f64 so two large ratings cannot overflow into a negative denominator.
fn contested_ratio(attacker: i32, defender: i32) -> f64 {
    let attacker = f64::from(attacker);
    attacker / (attacker + f64::from(defender))
}
