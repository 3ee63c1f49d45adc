//! Damage calculation - physical hits and critical strikes

/// Calculate the physical damage an attack deals through armor
///
/// Formula: damage = attack² / (attack + armor)
///
/// When `attack + armor` is exactly zero the denominator is nudged: a
/// non-positive armor gains 1, and independently a non-positive attack gains 1.
/// Both checks look at the values passed in, not at each other's nudge.
pub fn attacker_physical_damage(attack: f64, armor: f64) -> f64 {
    let mut effective_attack = attack;
    let mut effective_armor = armor;

    if attack + armor == 0.0 {
        if armor <= 0.0 {
            effective_armor = armor + 1.0;
        }
        if attack <= 0.0 {
            effective_attack = attack + 1.0;
        }
    }

    effective_attack * effective_attack / (effective_attack + effective_armor)
}

/// Calculate critical strike damage
///
/// # Arguments
/// * `hurt` - Damage the hit would deal without the crit
/// * `crits_effect` - Crit multiplier (1.5 = 150%)
///
/// # Returns
/// The crit damage rounded half-up. The product is narrowed to `f32` before
/// rounding, so results match single-precision callers exactly. Saturates at
/// the `i32` bounds; NaN yields 0.
pub fn critical_damage(hurt: f64, crits_effect: f64) -> i32 {
    let narrowed = (hurt * crits_effect) as f32;
    // f32 + 0.5 is exact in f64
    (f64::from(narrowed) + 0.5).floor() as i32
}
