//! Damage formulas

mod calculation;

pub use calculation::{attacker_physical_damage, critical_damage};
