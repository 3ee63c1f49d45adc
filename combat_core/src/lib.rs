//! combat_core - Stateless combat formulas
//!
//! This library provides:
//! - Hit and crit chances from contested ratings
//! - Physical damage through armor and critical strike damage
//! - Effective HP from damage reduction and evasion
//!
//! Every function is pure: identical inputs always give bit-identical
//! outputs, and out-of-range inputs map to boundary values instead of errors.
//!
//! # Quick Start
//!
//! ```rust
//! use combat_core::prelude::*;
//!
//! let hit_chance = attack_hit_rate(120, 40);
//! let damage = attacker_physical_damage(100.0, 300.0);
//! let crit = critical_damage(damage, 1.5);
//! assert_eq!(hit_chance, 0.75);
//! assert_eq!(crit, 38);
//! ```

pub mod combat;
pub mod damage;
pub mod defense;
pub mod prelude;

pub use combat::{attack_hit_rate, attacker_crit_chance};
pub use damage::{attacker_physical_damage, critical_damage};
pub use defense::{victim_effective_hp, UNKILLABLE_EFFECTIVE_HP};
