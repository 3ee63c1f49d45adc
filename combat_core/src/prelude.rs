//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Hit and crit chances
pub use crate::combat::{attack_hit_rate, attacker_crit_chance};

// Damage
pub use crate::damage::{attacker_physical_damage, critical_damage};

// Defense
pub use crate::defense::{victim_effective_hp, UNKILLABLE_EFFECTIVE_HP};
