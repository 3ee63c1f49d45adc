//! Hit and crit chances

mod chance;

pub use chance::{attack_hit_rate, attacker_crit_chance};
