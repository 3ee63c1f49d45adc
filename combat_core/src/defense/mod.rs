//! Defense system - Effective HP

mod effective_hp;

pub use effective_hp::{victim_effective_hp, UNKILLABLE_EFFECTIVE_HP};
