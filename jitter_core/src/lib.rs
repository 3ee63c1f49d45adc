//! jitter_core - Random sampling and floating-number helpers
//!
//! This library provides:
//! - Probability sampling: `random_boolean_value`
//! - Floating numbers: a base value pushed up or down by a random amount,
//!   bounded by an integer range or a percentage, optionally forced in one
//!   direction
//!
//! Every random operation has a `*_with_rng` form taking a caller-owned
//! generator. The plain forms draw from the calling thread's generator.
//!
//! # Quick Start
//!
//! ```rust
//! use jitter_core::prelude::*;
//!
//! let damage = floating_number_by_range(100, 10).unwrap();
//! assert!((90..=110).contains(&damage));
//!
//! let healed = floating_number_by_range_directed(100, 10, Direction::OnlyIncrease).unwrap();
//! assert!((100..=110).contains(&healed));
//! ```

mod direction;
pub mod floating;
pub mod prelude;
pub mod random;

pub use direction::Direction;
pub use floating::{
    floating_number_by_percentage, floating_number_by_percentage_directed,
    floating_number_by_percentage_directed_with_rng, floating_number_by_percentage_with_rng,
    floating_number_by_range, floating_number_by_range_directed,
    floating_number_by_range_directed_with_rng, floating_number_by_range_with_rng,
    floating_number_float_by_percentage, floating_number_float_by_percentage_with_rng,
};
pub use random::{random_boolean_value, random_boolean_value_with_rng};

use thiserror::Error;

/// Error producing a floating number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloatingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Floating direction is required")]
    MissingDirection,
}
