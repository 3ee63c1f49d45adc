//! Prelude module for convenient imports
//!
//! ```rust
//! use jitter_core::prelude::*;
//! ```

// Sampling
pub use crate::random::random_boolean_value;

// Floating numbers
pub use crate::floating::{
    floating_number_by_percentage, floating_number_by_percentage_directed,
    floating_number_by_range, floating_number_by_range_directed,
    floating_number_float_by_percentage,
};
pub use crate::Direction;

// Errors
pub use crate::FloatingError;
