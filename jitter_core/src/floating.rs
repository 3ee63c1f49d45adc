//! Floating numbers - random jitter around a base value
//!
//! Each operation draws a magnitude first, then (unless a direction is
//! forced) a coin flip for the sign:
//! - By range: magnitude in `[0, range]`
//! - By percentage, integer base: magnitude in `[0, trunc(percentage) * number]`
//! - By percentage, float base: magnitude in `[0, round(percentage * number)]`
//!
//! The integer-base percentage truncates the percentage before multiplying,
//! so fractional percentages below 1.0 never move the value. Existing game
//! data relies on that range, so the two percentage forms stay distinct.
//!
//! Directed forms validate in a fixed order: negative range or percentage,
//! then a missing direction, then a magnitude bound with nothing to draw from.

use crate::{Direction, FloatingError};
use rand::Rng;
use tracing::trace;

/// Push `number` up or down by a random amount in `[0, range]`
pub fn floating_number_by_range(number: i32, range: i32) -> Result<i32, FloatingError> {
    floating_number_by_range_with_rng(number, range, &mut rand::thread_rng())
}

/// [`floating_number_by_range`] drawing from a caller-supplied generator
pub fn floating_number_by_range_with_rng(
    number: i32,
    range: i32,
    rng: &mut impl Rng,
) -> Result<i32, FloatingError> {
    check_range(range)?;
    let bound = range_bound(range)?;
    let magnitude = draw_magnitude(bound, rng);
    Ok(Direction::coin_flip(rng).shift(number, magnitude))
}

/// Move `number` in `direction` by a random amount in `[0, range]`
///
/// # Errors
/// `InvalidArgument` for a negative range, `MissingDirection` when no
/// direction is given. The range sign is checked first.
pub fn floating_number_by_range_directed(
    number: i32,
    range: i32,
    direction: impl Into<Option<Direction>>,
) -> Result<i32, FloatingError> {
    floating_number_by_range_directed_with_rng(number, range, direction, &mut rand::thread_rng())
}

/// [`floating_number_by_range_directed`] drawing from a caller-supplied generator
pub fn floating_number_by_range_directed_with_rng(
    number: i32,
    range: i32,
    direction: impl Into<Option<Direction>>,
    rng: &mut impl Rng,
) -> Result<i32, FloatingError> {
    check_range(range)?;
    let direction = require_direction(direction.into())?;
    let bound = range_bound(range)?;
    let magnitude = draw_magnitude(bound, rng);
    Ok(direction.shift(number, magnitude))
}

/// Push `number` up or down by a random share of itself
///
/// The percentage is truncated toward zero before scaling, so `0.5` floats by
/// nothing and `2.7` floats by up to `2 * number`.
pub fn floating_number_by_percentage(number: i32, percentage: f64) -> Result<i32, FloatingError> {
    floating_number_by_percentage_with_rng(number, percentage, &mut rand::thread_rng())
}

/// [`floating_number_by_percentage`] drawing from a caller-supplied generator
pub fn floating_number_by_percentage_with_rng(
    number: i32,
    percentage: f64,
    rng: &mut impl Rng,
) -> Result<i32, FloatingError> {
    check_percentage(percentage)?;
    let bound = truncated_percentage_bound(number, percentage)?;
    let magnitude = draw_magnitude(bound, rng);
    Ok(Direction::coin_flip(rng).shift(number, magnitude))
}

/// Move `number` in `direction` by a random share of itself
pub fn floating_number_by_percentage_directed(
    number: i32,
    percentage: f64,
    direction: impl Into<Option<Direction>>,
) -> Result<i32, FloatingError> {
    floating_number_by_percentage_directed_with_rng(
        number,
        percentage,
        direction,
        &mut rand::thread_rng(),
    )
}

/// [`floating_number_by_percentage_directed`] drawing from a caller-supplied generator
pub fn floating_number_by_percentage_directed_with_rng(
    number: i32,
    percentage: f64,
    direction: impl Into<Option<Direction>>,
    rng: &mut impl Rng,
) -> Result<i32, FloatingError> {
    check_percentage(percentage)?;
    let direction = require_direction(direction.into())?;
    let bound = truncated_percentage_bound(number, percentage)?;
    let magnitude = draw_magnitude(bound, rng);
    Ok(direction.shift(number, magnitude))
}

/// Push a float `number` up or down by a random share of itself
///
/// Unlike [`floating_number_by_percentage`], the full product
/// `percentage * number` is rounded half-up (at single precision). The shifted
/// value is truncated toward zero, saturating at the `i32` bounds.
pub fn floating_number_float_by_percentage(
    number: f64,
    percentage: f64,
) -> Result<i32, FloatingError> {
    floating_number_float_by_percentage_with_rng(number, percentage, &mut rand::thread_rng())
}

/// [`floating_number_float_by_percentage`] drawing from a caller-supplied generator
pub fn floating_number_float_by_percentage_with_rng(
    number: f64,
    percentage: f64,
    rng: &mut impl Rng,
) -> Result<i32, FloatingError> {
    check_percentage(percentage)?;

    let bound = round_half_up_f32(percentage * number).wrapping_add(1);
    check_bound(bound)?;

    let magnitude = draw_magnitude(bound, rng);
    Ok(Direction::coin_flip(rng).shift_f64(number, magnitude) as i32)
}

fn check_range(range: i32) -> Result<(), FloatingError> {
    if range < 0 {
        return Err(FloatingError::InvalidArgument(format!("range {range}")));
    }
    Ok(())
}

/// Exclusive magnitude bound for an inclusive range
fn range_bound(range: i32) -> Result<i32, FloatingError> {
    range
        .checked_add(1)
        .ok_or_else(|| FloatingError::InvalidArgument(format!("range {range}")))
}

/// Exclusive magnitude bound for the integer-base percentage forms
fn truncated_percentage_bound(number: i32, percentage: f64) -> Result<i32, FloatingError> {
    let bound = (percentage as i32).wrapping_mul(number).wrapping_add(1);
    check_bound(bound)?;
    Ok(bound)
}

fn check_percentage(percentage: f64) -> Result<(), FloatingError> {
    if percentage < 0.0 {
        return Err(FloatingError::InvalidArgument(format!(
            "percentage {percentage}"
        )));
    }
    Ok(())
}

// Negative bases or wrapped products leave no range to draw from.
fn check_bound(bound: i32) -> Result<(), FloatingError> {
    if bound <= 0 {
        return Err(FloatingError::InvalidArgument(format!("bound {bound}")));
    }
    Ok(())
}

fn require_direction(direction: Option<Direction>) -> Result<Direction, FloatingError> {
    direction.ok_or(FloatingError::MissingDirection)
}

fn draw_magnitude(bound: i32, rng: &mut impl Rng) -> i32 {
    let magnitude = rng.gen_range(0..bound);
    trace!(bound = bound, magnitude = magnitude, "Drew floating magnitude");
    magnitude
}

fn round_half_up_f32(value: f64) -> i32 {
    (f64::from(value as f32) + 0.5).floor() as i32
}
