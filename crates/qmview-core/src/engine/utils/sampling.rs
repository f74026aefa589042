use nalgebra::Point3;
use rand::Rng;
use rand::seq::SliceRandom;
use std::ops::{Range, RangeInclusive};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Cannot choose from an empty {0} vocabulary")]
    EmptyChoices(&'static str),
    #[error("Cannot draw a count from the empty range {min}..={max}")]
    EmptyCountRange { min: usize, max: usize },
    #[error("Cannot draw a value from the empty range [{start}, {end})")]
    EmptyValueRange { start: f64, end: f64 },
    #[error("Coordinate extent must be positive and finite, got {0}")]
    InvalidExtent(f64),
}

/// Picks one item uniformly from `items`.
pub fn choose<'a, T>(
    items: &'a [T],
    what: &'static str,
    rng: &mut impl Rng,
) -> Result<&'a T, SamplingError> {
    items.choose(rng).ok_or(SamplingError::EmptyChoices(what))
}

/// Draws an integer uniformly from the closed range.
pub fn uniform_count(
    range: RangeInclusive<usize>,
    rng: &mut impl Rng,
) -> Result<usize, SamplingError> {
    let (min, max) = (*range.start(), *range.end());
    if min > max {
        return Err(SamplingError::EmptyCountRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Draws a real value uniformly from the half-open range.
pub fn uniform_value(range: &Range<f64>, rng: &mut impl Rng) -> Result<f64, SamplingError> {
    // `!(a < b)` also catches NaN bounds.
    if !(range.start < range.end) {
        return Err(SamplingError::EmptyValueRange {
            start: range.start,
            end: range.end,
        });
    }
    Ok(rng.gen_range(range.clone()))
}

/// Draws a point inside the axis-aligned cube `[-extent, extent)³`.
///
/// The three coordinates are drawn in x, y, z order.
#[instrument(level = "trace", skip(rng))]
pub fn uniform_point(extent: f64, rng: &mut impl Rng) -> Result<Point3<f64>, SamplingError> {
    if !(extent.is_finite() && extent > 0.0) {
        return Err(SamplingError::InvalidExtent(extent));
    }
    let x = rng.gen_range(-extent..extent);
    let y = rng.gen_range(-extent..extent);
    let z = rng.gen_range(-extent..extent);
    Ok(Point3::new(x, y, z))
}

/// Offset drawn from `[-bound, bound)`. A zero (or negative) bound yields exactly zero
/// and consumes nothing from `rng`.
pub fn symmetric_jitter(bound: f64, rng: &mut impl Rng) -> f64 {
    if bound <= 0.0 || !bound.is_finite() {
        return 0.0;
    }
    rng.gen_range(-bound..bound)
}
