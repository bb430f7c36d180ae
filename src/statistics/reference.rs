//! Brute-force statistics over a slice
//!
//! Direct two-pass computations used to cross-check the incremental
//! accumulator. These rescan their input on every call, so they are O(n) per
//! query; they exist as an oracle, not as something to put on a hot path.
//! They fail with [`StatsError::Undefined`] on empty input, exactly as the
//! accumulator does on an empty window.

use crate::error::StatsError;
use crate::math;
use crate::statistics::Summary;

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    validate(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum of squared deviations from the mean
pub fn d_squared(values: &[f64]) -> Result<f64, StatsError> {
    let mean = mean(values)?;
    Ok(values.iter().map(|v| (v - mean) * (v - mean)).sum())
}

/// Population variance of the values
pub fn population_variance(values: &[f64]) -> Result<f64, StatsError> {
    Ok(d_squared(values)? / values.len() as f64)
}

/// Sample variance of the values, zero for a single value
pub fn sample_variance(values: &[f64]) -> Result<f64, StatsError> {
    let d_squared = d_squared(values)?;
    if values.len() > 1 {
        Ok(d_squared / (values.len() - 1) as f64)
    } else {
        Ok(0.0)
    }
}

/// All derived statistics of the values in one pass over the definitions
pub fn summary(values: &[f64]) -> Result<Summary, StatsError> {
    let mean = mean(values)?;
    let d_squared = d_squared(values)?;

    let population_variance = d_squared / values.len() as f64;
    let sample_variance = if values.len() > 1 {
        d_squared / (values.len() - 1) as f64
    } else {
        0.0
    };

    Ok(Summary {
        mean,
        d_squared,
        population_variance,
        sample_variance,
        population_stdev: math::sqrt(population_variance),
        sample_stdev: math::sqrt(sample_variance),
    })
}

fn validate(values: &[f64]) -> Result<(), StatsError> {
    if values.is_empty() {
        Err(StatsError::Undefined)
    } else {
        Ok(())
    }
}
