//! Windowed running statistics (mean, variance, standard deviation)
//!
//! Computes statistics over the most recent N samples using a windowed
//! adaptation of Welford's numerically stable online algorithm, in O(1) per
//! sample.

use crate::error::StatsError;
use crate::math;
use crate::ring::RingBuffer;

/// Windowed running-statistics accumulator
///
/// Maintains the mean and the running sum of squared deviations (Welford's
/// M2 quantity) over the last `window_size` samples. Each `update` is O(1):
/// while the window is filling, the standard Welford increment applies; once
/// the window is full, the oldest sample is evicted and its influence is
/// removed in the same step that adds the new sample's influence.
///
/// The combined eviction update is algebraically equivalent to a
/// reverse-Welford removal followed by a forward-Welford insertion, collapsed
/// so the accumulator never passes through a state where M2 reflects a
/// half-applied window.
///
/// # Example
///
/// ```
/// use slidestats::statistics::WindowedStats;
///
/// let mut stats = WindowedStats::new(3);
///
/// stats.update(2.0);
/// stats.update(4.0);
/// stats.update(6.0);
///
/// assert!((stats.mean().unwrap() - 4.0).abs() < 1e-12);
///
/// // Evicts 2.0; the window is now [4, 6, 8]
/// stats.update(8.0);
/// assert!((stats.mean().unwrap() - 6.0).abs() < 1e-12);
/// ```
///
/// Queries fail while the window is empty:
///
/// ```
/// use slidestats::statistics::WindowedStats;
/// use slidestats::error::StatsError;
///
/// let stats = WindowedStats::new(3);
/// assert_eq!(stats.mean(), Err(StatsError::Undefined));
/// assert_eq!(stats.summary(), Err(StatsError::Undefined));
/// ```
#[derive(Clone, Debug)]
pub struct WindowedStats {
    /// The most recent samples, up to `window.capacity()` of them
    window: RingBuffer<f64>,
    /// Running mean of the samples currently in the window
    mean: f64,
    /// Running sum of squared deviations from the mean (Welford's M2)
    d_squared: f64,
}

impl WindowedStats {
    /// Create a new empty accumulator over a window of `window_size` samples
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero.
    pub fn new(window_size: usize) -> Self {
        Self {
            window: RingBuffer::new(window_size),
            mean: 0.0,
            d_squared: 0.0,
        }
    }

    /// Add a sample to the window
    ///
    /// Inserts the sample into the ring buffer and folds it into the running
    /// mean and M2. Three regimes, dispatched by whether this is the very
    /// first sample and whether the insertion evicted an old one. Never
    /// fails; O(1).
    pub fn update(&mut self, value: f64) {
        let evicted = self.window.append(value);
        let n = self.window.len() as f64;

        match evicted {
            None if self.window.len() == 1 => {
                // First sample: no deviation is defined for a single point
                self.mean = value;
                self.d_squared = 0.0;
            }
            None => {
                // Window still filling: standard Welford increment
                let new_mean = self.mean + (value - self.mean) / n;
                self.d_squared += (value - new_mean) * (value - self.mean);
                self.mean = new_mean;
            }
            Some(evicted) => {
                // Window full: remove the evicted sample's influence and add
                // the new one's in a single combined step. The M2 increment
                // deliberately mixes the pre-update mean and the post-update
                // mean; reordering it reintroduces the cancellation the
                // reverse/forward Welford decomposition avoids.
                let new_mean = self.mean + (value - evicted) / n;
                self.d_squared += (value - evicted) * (value - new_mean + evicted - self.mean);
                self.mean = new_mean;
            }
        }
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Check if no samples have been added yet
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Check if the window has filled to `window_size` samples
    pub fn is_full(&self) -> bool {
        self.window.is_full()
    }

    /// Fixed window size this accumulator was built with
    pub fn window_size(&self) -> usize {
        self.window.capacity()
    }

    /// Mean of the samples currently in the window
    pub fn mean(&self) -> Result<f64, StatsError> {
        self.validate()?;
        Ok(self.mean)
    }

    /// Running sum of squared deviations from the mean (Welford's M2)
    pub fn d_squared(&self) -> Result<f64, StatsError> {
        self.validate()?;
        Ok(self.d_squared)
    }

    /// Population variance: M2 divided by the sample count
    pub fn population_variance(&self) -> Result<f64, StatsError> {
        Ok(self.d_squared()? / self.len() as f64)
    }

    /// Population standard deviation
    pub fn population_stdev(&self) -> Result<f64, StatsError> {
        Ok(math::sqrt(self.population_variance()?))
    }

    /// Sample variance with Bessel's correction: M2 divided by count - 1
    ///
    /// Defined as zero when the window holds a single sample.
    pub fn sample_variance(&self) -> Result<f64, StatsError> {
        let d_squared = self.d_squared()?;
        if self.len() > 1 {
            Ok(d_squared / (self.len() - 1) as f64)
        } else {
            Ok(0.0)
        }
    }

    /// Sample standard deviation
    pub fn sample_stdev(&self) -> Result<f64, StatsError> {
        Ok(math::sqrt(self.sample_variance()?))
    }

    /// Snapshot of all derived statistics at this instant
    pub fn summary(&self) -> Result<Summary, StatsError> {
        Ok(Summary {
            mean: self.mean()?,
            d_squared: self.d_squared()?,
            population_variance: self.population_variance()?,
            sample_variance: self.sample_variance()?,
            population_stdev: self.population_stdev()?,
            sample_stdev: self.sample_stdev()?,
        })
    }

    fn validate(&self) -> Result<(), StatsError> {
        if self.window.is_empty() {
            Err(StatsError::Undefined)
        } else {
            Ok(())
        }
    }
}

/// Snapshot of the derived statistics of a window
///
/// Produced by [`WindowedStats::summary`] and
/// [`reference::summary`](crate::statistics::reference::summary); all fields
/// are computed from the same state, so they are mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Arithmetic mean of the window
    pub mean: f64,
    /// Sum of squared deviations from the mean
    pub d_squared: f64,
    /// Variance treating the window as the whole population
    pub population_variance: f64,
    /// Unbiased variance estimate (Bessel's correction)
    pub sample_variance: f64,
    /// Square root of the population variance
    pub population_stdev: f64,
    /// Square root of the sample variance
    pub sample_stdev: f64,
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for WindowedStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("WindowedStats", 3)?;
        state.serialize_field("window", &self.window)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("d_squared", &self.d_squared)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl serde::Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Summary", 6)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("d_squared", &self.d_squared)?;
        state.serialize_field("population_variance", &self.population_variance)?;
        state.serialize_field("sample_variance", &self.sample_variance)?;
        state.serialize_field("population_stdev", &self.population_stdev)?;
        state.serialize_field("sample_stdev", &self.sample_stdev)?;
        state.end()
    }
}
