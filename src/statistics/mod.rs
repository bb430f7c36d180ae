//! Statistics over a sliding window of samples
//!
//! This module provides the windowed running-statistics accumulator and a
//! brute-force reference computation used to cross-check it.
//!
//! # Example
//!
//! ```
//! use slidestats::statistics::WindowedStats;
//!
//! let mut stats = WindowedStats::new(5);
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
//!     stats.update(value);
//! }
//!
//! // The window now holds [2, 3, 4, 5, 6]
//! println!("mean: {}", stats.mean().unwrap());
//! println!("stdev: {}", stats.population_stdev().unwrap());
//! ```

mod windowed;

pub mod reference;

pub use windowed::{Summary, WindowedStats};
