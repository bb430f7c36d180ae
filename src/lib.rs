//! # Slidestats
//!
//! Sliding-window streaming statistics for Rust.
//!
//! Slidestats computes the mean and variance of the most recent N samples of
//! a stream in O(1) time per sample and O(N) memory, without rescanning the
//! window. It combines a fixed-capacity ring buffer with a windowed adaptation
//! of Welford's numerically stable online algorithm: while the window is
//! filling, samples are folded in with the standard Welford increment; once it
//! is full, each new sample displaces the oldest one and both effects are
//! applied in a single combined update.
//!
//! ## Quick Start
//!
//! ```rust
//! use slidestats::prelude::*;
//!
//! // Statistics over the last 100 samples
//! let mut stats = WindowedStats::new(100);
//!
//! for latency_ms in [3.2, 4.1, 2.9, 3.8, 41.0] {
//!     stats.update(latency_ms);
//! }
//!
//! println!("mean: {}", stats.mean().unwrap());
//! println!("stdev: {}", stats.population_stdev().unwrap());
//! ```
//!
//! Queries on an empty window return [`StatsError::Undefined`] rather than a
//! placeholder value:
//!
//! ```rust
//! use slidestats::{StatsError, WindowedStats};
//!
//! let stats = WindowedStats::new(10);
//! assert_eq!(stats.mean(), Err(StatsError::Undefined));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub(crate) mod math;
pub mod ring;
pub mod statistics;

pub mod prelude {
    pub use crate::error::StatsError;
    pub use crate::ring::RingBuffer;
    pub use crate::statistics::{Summary, WindowedStats};
}

pub use error::StatsError;
pub use ring::RingBuffer;
pub use statistics::{Summary, WindowedStats};
