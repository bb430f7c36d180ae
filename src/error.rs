//! Error types shared across the crate

/// Error returned when a statistic is requested but undefined
///
/// Mean- and variance-derived quantities have no value until at least one
/// sample has been observed; querying them on an empty window (or running a
/// reference computation over an empty slice) fails with this error. It is a
/// synchronous precondition failure, never a transient condition, so there is
/// nothing to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// No samples have been observed yet
    Undefined,
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::Undefined => write!(f, "statistics undefined: no samples observed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StatsError::Undefined;
        assert_eq!(err.to_string(), "statistics undefined: no samples observed");
    }
}
