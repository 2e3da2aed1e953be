//! Error types for the chart core

use thiserror::Error;

/// Errors produced while building a series projection.
///
/// Hover resolution never fails; a pointer that cannot be matched to a
/// sample simply yields no hover descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// The sample sequence is too short to span the horizontal axis.
    ///
    /// Horizontal spacing divides by `len - 1`, so at least two samples
    /// are required.
    #[error("chart needs at least 2 samples, got {0}")]
    NotEnoughSamples(usize),

    /// A sample is NaN or infinite and has no meaningful vertical position.
    #[error("sample at index {0} is not a finite number")]
    NonFiniteSample(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            ChartError::NotEnoughSamples(1).to_string(),
            "chart needs at least 2 samples, got 1"
        );
        assert_eq!(
            ChartError::NonFiniteSample(7).to_string(),
            "sample at index 7 is not a finite number"
        );
    }
}
