//! Engine error types.

use thiserror::Error;

/// Errors returned by the automaton engine.
///
/// Every failing call leaves the grid and history exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinates outside `[0, width) × [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Zero width or height at construction.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A bounded history must keep at least one generation.
    #[error("history depth must be at least 1")]
    InvalidHistoryDepth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_coordinates() {
        let err = EngineError::OutOfRange { x: 32, y: 0, width: 32, height: 22 };
        assert_eq!(err.to_string(), "cell (32, 0) is outside the 32x22 grid");
    }
}
