//! Error type for operations whose shape is only known at runtime.

/// Errors raised when building or addressing fixed-size containers from
/// runtime-sized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The number of supplied elements doesn't match the container size.
    #[error("Dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Number of elements required by the container.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
    /// Linear index past the last element.
    #[error("Index {index} out of bounds for a container of {len} elements")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements in the container.
        len: usize,
    },
    /// Coordinate outside of a matrix.
    #[error("Coordinate ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    CoordOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows of the matrix.
        rows: usize,
        /// Number of columns of the matrix.
        cols: usize,
    },
}
