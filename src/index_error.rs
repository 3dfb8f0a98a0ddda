//! IndexError: Unified error type for index-assembly public APIs
//!
//! Every rejected request is reported through this type before any expander
//! runs, so a failed call never leaves partial output behind.

use thiserror::Error;

use crate::primitive::topology::Topology;

/// Unified error type for index translation and generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The (mode, widths, conventions, restart, topology) tuple has no expander.
    #[error("Unsupported combination: {0}")]
    UnsupportedCombination(&'static str),
    /// Element width outside {1,2,4} bytes (input) or {2,4} bytes (output).
    #[error("Invalid index width: {bytes} bytes is not a valid {role} width")]
    InvalidWidth { bytes: usize, role: &'static str },
    /// A buffer's element width disagrees with the width named in the request.
    #[error("Width mismatch: {role} buffer holds {actual}-byte indices, expected {expected}")]
    WidthMismatch {
        role: &'static str,
        expected: usize,
        actual: usize,
    },
    /// `output_count` is not a whole number of output primitives.
    #[error("Output count {count} is not a multiple of {group} for {topology:?}")]
    MisalignedOutputCount {
        topology: Topology,
        count: u32,
        group: u32,
    },
    /// Output buffer holds fewer than `output_count` indices.
    #[error("Output buffer too small: need {required} indices, have {actual}")]
    OutputTooSmall { required: usize, actual: usize },
    /// Input buffer holds fewer indices than the expansion reads.
    #[error("Input buffer too small: need {required} indices, have {actual}")]
    InputTooSmall { required: usize, actual: usize },
    /// The expansion window would address an index below zero or above `u32::MAX`.
    #[error("Index window out of range for {topology:?}: start={start}, output_count={count}")]
    WindowOutOfRange {
        topology: Topology,
        start: u32,
        count: u32,
    },
    /// A raw byte buffer cannot be viewed as indices of the requested width.
    #[error("Byte buffer cannot be viewed as {width}-byte indices: {reason}")]
    UnalignedBytes { width: usize, reason: String },
}
