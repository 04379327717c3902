// Error and result types for the transforms.
//
// Copyright 2023 Robbert Haarman
//
// SPDX-License-Identifier: MIT

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DctError {
    /// Transform lengths must be powers of two, at least 2.
    #[error("Invalid transform length {0}: must be a power of two >= 2")]
    InvalidLength(usize),

    #[error("Buffer size mismatch: expected {expected} samples, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Image of {width}x{height} cannot be tiled into {size}x{size} blocks")]
    BlockMismatch { width: usize, height: usize, size: usize },

    /// The scratch buffer for a transform could not be allocated.
    #[error("Failed to allocate scratch buffer of {len} samples")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type DctResult<T> = Result<T, DctError>;

/// Allocates a zeroed buffer of len samples, reporting failure instead
/// of aborting.
pub(crate) fn scratch(len: usize) -> DctResult<Vec<f32>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|source| DctError::Allocation { len, source })?;
    buf.resize(len, 0.0);
    Ok(buf)
}

/// Checks that n is a usable transform length.
pub(crate) fn check_length(n: usize) -> DctResult<()> {
    if n < 2 || !n.is_power_of_two() {
        tracing::debug!(n, "rejecting transform length");
        return Err(DctError::InvalidLength(n));
    }
    Ok(())
}

/// Checks that a buffer holds exactly the expected number of samples.
pub(crate) fn check_size(expected: usize, actual: usize) -> DctResult<()> {
    if expected != actual {
        tracing::debug!(expected, actual, "rejecting buffer size");
        return Err(DctError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
