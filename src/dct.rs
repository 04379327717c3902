// Discrete Cosine Transform.
//
// Copyright 2023 Robbert Haarman
//
// SPDX-License-Identifier: MIT

//! This module implements the orthonormal [Discrete Cosine Transform]
//! (DCT-II) and its inverse in one and two dimensions.
//!
//! A length n transform is computed with a length n complex FFT: the
//! input is folded so that even samples come first and odd samples
//! follow in reverse order, and the FFT output is rotated by a quarter
//! sample to recover the cosine coefficients. n must be a power of two
//! of at least 2.
//!
//! [Discrete Cosine Transform]: http://inglorion.net/documents/essays/data_compression/dct/

use std::f32::consts::FRAC_1_SQRT_2;
use std::f64::consts::PI;

use crate::fft::{fft, Direction};
use crate::result::{check_length, check_size, scratch, DctError, DctResult};

/// Replaces x by its DCT-II.
pub fn dct1(x: &mut [f32]) -> DctResult<()> {
    check_length(x.len())?;
    forward(x)
}

/// Replaces x, a vector of DCT-II coefficients, by the signal it
/// was computed from.
pub fn idct1(x: &mut [f32]) -> DctResult<()> {
    check_length(x.len())?;
    inverse(x)
}

/// Replaces image, an n by n matrix in row-major order, by its 2-D
/// DCT-II.
pub fn dct2(image: &mut [f32], n: usize) -> DctResult<()> {
    tracing::trace!(n, "dct2");
    separable(image, n, forward)
}

/// Replaces image, an n by n matrix of 2-D DCT-II coefficients in
/// row-major order, by the matrix they were computed from.
pub fn idct2(image: &mut [f32], n: usize) -> DctResult<()> {
    tracing::trace!(n, "idct2");
    separable(image, n, inverse)
}

/// Applies transform to every column, then to every row.
fn separable(image: &mut [f32], n: usize,
             transform: fn(&mut [f32]) -> DctResult<()>) -> DctResult<()> {
    check_length(n)?;
    let expected = n.checked_mul(n).ok_or(DctError::InvalidLength(n))?;
    check_size(expected, image.len())?;

    let mut column = scratch(n)?;
    for i in 0..n {
        for j in 0..n {
            column[j] = image[j * n + i];
        }
        transform(&mut column)?;
        for j in 0..n {
            image[j * n + i] = column[j];
        }
    }
    for row in image.chunks_exact_mut(n) {
        transform(row)?;
    }
    Ok(())
}

/// Forward DCT of x, whose length has already been validated.
fn forward(x: &mut [f32]) -> DctResult<()> {
    let n = x.len();
    let nn = n >> 1;
    let mm = n << 1;
    let sqn = (n as f64).sqrt() as f32;

    let mut v = scratch(mm)?;
    for i in 0..nn {
        v[2 * i] = x[2 * i];
    }
    for i in nn..n {
        v[2 * i] = x[mm - 2 * i - 1];
    }

    fft(&mut v, n, Direction::Forward);

    let scale = 2.0 * FRAC_1_SQRT_2 / sqn;
    x[0] = v[0] / sqn;
    for i in 1..=nn {
        let (tc, ts) = quarter_turn(i, mm);
        let (re, im) = (v[2 * i], v[2 * i + 1]);
        x[i] = (tc * re + ts * im) * scale;
        x[n - i] = (ts * re - tc * im) * scale;
    }
    Ok(())
}

/// Inverse DCT of x, whose length has already been validated.
fn inverse(x: &mut [f32]) -> DctResult<()> {
    let n = x.len();
    let nn = n >> 1;
    let mm = n << 1;
    let sqn = (n as f64).sqrt() as f32;

    let mut v = scratch(mm)?;
    let scale = 0.5 * sqn / FRAC_1_SQRT_2;
    v[0] = x[0] * sqn;
    for i in 1..n {
        let (tc, ts) = quarter_turn(i, mm);
        v[2 * i] = (tc * x[i] + ts * x[n - i]) * scale;
        v[2 * i + 1] = (ts * x[i] - tc * x[n - i]) * scale;
    }

    fft(&mut v, n, Direction::Inverse);

    for i in 0..nn {
        x[2 * i] = v[2 * i];
    }
    for i in nn..n {
        x[mm - 2 * i - 1] = v[2 * i];
    }
    Ok(())
}

/// Cosine and sine of pi * i / mm.
fn quarter_turn(i: usize, mm: usize) -> (f32, f32) {
    let angle = PI * i as f64 / mm as f64;
    (angle.cos() as f32, angle.sin() as f32)
}
