// Radix-2 Fast Fourier Transform.
//
// Copyright 2023 Robbert Haarman
//
// SPDX-License-Identifier: MIT

//! In-place iterative Cooley-Tukey FFT over interleaved complex data.
//!
//! The data for nn complex points is stored as 2 * nn reals: the real
//! part of point k at offset 2k and the imaginary part at 2k + 1. nn
//! must be a power of two; this is not checked here.

/// Direction of a transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    /// Inverse transform, including the 1/nn scaling.
    Inverse,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        }
    }
}

/// Replaces data by its discrete Fourier transform (Forward) or its
/// inverse (Inverse). data holds nn interleaved complex points.
pub(crate) fn fft(data: &mut [f32], nn: usize, direction: Direction) {
    let n = nn << 1;
    debug_assert!(data.len() >= n);
    bit_reverse(&mut data[..n]);

    let mut mmax = 2;
    while n > mmax {
        let istep = mmax << 1;
        let theta = -direction.sign() * 2.0 * std::f64::consts::PI / mmax as f64;
        let wtemp = (0.5 * theta).sin();
        let wpr = -2.0 * wtemp * wtemp;
        let wpi = theta.sin();
        let mut wr = 1.0f64;
        let mut wi = 0.0f64;
        for m in (0..mmax).step_by(2) {
            for i in (m..n).step_by(istep) {
                let j = i + mmax;
                let tempr = (wr * data[j] as f64 - wi * data[j + 1] as f64) as f32;
                let tempi = (wr * data[j + 1] as f64 + wi * data[j] as f64) as f32;
                data[j] = data[i] - tempr;
                data[j + 1] = data[i + 1] - tempi;
                data[i] += tempr;
                data[i + 1] += tempi;
            }
            // Rotate (wr, wi) by theta without calling cos/sin again.
            let wold = wr;
            wr = wr * wpr - wi * wpi + wr;
            wi = wi * wpr + wold * wpi + wi;
        }
        mmax = istep;
    }

    if direction == Direction::Inverse {
        let scale = nn as f32;
        for x in data[..n].iter_mut() {
            *x /= scale;
        }
    }
}

/// Reorders interleaved complex points into bit-reversed index order.
fn bit_reverse(data: &mut [f32]) {
    let n = data.len();
    let mut j = 0;
    for i in (0..n).step_by(2) {
        if j > i {
            data.swap(j, i);
            data.swap(j + 1, i + 1);
        }
        let mut m = n >> 1;
        while m >= 2 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}
