// Copyright 2023 Robbert Haarman
//
// SPDX-License-Identifier: MIT

//! Discrete Cosine Transform (DCT-II) and its inverse in one and two
//! dimensions, computed through a radix-2 FFT of the same length.

pub mod block;
pub mod dct;
mod fft;
pub mod result;

pub use result::{DctError, DctResult};
