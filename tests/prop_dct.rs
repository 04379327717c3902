// Property-based tests for the 1-D and 2-D transforms.
//
// Copyright 2023 Robbert Haarman
//
// SPDX-License-Identifier: MIT

use dct_toolkit::dct::{dct1, dct2, idct1, idct2};
use proptest::prelude::*;

/// A power-of-two length between 2 and 1024 and a signal of that
/// length with samples in [-1, 1).
fn signal() -> impl Strategy<Value = Vec<f32>> {
    (1u32..=10).prop_flat_map(|k| prop::collection::vec(-1.0f32..1.0, 1usize << k))
}

/// Two signals of the same power-of-two length.
fn signal_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1u32..=10).prop_flat_map(|k| {
        let n = 1usize << k;
        (prop::collection::vec(-1.0f32..1.0, n), prop::collection::vec(-1.0f32..1.0, n))
    })
}

/// An n by n image with n between 2 and 64.
fn image() -> impl Strategy<Value = (usize, Vec<f32>)> {
    (1u32..=6).prop_flat_map(|k| {
        let n = 1usize << k;
        (Just(n), prop::collection::vec(-1.0f32..1.0, n * n))
    })
}

fn energy(x: &[f32]) -> f64 {
    x.iter().map(|v| (*v as f64) * (*v as f64)).sum()
}

proptest! {
    /// The inverse transform reconstructs the signal.
    #[test]
    fn round_trip_1d(x in signal()) {
        let mut y = x.clone();
        dct1(&mut y).unwrap();
        idct1(&mut y).unwrap();
        for (i, (a, b)) in y.iter().zip(&x).enumerate() {
            prop_assert!((a - b).abs() < 1e-4, "sample {}: {} != {}", i, a, b);
        }
    }

    /// The inverse 2-D transform reconstructs the image.
    #[test]
    fn round_trip_2d((n, img) in image()) {
        let mut y = img.clone();
        dct2(&mut y, n).unwrap();
        idct2(&mut y, n).unwrap();
        for (i, (a, b)) in y.iter().zip(&img).enumerate() {
            prop_assert!((a - b).abs() < 1e-4,
                "sample ({}, {}): {} != {}", i / n, i % n, a, b);
        }
    }

    /// dct1(a x + b y) = a dct1(x) + b dct1(y).
    #[test]
    fn linearity((x, y) in signal_pair(), a in -2.0f32..2.0, b in -2.0f32..2.0) {
        let mut combined: Vec<f32> = x.iter().zip(&y).map(|(p, q)| a * p + b * q).collect();
        let mut tx = x.clone();
        let mut ty = y.clone();
        dct1(&mut combined).unwrap();
        dct1(&mut tx).unwrap();
        dct1(&mut ty).unwrap();
        let scale = (x.len() as f32).sqrt();
        for (i, c) in combined.iter().enumerate() {
            let expected = a * tx[i] + b * ty[i];
            prop_assert!((c - expected).abs() < 1e-4 * (1.0 + scale),
                "coefficient {}: {} != {}", i, c, expected);
        }
    }

    /// The transform is orthonormal, so it preserves the sum of squares.
    #[test]
    fn energy_preserved(x in signal()) {
        let before = energy(&x);
        let mut y = x.clone();
        dct1(&mut y).unwrap();
        let after = energy(&y);
        prop_assert!((before - after).abs() <= 1e-4 * (1.0 + before),
            "energy {} became {}", before, after);
    }

    /// Lengths that are not powers of two are rejected without touching the input.
    #[test]
    fn rejects_non_powers_of_two(n in 0usize..2000) {
        prop_assume!(n < 2 || !n.is_power_of_two());
        let mut x = vec![0.5f32; n];
        prop_assert!(dct1(&mut x).is_err());
        prop_assert!(idct1(&mut x).is_err());
        prop_assert!(x.iter().all(|v| *v == 0.5));
    }
}
