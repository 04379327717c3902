// Block-wise transforms over rectangular images.
//
// Copyright 2023 Robbert Haarman
//
// SPDX-License-Identifier: MIT

//! Splits a row-major image into square blocks and applies the 2-D DCT
//! to each block independently, as block-based image codecs do.
//!
//! Blocks are numbered in raster order: left to right across the top
//! row of blocks, then the next row down. Each block is stored
//! row-major.
//!
//! Blocks are always square, size by size samples, since each block is
//! fed to the square 2-D DCT. Rectangular tilings are not supported.

use crate::dct::{dct2, idct2};
use crate::result::{check_length, check_size, scratch, DctError, DctResult};

/// Conventional block size for image coding.
pub const BLOCK_SIZE : usize = 8;

/// Returns the blocks of size by size samples that make up a width by
/// height image.
pub fn slice(image: &[f32], width: usize, height: usize, size: usize)
             -> DctResult<Vec<Vec<f32>>> {
    check_tiling(image.len(), width, height, size)?;
    if image.is_empty() {
        return Ok(Vec::new());
    }
    let area = block_area(width, height, size)?;
    let mut blocks = Vec::with_capacity((width / size) * (height / size));
    for (bx, by) in block_origins(width, height, size) {
        let mut block = scratch(area)?;
        gather(image, width, bx, by, size, &mut block);
        blocks.push(block);
    }
    Ok(blocks)
}

/// Reassembles a width by height image from blocks as produced by
/// slice.
pub fn combine(blocks: &[Vec<f32>], width: usize, height: usize, size: usize)
               -> DctResult<Vec<f32>> {
    let total: usize = blocks.iter().map(|b| b.len()).sum();
    check_tiling(total, width, height, size)?;
    if total == 0 {
        return Ok(Vec::new());
    }
    let area = block_area(width, height, size)?;
    if let Some(block) = blocks.iter().find(|b| b.len() != area) {
        return Err(DctError::DimensionMismatch {
            expected: area,
            actual: block.len(),
        });
    }
    let mut image = scratch(total)?;
    for (block, (bx, by)) in blocks.iter().zip(block_origins(width, height, size)) {
        scatter(block, width, bx, by, size, &mut image);
    }
    Ok(image)
}

/// Applies the 2-D DCT to every block of a width by height image, in
/// place.
pub fn dct2_blocks(image: &mut [f32], width: usize, height: usize, size: usize)
                   -> DctResult<()> {
    tracing::trace!(width, height, size, "dct2_blocks");
    per_block(image, width, height, size, dct2)
}

/// Applies the inverse 2-D DCT to every block of a width by height
/// image, in place.
pub fn idct2_blocks(image: &mut [f32], width: usize, height: usize, size: usize)
                    -> DctResult<()> {
    tracing::trace!(width, height, size, "idct2_blocks");
    per_block(image, width, height, size, idct2)
}

fn per_block(image: &mut [f32], width: usize, height: usize, size: usize,
             transform: fn(&mut [f32], usize) -> DctResult<()>) -> DctResult<()> {
    check_length(size)?;
    check_tiling(image.len(), width, height, size)?;
    if image.is_empty() {
        return Ok(());
    }
    let mut block = scratch(block_area(width, height, size)?)?;
    for (bx, by) in block_origins(width, height, size) {
        gather(image, width, bx, by, size, &mut block);
        transform(&mut block, size)?;
        scatter(&block, width, bx, by, size, image);
    }
    Ok(())
}

/// Checks that len samples form a width by height image that divides
/// evenly into size by size blocks.
fn check_tiling(len: usize, width: usize, height: usize, size: usize) -> DctResult<()> {
    if size == 0 || width % size != 0 || height % size != 0 {
        tracing::debug!(width, height, size, "rejecting block tiling");
        return Err(DctError::BlockMismatch { width, height, size });
    }
    let expected = width.checked_mul(height)
        .ok_or(DctError::BlockMismatch { width, height, size })?;
    check_size(expected, len)
}

/// Number of samples in one size by size block.
fn block_area(width: usize, height: usize, size: usize) -> DctResult<usize> {
    size.checked_mul(size)
        .ok_or(DctError::BlockMismatch { width, height, size })
}

/// Top-left corners of the blocks, in raster order.
fn block_origins(width: usize, height: usize, size: usize)
                 -> impl Iterator<Item = (usize, usize)> {
    (0..height).step_by(size)
        .flat_map(move |y| (0..width).step_by(size).map(move |x| (x, y)))
}

fn gather(image: &[f32], width: usize, bx: usize, by: usize, size: usize,
          block: &mut [f32]) {
    for (y, row) in block.chunks_exact_mut(size).enumerate() {
        let start = (by + y) * width + bx;
        row.copy_from_slice(&image[start..start + size]);
    }
}

fn scatter(block: &[f32], width: usize, bx: usize, by: usize, size: usize,
           image: &mut [f32]) {
    for (y, row) in block.chunks_exact(size).enumerate() {
        let start = (by + y) * width + bx;
        image[start..start + size].copy_from_slice(row);
    }
}
