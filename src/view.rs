// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Borrowed x/y views over half-split position buffers.
//!
//! A position buffer of length `2 * N` holds every x coordinate in
//! `[0, N)` and every y coordinate in `[N, 2N)`. The views below split such a
//! buffer in place; no element is copied and the y half always starts exactly
//! `N` elements after the x half.

use crate::coord::Coord;
use crate::error::{InvalidConfiguration, Result};

fn half_len(len: usize) -> Result<usize> {
    if len % 2 != 0 {
        return Err(InvalidConfiguration::OddPositionLength { len });
    }
    Ok(len / 2)
}

/// Read-only x/y halves of a position buffer
#[derive(Debug, Clone, Copy)]
pub struct CoordView<'a, T> {
    x: &'a [T],
    y: &'a [T],
}

impl<'a, T: Coord> CoordView<'a, T> {
    pub fn split(buffer: &'a [T]) -> Result<Self> {
        let n = half_len(buffer.len())?;
        let (x, y) = buffer.split_at(n);
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &'a [T] {
        self.x
    }

    pub fn y(&self) -> &'a [T] {
        self.y
    }

    /// Position of node `index`; panics if out of range like slice indexing
    pub fn get(&self, index: usize) -> (T, T) {
        (self.x[index], self.y[index])
    }
}

/// Writable x/y halves of a position buffer
#[derive(Debug)]
pub struct CoordViewMut<'a, T> {
    x: &'a mut [T],
    y: &'a mut [T],
}

impl<'a, T: Coord> CoordViewMut<'a, T> {
    pub fn split(buffer: &'a mut [T]) -> Result<Self> {
        let n = half_len(buffer.len())?;
        let (x, y) = buffer.split_at_mut(n);
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[T] {
        &*self.x
    }

    pub fn y(&self) -> &[T] {
        &*self.y
    }

    pub fn x_mut(&mut self) -> &mut [T] {
        &mut *self.x
    }

    pub fn y_mut(&mut self) -> &mut [T] {
        &mut *self.y
    }

    /// Both halves at once, for loops that update x and y together
    pub fn xy_mut(&mut self) -> (&mut [T], &mut [T]) {
        (&mut *self.x, &mut *self.y)
    }

    pub fn get(&self, index: usize) -> (T, T) {
        (self.x[index], self.y[index])
    }

    pub fn set(&mut self, index: usize, x: T, y: T) {
        self.x[index] = x;
        self.y[index] = y;
    }
}
