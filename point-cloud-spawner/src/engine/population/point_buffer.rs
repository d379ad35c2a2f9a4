use std::ops::Range;

use super::point::Point;

/// Fixed-capacity point storage with a monotonic fill cursor.
///
/// Positions and colours are parallel dense arrays of `3 * capacity` floats.
/// Slots `[0, len)` hold written points; the rest stay zeroed until written.
/// There is no removal, overwrite or shrink.
#[derive(Debug, Clone)]
pub struct PointBuffer {
    capacity: usize,
    positions: Vec<f32>,
    colours: Vec<f32>,
    filled: usize,
}

impl PointBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            positions: vec![0.0; capacity * 3],
            colours: vec![0.0; capacity * 3],
            filled: 0,
        }
    }

    /// Write `batch` after the last written point.
    ///
    /// Returns the number of points appended: `batch.len()`, or 0 when the
    /// batch does not fit in the remaining capacity. Nothing is written in
    /// that case.
    pub fn append(&mut self, batch: &[Point]) -> usize {
        if batch.len() > self.remaining() {
            return 0;
        }

        for (offset, point) in batch.iter().enumerate() {
            let base = (self.filled + offset) * 3;
            self.positions[base..base + 3].copy_from_slice(&point.position);
            self.colours[base..base + 3].copy_from_slice(&point.colour);
        }
        self.filled += batch.len();

        batch.len()
    }

    /// Prefix of point indices eligible for display.
    pub fn visible_range(&self) -> Range<usize> {
        0..self.filled
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.filled
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.capacity
    }

    /// Flat xyz triples of the written points.
    pub fn positions(&self) -> &[f32] {
        &self.positions[..self.filled * 3]
    }

    /// Flat rgb triples of the written points.
    pub fn colours(&self) -> &[f32] {
        &self.colours[..self.filled * 3]
    }

    /// Read back a written point, `None` past the fill cursor.
    pub fn point(&self, index: usize) -> Option<Point> {
        if index >= self.filled {
            return None;
        }
        let base = index * 3;
        Some(Point {
            position: [
                self.positions[base],
                self.positions[base + 1],
                self.positions[base + 2],
            ],
            colour: [
                self.colours[base],
                self.colours[base + 1],
                self.colours[base + 2],
            ],
        })
    }
}
