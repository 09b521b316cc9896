// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::Point2;

use crate::algorithm::InverseKinematics;
use crate::geometry::{LinkLengths, Target};
use crate::limits::JointLimits;

/// Rectangular sampling region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Bounds {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Square region centered on the base.
    pub fn square(half_extent: f32) -> Self {
        Self::new(-half_extent, half_extent, -half_extent, half_extent)
    }

    /// Whether the point lies within the region, edges inclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::square(crate::consts::DEFAULT_WORKSPACE_EXTENT)
    }
}

/// Evenly spaced sample `i` of `n` over `[min, max]`, endpoints included.
fn linspace(min: f32, max: f32, n: usize, i: usize) -> f32 {
    if n < 2 {
        min
    } else {
        min + (max - min) * (i as f32 / (n - 1) as f32)
    }
}

/// Index of the sample nearest to `value`.
fn nearest(min: f32, max: f32, n: usize, value: f32) -> usize {
    if n < 2 || max <= min {
        0
    } else {
        let position = (value - min) / (max - min) * (n - 1) as f32;
        (position.round() as usize).min(n - 1)
    }
}

/// Reachability of sampled points over a rectangular region.
///
/// A cell is marked reachable when the target can be solved by inverse
/// kinematics AND the solution complies with the joint limits. A point that
/// is only geometrically reachable is not marked.
///
/// Rows run along the y axis, columns along the x axis. Row 0 holds the
/// lowest y samples.
#[derive(Clone, Debug, PartialEq)]
pub struct ReachabilityField {
    bounds: Bounds,
    resolution: usize,
    cells: Vec<bool>,
}

impl ReachabilityField {
    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sample point of the cell.
    pub fn sample(&self, row: usize, col: usize) -> Point2<f32> {
        Point2::new(
            linspace(self.bounds.x_min, self.bounds.x_max, self.resolution, col),
            linspace(self.bounds.y_min, self.bounds.y_max, self.resolution, row),
        )
    }

    /// Reachability of the cell, `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.resolution && col < self.resolution {
            Some(self.cells[row * self.resolution + col])
        } else {
            None
        }
    }

    /// Reachability of the sample nearest to the point.
    ///
    /// Points outside the bounds are never reachable.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        if self.resolution == 0 || !self.bounds.contains(x, y) {
            return false;
        }

        let col = nearest(self.bounds.x_min, self.bounds.x_max, self.resolution, x);
        let row = nearest(self.bounds.y_min, self.bounds.y_max, self.resolution, y);

        self.get(row, col).unwrap_or(false)
    }

    /// Iterate over the rows, lowest y first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.resolution.max(1))
    }

    /// Number of reachable cells.
    pub fn reachable_count(&self) -> usize {
        self.cells.iter().filter(|reachable| **reachable).count()
    }

    /// Fraction of reachable cells.
    pub fn coverage(&self) -> f32 {
        if self.cells.is_empty() {
            0.0
        } else {
            self.reachable_count() as f32 / self.cells.len() as f32
        }
    }
}

impl std::fmt::Display for ReachabilityField {
    /// Renders the top row (highest y) first. Reachable cells are `#`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows().rev() {
            let line: String = row
                .iter()
                .map(|reachable| if *reachable { '#' } else { '.' })
                .collect();
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}

/// Classify a `resolution × resolution` grid over the bounds.
pub fn classify(
    bounds: &Bounds,
    resolution: usize,
    links: &LinkLengths,
    limits: &JointLimits,
) -> ReachabilityField {
    let ik = InverseKinematics::new(*links);

    let mut cells = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        let y = linspace(bounds.y_min, bounds.y_max, resolution, row);
        for col in 0..resolution {
            let x = linspace(bounds.x_min, bounds.x_max, resolution, col);

            let reachable = ik
                .solve(&Target::new(x, y))
                .map_or(false, |angles| limits.contains(&angles));
            cells.push(reachable);
        }
    }

    let field = ReachabilityField {
        bounds: *bounds,
        resolution,
        cells,
    };

    log::debug!(
        "Classified {}x{} grid, coverage {:.1}%",
        resolution,
        resolution,
        field.coverage() * 100.0
    );

    field
}
