// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::error::{Error, Result};
use crate::geometry::{JointAngles, LinkLengths, Target};

/// Relative tolerance on the outer boundary of the reachable annulus.
///
/// Scaled by the full extension of the arm. Absorbs round-off so that a
/// point produced by forward kinematics at full extension is still reachable.
pub const REACH_TOLERANCE: f32 = 1e-5;

/// Relative tolerance on the inner boundary of the reachable annulus.
///
/// A few ULPs of the full extension, small enough that the base is only
/// reachable with equal links.
pub const FOLD_TOLERANCE: f32 = 8.0 * f32::EPSILON;

/// Inverse kinematics for the planar two-link arm.
///
/// The solver only yields the elbow-down branch, `theta2` is always in
/// `[0, π]`. The mirrored elbow-up solution is never produced.
#[derive(Clone, Copy, Debug)]
pub struct InverseKinematics {
    links: LinkLengths,
}

impl InverseKinematics {
    pub fn new(links: LinkLengths) -> Self {
        Self { links }
    }

    /// Whether the distance from the base lies within the reachable annulus.
    ///
    /// Both the inner and outer boundary are reachable.
    pub fn is_reachable(&self, radius: f32) -> bool {
        let outer = self.links.outer_radius();

        radius <= outer + REACH_TOLERANCE * outer
            && radius >= self.links.inner_radius() - FOLD_TOLERANCE * outer
    }

    /// Solve the joint angles for the target.
    ///
    /// Returns [`Error::Unreachable`] if the target lies beyond full extension
    /// or within the fold radius `|l1 - l2|`. The joint limits are not checked.
    pub fn solve(&self, target: &Target) -> Result<JointAngles> {
        let (l1, l2) = (self.links.l1(), self.links.l2());
        let (x, y) = (target.point.x, target.point.y);

        let r = target.radius();
        let r_squared = x.powi(2) + y.powi(2);
        log::trace!("IK target radius: {:.4}", r);

        if !self.is_reachable(r) {
            log::trace!(
                "IK target outside annulus [{:.4}, {:.4}]",
                self.links.inner_radius(),
                self.links.outer_radius()
            );
            return Err(Error::Unreachable);
        }

        // Law of cosines, clamped against round-off at the boundary.
        let cos_theta2 =
            ((r_squared - l1.powi(2) - l2.powi(2)) / (2.0 * l1 * l2)).clamp(-1.0, 1.0);
        let sin_theta2 = (1.0 - cos_theta2.powi(2)).sqrt();
        let theta2 = cos_theta2.acos();
        log::trace!(
            "IK theta2:        {:5.2}rad {:7.2}°",
            theta2,
            theta2.to_degrees()
        );

        let k1 = l1 + l2 * cos_theta2;
        let k2 = l2 * sin_theta2;

        // Base and target coincide, the direction to the target is undefined.
        let theta1 = if r < f32::EPSILON {
            0.0
        } else {
            y.atan2(x) - k2.atan2(k1)
        };
        log::trace!(
            "IK theta1:        {:5.2}rad {:7.2}°",
            theta1,
            theta1.to_degrees()
        );

        Ok(JointAngles::new(theta1, theta2))
    }
}

/// Solve the joint angles for the target and link lengths.
///
/// Elbow-down branch only, see [`InverseKinematics`].
#[inline]
pub fn inverse(target: &Target, links: &LinkLengths) -> Result<JointAngles> {
    InverseKinematics::new(*links).solve(target)
}
