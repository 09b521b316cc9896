// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::{Point2, Vector2};

use crate::geometry::{ArmPose, JointAngles, LinkLengths};

/// Forward kinematics for the planar two-link arm.
#[derive(Clone, Copy, Debug)]
pub struct ForwardKinematics {
    links: LinkLengths,
}

impl ForwardKinematics {
    pub fn new(links: LinkLengths) -> Self {
        Self { links }
    }

    /// Compute the arm pose for the given joint angles.
    ///
    /// The angles are not normalized, any real value is accepted.
    pub fn solve(&self, angles: &JointAngles) -> ArmPose {
        let elbow = Point2::new(
            self.links.l1() * angles.theta1.cos(),
            self.links.l1() * angles.theta1.sin(),
        );

        let phi = angles.theta1 + angles.theta2;
        let effector = elbow
            + Vector2::new(
                self.links.l2() * phi.cos(),
                self.links.l2() * phi.sin(),
            );

        ArmPose::new(elbow, effector)
    }
}

/// Compute the arm pose for the given joint angles and link lengths.
#[inline]
pub fn forward(angles: &JointAngles, links: &LinkLengths) -> ArmPose {
    ForwardKinematics::new(*links).solve(angles)
}
