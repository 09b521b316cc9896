// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::algorithm::{ForwardKinematics, InverseKinematics};
use crate::error::Result;
use crate::geometry::{ArmPose, JointAngles, LinkLengths, Target};
use crate::limits::JointLimits;
use crate::reach::{self, Bounds, ReachabilityField};

/// Planar two-link arm.
///
/// Bundles the link lengths with the joint limits the arm is operated under.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Arm {
    links: LinkLengths,
    limits: JointLimits,
}

impl Arm {
    pub fn new(links: LinkLengths, limits: JointLimits) -> Self {
        Self { links, limits }
    }

    /// Arm with the process-wide joint limits.
    pub fn with_global_limits(links: LinkLengths) -> Self {
        Self::new(links, *crate::global::joint_limits())
    }

    #[inline]
    pub fn links(&self) -> &LinkLengths {
        &self.links
    }

    #[inline]
    pub fn limits(&self) -> &JointLimits {
        &self.limits
    }

    /// Arm pose for the joint angles.
    pub fn forward(&self, angles: &JointAngles) -> ArmPose {
        ForwardKinematics::new(self.links).solve(angles)
    }

    /// Joint angles for the target, joint limits are not checked.
    ///
    /// Elbow-down branch only.
    pub fn inverse(&self, target: &Target) -> Result<JointAngles> {
        InverseKinematics::new(self.links).solve(target)
    }

    /// Joint angles for the target within the joint limits.
    pub fn solve(&self, target: &Target) -> Result<JointAngles> {
        let angles = self.inverse(target)?;
        self.limits.check(&angles)?;

        Ok(angles)
    }

    /// Whether the joint angles are within the joint limits.
    #[inline]
    pub fn within_limits(&self, angles: &JointAngles) -> bool {
        self.limits.contains(angles)
    }

    /// Classify the reachability of the arm over the bounds.
    pub fn reachability(&self, bounds: &Bounds, resolution: usize) -> ReachabilityField {
        reach::classify(bounds, resolution, &self.links, &self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_solve() {
        let arm = Arm::default();

        assert!(arm.solve(&Target::new(1.0, 1.0)).is_ok());
        assert_eq!(arm.solve(&Target::new(3.0, 0.0)), Err(Error::Unreachable));
        assert_eq!(
            arm.solve(&Target::new(-1.5, 0.0)),
            Err(Error::OutOfJointLimits)
        );
    }

    #[test]
    fn test_inverse_ignores_limits() {
        let arm = Arm::default();

        let angles = arm.inverse(&Target::new(-1.5, 0.0)).unwrap();
        assert!(!arm.within_limits(&angles));
    }

    #[test]
    fn test_reachability() {
        let arm = Arm::new(
            LinkLengths::new(1.0, 0.5).unwrap(),
            JointLimits::default(),
        );
        let field = arm.reachability(&Bounds::square(2.0), 41);

        assert!(!field.contains(0.0, 0.0));
        assert!(field.contains(1.2, 0.0));
        assert!(!field.contains(1.8, 0.0));
    }
}
