// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use nalgebra::Point2;

use crate::error::{Error, Result};

/// Lengths of the two arm links.
///
/// Both lengths are positive and finite. The only way to construct
/// the value is through [`LinkLengths::new`] or the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkLengths {
    l1: f32,
    l2: f32,
}

impl LinkLengths {
    /// Construct new link lengths.
    pub fn new(l1: f32, l2: f32) -> Result<Self> {
        for length in [l1, l2] {
            if !length.is_finite() || length <= 0.0 {
                return Err(Error::InvalidLinkLength(length));
            }
        }

        Ok(Self { l1, l2 })
    }

    /// Length of the first link.
    #[inline]
    pub fn l1(&self) -> f32 {
        self.l1
    }

    /// Length of the second link.
    #[inline]
    pub fn l2(&self) -> f32 {
        self.l2
    }

    /// Distance of the end-effector at full extension.
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.l1 + self.l2
    }

    /// Distance of the end-effector when fully folded.
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        (self.l1 - self.l2).abs()
    }
}

impl Default for LinkLengths {
    fn default() -> Self {
        Self {
            l1: crate::consts::DEFAULT_LINK_LENGTH,
            l2: crate::consts::DEFAULT_LINK_LENGTH,
        }
    }
}

/// Joint angles in radians.
///
/// `theta1` is measured from the positive x-axis at the base, `theta2`
/// relative to the direction of the first link. Any value is a valid
/// angle pair; compliance with the joint limits is a separate predicate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointAngles {
    pub theta1: f32,
    pub theta2: f32,
}

impl JointAngles {
    pub fn new(theta1: f32, theta2: f32) -> Self {
        Self { theta1, theta2 }
    }

    /// Construct joint angles from degrees.
    pub fn from_degrees(theta1: f32, theta2: f32) -> Self {
        Self {
            theta1: theta1.to_radians(),
            theta2: theta2.to_radians(),
        }
    }

    /// Joint angles in degrees.
    pub fn to_degrees(&self) -> (f32, f32) {
        (self.theta1.to_degrees(), self.theta2.to_degrees())
    }
}

impl From<(f32, f32)> for JointAngles {
    fn from((theta1, theta2): (f32, f32)) -> Self {
        Self { theta1, theta2 }
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "θ1 {:5.2}rad {:7.2}°, θ2 {:5.2}rad {:7.2}°",
            self.theta1,
            self.theta1.to_degrees(),
            self.theta2,
            self.theta2.to_degrees()
        )
    }
}

/// Arm pose as the base, elbow and end-effector points.
///
/// A pose is only produced by forward kinematics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmPose {
    points: [Point2<f32>; 3],
}

impl ArmPose {
    pub(crate) fn new(elbow: Point2<f32>, effector: Point2<f32>) -> Self {
        Self {
            points: [Point2::origin(), elbow, effector],
        }
    }

    #[inline]
    pub fn base(&self) -> Point2<f32> {
        self.points[0]
    }

    #[inline]
    pub fn elbow(&self) -> Point2<f32> {
        self.points[1]
    }

    #[inline]
    pub fn effector(&self) -> Point2<f32> {
        self.points[2]
    }

    /// Points in order: base, elbow, end-effector.
    #[inline]
    pub fn points(&self) -> [Point2<f32>; 3] {
        self.points
    }
}

impl std::fmt::Display for ArmPose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [base, elbow, effector] = self.points;
        write!(
            f,
            "Base ({:.2}, {:.2}) Elbow ({:.2}, {:.2}) Effector ({:.2}, {:.2})",
            base.x, base.y, elbow.x, elbow.y, effector.x, effector.y
        )
    }
}

/// Target point for the end-effector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// The point in the plane.
    pub point: Point2<f32>,
}

impl Target {
    /// Construct a new target
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            point: Point2::new(x, y),
        }
    }

    /// Distance from the base.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.point.coords.norm()
    }
}

impl From<(f32, f32)> for Target {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2<f32>> for Target {
    fn from(point: Point2<f32>) -> Self {
        Self { point }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.point.x, self.point.y)
    }
}
