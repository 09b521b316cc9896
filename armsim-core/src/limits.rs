// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::error::{Error, Result};
use crate::geometry::JointAngles;

/// Closed joint angle interval in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointRange {
    min: f32,
    max: f32,
}

impl JointRange {
    /// Construct a new joint range.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidJointRange(min, max));
        }

        Ok(Self { min, max })
    }

    /// Construct a new joint range from degrees.
    pub fn from_degrees(min: f32, max: f32) -> Result<Self> {
        Self::new(min.to_radians(), max.to_radians())
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Whether the angle is within the range, bounds inclusive.
    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        self.min <= angle && angle <= self.max
    }
}

impl std::fmt::Display for JointRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.2}rad {:.2}°, {:.2}rad {:.2}°]",
            self.min,
            self.min.to_degrees(),
            self.max,
            self.max.to_degrees()
        )
    }
}

/// Joint limits of the arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointLimits {
    /// Range of the base joint.
    pub theta1: JointRange,
    /// Range of the elbow joint.
    pub theta2: JointRange,
}

impl JointLimits {
    pub fn new(theta1: JointRange, theta2: JointRange) -> Self {
        Self { theta1, theta2 }
    }

    /// Whether both joint angles are within the limits.
    #[inline]
    pub fn contains(&self, angles: &JointAngles) -> bool {
        self.theta1.contains(angles.theta1) && self.theta2.contains(angles.theta2)
    }

    /// Check the joint angles against the limits.
    pub fn check(&self, angles: &JointAngles) -> Result<()> {
        if self.contains(angles) {
            Ok(())
        } else {
            Err(Error::OutOfJointLimits)
        }
    }
}

impl Default for JointLimits {
    /// Base joint in `[-135°, 135°]`, elbow joint in `[0°, 150°]`.
    fn default() -> Self {
        Self {
            theta1: JointRange {
                min: (-135.0_f32).to_radians(),
                max: 135.0_f32.to_radians(),
            },
            theta2: JointRange {
                min: 0.0_f32.to_radians(),
                max: 150.0_f32.to_radians(),
            },
        }
    }
}

impl std::fmt::Display for JointLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "θ1 {} θ2 {}", self.theta1, self.theta2)
    }
}

/// Whether the joint angles are within the process-wide joint limits.
///
/// See [`crate::global::joint_limits`].
pub fn within_limits(theta1: f32, theta2: f32) -> bool {
    crate::global::joint_limits().contains(&JointAngles::new(theta1, theta2))
}
