// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Target resolution and animation.
//!
//! The session moves through the following states:
//!
//! ```text
//! Idle(current) -> Validating -> Rejected(reason)  -> Idle(current)
//!                             -> Accepted(angles)  -> Animating -> Idle(angles)
//! ```
//!
//! The current configuration is an explicit value. [`request`] consumes it and
//! either hands it back with the rejection reason, or returns an [`Animation`].
//! The animation is pulled frame by frame by the caller. Only a fully consumed
//! animation commits the target angles, see [`Animation::finish`].

use crate::arm::Arm;
use crate::error::{Error, Result};
use crate::geometry::{ArmPose, JointAngles, Target};
use crate::motion::Interpolation;

/// Last accepted joint configuration of the arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentConfiguration {
    angles: JointAngles,
}

impl CurrentConfiguration {
    pub fn new(angles: JointAngles) -> Self {
        Self { angles }
    }

    #[inline]
    pub fn angles(&self) -> JointAngles {
        self.angles
    }
}

impl Default for CurrentConfiguration {
    /// Both joints at 45°.
    fn default() -> Self {
        Self::new(JointAngles::from_degrees(
            crate::consts::DEFAULT_INITIAL_ANGLE,
            crate::consts::DEFAULT_INITIAL_ANGLE,
        ))
    }
}

impl std::fmt::Display for CurrentConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.angles)
    }
}

/// Outcome of a target request.
#[derive(Debug)]
pub enum Transition {
    /// The target was rejected, the configuration is unchanged.
    Rejected {
        current: CurrentConfiguration,
        reason: Error,
    },
    /// The target was accepted and the arm is animating towards it.
    Accepted(Animation),
}

impl Transition {
    /// Whether the target was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Transition::Accepted(_))
    }
}

/// Animation towards an accepted target.
///
/// Yields the joint angles of every frame, the first frame being the
/// configuration the animation started from.
#[derive(Clone, Debug)]
pub struct Animation {
    from: CurrentConfiguration,
    target: JointAngles,
    frames: Interpolation,
}

impl Animation {
    /// Configuration the animation started from.
    #[inline]
    pub fn origin(&self) -> CurrentConfiguration {
        self.from
    }

    /// Accepted target angles.
    #[inline]
    pub fn target(&self) -> JointAngles {
        self.target
    }

    /// Whether every frame has been pulled.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.frames.is_exhausted()
    }

    /// Pull the next frame as an arm pose.
    pub fn next_pose(&mut self, arm: &Arm) -> Option<ArmPose> {
        self.next().map(|angles| arm.forward(&angles))
    }

    /// Conclude the animation.
    ///
    /// Commits the target angles if every frame was pulled. An animation
    /// stopped early leaves the configuration it started from.
    pub fn finish(self) -> CurrentConfiguration {
        if self.is_complete() {
            CurrentConfiguration::new(self.target)
        } else {
            log::debug!("Animation stopped early, configuration unchanged");
            self.from
        }
    }

    /// Abandon the animation, the configuration is unchanged.
    pub fn cancel(self) -> CurrentConfiguration {
        self.from
    }
}

impl Iterator for Animation {
    type Item = JointAngles;

    fn next(&mut self) -> Option<Self::Item> {
        self.frames.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.frames.size_hint()
    }
}

impl ExactSizeIterator for Animation {}

/// Validate the target against the arm.
///
/// Fails with [`Error::Unreachable`] if no joint angles place the end-effector
/// on the target, or [`Error::OutOfJointLimits`] if the solution exceeds the
/// joint limits.
pub fn validate(arm: &Arm, target: &Target) -> Result<JointAngles> {
    arm.solve(target)
}

/// Request the arm to move to the target.
///
/// # Panics
///
/// Panics if `steps` is zero.
pub fn request(
    current: CurrentConfiguration,
    arm: &Arm,
    target: &Target,
    steps: usize,
) -> Transition {
    match validate(arm, target) {
        Ok(angles) => {
            log::info!("Target {} accepted: {}", target, angles);

            Transition::Accepted(Animation {
                from: current,
                target: angles,
                frames: Interpolation::new(current.angles, angles, steps),
            })
        }
        Err(reason) => {
            log::warn!("Target {} rejected: {}", target, reason);

            Transition::Rejected { current, reason }
        }
    }
}
