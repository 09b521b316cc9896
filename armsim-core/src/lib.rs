// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// The `armsim-core` library provides the kinematics engine of a planar two-link arm.
///
/// The `algorithm` module contains the forward and inverse kinematics solvers. Inverse
/// kinematics only yields the elbow-down solution. The `limits` module validates joint
/// angles against inclusive joint ranges, the `reach` module classifies a sampled region
/// into reachable and unreachable points, and the `motion` module interpolates between
/// two joint configurations.
///
/// The `session` module ties these together: a target is validated, and on acceptance
/// the arm is animated towards it. The current configuration is passed in and handed
/// back explicitly, only a completed animation commits the new configuration.
pub mod algorithm;
pub mod arm;
pub mod config;
pub mod geometry;
pub mod limits;
pub mod motion;
pub mod reach;
pub mod session;

mod error;

pub use self::arm::Arm;
pub use self::error::{Error, Result};
pub use self::geometry::{ArmPose, JointAngles, LinkLengths, Target};
pub use self::limits::{within_limits, JointLimits, JointRange};
pub use self::motion::{interpolate, Interpolation};

pub use nalgebra;

static JOINT_LIMITS: std::sync::OnceLock<limits::JointLimits> = std::sync::OnceLock::new();

pub mod global {
    use crate::error::{Error, Result};
    use crate::limits::JointLimits;

    /// Process-wide joint limits.
    ///
    /// Falls back to the default limits if none were set. Once read, the
    /// limits can no longer be changed.
    #[inline]
    pub fn joint_limits() -> &'static JointLimits {
        crate::JOINT_LIMITS.get_or_init(JointLimits::default)
    }

    /// Set the process-wide joint limits.
    ///
    /// Must be called once at startup, before the limits are first read.
    pub fn set_joint_limits(limits: JointLimits) -> Result<()> {
        crate::JOINT_LIMITS
            .set(limits)
            .map_err(|_| Error::LimitsAlreadySet)
    }
}

/// Armsim runtime module containing various constants.
pub mod consts {
    /// Armsim version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Default length of both arm links.
    pub const DEFAULT_LINK_LENGTH: f32 = 1.0;

    /// Default number of interpolation steps per move.
    pub const DEFAULT_STEPS: usize = 30;

    /// Default initial angle of both joints in degrees.
    pub const DEFAULT_INITIAL_ANGLE: f32 = 45.0;

    /// Default half extent of the sampled workspace.
    pub const DEFAULT_WORKSPACE_EXTENT: f32 = 2.5;

    /// Default number of reachability samples per axis.
    pub const DEFAULT_RESOLUTION: usize = 100;
}
