// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::{error, fmt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The target lies outside the annulus `[|l1 - l2|, l1 + l2]`.
    Unreachable,
    /// The target is reachable but the solution violates the joint limits.
    OutOfJointLimits,
    /// Link lengths must be positive and finite.
    InvalidLinkLength(f32),
    /// Joint range with `min > max` or a non-finite bound.
    InvalidJointRange(f32, f32),
    /// Interpolation requires at least one step.
    InvalidStepCount,
    /// The process-wide joint limits were already set.
    LimitsAlreadySet,
}

impl Error {
    /// Whether the error is a target rejection as opposed to a configuration error.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Unreachable | Error::OutOfJointLimits)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unreachable => write!(f, "target unreachable"),
            Error::OutOfJointLimits => write!(f, "target outside joint limits"),
            Error::InvalidLinkLength(length) => {
                write!(f, "invalid link length: {}", length)
            }
            Error::InvalidJointRange(min, max) => {
                write!(f, "invalid joint range: [{}, {}]", min, max)
            }
            Error::InvalidStepCount => write!(f, "step count must be positive"),
            Error::LimitsAlreadySet => write!(f, "joint limits already set"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
