// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::Path;

use serde::Deserialize;

use crate::arm::Arm;
use crate::consts;
use crate::geometry::{JointAngles, LinkLengths};
use crate::limits::{JointLimits, JointRange};
use crate::reach::Bounds;
use crate::session::CurrentConfiguration;

#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    Io(std::io::Error),
    /// Configuration file is not valid TOML or has unexpected fields.
    Parse(toml::de::Error),
    /// Configuration values are out of range.
    Invalid(crate::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "io error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
            ConfigError::Invalid(e) => write!(f, "invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<crate::Error> for ConfigError {
    fn from(e: crate::Error) -> Self {
        ConfigError::Invalid(e)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ArmConfig {
    /// Length of the first link.
    pub l1: f32,
    /// Length of the second link.
    pub l2: f32,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            l1: consts::DEFAULT_LINK_LENGTH,
            l2: consts::DEFAULT_LINK_LENGTH,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LimitsConfig {
    /// Base joint range in degrees.
    pub theta1: [f32; 2],
    /// Elbow joint range in degrees.
    pub theta2: [f32; 2],
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            theta1: [-135.0, 135.0],
            theta2: [0.0, 150.0],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    /// Number of interpolation steps per move.
    pub steps: usize,
    /// Initial joint angles in degrees.
    pub initial: [f32; 2],
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            steps: consts::DEFAULT_STEPS,
            initial: [consts::DEFAULT_INITIAL_ANGLE, consts::DEFAULT_INITIAL_ANGLE],
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Horizontal extent of the sampled region.
    pub x: [f32; 2],
    /// Vertical extent of the sampled region.
    pub y: [f32; 2],
    /// Number of samples per axis.
    pub resolution: usize,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        let extent = consts::DEFAULT_WORKSPACE_EXTENT;

        Self {
            x: [-extent, extent],
            y: [-extent, extent],
            resolution: consts::DEFAULT_RESOLUTION,
        }
    }
}

/// Arm configuration.
///
/// Every section is optional and falls back to its default.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub arm: ArmConfig,
    pub limits: LimitsConfig,
    pub motion: MotionConfig,
    pub workspace: WorkspaceConfig,
}

impl Config {
    /// Link lengths of the arm.
    pub fn link_lengths(&self) -> crate::Result<LinkLengths> {
        LinkLengths::new(self.arm.l1, self.arm.l2)
    }

    /// Joint limits in radians.
    pub fn joint_limits(&self) -> crate::Result<JointLimits> {
        let [theta1_min, theta1_max] = self.limits.theta1;
        let [theta2_min, theta2_max] = self.limits.theta2;

        Ok(JointLimits::new(
            JointRange::from_degrees(theta1_min, theta1_max)?,
            JointRange::from_degrees(theta2_min, theta2_max)?,
        ))
    }

    /// Construct the arm.
    pub fn arm(&self) -> crate::Result<Arm> {
        Ok(Arm::new(self.link_lengths()?, self.joint_limits()?))
    }

    /// Initial arm configuration.
    pub fn initial(&self) -> CurrentConfiguration {
        let [theta1, theta2] = self.motion.initial;
        CurrentConfiguration::new(JointAngles::from_degrees(theta1, theta2))
    }

    /// Sampling region of the reachability field.
    pub fn bounds(&self) -> Bounds {
        let [x_min, x_max] = self.workspace.x;
        let [y_min, y_max] = self.workspace.y;

        Bounds::new(x_min, x_max, y_min, y_max)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> crate::Result<()> {
        self.arm()?;

        if self.motion.steps == 0 {
            return Err(crate::Error::InvalidStepCount);
        }

        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }
}

/// Read the configuration from a TOML file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    log::debug!("Read configuration from {}", path.as_ref().display());

    contents.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let config: Config = "".parse().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.arm().unwrap(), Arm::default());
        assert_eq!(config.motion.steps, 30);
        assert_eq!(config.workspace.resolution, 100);
        assert_eq!(config.bounds(), Bounds::default());
    }

    #[test]
    fn test_full() {
        let config: Config = r#"
            [arm]
            l1 = 2.0
            l2 = 0.5

            [limits]
            theta1 = [-90.0, 90.0]
            theta2 = [10.0, 170.0]

            [motion]
            steps = 12
            initial = [0.0, 90.0]

            [workspace]
            x = [-3.0, 3.0]
            y = [-1.0, 3.0]
            resolution = 40
        "#
        .parse()
        .unwrap();

        let arm = config.arm().unwrap();
        assert_eq!(arm.links().l1(), 2.0);
        assert_eq!(arm.links().l2(), 0.5);
        assert_eq!(arm.limits().theta1.max(), 90.0_f32.to_radians());
        assert_eq!(arm.limits().theta2.min(), 10.0_f32.to_radians());

        assert_eq!(config.motion.steps, 12);
        assert_eq!(
            config.initial().angles(),
            JointAngles::from_degrees(0.0, 90.0)
        );
        assert_eq!(config.bounds(), Bounds::new(-3.0, 3.0, -1.0, 3.0));
        assert_eq!(config.workspace.resolution, 40);
    }

    #[test]
    fn test_partial() {
        let config: Config = "[arm]\nl2 = 0.75\n".parse().unwrap();

        assert_eq!(config.arm.l1, 1.0);
        assert_eq!(config.arm.l2, 0.75);
        assert_eq!(config.limits, LimitsConfig::default());
    }

    #[test]
    fn test_invalid_link_length() {
        let result = "[arm]\nl1 = 0.0\n".parse::<Config>();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(crate::Error::InvalidLinkLength(_)))
        ));
    }

    #[test]
    fn test_invalid_joint_range() {
        let result = "[limits]\ntheta2 = [150.0, 0.0]\n".parse::<Config>();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(crate::Error::InvalidJointRange(_, _)))
        ));
    }

    #[test]
    fn test_invalid_steps() {
        let result = "[motion]\nsteps = 0\n".parse::<Config>();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid(crate::Error::InvalidStepCount))
        ));
    }

    #[test]
    fn test_unknown_field() {
        let result = "[arm]\nl3 = 1.0\n".parse::<Config>();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = from_file("/nonexistent/armsim.toml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
