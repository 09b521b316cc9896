// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use ansi_term::Colour::{Green, Red, Yellow};

use armsim_core::config::Config;
use armsim_core::session::{self, CurrentConfiguration, Transition};
use armsim_core::{Arm, JointAngles, Target};

fn arm(config: &Config) -> anyhow::Result<Arm> {
    Ok(Arm::with_global_limits(config.link_lengths()?))
}

pub(super) fn forward(config: &Config, theta1: f32, theta2: f32) -> anyhow::Result<()> {
    let arm = arm(config)?;
    let angles = JointAngles::from_degrees(theta1, theta2);

    let pose = arm.forward(&angles);
    println!("{}", angles);
    for (name, point) in ["Base", "Elbow", "Effector"].iter().zip(pose.points()) {
        println!("{:<9} ({:>6.3}, {:>6.3})", name, point.x, point.y);
    }

    if !arm.within_limits(&angles) {
        println!("{}", Yellow.paint("Joint angles outside joint limits"));
    }

    Ok(())
}

pub(super) fn inverse(config: &Config, x: f32, y: f32) -> anyhow::Result<()> {
    let arm = arm(config)?;
    let target = Target::new(x, y);

    match arm.inverse(&target) {
        Ok(angles) => {
            println!("Target {} » {}", target, angles);

            if !arm.within_limits(&angles) {
                println!("{}", Yellow.paint("Target outside joint limits"));
            }
        }
        Err(e) if e.is_rejection() => {
            println!("Target {} » {}", target, Red.paint(e.to_string()))
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

pub(super) fn move_to(
    config: &Config,
    x: f32,
    y: f32,
    from: Option<(f32, f32)>,
    steps: Option<usize>,
) -> anyhow::Result<()> {
    let arm = arm(config)?;
    let target = Target::new(x, y);

    let steps = steps.unwrap_or(config.motion.steps);
    if steps == 0 {
        return Err(armsim_core::Error::InvalidStepCount.into());
    }

    let current = match from {
        Some((theta1, theta2)) => {
            CurrentConfiguration::new(JointAngles::from_degrees(theta1, theta2))
        }
        None => config.initial(),
    };

    log::debug!("Current configuration: {}", current);

    let current = match session::request(current, &arm, &target, steps) {
        Transition::Accepted(mut animation) => {
            let mut frame = 0;
            while let Some(pose) = animation.next_pose(&arm) {
                let effector = pose.effector();
                println!("Frame {:>3} ({:>6.3}, {:>6.3})", frame, effector.x, effector.y);
                frame += 1;
            }

            animation.finish()
        }
        Transition::Rejected { current, reason } => {
            println!("Target {} » {}", target, Red.paint(reason.to_string()));
            current
        }
    };

    println!("Configuration: {}", current);

    Ok(())
}

pub(super) fn reach(config: &Config, resolution: Option<usize>) -> anyhow::Result<()> {
    let arm = arm(config)?;
    let resolution = resolution.unwrap_or(config.workspace.resolution);

    let field = arm.reachability(&config.bounds(), resolution);

    for line in field.to_string().lines() {
        println!("{}", line.replace('#', &Green.paint("#").to_string()));
    }

    println!(
        "Reachable: {} of {} samples ({:.1}%)",
        field.reachable_count(),
        resolution * resolution,
        field.coverage() * 100.0
    );

    Ok(())
}

pub(super) fn limits() -> anyhow::Result<()> {
    let limits = armsim_core::global::joint_limits();

    println!("θ1 {}", limits.theta1);
    println!("θ2 {}", limits.theta2);

    Ok(())
}
