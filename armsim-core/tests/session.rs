// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use approx::assert_abs_diff_eq;

use armsim_core::reach::Bounds;
use armsim_core::session::{self, CurrentConfiguration, Transition};
use armsim_core::{Arm, Error, JointAngles, Target};

fn settle(current: CurrentConfiguration, arm: &Arm, target: Target) -> CurrentConfiguration {
    match session::request(current, arm, &target, 30) {
        Transition::Accepted(mut animation) => {
            while animation.next_pose(arm).is_some() {}
            animation.finish()
        }
        Transition::Rejected { current, .. } => current,
    }
}

#[test]
fn move_sequence() {
    let arm = Arm::default();
    let mut current = CurrentConfiguration::default();

    current = settle(current, &arm, Target::new(1.0, 1.0));
    assert_abs_diff_eq!(current.angles().theta1, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(
        current.angles().theta2,
        std::f32::consts::FRAC_PI_2,
        epsilon = 1e-6
    );

    let before = current;
    current = settle(current, &arm, Target::new(3.0, 0.0));
    assert_eq!(current, before);

    current = settle(current, &arm, Target::new(-1.5, 0.0));
    assert_eq!(current, before);

    current = settle(current, &arm, Target::new(0.0, 1.2));
    let effector = arm.forward(&current.angles()).effector();
    assert_abs_diff_eq!(effector.x, 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(effector.y, 1.2, epsilon = 1e-5);
}

#[test]
fn animation_starts_at_current_configuration() {
    let arm = Arm::default();
    let current = CurrentConfiguration::new(JointAngles::from_degrees(10.0, 20.0));

    let Transition::Accepted(animation) =
        session::request(current, &arm, &Target::new(0.8, 0.8), 12)
    else {
        panic!("target must be accepted");
    };

    let frames: Vec<_> = animation.clone().collect();
    assert_eq!(frames.len(), 13);
    assert_eq!(frames[0], current.angles());
    assert_eq!(frames[12], animation.target());
    assert_eq!(animation.origin(), current);
}

#[test]
fn rejection_reasons() {
    let arm = Arm::default();

    assert_eq!(
        session::validate(&arm, &Target::new(0.0, 2.5)),
        Err(Error::Unreachable)
    );
    assert_eq!(
        session::validate(&arm, &Target::new(-1.0, -0.2)),
        Err(Error::OutOfJointLimits)
    );
}

#[test]
fn reachability_matches_session() {
    let arm = Arm::default();
    let field = arm.reachability(&Bounds::default(), 40);

    for row in 0..field.resolution() {
        for col in 0..field.resolution() {
            let target = Target::from(field.sample(row, col));
            let accepted = session::validate(&arm, &target).is_ok();

            assert_eq!(field.get(row, col), Some(accepted));
        }
    }
}
