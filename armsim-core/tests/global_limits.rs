// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use armsim_core::{global, within_limits, Arm, Error, JointLimits, JointRange, LinkLengths};

#[test]
fn set_once() {
    let limits = JointLimits::new(
        JointRange::from_degrees(-90.0, 90.0).unwrap(),
        JointRange::from_degrees(0.0, 120.0).unwrap(),
    );

    assert_eq!(global::set_joint_limits(limits), Ok(()));
    assert_eq!(
        global::set_joint_limits(JointLimits::default()),
        Err(Error::LimitsAlreadySet)
    );
    assert_eq!(*global::joint_limits(), limits);

    assert!(within_limits(90.0_f32.to_radians(), 120.0_f32.to_radians()));
    assert!(!within_limits(100.0_f32.to_radians(), 0.0));
    assert!(!within_limits(0.0, 130.0_f32.to_radians()));

    let arm = Arm::with_global_limits(LinkLengths::default());
    assert_eq!(*arm.limits(), limits);
}
