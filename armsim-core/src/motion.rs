// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use crate::algorithm::ForwardKinematics;
use crate::geometry::{ArmPose, JointAngles, LinkLengths};

/// Linear interpolation with exact endpoints.
///
/// Returns `a` for `t = 0` and `b` for `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Joint space interpolation between two joint configurations.
///
/// The iterator yields `steps + 1` frames. The first frame equals the start
/// and the last frame equals the end exactly. Both joints are blended linearly,
/// the end-effector therefore generally follows a curved path. Angles are not
/// wrapped, a difference larger than π is traversed the long way around.
///
/// The interpolation is pulled frame by frame and can be restarted at any time.
#[derive(Clone, Debug)]
pub struct Interpolation {
    start: JointAngles,
    end: JointAngles,
    steps: usize,
    index: usize,
}

impl Interpolation {
    /// Construct a new interpolation.
    ///
    /// # Panics
    ///
    /// Panics if `steps` is zero.
    pub fn new(start: JointAngles, end: JointAngles, steps: usize) -> Self {
        assert!(steps > 0, "interpolation requires at least one step");

        Self {
            start,
            end,
            steps,
            index: 0,
        }
    }

    #[inline]
    pub fn start(&self) -> JointAngles {
        self.start
    }

    #[inline]
    pub fn end(&self) -> JointAngles {
        self.end
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether every frame has been yielded.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.index > self.steps
    }

    /// Rewind to the first frame.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// Frame at index `i` in `0..=steps`.
    pub fn frame(&self, i: usize) -> JointAngles {
        let t = i as f32 / self.steps as f32;

        JointAngles {
            theta1: lerp(self.start.theta1, self.end.theta1, t),
            theta2: lerp(self.start.theta2, self.end.theta2, t),
        }
    }

    /// Map the remaining frames to arm poses.
    pub fn poses(self, links: LinkLengths) -> impl Iterator<Item = ArmPose> {
        let fk = ForwardKinematics::new(links);
        self.map(move |angles| fk.solve(&angles))
    }
}

impl Iterator for Interpolation {
    type Item = JointAngles;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }

        let angles = self.frame(self.index);
        self.index += 1;

        Some(angles)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Interpolation {}

impl std::iter::FusedIterator for Interpolation {}

/// Interpolate from `start` to `end` in `steps` steps.
///
/// See [`Interpolation`].
#[inline]
pub fn interpolate(start: JointAngles, end: JointAngles, steps: usize) -> Interpolation {
    Interpolation::new(start, end, steps)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
        assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
        assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
        assert_eq!(lerp(0.1, 0.7, 1.0), 0.7);
    }

    #[test]
    fn test_interpolate_endpoints() {
        let start = JointAngles::from_degrees(45.0, 45.0);
        let end = JointAngles::new(0.3, 1.7);

        let frames: Vec<_> = interpolate(start, end, 30).collect();

        assert_eq!(frames.len(), 31);
        assert_eq!(frames[0], start);
        assert_eq!(frames[30], end);
    }

    #[test]
    fn test_interpolate_single_step() {
        let start = JointAngles::new(-1.0, 0.2);
        let end = JointAngles::new(1.0, 2.2);

        let frames: Vec<_> = interpolate(start, end, 1).collect();

        assert_eq!(frames, vec![start, end]);
    }

    #[test]
    fn test_interpolate_linear() {
        let frames: Vec<_> =
            interpolate(JointAngles::new(0.0, 1.0), JointAngles::new(1.0, 0.0), 4).collect();

        for (i, frame) in frames.iter().enumerate() {
            let t = i as f32 / 4.0;
            assert_abs_diff_eq!(frame.theta1, t, epsilon = 1e-6);
            assert_abs_diff_eq!(frame.theta2, 1.0 - t, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_interpolate_no_wrap() {
        let start = JointAngles::from_degrees(170.0, 0.0);
        let end = JointAngles::from_degrees(-170.0, 0.0);

        let middle = interpolate(start, end, 2).nth(1).unwrap();

        assert_abs_diff_eq!(middle.theta1, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_interpolate_size_hint() {
        let mut interpolation = interpolate(JointAngles::default(), JointAngles::new(1.0, 1.0), 3);

        assert_eq!(interpolation.len(), 4);
        interpolation.next();
        assert_eq!(interpolation.len(), 3);
        interpolation.by_ref().for_each(drop);
        assert_eq!(interpolation.len(), 0);
        assert!(interpolation.is_exhausted());
        assert_eq!(interpolation.next(), None);
    }

    #[test]
    fn test_interpolate_restart() {
        let mut interpolation = interpolate(JointAngles::default(), JointAngles::new(1.0, 2.0), 5);
        let first: Vec<_> = interpolation.by_ref().collect();

        interpolation.restart();
        let second: Vec<_> = interpolation.collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_interpolate_poses() {
        let links = LinkLengths::default();
        let poses: Vec<_> = interpolate(
            JointAngles::new(0.0, 0.0),
            JointAngles::from_degrees(0.0, 90.0),
            10,
        )
        .poses(links)
        .collect();

        assert_eq!(poses.len(), 11);
        assert_abs_diff_eq!(poses[0].effector().x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(poses[10].effector().x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(poses[10].effector().y, 1.0, epsilon = 1e-6);

        for pose in &poses {
            assert_abs_diff_eq!(pose.elbow().x, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    #[should_panic]
    fn test_interpolate_zero_steps() {
        interpolate(JointAngles::default(), JointAngles::default(), 0);
    }
}
