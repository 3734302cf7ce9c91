//! Rotations in degrees.
//!
//! [`Rotator`] is the pitch/yaw/roll triple shared by the pawn and its
//! controller. The world is Y-up: yaw spins around +Y, and a zero rotation
//! faces +X. Positive pitch looks up.
//!
//! The pawn's own orientation lives in the [`Rotation`] component.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

/// Pitch, yaw and roll in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Same yaw, pitch and roll dropped. Used to keep movement on the ground plane.
    pub fn yaw_only(&self) -> Self {
        Self {
            pitch: 0.0,
            yaw: self.yaw,
            roll: 0.0,
        }
    }

    /// Unit vector this rotation looks along (pitch included).
    pub fn forward(&self) -> Vector3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vector3::new(cp * cy, sp, cp * sy)
    }

    /// Unit vector to the right of this rotation on the ground plane.
    ///
    /// Roll is ignored; the result is always horizontal.
    pub fn right(&self) -> Vector3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vector3::new(-sy, 0.0, cy)
    }

    /// Wrap every axis into `(-180, 180]`.
    pub fn normalized(&self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }

    /// Clamp pitch into `[min, max]` degrees.
    pub fn clamp_pitch(&mut self, min: f32, max: f32) {
        self.pitch = self.pitch.clamp(min, max);
    }
}

/// Wrap an angle in degrees into `(-180, 180]`.
pub fn normalize_axis(degrees: f32) -> f32 {
    let mut angle = degrees % 360.0;
    if angle > 180.0 {
        angle -= 360.0;
    } else if angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

/// Step `current` towards `target` by at most `max_step` degrees, taking the short way round.
pub fn step_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = normalize_axis(target - current);
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step * delta.signum()
    }
}

/// World orientation of a pawn.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation(pub Rotator);

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_zero_rotation_faces_positive_x() {
        let r = Rotator::ZERO;
        assert!(vec_approx_eq(r.forward(), Vector3::new(1.0, 0.0, 0.0)));
        assert!(vec_approx_eq(r.right(), Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_yaw_90_turns_forward_onto_right() {
        let r = Rotator::new(0.0, 90.0, 0.0);
        assert!(vec_approx_eq(r.forward(), Vector3::new(0.0, 0.0, 1.0)));
        assert!(vec_approx_eq(r.right(), Vector3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_yaw_only_drops_pitch_and_roll() {
        let r = Rotator::new(30.0, 45.0, 10.0).yaw_only();
        assert_eq!(r, Rotator::new(0.0, 45.0, 0.0));
        assert!(approx_eq(r.forward().y, 0.0));
        assert!(approx_eq(r.forward().length(), 1.0));
    }

    #[test]
    fn test_pitch_up_raises_forward() {
        let r = Rotator::new(90.0, 0.0, 0.0);
        assert!(vec_approx_eq(r.forward(), Vector3::new(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_normalize_axis_wraps() {
        assert!(approx_eq(normalize_axis(190.0), -170.0));
        assert!(approx_eq(normalize_axis(-190.0), 170.0));
        assert!(approx_eq(normalize_axis(540.0), 180.0));
        assert!(approx_eq(normalize_axis(-180.0), 180.0));
        assert!(approx_eq(normalize_axis(45.0), 45.0));
    }

    #[test]
    fn test_step_towards_takes_short_way() {
        // 170 -> -170 is 20 degrees through 180, not 340 the other way
        let next = step_towards(170.0, -170.0, 5.0);
        assert!(approx_eq(next, 175.0));
    }

    #[test]
    fn test_step_towards_snaps_when_close() {
        assert!(approx_eq(step_towards(10.0, 12.0, 5.0), 12.0));
    }

    #[test]
    fn test_clamp_pitch() {
        let mut r = Rotator::new(120.0, 0.0, 0.0);
        r.clamp_pitch(-89.0, 89.0);
        assert!(approx_eq(r.pitch, 89.0));
    }
}
