//! Head-to-pivot kinematics.
//!
//! The camera pivot of a NAO is its neck.  [`HeadKinematics`] turns the
//! current head joint angles into the [`CameraPivot`] the perception engine
//! works with.
//!
//! [`ApproximateHeadKinematics`] does not solve the kinematic chain: the pivot
//! height is a fixed value for a standing robot, and the head pitch and yaw
//! are copied straight onto the pivot.  Crouching, walking or falling all
//! move the real neck away from that height, so distances derived from it
//! carry the error along.

use striker_types::{Camera, CameraPivot, PitchYawJoint};

/// Height of a standing NAO V5 neck above the ground (metres).
pub const NAO_V5_PIVOT_HEIGHT: f32 = 0.41;

/// Horizontal field of view of both NAO V5 cameras (degrees).
pub const NAO_V5_H_FOV_DEG: f32 = 60.97;

/// Vertical field of view of both NAO V5 cameras (degrees).
pub const NAO_V5_V_FOV_DEG: f32 = 47.64;

/// Factory calibration of the NAO V5 top camera.
pub fn nao_v5_top_camera() -> Camera {
    Camera {
        height: 0.06364,
        v_direction: 1.2_f32.to_radians(),
        center_offset: 0.05871,
        h_fov: NAO_V5_H_FOV_DEG.to_radians(),
        v_fov: NAO_V5_V_FOV_DEG.to_radians(),
    }
}

/// Factory calibration of the NAO V5 bottom camera.
pub fn nao_v5_bottom_camera() -> Camera {
    Camera {
        height: 0.01774,
        v_direction: 39.7_f32.to_radians(),
        center_offset: 0.05071,
        h_fov: NAO_V5_H_FOV_DEG.to_radians(),
        v_fov: NAO_V5_V_FOV_DEG.to_radians(),
    }
}

/// Maps head joint angles to a camera pivot.
pub trait HeadKinematics: Send + Sync {
    fn camera_pivot(&self, head: &PitchYawJoint) -> CameraPivot;
}

/// Fixed-height approximation of the neck; see the module docs for the
/// accuracy caveat.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximateHeadKinematics {
    pivot_height: f32,
    cameras: Vec<Camera>,
}

impl ApproximateHeadKinematics {
    pub fn new(pivot_height: f32, cameras: Vec<Camera>) -> Self {
        Self {
            pivot_height,
            cameras,
        }
    }

    /// A standing NAO V5 with factory camera calibration, top camera first.
    pub fn nao_v5() -> Self {
        Self::new(
            NAO_V5_PIVOT_HEIGHT,
            vec![nao_v5_top_camera(), nao_v5_bottom_camera()],
        )
    }

    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }
}

impl HeadKinematics for ApproximateHeadKinematics {
    fn camera_pivot(&self, head: &PitchYawJoint) -> CameraPivot {
        CameraPivot::new(self.pivot_height, head.pitch, head.yaw, self.cameras.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_angles_are_copied_onto_the_pivot() {
        let k = ApproximateHeadKinematics::nao_v5();
        let pivot = k.camera_pivot(&PitchYawJoint {
            pitch: 0.3,
            yaw: -0.5,
        });
        assert!((pivot.pitch - 0.3).abs() < 1e-6);
        assert!((pivot.yaw + 0.5).abs() < 1e-6);
        assert!((pivot.height - NAO_V5_PIVOT_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn pivot_height_ignores_the_head() {
        let k = ApproximateHeadKinematics::new(0.3, vec![nao_v5_top_camera()]);
        let a = k.camera_pivot(&PitchYawJoint::default());
        let b = k.camera_pivot(&PitchYawJoint { pitch: 0.5, yaw: 1.0 });
        assert_eq!(a.height, b.height);
        assert_eq!(a.cameras, b.cameras);
    }

    #[test]
    fn nao_v5_has_top_then_bottom_camera() {
        let k = ApproximateHeadKinematics::nao_v5();
        assert_eq!(k.cameras().len(), 2);
        assert!(k.cameras()[0].height > k.cameras()[1].height);
        assert!(k.cameras()[0].v_direction < k.cameras()[1].v_direction);
    }
}
