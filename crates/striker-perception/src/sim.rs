//! Flat-ground camera model for headless tests.
//!
//! [`FlatGroundModel`] treats the field as an infinite plane and maps image
//! rows linearly onto the depression angle below the horizon:
//!
//! ```text
//! depression = pivot.pitch + camera.v_direction + y * v_fov / 2
//! distance   = (pivot.height + camera.height) / tan(depression) + center_offset
//! bearing    = pivot.yaw - x * h_fov / 2
//! ```
//!
//! A point is on the ground when `0 < depression < π/2`.  Any other point
//! projects to the documented maximum-distance fallback, `f32::MAX`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use striker_perception::{Engine, sim::{FlatGroundModel, sim_pivot}};
//! use striker_types::RelativeCoordinate;
//!
//! let engine = Engine::new(Arc::new(FlatGroundModel));
//! assert!(engine.can_see(&sim_pivot(), 1, RelativeCoordinate::new(0.0, 0.5)));
//! ```

use std::f32::consts::FRAC_PI_2;

use striker_types::coordinates::normalize_angle;
use striker_types::{Camera, CameraPivot, PercentCoordinate, RelativeCoordinate};

use crate::model::CameraModel;

/// A pinhole-free approximation of a camera looking at flat ground.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatGroundModel;

impl FlatGroundModel {
    fn depression(pivot: &CameraPivot, camera: &Camera, y: f32) -> f32 {
        pivot.pitch + camera.v_direction + y * camera.v_fov / 2.0
    }

    fn lens_height(pivot: &CameraPivot, camera: &Camera) -> f32 {
        pivot.height + camera.height
    }
}

impl CameraModel for FlatGroundModel {
    fn relative_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: &Camera,
        point: PercentCoordinate,
    ) -> RelativeCoordinate {
        let direction = normalize_angle(pivot.yaw - point.x * camera.h_fov / 2.0);
        if !self.is_ground_point(pivot, camera, point) {
            return RelativeCoordinate::new(direction, f32::MAX);
        }
        let depression = Self::depression(pivot, camera, point.y);
        let distance = Self::lens_height(pivot, camera) / depression.tan() + camera.center_offset;
        RelativeCoordinate::new(direction, distance)
    }

    fn percent_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: &Camera,
        object: RelativeCoordinate,
    ) -> PercentCoordinate {
        let x = normalize_angle(pivot.yaw - object.direction) / (camera.h_fov / 2.0);
        let ground = object.distance - camera.center_offset;
        let depression = Self::lens_height(pivot, camera).atan2(ground);
        let y = (depression - pivot.pitch - camera.v_direction) / (camera.v_fov / 2.0);
        PercentCoordinate::new(x, y)
    }

    fn is_ground_point(&self, pivot: &CameraPivot, camera: &Camera, point: PercentCoordinate) -> bool {
        let depression = Self::depression(pivot, camera, point.y);
        depression > 0.0 && depression < FRAC_PI_2
    }

    fn is_visible(&self, pivot: &CameraPivot, camera: &Camera, object: RelativeCoordinate) -> bool {
        self.percent_coordinate(pivot, camera, object)
            .is_within_bounds()
    }
}

/// A standing two-camera pivot shaped like a NAO head: index 0 looks at the
/// horizon, index 1 at the feet.
pub fn sim_pivot() -> CameraPivot {
    let h_fov = 60.97_f32.to_radians();
    let v_fov = 47.64_f32.to_radians();
    CameraPivot::new(
        0.41,
        0.0,
        0.0,
        vec![
            Camera {
                height: 0.06364,
                v_direction: 1.2_f32.to_radians(),
                center_offset: 0.05871,
                h_fov,
                v_fov,
            },
            Camera {
                height: 0.01774,
                v_direction: 39.7_f32.to_radians(),
                center_offset: 0.05071,
                h_fov,
                v_fov,
            },
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_bottom_camera_is_in_front_of_feet() {
        let pivot = sim_pivot();
        let rel = FlatGroundModel.relative_coordinate(
            &pivot,
            pivot.camera(1),
            PercentCoordinate::new(0.0, 0.0),
        );
        assert!(rel.direction.abs() < 1e-6);
        assert!(rel.distance > 0.3 && rel.distance < 0.6, "distance={}", rel.distance);
    }

    #[test]
    fn left_of_image_is_positive_bearing() {
        let pivot = sim_pivot();
        let rel = FlatGroundModel.relative_coordinate(
            &pivot,
            pivot.camera(1),
            PercentCoordinate::new(-1.0, 0.5),
        );
        assert!(rel.direction > 0.0);
    }

    #[test]
    fn pivot_yaw_rotates_visibility() {
        let mut pivot = sim_pivot();
        let left = RelativeCoordinate::new(1.0, 0.6);
        assert!(!FlatGroundModel.is_visible(&pivot, pivot.camera(1), left));
        pivot.yaw = 1.0;
        assert!(FlatGroundModel.is_visible(&pivot, pivot.camera(1), left));
    }
}
