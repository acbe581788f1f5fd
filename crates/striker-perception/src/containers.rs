//! Capability traits that give a robot the engine's operations as methods.
//!
//! A type that can produce its [`CameraPivot`] implements
//! [`CameraPivotContainer`] and gets every per-camera conversion with an
//! explicit camera index.  A type that also knows its own field pose
//! implements [`FieldPositionContainer`] and picks up the field-space
//! conversions through [`FieldCameraContainer`], which is implemented for
//! every type with both capabilities.
//!
//! [`TopCameraContainer`] and [`BottomCameraContainer`] name one fixed index
//! each and forward to the indexed operations; they add no logic.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use striker_perception::{CameraPivotContainer, Engine, TopCameraContainer};
//! use striker_perception::sim::{FlatGroundModel, sim_pivot};
//! use striker_types::{CameraPivot, RelativeCoordinate};
//!
//! struct Head {
//!     engine: Engine,
//!     pivot: CameraPivot,
//! }
//!
//! impl CameraPivotContainer for Head {
//!     fn engine(&self) -> &Engine { &self.engine }
//!     fn camera_pivot(&self) -> CameraPivot { self.pivot.clone() }
//! }
//!
//! impl TopCameraContainer for Head {
//!     const TOP_CAMERA_INDEX: usize = 0;
//! }
//!
//! let head = Head { engine: Engine::new(Arc::new(FlatGroundModel)), pivot: sim_pivot() };
//! let far_ahead = RelativeCoordinate::new(0.0, 3.0);
//! assert_eq!(head.top_camera_can_see(far_ahead), head.can_see(far_ahead, 0));
//! ```

use striker_types::{
    CameraCoordinate, CameraPivot, CartesianCoordinate, FieldCoordinate, FieldTarget, ImagePoint,
    PercentCoordinate, PixelCoordinate, RelativeCoordinate, Resolution,
};

use crate::camera::RobotCamera;
use crate::engine::Engine;

// ────────────────────────────────────────────────────────────────────────────
// Camera pivot
// ────────────────────────────────────────────────────────────────────────────

/// Something carrying cameras on a pivot.
pub trait CameraPivotContainer {
    fn engine(&self) -> &Engine;

    /// The current pivot.  Implementations may recompute it on every call.
    fn camera_pivot(&self) -> CameraPivot;

    /// A view of camera `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not name a camera on the pivot.
    fn camera(&self, index: usize) -> RobotCamera<'_> {
        RobotCamera::new(self.engine(), self.camera_pivot(), index)
    }

    fn can_see(&self, object: RelativeCoordinate, camera: usize) -> bool {
        self.engine().can_see(&self.camera_pivot(), camera, object)
    }

    fn object_on_ground(&self, point: &impl ImagePoint, camera: usize) -> bool {
        self.engine()
            .object_on_ground(&self.camera_pivot(), camera, point)
    }

    /// See [`Engine::relative_coordinate`]: off-ground points yield the
    /// maximum-distance fallback.
    fn relative_coordinate(&self, point: &impl ImagePoint, camera: usize) -> RelativeCoordinate {
        self.engine()
            .relative_coordinate(&self.camera_pivot(), camera, point)
    }

    fn ground_relative_coordinate(
        &self,
        point: &impl ImagePoint,
        camera: usize,
    ) -> Option<RelativeCoordinate> {
        self.engine()
            .ground_relative_coordinate(&self.camera_pivot(), camera, point)
    }

    /// [`CameraPivotContainer::relative_coordinate`] for a point that names
    /// its own camera.
    fn camera_relative_coordinate<P: ImagePoint>(
        &self,
        coord: &CameraCoordinate<P>,
    ) -> RelativeCoordinate {
        self.relative_coordinate(coord, coord.camera)
    }

    fn project(
        &self,
        object: RelativeCoordinate,
        camera: usize,
    ) -> CameraCoordinate<PercentCoordinate> {
        self.engine().project(&self.camera_pivot(), camera, object)
    }

    fn image_coordinate(
        &self,
        object: RelativeCoordinate,
        camera: usize,
        resolution: Resolution,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.engine()
            .image_coordinate(&self.camera_pivot(), camera, object, resolution)
    }

    fn bounded_image_coordinate(
        &self,
        object: RelativeCoordinate,
        camera: usize,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine()
            .bounded_image_coordinate(&self.camera_pivot(), camera, object, resolution)
    }

    fn clamped_image_coordinate(
        &self,
        object: RelativeCoordinate,
        camera: usize,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.engine().clamped_image_coordinate(
            &self.camera_pivot(),
            camera,
            object,
            resolution,
            tolerance,
        )
    }

    fn within_tolerance_image_coordinate(
        &self,
        object: RelativeCoordinate,
        camera: usize,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine().within_tolerance_image_coordinate(
            &self.camera_pivot(),
            camera,
            object,
            resolution,
            tolerance,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Field position
// ────────────────────────────────────────────────────────────────────────────

/// Something that may know its own pose on the field.
pub trait FieldPositionContainer {
    /// Absent while the robot is not localised.
    fn field_position(&self) -> Option<FieldCoordinate>;

    fn cartesian_coordinate_at(&self, relative: RelativeCoordinate) -> Option<CartesianCoordinate> {
        self.field_position()
            .map(|pose| pose.cartesian_coordinate(relative))
    }

    fn field_coordinate_at(
        &self,
        relative: RelativeCoordinate,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.field_position()
            .map(|pose| pose.field_coordinate(relative, heading))
    }

    fn relative_coordinate_to(&self, target: &impl FieldTarget) -> Option<RelativeCoordinate> {
        self.field_position()
            .map(|pose| pose.relative_coordinate(target))
    }
}

/// Field-space conversions for anything with both cameras and a pose.
///
/// Every method is absent when [`FieldPositionContainer::field_position`] is.
pub trait FieldCameraContainer: CameraPivotContainer + FieldPositionContainer {
    fn cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
        camera: usize,
    ) -> Option<CartesianCoordinate> {
        self.engine().cartesian_coordinate(
            &self.camera_pivot(),
            camera,
            point,
            self.field_position().as_ref(),
        )
    }

    fn unsafe_cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
        camera: usize,
    ) -> Option<CartesianCoordinate> {
        self.engine().unsafe_cartesian_coordinate(
            &self.camera_pivot(),
            camera,
            point,
            self.field_position().as_ref(),
        )
    }

    fn camera_cartesian_coordinate<P: ImagePoint>(
        &self,
        coord: &CameraCoordinate<P>,
    ) -> Option<CartesianCoordinate> {
        self.cartesian_coordinate(coord, coord.camera)
    }

    fn field_coordinate(
        &self,
        point: &impl ImagePoint,
        camera: usize,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.engine().field_coordinate(
            &self.camera_pivot(),
            camera,
            point,
            self.field_position().as_ref(),
            heading,
        )
    }

    fn unsafe_field_coordinate(
        &self,
        point: &impl ImagePoint,
        camera: usize,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.engine().unsafe_field_coordinate(
            &self.camera_pivot(),
            camera,
            point,
            self.field_position().as_ref(),
            heading,
        )
    }

    fn project_field(
        &self,
        target: &impl FieldTarget,
        camera: usize,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.engine().project_field(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
        )
    }

    fn field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        camera: usize,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine().field_image_coordinate(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
            resolution,
        )
    }

    fn bounded_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        camera: usize,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine().bounded_field_image_coordinate(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
            resolution,
        )
    }

    /// See [`Engine::clamped_project_field`].
    fn clamped_project_field(
        &self,
        target: &impl FieldTarget,
        camera: usize,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.engine().clamped_project_field(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
            tolerance,
        )
    }

    fn within_tolerance_project_field(
        &self,
        target: &impl FieldTarget,
        camera: usize,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.engine().within_tolerance_project_field(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
            tolerance,
        )
    }

    /// See [`Engine::clamped_field_image_coordinate`].
    fn clamped_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        camera: usize,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine().clamped_field_image_coordinate(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
            resolution,
            tolerance,
        )
    }

    fn within_tolerance_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        camera: usize,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine().within_tolerance_field_image_coordinate(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
            resolution,
            tolerance,
        )
    }

    fn can_see_field(&self, target: &impl FieldTarget, camera: usize) -> Option<bool> {
        self.engine().can_see_field(
            &self.camera_pivot(),
            camera,
            target,
            self.field_position().as_ref(),
        )
    }
}

impl<T: CameraPivotContainer + FieldPositionContainer> FieldCameraContainer for T {}

// ────────────────────────────────────────────────────────────────────────────
// Named cameras
// ────────────────────────────────────────────────────────────────────────────

/// A robot with a camera it calls "top".
pub trait TopCameraContainer: CameraPivotContainer {
    const TOP_CAMERA_INDEX: usize;

    fn top_camera(&self) -> RobotCamera<'_> {
        self.camera(Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_can_see(&self, object: RelativeCoordinate) -> bool {
        self.can_see(object, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_object_on_ground(&self, point: &impl ImagePoint) -> bool {
        self.object_on_ground(point, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_relative_coordinate(&self, point: &impl ImagePoint) -> RelativeCoordinate {
        self.relative_coordinate(point, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_ground_relative_coordinate(
        &self,
        point: &impl ImagePoint,
    ) -> Option<RelativeCoordinate> {
        self.ground_relative_coordinate(point, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_project(
        &self,
        object: RelativeCoordinate,
    ) -> CameraCoordinate<PercentCoordinate> {
        self.project(object, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.image_coordinate(object, Self::TOP_CAMERA_INDEX, resolution)
    }

    fn top_camera_bounded_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.bounded_image_coordinate(object, Self::TOP_CAMERA_INDEX, resolution)
    }

    fn top_camera_clamped_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.clamped_image_coordinate(object, Self::TOP_CAMERA_INDEX, resolution, tolerance)
    }

    fn top_camera_within_tolerance_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.within_tolerance_image_coordinate(
            object,
            Self::TOP_CAMERA_INDEX,
            resolution,
            tolerance,
        )
    }

    fn top_camera_cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
    ) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.cartesian_coordinate(point, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_unsafe_cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
    ) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.unsafe_cartesian_coordinate(point, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_field_coordinate(
        &self,
        point: &impl ImagePoint,
        heading: f32,
    ) -> Option<FieldCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.field_coordinate(point, Self::TOP_CAMERA_INDEX, heading)
    }

    fn top_camera_unsafe_field_coordinate(
        &self,
        point: &impl ImagePoint,
        heading: f32,
    ) -> Option<FieldCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.unsafe_field_coordinate(point, Self::TOP_CAMERA_INDEX, heading)
    }

    fn top_camera_project_field(
        &self,
        target: &impl FieldTarget,
    ) -> Option<CameraCoordinate<PercentCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.project_field(target, Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_clamped_project_field(
        &self,
        target: &impl FieldTarget,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PercentCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.clamped_project_field(target, Self::TOP_CAMERA_INDEX, tolerance)
    }

    fn top_camera_within_tolerance_project_field(
        &self,
        target: &impl FieldTarget,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PercentCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.within_tolerance_project_field(target, Self::TOP_CAMERA_INDEX, tolerance)
    }

    fn top_camera_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.field_image_coordinate(target, Self::TOP_CAMERA_INDEX, resolution)
    }

    fn top_camera_bounded_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.bounded_field_image_coordinate(target, Self::TOP_CAMERA_INDEX, resolution)
    }

    fn top_camera_clamped_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.clamped_field_image_coordinate(
            target,
            Self::TOP_CAMERA_INDEX,
            resolution,
            tolerance,
        )
    }

    fn top_camera_within_tolerance_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.within_tolerance_field_image_coordinate(
            target,
            Self::TOP_CAMERA_INDEX,
            resolution,
            tolerance,
        )
    }

    fn top_camera_can_see_field(&self, target: &impl FieldTarget) -> Option<bool>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.can_see_field(target, Self::TOP_CAMERA_INDEX)
    }
}

/// A robot with a camera it calls "bottom".
pub trait BottomCameraContainer: CameraPivotContainer {
    const BOTTOM_CAMERA_INDEX: usize;

    fn bottom_camera(&self) -> RobotCamera<'_> {
        self.camera(Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_can_see(&self, object: RelativeCoordinate) -> bool {
        self.can_see(object, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_object_on_ground(&self, point: &impl ImagePoint) -> bool {
        self.object_on_ground(point, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_relative_coordinate(&self, point: &impl ImagePoint) -> RelativeCoordinate {
        self.relative_coordinate(point, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_ground_relative_coordinate(
        &self,
        point: &impl ImagePoint,
    ) -> Option<RelativeCoordinate> {
        self.ground_relative_coordinate(point, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_project(
        &self,
        object: RelativeCoordinate,
    ) -> CameraCoordinate<PercentCoordinate> {
        self.project(object, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.image_coordinate(object, Self::BOTTOM_CAMERA_INDEX, resolution)
    }

    fn bottom_camera_bounded_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.bounded_image_coordinate(object, Self::BOTTOM_CAMERA_INDEX, resolution)
    }

    fn bottom_camera_clamped_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.clamped_image_coordinate(object, Self::BOTTOM_CAMERA_INDEX, resolution, tolerance)
    }

    fn bottom_camera_within_tolerance_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.within_tolerance_image_coordinate(
            object,
            Self::BOTTOM_CAMERA_INDEX,
            resolution,
            tolerance,
        )
    }

    fn bottom_camera_cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
    ) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.cartesian_coordinate(point, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_unsafe_cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
    ) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.unsafe_cartesian_coordinate(point, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_field_coordinate(
        &self,
        point: &impl ImagePoint,
        heading: f32,
    ) -> Option<FieldCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.field_coordinate(point, Self::BOTTOM_CAMERA_INDEX, heading)
    }

    fn bottom_camera_unsafe_field_coordinate(
        &self,
        point: &impl ImagePoint,
        heading: f32,
    ) -> Option<FieldCoordinate>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.unsafe_field_coordinate(point, Self::BOTTOM_CAMERA_INDEX, heading)
    }

    fn bottom_camera_project_field(
        &self,
        target: &impl FieldTarget,
    ) -> Option<CameraCoordinate<PercentCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.project_field(target, Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_clamped_project_field(
        &self,
        target: &impl FieldTarget,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PercentCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.clamped_project_field(target, Self::BOTTOM_CAMERA_INDEX, tolerance)
    }

    fn bottom_camera_within_tolerance_project_field(
        &self,
        target: &impl FieldTarget,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PercentCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.within_tolerance_project_field(target, Self::BOTTOM_CAMERA_INDEX, tolerance)
    }

    fn bottom_camera_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.field_image_coordinate(target, Self::BOTTOM_CAMERA_INDEX, resolution)
    }

    fn bottom_camera_bounded_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.bounded_field_image_coordinate(target, Self::BOTTOM_CAMERA_INDEX, resolution)
    }

    fn bottom_camera_clamped_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.clamped_field_image_coordinate(
            target,
            Self::BOTTOM_CAMERA_INDEX,
            resolution,
            tolerance,
        )
    }

    fn bottom_camera_within_tolerance_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.within_tolerance_field_image_coordinate(
            target,
            Self::BOTTOM_CAMERA_INDEX,
            resolution,
            tolerance,
        )
    }

    fn bottom_camera_can_see_field(&self, target: &impl FieldTarget) -> Option<bool>
    where
        Self: FieldPositionContainer + Sized,
    {
        self.can_see_field(target, Self::BOTTOM_CAMERA_INDEX)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sim::{FlatGroundModel, sim_pivot};

    struct Head {
        engine: Engine,
        pose: Option<FieldCoordinate>,
    }

    impl Head {
        fn new(pose: Option<FieldCoordinate>) -> Self {
            Self {
                engine: Engine::new(Arc::new(FlatGroundModel)),
                pose,
            }
        }
    }

    impl CameraPivotContainer for Head {
        fn engine(&self) -> &Engine {
            &self.engine
        }

        fn camera_pivot(&self) -> CameraPivot {
            sim_pivot()
        }
    }

    impl FieldPositionContainer for Head {
        fn field_position(&self) -> Option<FieldCoordinate> {
            self.pose
        }
    }

    impl TopCameraContainer for Head {
        const TOP_CAMERA_INDEX: usize = 0;
    }

    impl BottomCameraContainer for Head {
        const BOTTOM_CAMERA_INDEX: usize = 1;
    }

    fn localised() -> Head {
        Head::new(Some(FieldCoordinate::new(CartesianCoordinate::new(0.5, -0.5), 0.2)))
    }

    // ── Named views ─────────────────────────────────────────────────────────

    #[test]
    fn named_views_match_indexed_calls() {
        let head = localised();
        for direction in [-2.0_f32, -0.5, 0.0, 0.25, 1.5] {
            for distance in [0.2_f32, 0.6, 1.5, 4.0] {
                let x = RelativeCoordinate::new(direction, distance);
                assert_eq!(head.top_camera_can_see(x), head.can_see(x, 0));
                assert_eq!(head.bottom_camera_can_see(x), head.can_see(x, 1));
                assert_eq!(head.top_camera().can_see(x), head.can_see(x, 0));
                assert_eq!(head.bottom_camera().can_see(x), head.can_see(x, 1));
            }
        }
    }

    #[test]
    fn named_conversions_forward_with_their_index() {
        let head = localised();
        let res = Resolution::new(320, 240);
        let point = PixelCoordinate::new(100, 200, res);
        assert_eq!(
            head.bottom_camera_relative_coordinate(&point),
            head.relative_coordinate(&point, 1)
        );
        let object = RelativeCoordinate::new(0.1, 2.0);
        assert_eq!(head.top_camera_image_coordinate(object, res).camera, 0);
        assert_eq!(
            head.bottom_camera_clamped_image_coordinate(object, res, None),
            head.clamped_image_coordinate(object, 1, res, None)
        );
        assert_eq!(head.top_camera_project(object), head.project(object, 0));
        assert_eq!(head.bottom_camera_project(object), head.project(object, 1));
        assert_eq!(
            head.bottom_camera_within_tolerance_image_coordinate(object, res, 0.1),
            head.within_tolerance_image_coordinate(object, 1, res, 0.1)
        );

        let heading = 0.7;
        assert_eq!(
            head.bottom_camera_unsafe_cartesian_coordinate(&point),
            head.unsafe_cartesian_coordinate(&point, 1)
        );
        assert_eq!(
            head.top_camera_unsafe_cartesian_coordinate(&point),
            head.unsafe_cartesian_coordinate(&point, 0)
        );
        assert_eq!(
            head.bottom_camera_field_coordinate(&point, heading),
            head.field_coordinate(&point, 1, heading)
        );
        assert_eq!(
            head.top_camera_unsafe_field_coordinate(&point, heading),
            head.unsafe_field_coordinate(&point, 0, heading)
        );

        let target = CartesianCoordinate::new(1.5, -0.2);
        for tolerance in [None, Some(0.0), Some(0.1), Some(2.0)] {
            assert_eq!(
                head.top_camera_clamped_field_image_coordinate(&target, res, tolerance),
                head.clamped_field_image_coordinate(&target, 0, res, tolerance)
            );
            assert_eq!(
                head.bottom_camera_clamped_field_image_coordinate(&target, res, tolerance),
                head.clamped_field_image_coordinate(&target, 1, res, tolerance)
            );
            assert_eq!(
                head.bottom_camera_clamped_project_field(&target, tolerance),
                head.clamped_project_field(&target, 1, tolerance)
            );
        }
        assert_eq!(head.top_camera_project_field(&target), head.project_field(&target, 0));
        assert_eq!(
            head.bottom_camera_field_image_coordinate(&target, res),
            head.field_image_coordinate(&target, 1, res)
        );
        assert_eq!(
            head.top_camera_bounded_field_image_coordinate(&target, res),
            head.bounded_field_image_coordinate(&target, 0, res)
        );
        assert_eq!(
            head.bottom_camera_within_tolerance_project_field(&target, 0.1),
            head.within_tolerance_project_field(&target, 1, 0.1)
        );
        assert_eq!(
            head.top_camera_within_tolerance_field_image_coordinate(&target, res, 0.1),
            head.within_tolerance_field_image_coordinate(&target, 0, res, 0.1)
        );
        assert_eq!(
            head.bottom_camera_clamped_field_image_coordinate(&target, res, None)
                .map(|c| c.camera),
            Some(1)
        );
    }

    #[test]
    fn camera_coordinate_selects_its_own_camera() {
        let head = localised();
        let point = PercentCoordinate::new(0.2, 0.4);
        let tagged = CameraCoordinate::new(1, point);
        assert_eq!(
            head.camera_relative_coordinate(&tagged),
            head.relative_coordinate(&point, 1)
        );
        assert_eq!(
            head.camera_cartesian_coordinate(&tagged),
            head.cartesian_coordinate(&point, 1)
        );
    }

    // ── Field space ─────────────────────────────────────────────────────────

    #[test]
    fn unlocalised_head_has_no_field_answers() {
        let head = Head::new(None);
        let res = Resolution::new(640, 480);
        let pixel = PixelCoordinate::new(320, 400, res);
        let target = FieldCoordinate::new(CartesianCoordinate::new(1.0, 0.0), 0.0);
        let relative = RelativeCoordinate::new(0.0, 1.0);

        assert!(head.cartesian_coordinate_at(relative).is_none());
        assert!(head.field_coordinate_at(relative, 0.0).is_none());
        assert!(head.relative_coordinate_to(&target).is_none());
        for camera in 0..2 {
            assert!(head.cartesian_coordinate(&pixel, camera).is_none());
            assert!(head.cartesian_coordinate(&pixel.centered(), camera).is_none());
            assert!(head.cartesian_coordinate(&pixel.percent_coordinate(), camera).is_none());
            assert!(
                head.camera_cartesian_coordinate(&CameraCoordinate::new(camera, pixel))
                    .is_none()
            );
            assert!(head.unsafe_cartesian_coordinate(&pixel, camera).is_none());
            assert!(head.field_coordinate(&pixel, camera, 0.0).is_none());
            assert!(head.unsafe_field_coordinate(&pixel, camera, 0.0).is_none());
            assert!(head.project_field(&target, camera).is_none());
            assert!(head.field_image_coordinate(&target, camera, res).is_none());
            assert!(head.bounded_field_image_coordinate(&target, camera, res).is_none());
            assert!(head.clamped_field_image_coordinate(&target, camera, res, None).is_none());
            assert!(
                head.within_tolerance_field_image_coordinate(&target, camera, res, 0.1)
                    .is_none()
            );
            assert!(head.clamped_project_field(&target, camera, None).is_none());
            assert!(head.within_tolerance_project_field(&target, camera, 0.1).is_none());
            assert!(head.can_see_field(&target, camera).is_none());
        }
        assert!(head.top_camera_cartesian_coordinate(&pixel).is_none());
        assert!(head.bottom_camera_can_see_field(&target).is_none());
        assert!(head.top_camera_project_field(&target).is_none());
        assert!(head.bottom_camera_clamped_field_image_coordinate(&target, res, None).is_none());
    }

    #[test]
    fn relative_to_field_and_back() {
        let head = localised();
        let relative = RelativeCoordinate::new(0.4, 1.2);
        let position = head.cartesian_coordinate_at(relative).unwrap();
        let back = head.relative_coordinate_to(&position).unwrap();
        assert!((back.direction - relative.direction).abs() < 1e-5);
        assert!((back.distance - relative.distance).abs() < 1e-5);
    }

    #[test]
    fn point_seen_in_bottom_camera_lands_on_field() {
        let head = localised();
        let point = PercentCoordinate::new(0.0, 0.3);
        let expected = head.cartesian_coordinate_at(head.relative_coordinate(&point, 1));
        assert_eq!(head.bottom_camera_cartesian_coordinate(&point), expected);
    }
}
