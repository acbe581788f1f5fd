//! A single camera bound to its pivot.

use striker_types::{
    Camera, CameraCoordinate, CameraPivot, CartesianCoordinate, FieldCoordinate, FieldTarget,
    ImagePoint, PercentCoordinate, PixelCoordinate, RelativeCoordinate, Resolution,
};

use crate::engine::Engine;

/// One camera of a [`CameraPivot`], addressed by index.
///
/// Holds its own copy of the pivot, so the calibration setters adjust this
/// view only.  Every conversion forwards to the [`Engine`] with the bound
/// index.
#[derive(Debug, Clone)]
pub struct RobotCamera<'a> {
    engine: &'a Engine,
    pivot: CameraPivot,
    index: usize,
}

impl<'a> RobotCamera<'a> {
    /// # Panics
    ///
    /// Panics when `index` does not name a camera on `pivot`.
    pub fn new(engine: &'a Engine, pivot: CameraPivot, index: usize) -> Self {
        assert!(
            index < pivot.camera_count(),
            "camera index {index} out of range for a pivot with {} camera(s)",
            pivot.camera_count()
        );
        Self {
            engine,
            pivot,
            index,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pivot(&self) -> &CameraPivot {
        &self.pivot
    }

    pub fn camera(&self) -> &Camera {
        self.pivot.camera(self.index)
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        self.pivot.camera_mut(self.index)
    }

    // ── Calibration ─────────────────────────────────────────────────────────

    pub fn pivot_height(&self) -> f32 {
        self.pivot.height
    }

    pub fn set_pivot_height(&mut self, height: f32) {
        self.pivot.height = height;
    }

    pub fn pivot_pitch(&self) -> f32 {
        self.pivot.pitch
    }

    pub fn set_pivot_pitch(&mut self, pitch: f32) {
        self.pivot.pitch = pitch;
    }

    pub fn pivot_yaw(&self) -> f32 {
        self.pivot.yaw
    }

    pub fn set_pivot_yaw(&mut self, yaw: f32) {
        self.pivot.yaw = yaw;
    }

    /// Height of the camera above the pivot.
    pub fn camera_height(&self) -> f32 {
        self.camera().height
    }

    pub fn set_camera_height(&mut self, height: f32) {
        self.camera_mut().height = height;
    }

    /// Tilt of the camera relative to the pivot; positive points at the
    /// ground.
    pub fn camera_pitch(&self) -> f32 {
        self.camera().v_direction
    }

    pub fn set_camera_pitch(&mut self, pitch: f32) {
        self.camera_mut().v_direction = pitch;
    }

    /// Forward offset from the pivot; negative is behind it.
    pub fn center_offset(&self) -> f32 {
        self.camera().center_offset
    }

    pub fn set_center_offset(&mut self, offset: f32) {
        self.camera_mut().center_offset = offset;
    }

    pub fn h_fov(&self) -> f32 {
        self.camera().h_fov
    }

    pub fn set_h_fov(&mut self, fov: f32) {
        self.camera_mut().h_fov = fov;
    }

    pub fn v_fov(&self) -> f32 {
        self.camera().v_fov
    }

    pub fn set_v_fov(&mut self, fov: f32) {
        self.camera_mut().v_fov = fov;
    }

    // ── Conversions ─────────────────────────────────────────────────────────

    pub fn can_see(&self, object: RelativeCoordinate) -> bool {
        self.engine.can_see(&self.pivot, self.index, object)
    }

    pub fn object_on_ground(&self, point: &impl ImagePoint) -> bool {
        self.engine.object_on_ground(&self.pivot, self.index, point)
    }

    /// Project an image point onto the ground.
    ///
    /// A point that is not on the ground yields the maximum-distance
    /// fallback; see [`Engine::relative_coordinate`].
    pub fn relative_coordinate(&self, point: &impl ImagePoint) -> RelativeCoordinate {
        self.engine.relative_coordinate(&self.pivot, self.index, point)
    }

    pub fn ground_relative_coordinate(&self, point: &impl ImagePoint) -> Option<RelativeCoordinate> {
        self.engine
            .ground_relative_coordinate(&self.pivot, self.index, point)
    }

    pub fn project(&self, object: RelativeCoordinate) -> CameraCoordinate<PercentCoordinate> {
        self.engine.project(&self.pivot, self.index, object)
    }

    pub fn image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.engine
            .image_coordinate(&self.pivot, self.index, object, resolution)
    }

    pub fn bounded_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine
            .bounded_image_coordinate(&self.pivot, self.index, object, resolution)
    }

    pub fn clamped_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.engine
            .clamped_image_coordinate(&self.pivot, self.index, object, resolution, tolerance)
    }

    pub fn within_tolerance_image_coordinate(
        &self,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine.within_tolerance_image_coordinate(
            &self.pivot,
            self.index,
            object,
            resolution,
            tolerance,
        )
    }

    pub fn cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<CartesianCoordinate> {
        self.engine
            .cartesian_coordinate(&self.pivot, self.index, point, own_pose)
    }

    pub fn unsafe_cartesian_coordinate(
        &self,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<CartesianCoordinate> {
        self.engine
            .unsafe_cartesian_coordinate(&self.pivot, self.index, point, own_pose)
    }

    pub fn field_coordinate(
        &self,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.engine
            .field_coordinate(&self.pivot, self.index, point, own_pose, heading)
    }

    pub fn unsafe_field_coordinate(
        &self,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.engine
            .unsafe_field_coordinate(&self.pivot, self.index, point, own_pose, heading)
    }

    pub fn project_field(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.engine
            .project_field(&self.pivot, self.index, target, own_pose)
    }

    pub fn clamped_project_field(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.engine
            .clamped_project_field(&self.pivot, self.index, target, own_pose, tolerance)
    }

    pub fn within_tolerance_project_field(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.engine
            .within_tolerance_project_field(&self.pivot, self.index, target, own_pose, tolerance)
    }

    pub fn field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine
            .field_image_coordinate(&self.pivot, self.index, target, own_pose, resolution)
    }

    pub fn bounded_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine
            .bounded_field_image_coordinate(&self.pivot, self.index, target, own_pose, resolution)
    }

    pub fn clamped_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine.clamped_field_image_coordinate(
            &self.pivot,
            self.index,
            target,
            own_pose,
            resolution,
            tolerance,
        )
    }

    pub fn within_tolerance_field_image_coordinate(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.engine.within_tolerance_field_image_coordinate(
            &self.pivot,
            self.index,
            target,
            own_pose,
            resolution,
            tolerance,
        )
    }

    pub fn can_see_field(
        &self,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<bool> {
        self.engine
            .can_see_field(&self.pivot, self.index, target, own_pose)
    }
}
