//! Conversion & visibility engine.
//!
//! [`Engine`] maps points between image space, robot-relative space and field
//! space.  Every operation takes the [`CameraPivot`] and the index of the
//! camera on that pivot explicitly; the engine itself holds nothing but the
//! [`CameraModel`] it delegates the projection maths to, so all operations are
//! pure and may be called from several threads at once.
//!
//! # Safe and unsafe variants
//!
//! Image → robot-relative conversions come in two flavours:
//!
//! - [`Engine::relative_coordinate`] is total.  For a point that is not on
//!   the ground it returns the model's maximum-distance fallback.
//! - [`Engine::ground_relative_coordinate`] is absent for such points.
//!
//! The field-space conversions follow the same split
//! ([`Engine::cartesian_coordinate`] vs [`Engine::unsafe_cartesian_coordinate`]),
//! and additionally propagate absence of the robot's own pose.
//!
//! Robot-relative → image conversions are unbounded by default
//! ([`Engine::project`], [`Engine::image_coordinate`]);
//! [`Engine::bounded_image_coordinate`], [`Engine::clamped_image_coordinate`]
//! and [`Engine::within_tolerance_image_coordinate`] apply the policies from
//! [`crate::clamp`].  Field targets get the same family, in pixels and in
//! percent space (`clamped_*field*` / `within_tolerance_*field*`).
//!
//! # Panics
//!
//! Every method panics when the camera index does not name a camera on the
//! pivot.

use std::fmt;
use std::sync::Arc;

use striker_types::{
    CameraCoordinate, CameraPivot, CartesianCoordinate, FieldCoordinate, FieldTarget, ImagePoint,
    PercentCoordinate, PixelCoordinate, RelativeCoordinate, Resolution,
};
use tracing::trace;

use crate::clamp::Clampable;
use crate::model::CameraModel;

/// Stateless conversion functions over a shared [`CameraModel`].
#[derive(Clone)]
pub struct Engine {
    model: Arc<dyn CameraModel>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

impl Engine {
    pub fn new(model: Arc<dyn CameraModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &dyn CameraModel {
        self.model.as_ref()
    }

    // ── Visibility ──────────────────────────────────────────────────────────

    /// Does `object` fall within the field of view of camera `camera`?
    pub fn can_see(&self, pivot: &CameraPivot, camera: usize, object: RelativeCoordinate) -> bool {
        self.model.is_visible(pivot, pivot.camera(camera), object)
    }

    /// Does the ray through `point` intersect the ground?
    ///
    /// When this is `false`, [`Engine::relative_coordinate`] for the same
    /// point returns the maximum-distance fallback.
    pub fn object_on_ground(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
    ) -> bool {
        self.model
            .is_ground_point(pivot, pivot.camera(camera), point.percent_coordinate())
    }

    // ── Image → robot-relative ──────────────────────────────────────────────

    /// Project an image point onto the ground.
    ///
    /// Total: a point above the horizon yields the camera model's
    /// maximum-distance fallback.  Check [`Engine::object_on_ground`] first,
    /// or use [`Engine::ground_relative_coordinate`].
    pub fn relative_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
    ) -> RelativeCoordinate {
        self.model
            .relative_coordinate(pivot, pivot.camera(camera), point.percent_coordinate())
    }

    /// Like [`Engine::relative_coordinate`], but absent for points that are
    /// not on the ground.
    pub fn ground_relative_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
    ) -> Option<RelativeCoordinate> {
        let percent = point.percent_coordinate();
        let optics = pivot.camera(camera);
        if !self.model.is_ground_point(pivot, optics, percent) {
            trace!(camera, x = percent.x, y = percent.y, "image point is not on the ground");
            return None;
        }
        Some(self.model.relative_coordinate(pivot, optics, percent))
    }

    // ── Robot-relative → image ──────────────────────────────────────────────

    /// Where `object` appears in camera `camera`, in percent space.
    ///
    /// The result is unbounded; off-image objects produce components outside
    /// `[-1, 1]`.
    pub fn project(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        object: RelativeCoordinate,
    ) -> CameraCoordinate<PercentCoordinate> {
        let point = self.model.percent_coordinate(pivot, pivot.camera(camera), object);
        CameraCoordinate::new(camera, point)
    }

    /// [`Engine::project`] expressed in pixels of `resolution`.  Unbounded.
    pub fn image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.project(pivot, camera, object)
            .pixel_coordinate(resolution)
    }

    /// [`Engine::image_coordinate`], absent when the pixel is outside the
    /// image.
    pub fn bounded_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        object: RelativeCoordinate,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.image_coordinate(pivot, camera, object, resolution)
            .bounded()
    }

    /// [`Engine::image_coordinate`] passed through the tolerance-gated clamp.
    ///
    /// With `tolerance` absent the pixel is always clamped into the image.
    /// Otherwise the result may still be out of bounds.
    pub fn clamped_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> CameraCoordinate<PixelCoordinate> {
        self.image_coordinate(pivot, camera, object, resolution)
            .clamped_with_tolerance(tolerance)
    }

    /// [`Engine::image_coordinate`] clamped within `tolerance`; absent when
    /// the pixel cannot be brought into the image.
    pub fn within_tolerance_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        object: RelativeCoordinate,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.image_coordinate(pivot, camera, object, resolution)
            .within_tolerance(tolerance)
    }

    // ── Image → field ───────────────────────────────────────────────────────

    /// Absolute field position of a ground point seen in camera `camera`.
    ///
    /// Absent when `own_pose` is unknown or `point` is not on the ground.
    pub fn cartesian_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<CartesianCoordinate> {
        let pose = own_pose?;
        self.ground_relative_coordinate(pivot, camera, point)
            .map(|relative| pose.cartesian_coordinate(relative))
    }

    /// Like [`Engine::cartesian_coordinate`], but only absent when `own_pose`
    /// is unknown; a point above the horizon uses the maximum-distance
    /// fallback.
    pub fn unsafe_cartesian_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<CartesianCoordinate> {
        let pose = own_pose?;
        Some(pose.cartesian_coordinate(self.relative_coordinate(pivot, camera, point)))
    }

    /// Field pose of a ground point seen in camera `camera`, facing `heading`.
    pub fn field_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.cartesian_coordinate(pivot, camera, point, own_pose)
            .map(|position| FieldCoordinate::new(position, heading))
    }

    pub fn unsafe_field_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        point: &impl ImagePoint,
        own_pose: Option<&FieldCoordinate>,
        heading: f32,
    ) -> Option<FieldCoordinate> {
        self.unsafe_cartesian_coordinate(pivot, camera, point, own_pose)
            .map(|position| FieldCoordinate::new(position, heading))
    }

    // ── Field → image ───────────────────────────────────────────────────────

    /// Where a field target appears in camera `camera`, in percent space.
    ///
    /// Absent when `own_pose` is unknown; otherwise unbounded.
    pub fn project_field(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        let relative = own_pose?.relative_coordinate(target);
        Some(self.project(pivot, camera, relative))
    }

    /// [`Engine::project_field`] in pixels of `resolution`.  Unbounded.
    pub fn field_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.project_field(pivot, camera, target, own_pose)
            .map(|projection| projection.pixel_coordinate(resolution))
    }

    /// [`Engine::field_image_coordinate`], absent as well when the pixel is
    /// outside the image.
    pub fn bounded_field_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.field_image_coordinate(pivot, camera, target, own_pose, resolution)?
            .bounded()
    }

    /// [`Engine::project_field`] passed through the tolerance-gated clamp.
    ///
    /// Absent only when `own_pose` is unknown.  With a tolerance the result
    /// may still lie outside `[-1, 1]`.
    pub fn clamped_project_field(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.project_field(pivot, camera, target, own_pose)
            .map(|projection| projection.clamped_with_tolerance(tolerance))
    }

    /// [`Engine::project_field`] clamped within `tolerance`; absent when the
    /// pose is unknown or the target lies beyond the band.
    pub fn within_tolerance_project_field(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PercentCoordinate>> {
        self.project_field(pivot, camera, target, own_pose)?
            .within_tolerance(tolerance)
    }

    /// [`Engine::field_image_coordinate`] passed through the tolerance-gated
    /// clamp.  Absent only when `own_pose` is unknown.
    pub fn clamped_field_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
        tolerance: Option<f32>,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.field_image_coordinate(pivot, camera, target, own_pose, resolution)
            .map(|pixel| pixel.clamped_with_tolerance(tolerance))
    }

    pub fn within_tolerance_field_image_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
        resolution: Resolution,
        tolerance: f32,
    ) -> Option<CameraCoordinate<PixelCoordinate>> {
        self.field_image_coordinate(pivot, camera, target, own_pose, resolution)?
            .within_tolerance(tolerance)
    }

    /// Can camera `camera` see a field target?  Absent when `own_pose` is
    /// unknown.
    pub fn can_see_field(
        &self,
        pivot: &CameraPivot,
        camera: usize,
        target: &impl FieldTarget,
        own_pose: Option<&FieldCoordinate>,
    ) -> Option<bool> {
        let relative = own_pose?.relative_coordinate(target);
        Some(self.can_see(pivot, camera, relative))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
