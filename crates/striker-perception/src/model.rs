//! The camera projection model the engine delegates to.
//!
//! The trigonometry that relates an image point to a point on the ground
//! (field of view, pitch, yaw, mounting height) belongs to the projection
//! library of the target platform.  This crate only consumes it through the
//! [`CameraModel`] trait; [`sim::FlatGroundModel`][crate::sim::FlatGroundModel]
//! is a stand-in for headless tests.

use striker_types::{Camera, CameraPivot, PercentCoordinate, RelativeCoordinate};

/// Projection functions for a camera mounted on a pivot.
///
/// Every method receives the pivot and the camera already resolved from the
/// pivot's camera list; index validation happens before the model is called.
pub trait CameraModel: Send + Sync {
    /// Project an image point onto the ground.
    ///
    /// Only meaningful when [`CameraModel::is_ground_point`] holds for
    /// `point`.  Otherwise the implied distance is clamped to the largest
    /// value the model can represent instead of failing; callers that care
    /// must check the point first.
    fn relative_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: &Camera,
        point: PercentCoordinate,
    ) -> RelativeCoordinate;

    /// The inverse of [`CameraModel::relative_coordinate`].
    ///
    /// The result is not bounded: objects outside the field of view produce
    /// components outside `[-1, 1]`.
    fn percent_coordinate(
        &self,
        pivot: &CameraPivot,
        camera: &Camera,
        object: RelativeCoordinate,
    ) -> PercentCoordinate;

    /// Does the ray through `point` hit the ground?
    fn is_ground_point(&self, pivot: &CameraPivot, camera: &Camera, point: PercentCoordinate)
    -> bool;

    /// Does `object` fall inside the camera's field of view?
    fn is_visible(&self, pivot: &CameraPivot, camera: &Camera, object: RelativeCoordinate) -> bool;
}
