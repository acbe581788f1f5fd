//! Coordinate value types shared by every layer of the perception stack.
//!
//! Image space comes in three flavours:
//!
//! - [`PixelCoordinate`] – integer pixels, origin at the top-left corner.
//! - [`CenteredPixelCoordinate`] – integer pixels, origin at the image center.
//! - [`PercentCoordinate`] – resolution independent, each axis in `[-1, 1]`.
//!
//! The y axis grows downward in all three.  [`CameraCoordinate`] tags any of
//! them with the index of the camera that produced it.
//!
//! Robot and field space:
//!
//! - [`RelativeCoordinate`] – bearing + distance from the robot torso.
//! - [`CartesianCoordinate`] – absolute `(x, y)` on the field.
//! - [`FieldCoordinate`] – a cartesian position plus a heading (a pose).
//!
//! Distances are metres and angles radians; bearings are counter-clockwise
//! positive, i.e. objects to the left of the robot have a positive bearing.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Image space
// ────────────────────────────────────────────────────────────────────────────

/// The resolution of a camera image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels left of the center pixel, i.e. `floor((width - 1) / 2)`.
    fn half_width_floor(self) -> i32 {
        (self.width.saturating_sub(1) / 2) as i32
    }

    fn half_height_floor(self) -> i32 {
        (self.height.saturating_sub(1) / 2) as i32
    }
}

/// Anything that names a point in an image and can be expressed as a
/// [`PercentCoordinate`].
pub trait ImagePoint {
    fn percent_coordinate(&self) -> PercentCoordinate;
}

/// A pixel with its origin at the top-left corner of the image.
///
/// In-bounds values are `0..=width-1` and `0..=height-1`.  Values outside
/// that range are representable so that projections of off-image objects can
/// be inspected and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelCoordinate {
    pub x: i32,
    pub y: i32,
    pub resolution: Resolution,
}

impl PixelCoordinate {
    pub fn new(x: i32, y: i32, resolution: Resolution) -> Self {
        Self { x, y, resolution }
    }

    /// Re-express this pixel with its origin at the image center.
    pub fn centered(&self) -> CenteredPixelCoordinate {
        CenteredPixelCoordinate {
            x: self.x.saturating_sub(self.resolution.half_width_floor()),
            y: self.y.saturating_sub(self.resolution.half_height_floor()),
            resolution: self.resolution,
        }
    }
}

impl ImagePoint for PixelCoordinate {
    fn percent_coordinate(&self) -> PercentCoordinate {
        PercentCoordinate::new(
            pixel_to_percent(self.x, self.resolution.width),
            pixel_to_percent(self.y, self.resolution.height),
        )
    }
}

/// A pixel with its origin at the center of the image.
///
/// In-bounds values are `-floor((width-1)/2)..=ceil((width-1)/2)` (and the
/// same for the height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CenteredPixelCoordinate {
    pub x: i32,
    pub y: i32,
    pub resolution: Resolution,
}

impl CenteredPixelCoordinate {
    pub fn new(x: i32, y: i32, resolution: Resolution) -> Self {
        Self { x, y, resolution }
    }

    /// Re-express this pixel with its origin at the top-left corner.
    pub fn pixel_coordinate(&self) -> PixelCoordinate {
        PixelCoordinate {
            x: self.x.saturating_add(self.resolution.half_width_floor()),
            y: self.y.saturating_add(self.resolution.half_height_floor()),
            resolution: self.resolution,
        }
    }
}

impl ImagePoint for CenteredPixelCoordinate {
    fn percent_coordinate(&self) -> PercentCoordinate {
        self.pixel_coordinate().percent_coordinate()
    }
}

/// A resolution independent point in an image.
///
/// `(-1, -1)` is the top-left corner, `(1, 1)` the bottom-right corner and
/// `(0, 0)` the center.  Projections of off-image objects produce components
/// outside `[-1, 1]`; use [`PercentCoordinate::is_within_bounds`] or the
/// clamping policy before treating such a value as a real image position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentCoordinate {
    pub x: f32,
    pub y: f32,
}

impl PercentCoordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `true` when both components lie in `[-1, 1]`.
    pub fn is_within_bounds(&self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }

    /// Convert to a top-left pixel, rounding to the nearest pixel.
    ///
    /// Non-finite components land far outside the image; NaN on the
    /// negative side.
    pub fn pixel_coordinate(&self, resolution: Resolution) -> PixelCoordinate {
        PixelCoordinate {
            x: percent_to_pixel(self.x, resolution.width),
            y: percent_to_pixel(self.y, resolution.height),
            resolution,
        }
    }

    /// Convert to a centered pixel, rounding to the nearest pixel.
    pub fn centered_pixel_coordinate(&self, resolution: Resolution) -> CenteredPixelCoordinate {
        self.pixel_coordinate(resolution).centered()
    }
}

impl ImagePoint for PercentCoordinate {
    fn percent_coordinate(&self) -> PercentCoordinate {
        *self
    }
}

fn pixel_to_percent(pixel: i32, dimension: u32) -> f32 {
    if dimension <= 1 {
        return 0.0;
    }
    2.0 * pixel as f32 / (dimension - 1) as f32 - 1.0
}

/// Furthest from the origin a converted pixel is placed.
const PIXEL_LIMIT: f32 = (i32::MAX / 2) as f32;

/// Infinite percents saturate at [`PIXEL_LIMIT`]; NaN maps to the negative
/// limit, so a point without a position never passes a bounds check.
fn percent_to_pixel(percent: f32, dimension: u32) -> i32 {
    if percent.is_nan() {
        return -PIXEL_LIMIT as i32;
    }
    if dimension <= 1 {
        return 0;
    }
    ((percent + 1.0) * (dimension - 1) as f32 / 2.0)
        .round()
        .clamp(-PIXEL_LIMIT, PIXEL_LIMIT) as i32
}

/// An image point annotated with the index of the camera that produced it.
///
/// The index carries no geometry of its own; it names an entry in a
/// [`CameraPivot`][crate::CameraPivot]'s camera list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CameraCoordinate<P = PixelCoordinate> {
    pub camera: usize,
    pub point: P,
}

impl<P> CameraCoordinate<P> {
    pub fn new(camera: usize, point: P) -> Self {
        Self { camera, point }
    }
}

impl CameraCoordinate<PercentCoordinate> {
    /// Convert the point to a top-left pixel of `resolution`, keeping the camera.
    pub fn pixel_coordinate(&self, resolution: Resolution) -> CameraCoordinate<PixelCoordinate> {
        CameraCoordinate::new(self.camera, self.point.pixel_coordinate(resolution))
    }

    /// Convert the point to a centered pixel of `resolution`, keeping the camera.
    pub fn centered_pixel_coordinate(
        &self,
        resolution: Resolution,
    ) -> CameraCoordinate<CenteredPixelCoordinate> {
        CameraCoordinate::new(self.camera, self.point.centered_pixel_coordinate(resolution))
    }
}

impl<P: ImagePoint> ImagePoint for CameraCoordinate<P> {
    fn percent_coordinate(&self) -> PercentCoordinate {
        self.point.percent_coordinate()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Robot and field space
// ────────────────────────────────────────────────────────────────────────────

/// The position of an object relative to the robot torso.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelativeCoordinate {
    /// Bearing of the object, counter-clockwise from straight ahead (radians).
    pub direction: f32,
    /// Distance to the object along the ground (metres).
    pub distance: f32,
}

impl RelativeCoordinate {
    pub fn new(direction: f32, distance: f32) -> Self {
        Self { direction, distance }
    }
}

/// An absolute position on the field (metres).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CartesianCoordinate {
    pub x: f32,
    pub y: f32,
}

impl CartesianCoordinate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An absolute pose on the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldCoordinate {
    pub position: CartesianCoordinate,
    /// Heading, counter-clockwise from the field +X axis (radians).
    pub heading: f32,
}

impl FieldCoordinate {
    pub fn new(position: CartesianCoordinate, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Absolute position of an object seen at `coord` from this pose.
    pub fn cartesian_coordinate(&self, coord: RelativeCoordinate) -> CartesianCoordinate {
        let angle = self.heading + coord.direction;
        CartesianCoordinate::new(
            self.position.x + coord.distance * angle.cos(),
            self.position.y + coord.distance * angle.sin(),
        )
    }

    /// Pose of an object seen at `coord` from this pose, facing `heading`.
    pub fn field_coordinate(&self, coord: RelativeCoordinate, heading: f32) -> FieldCoordinate {
        FieldCoordinate::new(self.cartesian_coordinate(coord), heading)
    }

    /// Where `target` lies relative to this pose.
    pub fn relative_coordinate(&self, target: &impl FieldTarget) -> RelativeCoordinate {
        let target = target.field_position();
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        RelativeCoordinate::new(normalize_angle(dy.atan2(dx) - self.heading), dx.hypot(dy))
    }
}

/// Something with an absolute position on the field.
pub trait FieldTarget {
    fn field_position(&self) -> CartesianCoordinate;
}

impl FieldTarget for CartesianCoordinate {
    fn field_position(&self) -> CartesianCoordinate {
        *self
    }
}

impl FieldTarget for FieldCoordinate {
    fn field_position(&self) -> CartesianCoordinate {
        self.position
    }
}

/// Wrap an angle into `(-π, π]`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI { wrapped + 2.0 * PI } else { wrapped }
}

/// A pitch/yaw/roll orientation (radians).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// The pose of the ball on the field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BallPosition {
    pub position: CartesianCoordinate,
    pub orientation: Orientation,
}

impl FieldTarget for BallPosition {
    fn field_position(&self) -> CartesianCoordinate {
        self.position
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn vga() -> Resolution {
        Resolution::new(640, 480)
    }

    // ── Image space ─────────────────────────────────────────────────────────

    #[test]
    fn pixel_corners_map_to_percent_corners() {
        let top_left = PixelCoordinate::new(0, 0, vga()).percent_coordinate();
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y + 1.0).abs() < 1e-6);

        let bottom_right = PixelCoordinate::new(639, 479, vga()).percent_coordinate();
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn pixel_percent_round_trip_is_exact() {
        let res = vga();
        for x in (0..640).step_by(7) {
            for y in (0..480).step_by(11) {
                let p = PixelCoordinate::new(x, y, res);
                assert_eq!(p.percent_coordinate().pixel_coordinate(res), p);
            }
        }
    }

    #[test]
    fn percent_to_pixel_is_stable_on_second_application() {
        let res = vga();
        let once = PercentCoordinate::new(0.123, -0.777).pixel_coordinate(res);
        let twice = once.percent_coordinate().pixel_coordinate(res);
        assert_eq!(once, twice);
    }

    #[test]
    fn centered_frame_edges_follow_floor_and_ceil() {
        let res = Resolution::new(101, 100);
        let min = PixelCoordinate::new(0, 0, res).centered();
        let max = PixelCoordinate::new(100, 99, res).centered();
        assert_eq!((min.x, min.y), (-50, -49));
        assert_eq!((max.x, max.y), (50, 50));
    }

    #[test]
    fn centered_round_trip() {
        let res = Resolution::new(320, 240);
        let c = CenteredPixelCoordinate::new(-12, 40, res);
        assert_eq!(c.pixel_coordinate().centered(), c);
    }

    #[test]
    fn degenerate_resolution_maps_to_origin() {
        let res = Resolution::new(1, 0);
        let p = PixelCoordinate::new(0, 0, res).percent_coordinate();
        assert_eq!(p, PercentCoordinate::new(0.0, 0.0));
        assert_eq!(PercentCoordinate::new(0.5, 0.5).pixel_coordinate(res).x, 0);
    }

    #[test]
    fn percent_bounds_check() {
        assert!(PercentCoordinate::new(1.0, -1.0).is_within_bounds());
        assert!(!PercentCoordinate::new(1.01, 0.0).is_within_bounds());
        assert!(!PercentCoordinate::new(0.0, -1.5).is_within_bounds());
    }

    #[test]
    fn camera_coordinate_delegates_to_point() {
        let p = PixelCoordinate::new(0, 479, vga());
        let c = CameraCoordinate::new(1, p);
        assert_eq!(c.percent_coordinate(), p.percent_coordinate());
    }

    #[test]
    fn camera_percent_coordinate_converts_with_its_camera() {
        let c = CameraCoordinate::new(1, PercentCoordinate::new(1.0, -1.0));
        let px = c.pixel_coordinate(vga());
        assert_eq!(px.camera, 1);
        assert_eq!((px.point.x, px.point.y), (639, 0));
        let centered = c.centered_pixel_coordinate(vga());
        assert_eq!((centered.point.x, centered.point.y), (320, -239));
    }

    // ── Field space ─────────────────────────────────────────────────────────

    #[test]
    fn cartesian_from_relative_respects_heading() {
        let pose = FieldCoordinate::new(CartesianCoordinate::new(1.0, 1.0), FRAC_PI_2);
        let c = pose.cartesian_coordinate(RelativeCoordinate::new(0.0, 2.0));
        assert!((c.x - 1.0).abs() < 1e-5, "x={}", c.x);
        assert!((c.y - 3.0).abs() < 1e-5, "y={}", c.y);
    }

    #[test]
    fn relative_from_cartesian_is_inverse() {
        let pose = FieldCoordinate::new(CartesianCoordinate::new(-2.0, 0.5), 0.3);
        let rel = RelativeCoordinate::new(-0.8, 1.7);
        let target = pose.cartesian_coordinate(rel);
        let back = pose.relative_coordinate(&target);
        assert!((back.direction - rel.direction).abs() < 1e-5);
        assert!((back.distance - rel.distance).abs() < 1e-5);
    }

    #[test]
    fn relative_to_object_behind_wraps_bearing() {
        let pose = FieldCoordinate::new(CartesianCoordinate::new(0.0, 0.0), 0.0);
        let rel = pose.relative_coordinate(&CartesianCoordinate::new(-1.0, -0.001));
        assert!(rel.direction < -3.0 && rel.direction > -PI);
    }

    #[test]
    fn normalize_angle_range() {
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!((normalize_angle(2.0 * PI)).abs() < 1e-5);
    }

    #[test]
    fn non_finite_percent_lands_off_image() {
        let res = vga();
        let nan = PercentCoordinate::new(f32::NAN, 0.0).pixel_coordinate(res);
        assert!(nan.x < 0);
        assert_eq!(nan.y, 240);
        let inf = PercentCoordinate::new(f32::INFINITY, f32::NEG_INFINITY).pixel_coordinate(res);
        assert!(inf.x > 639);
        assert!(inf.y < 0);
        // frame shift must not overflow
        let centered = inf.centered();
        assert!(centered.x > 320 && centered.y < -239);
        assert!(PercentCoordinate::new(f32::NAN, 0.0).centered_pixel_coordinate(res).x < -319);
        let degenerate =
            PercentCoordinate::new(f32::NAN, 0.0).pixel_coordinate(Resolution::new(1, 1));
        assert!(degenerate.x < 0);
    }
}
