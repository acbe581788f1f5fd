//! Clamping policy for projections that land outside the image.
//!
//! Each axis is handled independently against the edges of its frame:
//!
//! | Frame | x edges | y edges |
//! |---|---|---|
//! | [`PixelCoordinate`] | `0`, `width - 1` | `0`, `height - 1` |
//! | [`CenteredPixelCoordinate`] | `-floor((width-1)/2)`, `ceil((width-1)/2)` | same with `height` |
//! | [`PercentCoordinate`] | `-1`, `1` | `-1`, `1` |
//!
//! Three policies are offered through [`Clampable`]:
//!
//! - **always** ([`Clampable::clamped`]) – every out-of-bounds axis is moved to
//!   its nearest edge.  Never fails.
//! - **tolerance gated** ([`Clampable::clamped_with_tolerance`]) – with no
//!   tolerance this is the always policy.  With a tolerance `t`, an axis is
//!   moved to its edge only if it lies within `t * resolution` of that edge
//!   (`t` itself for percent coordinates):
//!   ```text
//!   x < xmin && x >= xmin - width * t   =>  x = xmin
//!   x > xmax && x <= xmax + width * t   =>  x = xmax
//!   ```
//!   Anything further out is returned unchanged, so the result may still be
//!   out of bounds and the caller has to check.
//! - **checked** ([`Clampable::within_tolerance`]) – the gated policy, but
//!   absent unless both axes end up in bounds.

use striker_types::{
    CameraCoordinate, CenteredPixelCoordinate, PercentCoordinate, PixelCoordinate, Resolution,
};

/// Image coordinates that know their own bounds.
pub trait Clampable: Copy {
    /// `true` when both axes lie within the frame's edges.
    fn is_within_bounds(&self) -> bool;

    /// Move out-of-bounds axes to the nearest edge if they lie within
    /// `tolerance` (a fraction of the resolution) of it.  `None` clamps
    /// unconditionally.
    fn clamped_with_tolerance(&self, tolerance: Option<f32>) -> Self;

    /// Move every out-of-bounds axis to its nearest edge.
    fn clamped(&self) -> Self {
        self.clamped_with_tolerance(None)
    }

    /// Clamp within `tolerance`, or `None` if the result is still out of
    /// bounds.
    fn within_tolerance(&self, tolerance: f32) -> Option<Self> {
        let clamped = self.clamped_with_tolerance(Some(tolerance));
        clamped.is_within_bounds().then_some(clamped)
    }

    /// `self` if it is already in bounds.
    fn bounded(&self) -> Option<Self> {
        self.is_within_bounds().then_some(*self)
    }
}

fn clamp_axis(value: f32, min: f32, max: f32, band: Option<f32>) -> f32 {
    let band = band.map(|b| b.max(0.0));
    if value < min {
        if band.is_none_or(|b| value >= min - b) { min } else { value }
    } else if value > max {
        if band.is_none_or(|b| value <= max + b) { max } else { value }
    } else {
        value
    }
}

fn clamp_pixel_axis(value: i32, min: i32, max: i32, band: Option<f32>) -> i32 {
    let band = band.map(|b| b.max(0.0));
    let v = value as f32;
    if value < min {
        if band.is_none_or(|b| v >= min as f32 - b) { min } else { value }
    } else if value > max {
        if band.is_none_or(|b| v <= max as f32 + b) { max } else { value }
    } else {
        value
    }
}

/// `(min, max)` edges of a top-left frame along one axis.
fn corner_edges(dimension: u32) -> (i32, i32) {
    (0, dimension.saturating_sub(1) as i32)
}

/// `(min, max)` edges of a centered frame along one axis.
fn centered_edges(dimension: u32) -> (i32, i32) {
    let span = dimension.saturating_sub(1);
    let below = span / 2;
    (-(below as i32), (span - below) as i32)
}

fn bands(resolution: Resolution, tolerance: Option<f32>) -> (Option<f32>, Option<f32>) {
    (
        tolerance.map(|t| t * resolution.width as f32),
        tolerance.map(|t| t * resolution.height as f32),
    )
}

impl Clampable for PixelCoordinate {
    fn is_within_bounds(&self) -> bool {
        let (xmin, xmax) = corner_edges(self.resolution.width);
        let (ymin, ymax) = corner_edges(self.resolution.height);
        (xmin..=xmax).contains(&self.x) && (ymin..=ymax).contains(&self.y)
    }

    fn clamped_with_tolerance(&self, tolerance: Option<f32>) -> Self {
        let (xmin, xmax) = corner_edges(self.resolution.width);
        let (ymin, ymax) = corner_edges(self.resolution.height);
        let (xband, yband) = bands(self.resolution, tolerance);
        PixelCoordinate::new(
            clamp_pixel_axis(self.x, xmin, xmax, xband),
            clamp_pixel_axis(self.y, ymin, ymax, yband),
            self.resolution,
        )
    }
}

impl Clampable for CenteredPixelCoordinate {
    fn is_within_bounds(&self) -> bool {
        let (xmin, xmax) = centered_edges(self.resolution.width);
        let (ymin, ymax) = centered_edges(self.resolution.height);
        (xmin..=xmax).contains(&self.x) && (ymin..=ymax).contains(&self.y)
    }

    fn clamped_with_tolerance(&self, tolerance: Option<f32>) -> Self {
        let (xmin, xmax) = centered_edges(self.resolution.width);
        let (ymin, ymax) = centered_edges(self.resolution.height);
        let (xband, yband) = bands(self.resolution, tolerance);
        CenteredPixelCoordinate::new(
            clamp_pixel_axis(self.x, xmin, xmax, xband),
            clamp_pixel_axis(self.y, ymin, ymax, yband),
            self.resolution,
        )
    }
}

impl Clampable for PercentCoordinate {
    fn is_within_bounds(&self) -> bool {
        PercentCoordinate::is_within_bounds(self)
    }

    fn clamped_with_tolerance(&self, tolerance: Option<f32>) -> Self {
        PercentCoordinate::new(
            clamp_axis(self.x, -1.0, 1.0, tolerance),
            clamp_axis(self.y, -1.0, 1.0, tolerance),
        )
    }
}

impl<P: Clampable> Clampable for CameraCoordinate<P> {
    fn is_within_bounds(&self) -> bool {
        self.point.is_within_bounds()
    }

    fn clamped_with_tolerance(&self, tolerance: Option<f32>) -> Self {
        CameraCoordinate::new(self.camera, self.point.clamped_with_tolerance(tolerance))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn centered(x: i32, y: i32) -> CenteredPixelCoordinate {
        CenteredPixelCoordinate::new(x, y, Resolution::new(101, 101))
    }

    // ── Centered frame ──────────────────────────────────────────────────────

    #[test]
    fn centered_within_tolerance_snaps_to_edge() {
        // width 101 => xmax = ceil(100 / 2) = 50, band = 101 * 0.1 = 10.1
        let c = centered(55, 0).clamped_with_tolerance(Some(0.1));
        assert_eq!(c.x, 50);
    }

    #[test]
    fn centered_beyond_tolerance_is_left_unchanged() {
        let c = centered(65, 0).clamped_with_tolerance(Some(0.1));
        assert_eq!(c.x, 65);
        assert!(!c.is_within_bounds());
    }

    #[test]
    fn centered_low_edge_uses_floor() {
        let res = Resolution::new(100, 100);
        // xmin = -floor(99 / 2) = -49, band = 10
        let c = CenteredPixelCoordinate::new(-59, -60, res).clamped_with_tolerance(Some(0.1));
        assert_eq!(c.x, -49);
        assert_eq!(c.y, -60);
    }

    #[test]
    fn centered_exact_band_edge_is_inclusive() {
        let res = Resolution::new(100, 100);
        // xmax = ceil(99 / 2) = 50, band = 100 * 0.1 = 10 => 60 still snaps
        let c = CenteredPixelCoordinate::new(60, 61, res).clamped_with_tolerance(Some(0.1));
        assert_eq!(c.x, 50);
        assert_eq!(c.y, 61);
    }

    // ── Resolution frame ────────────────────────────────────────────────────

    #[test]
    fn pixel_edges_are_zero_and_resolution_minus_one() {
        let res = Resolution::new(640, 480);
        let c = PixelCoordinate::new(700, -3, res).clamped();
        assert_eq!((c.x, c.y), (639, 0));
        assert!(c.is_within_bounds());
    }

    #[test]
    fn pixel_tolerance_gates_each_axis_independently() {
        let res = Resolution::new(100, 200);
        // x band = 10, y band = 20
        let c = PixelCoordinate::new(105, 230, res).clamped_with_tolerance(Some(0.1));
        assert_eq!(c.x, 99);
        assert_eq!(c.y, 230);
        assert!(c.within_tolerance(0.1).is_none());
        assert!(!c.is_within_bounds());

        let both = PixelCoordinate::new(-5, 215, res).within_tolerance(0.1).unwrap();
        assert_eq!((both.x, both.y), (0, 199));
    }

    #[test]
    fn no_tolerance_means_always_clamp() {
        let res = Resolution::new(100, 100);
        let far = PixelCoordinate::new(10_000, -10_000, res);
        assert_eq!(far.clamped_with_tolerance(None), far.clamped());
        assert!(far.clamped().is_within_bounds());
    }

    #[test]
    fn in_bounds_values_are_untouched() {
        let p = PixelCoordinate::new(12, 34, Resolution::new(100, 100));
        assert_eq!(p.clamped(), p);
        assert_eq!(p.clamped_with_tolerance(Some(0.0)), p);
        assert_eq!(p.bounded(), Some(p));
    }

    #[test]
    fn always_clamp_is_idempotent() {
        let res = Resolution::new(320, 240);
        for (x, y) in [(-400, 10), (500, 500), (3, -1), (319, 239)] {
            let once = PixelCoordinate::new(x, y, res).clamped();
            assert_eq!(once.clamped(), once);
            let once_c = CenteredPixelCoordinate::new(x, y, res).clamped();
            assert_eq!(once_c.clamped(), once_c);
        }
        let p = PercentCoordinate::new(3.0, -7.5).clamped();
        assert_eq!(p.clamped(), p);
    }

    // ── Percent frame ───────────────────────────────────────────────────────

    #[test]
    fn percent_within_tolerance_snaps_to_one() {
        let p = PercentCoordinate::new(1.05, 0.0).clamped_with_tolerance(Some(0.1));
        assert_eq!(p.x, 1.0);
    }

    #[test]
    fn percent_beyond_tolerance_is_left_unchanged() {
        let p = PercentCoordinate::new(1.2, 0.0).clamped_with_tolerance(Some(0.1));
        assert!((p.x - 1.2).abs() < 1e-6);
        assert!(PercentCoordinate::new(1.2, 0.0).within_tolerance(0.1).is_none());
    }

    #[test]
    fn percent_negative_edge() {
        let p = PercentCoordinate::new(-1.08, -1.5).clamped_with_tolerance(Some(0.1));
        assert_eq!(p.x, -1.0);
        assert!((p.y + 1.5).abs() < 1e-6);
    }

    #[test]
    fn negative_tolerance_behaves_like_zero() {
        let p = PercentCoordinate::new(1.01, 0.0).clamped_with_tolerance(Some(-0.5));
        assert!((p.x - 1.01).abs() < 1e-6);
    }

    #[test]
    fn camera_coordinate_keeps_its_camera() {
        let c = CameraCoordinate::new(1, PixelCoordinate::new(-1, 5, Resolution::new(10, 10)));
        let clamped = c.clamped();
        assert_eq!(clamped.camera, 1);
        assert_eq!(clamped.point.x, 0);
    }
}
