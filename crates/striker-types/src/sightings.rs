//! Per-camera object detections for one perception cycle.

use serde::{Deserialize, Deserializer, Serialize};

use crate::coordinates::{PixelCoordinate, RelativeCoordinate};

/// Maximum number of line sightings a single camera reports per cycle.
pub const MAX_LINE_SIGHTINGS: usize = 7;

/// An elliptical detection, e.g. the ball.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EllipseSighting {
    pub center_point: PixelCoordinate,
    /// Vertical radius (pixels).
    pub vertical_radius: u32,
    /// Horizontal radius (pixels).
    pub horizontal_radius: u32,
}

/// A quadrilateral detection, e.g. a goal post or a field line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectangleSighting {
    pub top_left_point: PixelCoordinate,
    pub top_right_point: PixelCoordinate,
    pub bottom_left_point: PixelCoordinate,
    pub bottom_right_point: PixelCoordinate,
}

/// A single straight edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSighting {
    pub left_or_bottom_point: PixelCoordinate,
    pub right_or_top_point: PixelCoordinate,
}

/// Two edges meeting at a corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerSighting {
    pub left_point: PixelCoordinate,
    pub corner_point: PixelCoordinate,
    pub right_point: PixelCoordinate,
}

/// Where the edge of the field meets the rest of the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "sighting")]
pub enum HorizonSighting {
    /// The whole image shows field; no horizon is visible.
    FieldOnly,
    /// The horizon is a single straight edge.
    Line(LineSighting),
    /// The horizon bends at a field corner.
    Corner(CornerSighting),
}

/// Everything one camera detected in one perception cycle.
///
/// Line sightings are capped at [`MAX_LINE_SIGHTINGS`]; anything beyond the
/// cap is dropped in input order, including when deserializing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SoccerSightings {
    pub ball: Option<EllipseSighting>,
    pub generic_goal_post: Option<RectangleSighting>,
    pub left_goal_post: Option<RectangleSighting>,
    pub right_goal_post: Option<RectangleSighting>,
    pub horizon: Option<HorizonSighting>,
    #[serde(deserialize_with = "deserialize_capped_lines")]
    lines: Vec<RectangleSighting>,
}

fn deserialize_capped_lines<'de, D>(deserializer: D) -> Result<Vec<RectangleSighting>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut lines = Vec::<RectangleSighting>::deserialize(deserializer)?;
    lines.truncate(MAX_LINE_SIGHTINGS);
    Ok(lines)
}

impl SoccerSightings {
    pub fn new(
        ball: Option<EllipseSighting>,
        generic_goal_post: Option<RectangleSighting>,
        left_goal_post: Option<RectangleSighting>,
        right_goal_post: Option<RectangleSighting>,
        horizon: Option<HorizonSighting>,
        lines: impl IntoIterator<Item = RectangleSighting>,
    ) -> Self {
        Self {
            ball,
            generic_goal_post,
            left_goal_post,
            right_goal_post,
            horizon,
            lines: lines.into_iter().take(MAX_LINE_SIGHTINGS).collect(),
        }
    }

    pub fn lines(&self) -> &[RectangleSighting] {
        &self.lines
    }

    /// Replace the line sightings, keeping at most [`MAX_LINE_SIGHTINGS`].
    pub fn set_lines(&mut self, lines: impl IntoIterator<Item = RectangleSighting>) {
        self.lines = lines.into_iter().take(MAX_LINE_SIGHTINGS).collect();
    }

    /// Every goal post sighting present, in generic/left/right order.
    pub fn goal_posts(&self) -> impl Iterator<Item = &RectangleSighting> {
        [
            self.generic_goal_post.as_ref(),
            self.left_goal_post.as_ref(),
            self.right_goal_post.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// A sighting together with the camera that reported it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sighted<T> {
    pub camera: usize,
    pub sighting: T,
}

/// Robot-relative locations of the soccer objects, as estimated upstream.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoccerObjectLocations {
    pub ball: Option<RelativeCoordinate>,
    pub left_goal_post: Option<RelativeCoordinate>,
    pub right_goal_post: Option<RelativeCoordinate>,
    pub goal: Option<RelativeCoordinate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Resolution;

    fn line(i: i32) -> RectangleSighting {
        let p = PixelCoordinate::new(i, i, Resolution::new(640, 480));
        RectangleSighting {
            top_left_point: p,
            top_right_point: p,
            bottom_left_point: p,
            bottom_right_point: p,
        }
    }

    #[test]
    fn lines_over_capacity_are_dropped_in_order() {
        let s = SoccerSightings::new(None, None, None, None, None, (0..10).map(line));
        assert_eq!(s.lines().len(), MAX_LINE_SIGHTINGS);
        for (i, l) in s.lines().iter().enumerate() {
            assert_eq!(l.top_left_point.x, i as i32);
        }
    }

    #[test]
    fn set_lines_respects_capacity() {
        let mut s = SoccerSightings::default();
        s.set_lines((0..3).map(line));
        assert_eq!(s.lines().len(), 3);
        s.set_lines((0..20).map(line));
        assert_eq!(s.lines().len(), MAX_LINE_SIGHTINGS);
    }

    #[test]
    fn deserialized_lines_are_capped() {
        let mut value = serde_json::to_value(SoccerSightings::default()).unwrap();
        let lines: Vec<RectangleSighting> = (0..10).map(line).collect();
        value["lines"] = serde_json::to_value(&lines).unwrap();

        let s: SoccerSightings = serde_json::from_value(value).unwrap();
        assert_eq!(s.lines().len(), MAX_LINE_SIGHTINGS);
        assert_eq!(s.lines(), &lines[..MAX_LINE_SIGHTINGS]);
    }

    #[test]
    fn goal_posts_skip_missing() {
        let s = SoccerSightings::new(None, None, Some(line(1)), Some(line(2)), None, []);
        let xs: Vec<i32> = s.goal_posts().map(|g| g.top_left_point.x).collect();
        assert_eq!(xs, vec![1, 2]);
    }

    #[test]
    fn horizon_serialization_is_tagged() {
        let h = HorizonSighting::Line(LineSighting::default());
        let json = serde_json::to_string(&h).unwrap();
        assert!(json.contains("\"kind\":\"Line\""));
        let back: HorizonSighting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn unknown_horizon_kind_is_rejected() {
        let err = serde_json::from_str::<HorizonSighting>(r#"{"kind":"Sky"}"#);
        assert!(err.is_err());
    }
}
