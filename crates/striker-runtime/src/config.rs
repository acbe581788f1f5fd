//! Robot configuration – reads/writes `~/.striker/robot.toml`.
//!
//! Angles are stored in degrees on disk and converted to radians when the
//! cameras are built.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use striker_hal::kinematics::{
    ApproximateHeadKinematics, NAO_V5_H_FOV_DEG, NAO_V5_PIVOT_HEIGHT, NAO_V5_V_FOV_DEG,
};
use striker_types::{Camera, StrikerError};
use tracing::info;

use crate::robot::CAMERA_COUNT;

/// Calibration of one camera as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Height above the pivot (metres).
    pub height: f32,
    /// Downward tilt relative to the pivot (degrees).
    pub v_direction_deg: f32,
    /// Forward offset from the pivot (metres).
    pub center_offset: f32,
    #[serde(default = "default_h_fov_deg")]
    pub h_fov_deg: f32,
    #[serde(default = "default_v_fov_deg")]
    pub v_fov_deg: f32,
}

impl CameraConfig {
    pub fn camera(&self) -> Camera {
        Camera {
            height: self.height,
            v_direction: self.v_direction_deg.to_radians(),
            center_offset: self.center_offset,
            h_fov: self.h_fov_deg.to_radians(),
            v_fov: self.v_fov_deg.to_radians(),
        }
    }
}

/// Persisted robot configuration stored in `~/.striker/robot.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Height of the neck above the ground (metres).
    #[serde(default = "default_pivot_height")]
    pub pivot_height: f32,

    /// Camera calibration, top camera first.
    #[serde(default = "default_cameras")]
    pub cameras: Vec<CameraConfig>,

    /// JSON snapshot file to read the robot state from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

fn default_pivot_height() -> f32 {
    NAO_V5_PIVOT_HEIGHT
}
fn default_h_fov_deg() -> f32 {
    NAO_V5_H_FOV_DEG
}
fn default_v_fov_deg() -> f32 {
    NAO_V5_V_FOV_DEG
}
fn default_cameras() -> Vec<CameraConfig> {
    vec![
        CameraConfig {
            height: 0.06364,
            v_direction_deg: 1.2,
            center_offset: 0.05871,
            h_fov_deg: NAO_V5_H_FOV_DEG,
            v_fov_deg: NAO_V5_V_FOV_DEG,
        },
        CameraConfig {
            height: 0.01774,
            v_direction_deg: 39.7,
            center_offset: 0.05071,
            h_fov_deg: NAO_V5_H_FOV_DEG,
            v_fov_deg: NAO_V5_V_FOV_DEG,
        },
    ]
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            pivot_height: default_pivot_height(),
            cameras: default_cameras(),
            snapshot_path: None,
        }
    }
}

impl RobotConfig {
    /// Check the configuration against the platform.
    pub fn validate(&self) -> Result<(), String> {
        if self.cameras.len() != CAMERA_COUNT {
            return Err(format!(
                "expected {CAMERA_COUNT} cameras, found {}",
                self.cameras.len()
            ));
        }
        for (index, camera) in self.cameras.iter().enumerate() {
            if !(camera.h_fov_deg > 0.0 && camera.v_fov_deg > 0.0) {
                return Err(format!("camera {index} has a non-positive field of view"));
            }
        }
        if !(self.pivot_height > 0.0) {
            return Err(format!("pivot_height must be positive, got {}", self.pivot_height));
        }
        Ok(())
    }

    /// Head kinematics for the configured pivot height and cameras.
    pub fn head_kinematics(&self) -> ApproximateHeadKinematics {
        ApproximateHeadKinematics::new(
            self.pivot_height,
            self.cameras.iter().map(CameraConfig::camera).collect(),
        )
    }
}

/// Return the path to `~/.striker/robot.toml`.
pub fn config_path() -> PathBuf {
    config_path_for_home(
        &std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string()),
    )
}

/// Build the config path relative to the given home directory.
pub(crate) fn config_path_for_home(home: &str) -> PathBuf {
    PathBuf::from(home).join(".striker").join("robot.toml")
}

fn config_error(path: &Path, details: impl Into<String>) -> StrikerError {
    StrikerError::Config {
        path: path.display().to_string(),
        details: details.into(),
    }
}

/// Load the config from disk.  Returns `None` if the file does not exist.
pub fn load() -> Result<Option<RobotConfig>, StrikerError> {
    load_from(&config_path())
}

/// Load the config from a specific path, apply environment overrides and
/// validate the result.
pub fn load_from(path: &Path) -> Result<Option<RobotConfig>, StrikerError> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path).map_err(|e| config_error(path, e.to_string()))?;
    let mut cfg: RobotConfig =
        toml::from_str(&raw).map_err(|e| config_error(path, format!("parse failed: {e}")))?;
    apply_env_overrides(&mut cfg);
    cfg.validate().map_err(|details| config_error(path, details))?;
    info!(
        path = %path.display(),
        cameras = cfg.cameras.len(),
        pivot_height = cfg.pivot_height,
        "robot config loaded"
    );
    Ok(Some(cfg))
}

/// Apply `STRIKER_*` environment variable overrides to `cfg`.
///
/// | Variable | Config field |
/// |---|---|
/// | `STRIKER_PIVOT_HEIGHT` | `pivot_height` |
/// | `STRIKER_SNAPSHOT_PATH` | `snapshot_path` |
pub fn apply_env_overrides(cfg: &mut RobotConfig) {
    if let Ok(v) = std::env::var("STRIKER_PIVOT_HEIGHT")
        && let Ok(height) = v.parse::<f32>()
    {
        cfg.pivot_height = height;
    }
    if let Ok(v) = std::env::var("STRIKER_SNAPSHOT_PATH") {
        cfg.snapshot_path = Some(PathBuf::from(v));
    }
}

/// Save the config to disk, creating `~/.striker/` if necessary.
pub fn save(cfg: &RobotConfig) -> Result<(), StrikerError> {
    save_to(cfg, &config_path())
}

/// Save the config to a specific path.
pub fn save_to(cfg: &RobotConfig, path: &Path) -> Result<(), StrikerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| config_error(path, format!("failed to create directory: {e}")))?;
    }
    let raw = toml::to_string_pretty(cfg).map_err(|e| StrikerError::Serialization(e.to_string()))?;
    fs::write(path, raw).map_err(|e| config_error(path, format!("write failed: {e}")))
}
