//! `striker-runtime` – the NAO V5 perception robot.
//!
//! Ties the geometry of `striker-perception` to a snapshot source from
//! `striker-hal` and exposes the result as one [`NaoV5`] value.
//!
//! # Modules
//!
//! - [`robot`] – [`NaoV5`]: the two-camera robot, its
//!   [`update`][robot::NaoV5::update] cycle and every capability trait.
//! - [`config`] – [`RobotConfig`][config::RobotConfig]: calibration and
//!   snapshot location persisted in `~/.striker/robot.toml`, with
//!   `STRIKER_*` environment overrides.
//! - [`telemetry`] – [`init_tracing`][telemetry::init_tracing]:
//!   initialises the global `tracing` subscriber.
//!
//! # Update model
//!
//! The state is replaced only by [`NaoV5::update`], which takes `&mut self`.
//! Queries take `&self`, so the borrow checker keeps reads and updates from
//! overlapping.  Share a robot across threads behind a lock.

pub mod config;
pub mod robot;
pub mod telemetry;

pub use config::RobotConfig;
pub use robot::{BOTTOM_CAMERA_INDEX, CAMERA_COUNT, NaoCamera, NaoV5, TOP_CAMERA_INDEX};
