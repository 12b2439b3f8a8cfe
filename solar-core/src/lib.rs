//! Core library for the `solar` CLI.
//!
//! This crate defines:
//! - Configuration handling (server URL, default power rating)
//! - Region bounds & the single-selection location picker
//! - Shared domain models (requests, responses)
//! - The prediction service client
//!
//! It is used by `solar-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod picker;
pub mod region;
pub mod service;

pub use config::{Config, DEFAULT_SERVER_URL};
pub use model::{Coordinate, PredictionEntry, PredictionRequest, PredictionResponse};
pub use picker::LocationPicker;
pub use region::{ACCEPT_BOUNDS, Bounds, PAN_BOUNDS, VIEW_CENTER};
pub use service::{HttpPredictClient, PredictionService, service_from_config};
