//! Shared library for Aggie Spots Lambda functions.
//!
//! This crate provides the availability data models, the backend-to-UI
//! normalization transform, and common utilities used across the route Lambdas.

pub mod config;
pub mod error;
pub mod http;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
pub use http::{error_response, json_response, ErrorResponse};
pub use models::{normalize, Building, RawBuilding, RawRoom, RawSlot, Room, Slot};
