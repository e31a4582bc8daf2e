//! API Layer
//!
//! Browser-side calls to the Cardio Guard REST API.

mod client;

pub use client::*;
