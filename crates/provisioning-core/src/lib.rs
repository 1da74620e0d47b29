//! Shared building blocks for the provisioning service: tracing setup,
//! request-id middleware, health checks and the JSON Patch utility.

pub mod health;
pub mod middleware;
pub mod patch;
pub mod tracing;
