// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod geometry;
pub mod health;

pub use geometry::config as geometry_config;
pub use geometry::json_config;
pub use health::config as health_config;
