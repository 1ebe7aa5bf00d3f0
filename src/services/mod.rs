// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod geometry;
pub mod proximity_service;

pub use proximity_service::*;
