// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

#[cfg(test)]
pub mod fixture;
pub mod repository;

pub use repository::*;
