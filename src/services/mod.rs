// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod geo;
pub mod salon_service;

pub use salon_service::*;
