// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod salons;

pub use health::config as health_config;
pub use salons::config as salons_config;
