// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod barber_repository;
#[cfg(test)]
pub mod memory_store;
pub mod salon_repository;
pub mod store;

pub use barber_repository::*;
pub use salon_repository::*;
pub use store::*;
