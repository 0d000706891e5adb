// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod barber;
pub mod salon;

pub use barber::*;
pub use salon::*;
