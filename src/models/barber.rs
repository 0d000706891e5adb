// src/models/barber.rs
// DOCUMENTATION: Barber data structures
// PURPOSE: Barber records and the summary embedded in salon responses

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Barber record from the barbers table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Barber {
    pub id: i64,
    /// Owning salon
    pub salon_id: i64,
    pub name: String,
    pub specialty: Option<String>,
}

/// Public summary of a barber, attached to salon listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarberSummary {
    pub id: i64,
    pub name: String,
    pub specialty: Option<String>,
}

impl Barber {
    pub fn to_summary(&self) -> BarberSummary {
        BarberSummary {
            id: self.id,
            name: self.name.clone(),
            specialty: self.specialty.clone(),
        }
    }
}
