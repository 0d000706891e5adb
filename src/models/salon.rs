// src/models/salon.rs
// DOCUMENTATION: Core data structures for salons
// PURPOSE: Database records, request DTOs and response envelopes for salon endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::BarberSummary;

/// Represents a complete salon record from the database
/// DOCUMENTATION: Maps directly to the salons table
/// Coordinates are nullable: salons registered without a pin never show up in proximity results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Salon {
    pub id: i64,

    pub name: String,

    pub description: Option<String>,

    /// Street address as entered by the salon owner
    pub address: Option<String>,

    pub city: Option<String>,

    pub country: Option<String>,

    /// Decimal degrees, WGS84
    pub latitude: Option<f64>,

    /// Decimal degrees, WGS84
    pub longitude: Option<f64>,

    pub phone: Option<String>,

    pub email: Option<String>,

    /// Set by the moderation workflow; only approved salons are publicly visible
    pub is_approved: bool,

    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/salons/nearby
/// DOCUMENTATION: Coordinates are optional at the type level so a missing
/// field surfaces as a validation error instead of a decode failure
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    /// Search radius in kilometers
    #[validate(range(min = 0.0))]
    pub radius: Option<f64>,
}

/// City / country filter for listing queries
/// DOCUMENTATION: Parsed from the query string of GET /api/salons/by_city
/// and echoed back in the response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl LocationFilter {
    /// Trim both filters and drop empty ones, so `?city=` behaves like no filter
    pub fn normalized(self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        LocationFilter {
            city: clean(self.city),
            country: clean(self.country),
        }
    }
}

/// Salon annotated with its distance from the searching user
/// DOCUMENTATION: Ephemeral view returned by the nearby search, never persisted
#[derive(Debug, Clone, Serialize)]
pub struct NearbySalon {
    #[serde(flatten)]
    pub salon: Salon,

    /// Kilometers, rounded to 2 decimals
    pub distance: f64,
}

/// Salon with the summaries of the barbers working there
#[derive(Debug, Clone, Serialize)]
pub struct SalonWithBarbers {
    #[serde(flatten)]
    pub salon: Salon,

    pub barbers: Vec<BarberSummary>,
}

/// Response for POST /api/salons/nearby
#[derive(Debug, Serialize)]
pub struct NearbySalonsResponse {
    pub salons: Vec<NearbySalon>,
    pub total_count: usize,
    /// Radius actually applied, after defaulting
    pub search_radius: f64,
}

/// Response for GET /api/salons/all and GET /api/salons/by_city
#[derive(Debug, Serialize)]
pub struct SalonListResponse {
    pub salons: Vec<SalonWithBarbers>,
    pub total_count: usize,

    /// Filters used, only present for the by_city listing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<LocationFilter>,
}

/// Response for GET /api/salons/{salon_id}
#[derive(Debug, Serialize)]
pub struct SalonDetailResponse {
    pub salon: SalonWithBarbers,
}
