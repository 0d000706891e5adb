// src/services/salon_service.rs
// DOCUMENTATION: Business logic for salon search
// PURPOSE: Proximity ranking, location filtering and barber enrichment between handlers and the store

use crate::db::SalonStore;
use crate::errors::SalonsError;
use crate::models::{
    LocationFilter, NearbyRequest, NearbySalon, NearbySalonsResponse, Salon, SalonDetailResponse,
    SalonListResponse, SalonWithBarbers,
};
use crate::services::geo::{distance_km, round_km};
use geo_types::Point;
use validator::Validate;

pub struct SalonService;

impl SalonService {
    /// Approved salons within `radius` km of the user, nearest first
    /// DOCUMENTATION: Radius falls back to `default_radius_km`; no barber enrichment
    pub async fn find_nearby<S: SalonStore + ?Sized>(
        store: &S,
        req: NearbyRequest,
        default_radius_km: f64,
    ) -> Result<NearbySalonsResponse, SalonsError> {
        let (lat, lon) = match (req.latitude, req.longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                return Err(SalonsError::ValidationError(
                    "User location (latitude and longitude) is required".to_string(),
                ))
            }
        };

        req.validate()
            .map_err(|e| SalonsError::ValidationError(e.to_string()))?;

        let radius = req.radius.unwrap_or(default_radius_km);
        let salons = store
            .list_approved_salons(&LocationFilter::default())
            .await?;
        let candidates = salons.len();

        let nearby = Self::rank_by_distance(Point::new(lon, lat), salons, radius)?;

        log::info!(
            "Nearby search at ({:.4}, {:.4}) within {} km: {} of {} approved salons",
            lat,
            lon,
            radius,
            nearby.len(),
            candidates
        );

        Ok(NearbySalonsResponse {
            total_count: nearby.len(),
            salons: nearby,
            search_radius: radius,
        })
    }

    /// Keep approved, positioned salons within `radius_km` of `origin`,
    /// annotated with their rounded distance and sorted nearest first
    /// DOCUMENTATION: The sort is stable, so equal distances keep store order
    pub fn rank_by_distance(
        origin: Point<f64>,
        salons: Vec<Salon>,
        radius_km: f64,
    ) -> Result<Vec<NearbySalon>, SalonsError> {
        let mut nearby = Vec::new();

        for salon in salons.into_iter().filter(|s| s.is_approved) {
            let distance = distance_km(
                Some(origin.y()),
                Some(origin.x()),
                salon.latitude,
                salon.longitude,
            );

            // Infinite means a coordinate is missing
            if distance.is_infinite() {
                continue;
            }
            if distance.is_nan() {
                log::error!("Salon {} has unusable coordinates", salon.id);
                return Err(SalonsError::InternalError(format!(
                    "Salon {} has invalid coordinates",
                    salon.id
                )));
            }

            if distance <= radius_km {
                nearby.push(NearbySalon {
                    salon,
                    distance: round_km(distance),
                });
            }
        }

        nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(nearby)
    }

    /// Approved salons filtered by city and/or country, with their barbers
    pub async fn find_by_location<S: SalonStore + ?Sized>(
        store: &S,
        filter: LocationFilter,
    ) -> Result<SalonListResponse, SalonsError> {
        let filter = filter.normalized();
        let salons = store.list_approved_salons(&filter).await?;
        let salons = Self::with_barbers_all(store, salons).await?;

        log::debug!(
            "Location search (city: {:?}, country: {:?}) returned {} salons",
            filter.city,
            filter.country,
            salons.len()
        );

        Ok(SalonListResponse {
            total_count: salons.len(),
            salons,
            filters: Some(filter),
        })
    }

    /// Every approved salon with its barbers
    pub async fn list_all<S: SalonStore + ?Sized>(
        store: &S,
    ) -> Result<SalonListResponse, SalonsError> {
        let salons = store
            .list_approved_salons(&LocationFilter::default())
            .await?;
        let salons = Self::with_barbers_all(store, salons).await?;

        Ok(SalonListResponse {
            total_count: salons.len(),
            salons,
            filters: None,
        })
    }

    /// One approved salon with its barbers
    /// DOCUMENTATION: Unknown ids are NotFound; unapproved salons are Forbidden
    pub async fn get_by_id<S: SalonStore + ?Sized>(
        store: &S,
        id: i64,
    ) -> Result<SalonDetailResponse, SalonsError> {
        let salon = store.get_salon(id).await?.ok_or_else(|| {
            log::warn!("Salon not found: {}", id);
            SalonsError::NotFound(id.to_string())
        })?;

        if !salon.is_approved {
            log::warn!("Refusing to expose unapproved salon: {}", id);
            return Err(SalonsError::Forbidden("Salon is not approved".to_string()));
        }

        Ok(SalonDetailResponse {
            salon: Self::with_barbers(store, salon).await?,
        })
    }

    async fn with_barbers<S: SalonStore + ?Sized>(
        store: &S,
        salon: Salon,
    ) -> Result<SalonWithBarbers, SalonsError> {
        let barbers = store.list_barbers(salon.id).await?;
        Ok(SalonWithBarbers {
            barbers: barbers.iter().map(|b| b.to_summary()).collect(),
            salon,
        })
    }

    async fn with_barbers_all<S: SalonStore + ?Sized>(
        store: &S,
        salons: Vec<Salon>,
    ) -> Result<Vec<SalonWithBarbers>, SalonsError> {
        let mut enriched = Vec::with_capacity(salons.len());
        for salon in salons {
            enriched.push(Self::with_barbers(store, salon).await?);
        }
        Ok(enriched)
    }
}
