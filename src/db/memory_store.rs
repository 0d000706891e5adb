// src/db/memory_store.rs
// DOCUMENTATION: In-memory SalonStore for tests
// PURPOSE: Exercise the service and handlers without PostgreSQL

use crate::db::SalonStore;
use crate::errors::SalonsError;
use crate::models::{Barber, LocationFilter, Salon};
use async_trait::async_trait;
use chrono::Utc;

/// Vec-backed store; `fail_with` makes every query return that error
#[derive(Default)]
pub struct InMemorySalonStore {
    pub salons: Vec<Salon>,
    pub barbers: Vec<Barber>,
    pub fail_with: Option<SalonsError>,
}

impl InMemorySalonStore {
    pub fn new(salons: Vec<Salon>, barbers: Vec<Barber>) -> Self {
        Self {
            salons,
            barbers,
            fail_with: None,
        }
    }

    pub fn failing(error: SalonsError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), SalonsError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SalonStore for InMemorySalonStore {
    async fn list_approved_salons(&self, filter: &LocationFilter) -> Result<Vec<Salon>, SalonsError> {
        self.check()?;
        let mut salons: Vec<Salon> = self
            .salons
            .iter()
            .filter(|s| s.is_approved && matches(filter, s))
            .cloned()
            .collect();
        salons.sort_by_key(|s| s.id);
        Ok(salons)
    }

    async fn get_salon(&self, id: i64) -> Result<Option<Salon>, SalonsError> {
        self.check()?;
        Ok(self.salons.iter().find(|s| s.id == id).cloned())
    }

    async fn list_barbers(&self, salon_id: i64) -> Result<Vec<Barber>, SalonsError> {
        self.check()?;
        let mut barbers: Vec<Barber> = self
            .barbers
            .iter()
            .filter(|b| b.salon_id == salon_id)
            .cloned()
            .collect();
        barbers.sort_by_key(|b| b.id);
        Ok(barbers)
    }
}

/// Case-insensitive substring match of both filters, mirroring ILIKE '%value%'
/// A salon with no city never matches a city filter (same for country)
fn matches(filter: &LocationFilter, salon: &Salon) -> bool {
    fn contains(field: Option<&str>, needle: Option<&str>) -> bool {
        match needle {
            None => true,
            Some(needle) => field
                .map(|f| f.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
        }
    }

    contains(salon.city.as_deref(), filter.city.as_deref())
        && contains(salon.country.as_deref(), filter.country.as_deref())
}

/// Test fixture: a salon at the given position
pub fn salon(id: i64, lat: Option<f64>, lon: Option<f64>, approved: bool) -> Salon {
    Salon {
        id,
        name: format!("Salon {}", id),
        description: None,
        address: None,
        city: None,
        country: None,
        latitude: lat,
        longitude: lon,
        phone: None,
        email: None,
        is_approved: approved,
        created_at: Utc::now(),
    }
}

/// Test fixture: a salon with city and country set
pub fn salon_in(id: i64, city: &str, country: &str, approved: bool) -> Salon {
    Salon {
        city: Some(city.to_string()),
        country: Some(country.to_string()),
        ..salon(id, Some(30.0), Some(31.2), approved)
    }
}

pub fn barber(id: i64, salon_id: i64, name: &str, specialty: Option<&str>) -> Barber {
    Barber {
        id,
        salon_id,
        name: name.to_string(),
        specialty: specialty.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(city: Option<&str>, country: Option<&str>) -> LocationFilter {
        LocationFilter {
            city: city.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn test_city_filter_is_case_insensitive_substring() {
        let cairo = filter(Some("Cairo"), None);

        assert!(matches(&cairo, &salon_in(1, "Cairo", "Egypt", true)));
        assert!(matches(&cairo, &salon_in(2, "New Cairo", "Egypt", true)));
        assert!(matches(&cairo, &salon_in(3, "CAIRO", "Egypt", true)));
        assert!(!matches(&cairo, &salon_in(4, "Giza", "Egypt", true)));
        assert!(!matches(&cairo, &salon(5, None, None, true)));
    }

    #[test]
    fn test_city_and_country_combine() {
        let both = filter(Some("alex"), Some("egypt"));

        assert!(matches(&both, &salon_in(1, "Alexandria", "Egypt", true)));
        assert!(!matches(&both, &salon_in(2, "Alexandria", "USA", true)));
        assert!(!matches(&both, &salon_in(3, "Cairo", "Egypt", true)));
        assert!(matches(&filter(None, None), &salon(4, None, None, true)));
    }

    #[tokio::test]
    async fn test_list_approved_hides_unapproved_and_sorts() {
        let store = InMemorySalonStore::new(
            vec![
                salon(3, None, None, true),
                salon(1, None, None, false),
                salon(2, None, None, true),
            ],
            vec![],
        );

        let salons = store
            .list_approved_salons(&LocationFilter::default())
            .await
            .unwrap();
        let ids: Vec<i64> = salons.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
