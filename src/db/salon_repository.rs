// src/db/salon_repository.rs
// DOCUMENTATION: Database access layer for salons
// PURPOSE: SQL queries against the salons table

use crate::errors::SalonsError;
use crate::models::{LocationFilter, Salon};
use sqlx::PgPool;

const SALON_COLUMNS: &str = r#"
    id, name, description, address, city, country,
    latitude, longitude, phone, email, is_approved, created_at
"#;

/// SalonRepository: read operations for salons
/// DOCUMENTATION: Filters are bound as parameters, never interpolated
pub struct SalonRepository;

impl SalonRepository {
    /// List approved salons, optionally filtered by city and/or country
    /// DOCUMENTATION: Used by the nearby, by_city and all endpoints
    /// Filters are case-insensitive substring matches (ILIKE '%value%')
    pub async fn list_approved(
        pool: &PgPool,
        filter: &LocationFilter,
    ) -> Result<Vec<Salon>, SalonsError> {
        let sql = format!(
            r#"
            SELECT {}
            FROM salons
            WHERE is_approved = true
              AND ($1::text IS NULL OR city ILIKE $1 ESCAPE '\')
              AND ($2::text IS NULL OR country ILIKE $2 ESCAPE '\')
            ORDER BY id
            "#,
            SALON_COLUMNS
        );

        let city_pattern = filter.city.as_deref().map(contains_pattern);
        let country_pattern = filter.country.as_deref().map(contains_pattern);

        log::debug!(
            "Listing approved salons (city: {:?}, country: {:?})",
            filter.city,
            filter.country
        );

        let salons = sqlx::query_as::<_, Salon>(&sql)
            .bind(city_pattern)
            .bind(country_pattern)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list approved salons: {}", e);
                SalonsError::DatabaseError(e.to_string())
            })?;

        Ok(salons)
    }

    /// Retrieve a salon by ID regardless of approval state
    /// DOCUMENTATION: The caller decides whether an unapproved salon may be shown
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Salon>, SalonsError> {
        let sql = format!("SELECT {} FROM salons WHERE id = $1", SALON_COLUMNS);

        sqlx::query_as::<_, Salon>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching salon {}: {}", id, e);
                SalonsError::DatabaseError(e.to_string())
            })
    }
}

/// Build an ILIKE pattern matching `value` anywhere, with LIKE wildcards in
/// `value` escaped so they match literally
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("Cairo"), "%Cairo%");
        assert_eq!(contains_pattern("New Cairo"), "%New Cairo%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\x"), "%c:\\\\x%");
    }
}
