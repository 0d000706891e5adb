// src/db/barber_repository.rs
// DOCUMENTATION: Barber database operations
// PURPOSE: Fetch the barbers attached to a salon

use crate::errors::SalonsError;
use crate::models::Barber;
use sqlx::PgPool;

pub struct BarberRepository;

impl BarberRepository {
    /// Get barbers for a salon
    /// DOCUMENTATION: Ordered by id so listings are stable between requests
    pub async fn list_by_salon(pool: &PgPool, salon_id: i64) -> Result<Vec<Barber>, SalonsError> {
        sqlx::query_as::<_, Barber>(
            r#"
            SELECT id, salon_id, name, specialty
            FROM barbers
            WHERE salon_id = $1
            ORDER BY id
            "#,
        )
        .bind(salon_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch barbers for salon {}: {}", salon_id, e);
            SalonsError::DatabaseError(e.to_string())
        })
    }
}
