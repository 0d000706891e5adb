// src/db/store.rs
// DOCUMENTATION: Persistence seam used by the salon service
// PURPOSE: Read-only queries the service needs, independent of the backing database

use crate::db::{BarberRepository, SalonRepository};
use crate::errors::SalonsError;
use crate::models::{Barber, LocationFilter, Salon};
use async_trait::async_trait;
use sqlx::PgPool;

/// Read access to salons and barbers
/// DOCUMENTATION: Implementations own their concurrency safety; the service
/// shares one instance across all workers as `web::Data<dyn SalonStore>`
#[async_trait]
pub trait SalonStore: Send + Sync {
    /// Approved salons matching the filter, ordered by id
    async fn list_approved_salons(&self, filter: &LocationFilter) -> Result<Vec<Salon>, SalonsError>;

    /// Any salon by id, approved or not
    async fn get_salon(&self, id: i64) -> Result<Option<Salon>, SalonsError>;

    /// Barbers of one salon, ordered by id
    async fn list_barbers(&self, salon_id: i64) -> Result<Vec<Barber>, SalonsError>;
}

/// PostgreSQL implementation of `SalonStore`
pub struct PgSalonStore {
    pool: PgPool,
}

impl PgSalonStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalonStore for PgSalonStore {
    async fn list_approved_salons(&self, filter: &LocationFilter) -> Result<Vec<Salon>, SalonsError> {
        SalonRepository::list_approved(&self.pool, filter).await
    }

    async fn get_salon(&self, id: i64) -> Result<Option<Salon>, SalonsError> {
        SalonRepository::find_by_id(&self.pool, id).await
    }

    async fn list_barbers(&self, salon_id: i64) -> Result<Vec<Barber>, SalonsError> {
        BarberRepository::list_by_salon(&self.pool, salon_id).await
    }
}
