use sqlx::SqlitePool;

use crate::services::CityService;

#[derive(Clone)]
pub struct AppState {
    pub city_service: CityService,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            city_service: CityService::new(pool.clone()),
            pool,
        }
    }
}
