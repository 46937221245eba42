use sqlx::SqlitePool;

use crate::models::City;

/// Persistence gateway for the `city` table.
///
/// Thin equality-filtered select/insert/update/delete statements; no
/// transactions span more than one statement, so callers interleave
/// freely at every `.await`.
#[derive(Clone)]
pub struct CityService {
    pool: SqlitePool,
}

impl CityService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All rows in storage order.
    pub async fn list(&self) -> Result<Vec<City>, sqlx::Error> {
        sqlx::query_as::<_, City>("SELECT ID, Name, CountryCode, District, Population FROM city")
            .fetch_all(&self.pool)
            .await
    }

    /// The ID the next created city should get: one past the ID of the
    /// last row in storage order.
    ///
    /// Errors with `RowNotFound` on an empty table, which the create
    /// route reports as its generic 500. The read is not serialised
    /// against concurrent creates, so two racing requests can compute
    /// the same ID; the schema does not enforce uniqueness, so they both
    /// land. Known, inherited limitation.
    pub async fn next_id(&self) -> Result<i64, sqlx::Error> {
        let rows = self.list().await?;
        let last = rows.last().ok_or(sqlx::Error::RowNotFound)?;
        Ok(last.id + 1)
    }

    pub async fn insert(&self, city: &City) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO city (ID, Name, CountryCode, District, Population) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(city.id)
        .bind(&city.name)
        .bind(&city.country_code)
        .bind(&city.district)
        .bind(city.population)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Every row carrying the given ID. IDs are only unique by
    /// convention, so this returns a collection, as the API always did.
    pub async fn find_by_id(&self, id: i64) -> Result<Vec<City>, sqlx::Error> {
        sqlx::query_as::<_, City>(
            "SELECT ID, Name, CountryCode, District, Population FROM city WHERE ID = ?",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
    }

    /// First row matching the name exactly, if any. Duplicate names are
    /// not disambiguated.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<City>, sqlx::Error> {
        sqlx::query_as::<_, City>(
            "SELECT ID, Name, CountryCode, District, Population FROM city WHERE Name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
    }

    /// Set the population of every row matching the ID. Returns the
    /// number of rows touched.
    pub async fn update_population(&self, id: i64, population: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE city SET Population = ? WHERE ID = ?")
            .bind(population)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Remove every row matching the ID. Returns the number of rows
    /// deleted.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM city WHERE ID = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
