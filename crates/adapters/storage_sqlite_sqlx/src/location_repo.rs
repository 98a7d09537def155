//! `SQLite` implementation of [`LocationRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use statusboard_app::ports::LocationRepository;
use statusboard_domain::error::StatusBoardError;
use statusboard_domain::id::LocationId;
use statusboard_domain::location::{Location, NewLocation, StatusColor};
use statusboard_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Location);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Location> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let status_color: String = row.try_get("status_color")?;
        let last_updated_time: String = row.try_get("last_updated_time")?;

        let status_color: StatusColor = status_color
            .parse()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let last_updated_time = chrono::DateTime::parse_from_rfc3339(&last_updated_time)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .to_utc();

        Ok(Self(Location {
            id: LocationId::new(id),
            name,
            status_color,
            last_updated_time,
        }))
    }
}

const SELECT_ALL: &str = "SELECT * FROM locations ORDER BY id ASC";
const SELECT_BY_ID: &str = "SELECT * FROM locations WHERE id = ?";
const COUNT: &str = "SELECT COUNT(*) FROM locations";

const UPDATE_STATUS: &str = r"
    UPDATE locations
    SET status_color = ?, last_updated_time = ?
    WHERE id = ?
    RETURNING *
";

const INSERT_OR_SKIP: &str = r"
    INSERT INTO locations (name, status_color, last_updated_time)
    VALUES (?, ?, ?)
    ON CONFLICT (name) DO NOTHING
";

/// `SQLite`-backed location repository.
pub struct SqliteLocationRepository {
    pool: SqlitePool,
}

impl SqliteLocationRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LocationRepository for SqliteLocationRepository {
    async fn list(&self) -> Result<Vec<Location>, StatusBoardError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn get_by_id(&self, id: LocationId) -> Result<Option<Location>, StatusBoardError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn set_status(
        &self,
        id: LocationId,
        color: StatusColor,
        at: Timestamp,
    ) -> Result<Option<Location>, StatusBoardError> {
        let row: Option<Wrapper> = sqlx::query_as(UPDATE_STATUS)
            .bind(color.as_str())
            .bind(at.to_rfc3339())
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn seed_if_empty(&self, rows: Vec<NewLocation>) -> Result<usize, StatusBoardError> {
        for row in &rows {
            row.validate()?;
        }

        let mut tx = self.pool.begin().await.map_err(StorageError::from)?;

        let (existing,): (i64,) = sqlx::query_as(COUNT)
            .fetch_one(&mut *tx)
            .await
            .map_err(StorageError::from)?;
        if existing > 0 {
            return Ok(0);
        }

        let mut inserted = 0;
        for row in rows {
            let result = sqlx::query(INSERT_OR_SKIP)
                .bind(&row.name)
                .bind(row.status_color.as_str())
                .bind(row.last_updated_time.to_rfc3339())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::debug!(name = %row.name, "skipping seed row with duplicate name");
            } else {
                inserted += 1;
            }
        }

        tx.commit().await.map_err(StorageError::from)?;

        Ok(inserted)
    }
}
