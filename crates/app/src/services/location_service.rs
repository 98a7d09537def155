//! Location service: read the board, change a status, and seed the store.

use statusboard_domain::error::{NotFoundError, StatusBoardError};
use statusboard_domain::id::LocationId;
use statusboard_domain::location::{Location, StatusColor};
use statusboard_domain::seed;
use statusboard_domain::time::now;

use crate::ports::LocationRepository;

/// Application service for reading and updating location statuses.
pub struct LocationService<R> {
    repo: R,
}

impl<R: LocationRepository> LocationService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List every location, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_locations(&self) -> Result<Vec<Location>, StatusBoardError> {
        self.repo.list().await
    }

    /// Look up a location by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBoardError::NotFound`] when no location with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_location(&self, id: LocationId) -> Result<Location, StatusBoardError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Set the status of a location from its textual color and stamp the
    /// current time.
    ///
    /// The color is checked before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBoardError::Validation`] when `color` is not one of
    /// `Green`, `Yellow`, `Red`, [`StatusBoardError::NotFound`] when the
    /// location does not exist, or a storage error from the repository.
    pub async fn update_status(
        &self,
        id: LocationId,
        color: &str,
    ) -> Result<Location, StatusBoardError> {
        let color: StatusColor = color.parse()?;
        match self.repo.set_status(id, color, now()).await? {
            Some(location) => {
                tracing::info!(location_id = %id, name = %location.name, %color, "status updated");
                Ok(location)
            }
            None => {
                tracing::warn!(location_id = %id, %color, "status update for unknown location");
                Err(not_found(id))
            }
        }
    }

    /// Insert the fixed seed list if the store is empty.
    ///
    /// Returns how many locations were inserted; zero on every start after
    /// the first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn seed_defaults(&self) -> Result<usize, StatusBoardError> {
        let inserted = self
            .repo
            .seed_if_empty(seed::initial_locations(now()))
            .await?;
        if inserted > 0 {
            tracing::info!(inserted, "seeded initial locations");
        }
        Ok(inserted)
    }
}

fn not_found(id: LocationId) -> StatusBoardError {
    NotFoundError {
        entity: "Location",
        id: id.to_string(),
    }
    .into()
}
