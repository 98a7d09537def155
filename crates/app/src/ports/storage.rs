//! Storage port: repository trait for location persistence.

use std::future::Future;

use statusboard_domain::error::StatusBoardError;
use statusboard_domain::id::LocationId;
use statusboard_domain::location::{Location, NewLocation, StatusColor};
use statusboard_domain::time::Timestamp;

/// Repository for persisting and querying [`Location`]s.
pub trait LocationRepository {
    /// Every location, ordered by id ascending.
    fn list(&self) -> impl Future<Output = Result<Vec<Location>, StatusBoardError>> + Send;

    /// Get a location by its identifier.
    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, StatusBoardError>> + Send;

    /// Overwrite the status of a location and stamp it with `at`.
    ///
    /// Returns `None` without touching anything when `id` does not exist.
    fn set_status(
        &self,
        id: LocationId,
        color: StatusColor,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<Location>, StatusBoardError>> + Send;

    /// Insert `rows` when the store holds no location at all.
    ///
    /// Rows whose name is already taken are skipped rather than failing the
    /// batch. Returns how many rows were inserted.
    fn seed_if_empty(
        &self,
        rows: Vec<NewLocation>,
    ) -> impl Future<Output = Result<usize, StatusBoardError>> + Send;
}

impl<T: LocationRepository + Send + Sync> LocationRepository for std::sync::Arc<T> {
    fn list(&self) -> impl Future<Output = Result<Vec<Location>, StatusBoardError>> + Send {
        (**self).list()
    }

    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, StatusBoardError>> + Send {
        (**self).get_by_id(id)
    }

    fn set_status(
        &self,
        id: LocationId,
        color: StatusColor,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<Location>, StatusBoardError>> + Send {
        (**self).set_status(id, color, at)
    }

    fn seed_if_empty(
        &self,
        rows: Vec<NewLocation>,
    ) -> impl Future<Output = Result<usize, StatusBoardError>> + Send {
        (**self).seed_if_empty(rows)
    }
}
