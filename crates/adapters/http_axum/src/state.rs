//! Shared application state for axum handlers.

use std::sync::Arc;

use statusboard_app::ports::LocationRepository;
use statusboard_app::services::location_service::LocationService;
use statusboard_app::services::reporter_gate::ReporterGate;

use crate::session::SessionKeys;

/// Default interval, in seconds, between two dashboard polls.
pub const DEFAULT_POLL_SECONDS: u32 = 10;

/// Application state shared across all axum handlers.
///
/// Generic over the location repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<LR> {
    /// Read and write use-cases over locations.
    pub location_service: Arc<LocationService<LR>>,
    /// Shared-password check for the reporter role.
    pub reporter_gate: Arc<ReporterGate>,
    /// Signing keys and cookie settings for reporter sessions.
    pub sessions: Arc<SessionKeys>,
    /// How often the dashboard page polls `/api/status`.
    pub poll_seconds: u32,
}

impl<LR> Clone for AppState<LR> {
    fn clone(&self) -> Self {
        Self {
            location_service: Arc::clone(&self.location_service),
            reporter_gate: Arc::clone(&self.reporter_gate),
            sessions: Arc::clone(&self.sessions),
            poll_seconds: self.poll_seconds,
        }
    }
}

impl<LR> AppState<LR>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        location_service: LocationService<LR>,
        reporter_gate: ReporterGate,
        sessions: SessionKeys,
    ) -> Self {
        Self {
            location_service: Arc::new(location_service),
            reporter_gate: Arc::new(reporter_gate),
            sessions: Arc::new(sessions),
            poll_seconds: DEFAULT_POLL_SECONDS,
        }
    }

    /// Override the dashboard polling interval.
    #[must_use]
    pub fn with_poll_seconds(mut self, poll_seconds: u32) -> Self {
        self.poll_seconds = poll_seconds;
        self
    }
}
