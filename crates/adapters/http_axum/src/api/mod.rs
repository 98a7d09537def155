//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::routing::get;

use statusboard_app::ports::LocationRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<LR>() -> Router<AppState<LR>>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new().route("/status", get(status::list::<LR>))
}
