//! Public dashboard: every location with its status and age.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use statusboard_app::ports::LocationRepository;
use statusboard_domain::time::now;

use super::{LocationRow, render};
use crate::error::PageError;
use crate::state::AppState;

/// Dashboard page template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    poll_seconds: u32,
    rows: Vec<LocationRow>,
}

/// `GET /`: public, read-only overview.
///
/// # Errors
///
/// Returns [`PageError`] when the store is unreachable or rendering fails.
pub async fn index<LR>(State(state): State<AppState<LR>>) -> Result<Html<String>, PageError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.list_locations().await?;

    render(&DashboardTemplate {
        poll_seconds: state.poll_seconds,
        rows: LocationRow::all(&locations, now()),
    })
}
