//! Server-side rendered HTML pages: the public dashboard and the reporter views.

pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod reporter;

use askama::Template;
use axum::Router;
use axum::response::Html;
use axum::routing::get;

use statusboard_app::ports::LocationRepository;
use statusboard_domain::age::relative_age;
use statusboard_domain::location::{Location, StatusColor};
use statusboard_domain::time::{Timestamp, to_wire};

use crate::error::PageError;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<LR>() -> Router<AppState<LR>>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<LR>))
        .route(
            "/reporter",
            get(reporter::show::<LR>).post(reporter::login::<LR>),
        )
        .route(
            "/update/{location_id}/{color}",
            get(reporter::update_status::<LR>),
        )
        .route("/logout", get(reporter::logout::<LR>))
}

/// A location prepared for display.
pub struct LocationRow {
    pub id: i64,
    pub name: String,
    pub color: &'static str,
    pub css_class: &'static str,
    pub age: String,
    pub updated_at: String,
}

impl LocationRow {
    fn new(location: &Location, now: Timestamp) -> Self {
        Self {
            id: location.id.get(),
            name: location.name.clone(),
            color: location.status_color.as_str(),
            css_class: css_class(location.status_color),
            age: relative_age(location.last_updated_time, now),
            updated_at: to_wire(location.last_updated_time),
        }
    }

    /// Rows for `locations`, ages measured against `now`.
    #[must_use]
    pub fn all(locations: &[Location], now: Timestamp) -> Vec<Self> {
        locations.iter().map(|loc| Self::new(loc, now)).collect()
    }
}

fn css_class(color: StatusColor) -> &'static str {
    match color {
        StatusColor::Green => "green",
        StatusColor::Yellow => "yellow",
        StatusColor::Red => "red",
    }
}

fn render(template: &impl Template) -> Result<Html<String>, PageError> {
    Ok(Html(template.render()?))
}
