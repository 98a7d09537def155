//! Polling endpoint the dashboard refreshes itself from.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use statusboard_app::ports::LocationRepository;
use statusboard_domain::location::{Location, StatusColor};
use statusboard_domain::time::to_wire;

use crate::error::ApiError;
use crate::state::AppState;

/// One location as served to pollers.
#[derive(Debug, Serialize)]
pub struct StatusRecord {
    pub id: i64,
    pub name: String,
    pub status_color: StatusColor,
    /// `YYYY-MM-DD HH:MM:SS`, UTC.
    pub last_updated_time: String,
}

impl From<Location> for StatusRecord {
    fn from(location: Location) -> Self {
        Self {
            id: location.id.get(),
            name: location.name,
            status_color: location.status_color,
            last_updated_time: to_wire(location.last_updated_time),
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<StatusRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/status`
pub async fn list<LR>(State(state): State<AppState<LR>>) -> Result<ListResponse, ApiError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.list_locations().await?;
    let records = locations.into_iter().map(StatusRecord::from).collect();
    Ok(ListResponse::Ok(Json(records)))
}

#[cfg(test)]
mod tests {
    use crate::router;
    use crate::test_support::{body_string, get, seeded_state};
    use axum::http::{StatusCode, header};
    use statusboard_domain::id::LocationId;
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_list_every_location_as_json() {
        let app = router::build(seeded_state().await);

        let response = app.oneshot(get("/api/status")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 6);
        assert_eq!(records[0]["id"], 1);
        assert_eq!(records[0]["name"], "Canteen Corner Booths");
        assert_eq!(records[0]["status_color"], "Yellow");
    }

    #[tokio::test]
    async fn should_format_timestamp_without_timezone_suffix() {
        let app = router::build(seeded_state().await);

        let response = app.oneshot(get("/api/status")).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        let ts = body[0]["last_updated_time"].as_str().unwrap();
        assert_eq!(ts.len(), "YYYY-MM-DD HH:MM:SS".len());
        assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[tokio::test]
    async fn should_reflect_status_changes_immediately() {
        let state = seeded_state().await;
        state
            .location_service
            .update_status(LocationId::new(4), "Red")
            .await
            .unwrap();
        let app = router::build(state);

        let response = app.oneshot(get("/api/status")).await.unwrap();

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body[3]["id"], 4);
        assert_eq!(body[3]["status_color"], "Red");
    }
}
