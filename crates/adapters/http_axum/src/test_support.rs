//! In-memory fixtures shared by the handler tests.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Mutex;

use axum::body::Body;
use axum::http::{Request, Response, header};
use chrono::Duration;
use http_body_util::BodyExt;

use statusboard_app::ports::LocationRepository;
use statusboard_app::services::location_service::LocationService;
use statusboard_app::services::reporter_gate::ReporterGate;
use statusboard_domain::error::StatusBoardError;
use statusboard_domain::id::LocationId;
use statusboard_domain::location::{Location, NewLocation, StatusColor};
use statusboard_domain::time::Timestamp;

use crate::session::SessionKeys;
use crate::state::AppState;

pub const PASSWORD: &str = "letmein";

#[derive(Default)]
pub struct InMemoryLocationRepo {
    store: Mutex<BTreeMap<LocationId, Location>>,
}

impl LocationRepository for InMemoryLocationRepo {
    fn list(&self) -> impl Future<Output = Result<Vec<Location>, StatusBoardError>> + Send {
        let store = self.store.lock().unwrap();
        let result: Vec<Location> = store.values().cloned().collect();
        async { Ok(result) }
    }

    fn get_by_id(
        &self,
        id: LocationId,
    ) -> impl Future<Output = Result<Option<Location>, StatusBoardError>> + Send {
        let store = self.store.lock().unwrap();
        let result = store.get(&id).cloned();
        async { Ok(result) }
    }

    fn set_status(
        &self,
        id: LocationId,
        color: StatusColor,
        at: Timestamp,
    ) -> impl Future<Output = Result<Option<Location>, StatusBoardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result = store.get_mut(&id).map(|location| {
            location.set_status(color, at);
            location.clone()
        });
        async { Ok(result) }
    }

    fn seed_if_empty(
        &self,
        rows: Vec<NewLocation>,
    ) -> impl Future<Output = Result<usize, StatusBoardError>> + Send {
        let mut store = self.store.lock().unwrap();
        let mut inserted = 0;
        if store.is_empty() {
            for (index, row) in rows.into_iter().enumerate() {
                let id = LocationId::new(i64::try_from(index).unwrap() + 1);
                store.insert(id, row.with_id(id));
                inserted += 1;
            }
        }
        async move { Ok(inserted) }
    }
}

/// State over a seeded in-memory store.
pub async fn seeded_state() -> AppState<InMemoryLocationRepo> {
    let service = LocationService::new(InMemoryLocationRepo::default());
    service.seed_defaults().await.unwrap();
    AppState::new(
        service,
        ReporterGate::new(PASSWORD),
        SessionKeys::new(b"test-secret", Duration::hours(1), false),
    )
}

/// `Cookie` header value carrying a valid reporter session.
pub fn reporter_cookie(state: &AppState<InMemoryLocationRepo>) -> String {
    let token = state.sessions.issue().unwrap();
    format!("{}={token}", crate::session::COOKIE_NAME)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location_header(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}
