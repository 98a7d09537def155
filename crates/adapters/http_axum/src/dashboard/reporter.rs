//! Reporter pages: login, status update, logout.

use askama::Template;
use axum::extract::{Form, Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use statusboard_app::ports::LocationRepository;
use statusboard_domain::id::LocationId;
use statusboard_domain::location::StatusColor;
use statusboard_domain::time::now;

use super::{LocationRow, render};
use crate::error::PageError;
use crate::session::{CurrentRole, LOGIN_PATH, Reporter, Role};
use crate::state::AppState;

const INVALID_PASSWORD: &str = "Invalid Password";

/// Password form.
#[derive(Template)]
#[template(path = "reporter_login.html")]
pub struct LoginTemplate {
    error: Option<&'static str>,
}

/// Update form listing every location with one link per color.
#[derive(Template)]
#[template(path = "reporter_update.html")]
pub struct UpdateTemplate {
    colors: [&'static str; 3],
    rows: Vec<LocationRow>,
}

/// Form data posted by the login page.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

async fn update_page<LR>(state: &AppState<LR>) -> Result<Response, PageError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    let locations = state.location_service.list_locations().await?;
    let page = render(&UpdateTemplate {
        colors: StatusColor::ALL.map(StatusColor::as_str),
        rows: LocationRow::all(&locations, now()),
    })?;
    Ok(page.into_response())
}

fn login_page(error: Option<&'static str>) -> Result<Response, PageError> {
    Ok(render(&LoginTemplate { error })?.into_response())
}

/// `GET /reporter`: password form, or the update form for reporters.
pub async fn show<LR>(
    State(state): State<AppState<LR>>,
    CurrentRole(role): CurrentRole,
) -> Result<Response, PageError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    match role {
        Role::Reporter => update_page(&state).await,
        Role::Anonymous => login_page(None),
    }
}

/// `POST /reporter`: check the shared password and open a session.
pub async fn login<LR>(
    State(state): State<AppState<LR>>,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    if !state.reporter_gate.authenticate(&form.password) {
        return login_page(Some(INVALID_PASSWORD));
    }

    let token = state.sessions.issue()?;
    let cookie = state.sessions.login_cookie(&token);
    let page = update_page(&state).await?;

    Ok(([(header::SET_COOKIE, cookie)], page).into_response())
}

/// `GET /update/{location_id}/{color}`: change a status, then return to
/// the update form.
pub async fn update_status<LR>(
    _reporter: Reporter,
    State(state): State<AppState<LR>>,
    Path((location_id, color)): Path<(i64, String)>,
) -> Result<Redirect, PageError>
where
    LR: LocationRepository + Send + Sync + 'static,
{
    state
        .location_service
        .update_status(LocationId::new(location_id), &color)
        .await?;

    Ok(Redirect::to(LOGIN_PATH))
}

/// `GET /logout`: drop the session and go back to the public dashboard.
pub async fn logout<LR>(State(state): State<AppState<LR>>) -> Response
where
    LR: LocationRepository + Send + Sync + 'static,
{
    let cookie = state.sessions.logout_cookie();
    ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
}
