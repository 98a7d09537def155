//! # statusboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **public dashboard** (`GET /`) rendered server-side with askama
//! - Serve the **polling endpoint** (`GET /api/status`) the dashboard script
//!   refreshes itself from
//! - Serve the **reporter pages** (`/reporter`, `/update/{id}/{color}`,
//!   `/logout`) behind the shared-password gate
//! - Carry the reporter role in a signed session cookie
//! - Map application results into HTTP responses (JSON, HTML, or redirects)
//!
//! ## Reporter flow
//! - `GET /reporter` shows the password form, or the update form once the
//!   session holds the reporter role.
//! - Each color link on the update form is a plain `GET` that redirects back
//!   to `/reporter`, so reporters can keep clicking through locations.
//! - Requests without the reporter role never reach the write service; they
//!   are redirected to `/reporter`.
//!
//! ## Dependency rule
//! Depends on `statusboard-app` (for port traits and services) and
//! `statusboard-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod session;
pub mod state;

#[cfg(test)]
mod test_support;
