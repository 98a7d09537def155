//! # statusboard-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `LocationRepository`: list, look up, restamp, and seed locations
//! - Define **driving/inbound ports** as use-case structs:
//!   - `LocationService`: read the board, change a status, seed the store
//!   - `ReporterGate`: check the shared reporter password
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `statusboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
