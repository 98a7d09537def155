//! # statusboard-domain
//!
//! Pure domain model for the statusboard service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Locations** (named spots tagged with a traffic-light status)
//! - Define **Status colors** (`Green`, `Yellow`, `Red`) and their parsing rules
//! - Format the human-friendly age of a status ("5 minutes ago")
//! - Provide the fixed **seed data** inserted on first start
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod age;
pub mod location;
pub mod seed;
