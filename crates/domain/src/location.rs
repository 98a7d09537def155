//! Location: a named spot whose congestion is tracked with a traffic-light status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StatusBoardError, ValidationError};
use crate::id::LocationId;
use crate::time::Timestamp;

/// Traffic-light congestion indicator.
///
/// The textual form (`Green`, `Yellow`, `Red`) is case sensitive and is used
/// verbatim in URLs, JSON payloads and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
}

impl StatusColor {
    /// Every color, in display order.
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Red => "Red",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Green" => Ok(Self::Green),
            "Yellow" => Ok(Self::Yellow),
            "Red" => Ok(Self::Red),
            other => Err(ValidationError::InvalidStatusColor(other.to_string())),
        }
    }
}

/// A persisted location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub status_color: StatusColor,
    pub last_updated_time: Timestamp,
}

impl Location {
    /// Change the status and stamp the time of the change.
    pub fn set_status(&mut self, color: StatusColor, at: Timestamp) {
        self.status_color = color;
        self.last_updated_time = at;
    }
}

/// A location that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    pub name: String,
    pub status_color: StatusColor,
    pub last_updated_time: Timestamp,
}

impl NewLocation {
    /// Build a new location, checking domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBoardError::Validation`] when `name` is blank.
    pub fn new(
        name: impl Into<String>,
        status_color: StatusColor,
        last_updated_time: Timestamp,
    ) -> Result<Self, StatusBoardError> {
        let location = Self {
            name: name.into(),
            status_color,
            last_updated_time,
        };
        location.validate()?;
        Ok(location)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBoardError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), StatusBoardError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: LocationId) -> Location {
        Location {
            id,
            name: self.name,
            status_color: self.status_color,
            last_updated_time: self.last_updated_time,
        }
    }
}
