//! Locations inserted the first time the service starts against an empty store.

use crate::location::{NewLocation, StatusColor};
use crate::time::Timestamp;

const INITIAL: [(&str, StatusColor); 6] = [
    ("Canteen Corner Booths", StatusColor::Yellow),
    ("Canteen outside", StatusColor::Green),
    ("CB benches", StatusColor::Green),
    ("Ground", StatusColor::Green),
    ("Library", StatusColor::Green),
    ("KK Block", StatusColor::Yellow),
];

/// The fixed seed list, every row stamped with `at`.
#[must_use]
pub fn initial_locations(at: Timestamp) -> Vec<NewLocation> {
    INITIAL
        .iter()
        .map(|(name, color)| NewLocation {
            name: (*name).to_string(),
            status_color: *color,
            last_updated_time: at,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;
    use std::collections::HashSet;

    #[test]
    fn should_provide_six_valid_locations() {
        let rows = initial_locations(now());
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| row.validate().is_ok()));
    }

    #[test]
    fn should_not_contain_duplicate_names() {
        let rows = initial_locations(now());
        let names: HashSet<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names.len(), rows.len());
    }

    #[test]
    fn should_stamp_every_row_with_given_time() {
        let at = now();
        assert!(
            initial_locations(at)
                .iter()
                .all(|row| row.last_updated_time == at)
        );
    }
}
