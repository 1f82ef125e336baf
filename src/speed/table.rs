//! The fixed run speed table.
//!
//! Slider positions 0..=35 map to increasing rates in instructions per
//! second. Positions 36..=40 all map to [`UNLIMITED_SPEED`] so the last few
//! slider stops land on "unlimited".

use serde::Serialize;
use super::SpeedError;

/// Rate value meaning "do not throttle". Compare rates against this value,
/// not against an index.
pub const UNLIMITED_SPEED: f64 = 40.0;

/// Lowest valid index.
pub const SPEED_INDEX_MIN: usize = 0;

/// Highest valid index.
pub const SPEED_INDEX_MAX: usize = 40;

/// Index a fresh control starts at.
pub const SPEED_INDEX_INIT: usize = SPEED_INDEX_MAX;

/// Highest index with an interactive (throttled) rate.
pub const SPEED_INDEX_INTERACTION_LIMIT: usize = 35;

/// Rate for every index, in instructions per second.
pub const SPEED_TABLE: [f64; SPEED_INDEX_MAX + 1] = [
    0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0,          // 0-10
    6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,          // 11-20
    16.0, 17.0, 18.0, 19.0, 20.0, 21.0, 22.0, 23.0, 24.0, 25.0,      // 21-30
    26.0, 27.0, 28.0, 29.0, 30.0,                                    // 31-35
    UNLIMITED_SPEED, UNLIMITED_SPEED, UNLIMITED_SPEED,               // 36-38
    UNLIMITED_SPEED, UNLIMITED_SPEED,                                // 39-40
];

/// Check that `index` is a valid table position.
pub fn check_index(index: usize) -> Result<usize, SpeedError> {
    if index > SPEED_INDEX_MAX {
        return Err(SpeedError::IndexOutOfRange { index, max: SPEED_INDEX_MAX });
    }
    Ok(index)
}

/// Rate at `index`.
pub fn speed_at(index: usize) -> Result<f64, SpeedError> {
    check_index(index).map(|i| SPEED_TABLE[i])
}

/// Slider label for `index`.
///
/// Interactive rates show the number (integral when at least 1), the
/// unlimited positions show a fixed phrase.
pub fn speed_label(index: usize) -> Result<String, SpeedError> {
    let rate = speed_at(index)?;
    if index <= SPEED_INDEX_INTERACTION_LIMIT {
        if rate < 1.0 {
            Ok(format!("Run speed {} inst/sec", rate))
        } else {
            Ok(format!("Run speed {} inst/sec", rate as i64))
        }
    } else {
        Ok("Run speed at max (no interaction)".to_string())
    }
}

/// One row of the table, for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedEntry {
    pub index: usize,
    pub rate: f64,
    pub unlimited: bool,
    pub label: String,
}

/// All rows of the table in index order.
pub fn speed_table() -> Vec<SpeedEntry> {
    SPEED_TABLE
        .iter()
        .enumerate()
        .map(|(index, &rate)| SpeedEntry {
            index,
            rate,
            unlimited: rate == UNLIMITED_SPEED,
            label: speed_label(index).unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(speed_at(0).unwrap(), 0.05);
        assert_eq!(speed_at(SPEED_INDEX_MAX).unwrap(), UNLIMITED_SPEED);
        assert_eq!(speed_at(SPEED_INDEX_INTERACTION_LIMIT).unwrap(), 30.0);
    }

    #[test]
    fn test_unlimited_tail() {
        for index in 36..=40 {
            assert_eq!(speed_at(index).unwrap(), UNLIMITED_SPEED);
        }
    }

    #[test]
    fn test_monotonic_until_limit() {
        for pair in SPEED_TABLE[..=SPEED_INDEX_INTERACTION_LIMIT].windows(2) {
            assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
        assert!(SPEED_TABLE.iter().all(|&r| r > 0.0));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            speed_at(41),
            Err(SpeedError::IndexOutOfRange { index: 41, max: 40 })
        );
        assert!(speed_label(100).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(speed_label(0).unwrap(), "Run speed 0.05 inst/sec");
        assert_eq!(speed_label(6).unwrap(), "Run speed 1 inst/sec");
        assert_eq!(speed_label(35).unwrap(), "Run speed 30 inst/sec");
        let max = speed_label(36).unwrap();
        assert!(max.contains("at max"));
        assert!(!max.chars().any(|c| c.is_ascii_digit()));
        assert_eq!(speed_label(40).unwrap(), max);
    }

    #[test]
    fn test_table_rows() {
        let rows = speed_table();
        assert_eq!(rows.len(), 41);
        assert_eq!(rows.iter().filter(|r| r.unlimited).count(), 5);
        assert_eq!(rows[5].label, "Run speed 0.5 inst/sec");
    }
}
