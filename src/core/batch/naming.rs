//! Output object naming

use crate::domain::ObjectName;
use chrono::{DateTime, Utc};

/// Prefix of every processed object name
pub const OUTPUT_PREFIX: &str = "processed_";

/// chrono format of the timestamp embedded in output names (`yyyyMMdd_HHmmss`)
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Name under which a processed copy of `source` is written
///
/// `processed_<yyyyMMdd_HHmmss>_<source>`. Two sources with the same name processed
/// within the same second collide; the later upload wins.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use csv_batch::core::batch::output_name;
/// use csv_batch::domain::ObjectName;
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
/// let name = output_name(&ObjectName::new("data.csv").unwrap(), at);
/// assert_eq!(name.as_str(), "processed_20240102_030405_data.csv");
/// ```
pub fn output_name(source: &ObjectName, at: DateTime<Utc>) -> ObjectName {
    source.prefixed(format!(
        "{OUTPUT_PREFIX}{}_",
        at.format(OUTPUT_TIMESTAMP_FORMAT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_output_name_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let name = output_name(&ObjectName::new("data.csv").unwrap(), at);
        assert_eq!(name.as_str(), "processed_20240102_030405_data.csv");
    }

    #[test]
    fn test_output_name_keeps_path_and_case() {
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let name = output_name(&ObjectName::new("in/Q4 Report.CSV").unwrap(), at);
        assert_eq!(name.as_str(), "processed_20231231_235959_in/Q4 Report.CSV");
    }

    #[test]
    fn test_output_name_drops_subsecond_precision() {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(999))
            .unwrap();
        let name = output_name(&ObjectName::new("a.csv").unwrap(), at);
        assert_eq!(name.as_str(), "processed_20240102_030405_a.csv");
    }
}
