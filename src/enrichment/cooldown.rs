//! Cooldown countdown and its compact display form

use crate::core::types::Timestamp;
use crate::enrichment::status::EnrichmentActivityStatus;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Whole minutes until `next_available_at`, rounded up, never negative
pub fn remaining_minutes(next_available_at: Timestamp, now: Timestamp) -> u64 {
    let remaining = next_available_at.millis_since(now);
    if remaining <= 0 {
        return 0;
    }
    // Ceiling division for positive values
    ((remaining + MILLIS_PER_MINUTE - 1) / MILLIS_PER_MINUTE) as u64
}

/// Compact duration: `"45m"`, `"2h"`, `"2h 5m"`
pub fn format_duration(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

/// Display string for a status record's remaining cooldown
///
/// `None` when the record carries no `next_available_at`.
pub fn cooldown_display(status: &EnrichmentActivityStatus, now: Timestamp) -> Option<String> {
    status
        .next_available_at
        .map(|at| format_duration(remaining_minutes(at, now)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(raw: &str) -> Timestamp {
        Timestamp::parse(raw).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(59), "59m");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(125), "2h 5m");
    }

    #[test]
    fn test_remaining_rounds_up() {
        let now = t("2024-03-01T12:00:00Z");
        assert_eq!(remaining_minutes(t("2024-03-01T12:01:30Z"), now), 2);
        assert_eq!(remaining_minutes(t("2024-03-01T12:01:00Z"), now), 1);
        assert_eq!(remaining_minutes(t("2024-03-01T12:00:00.001Z"), now), 1);
    }

    #[test]
    fn test_remaining_never_negative() {
        let now = t("2024-03-01T12:00:00Z");
        assert_eq!(remaining_minutes(now, now), 0);
        assert_eq!(remaining_minutes(t("2024-03-01T11:00:00Z"), now), 0);
    }

    #[test]
    fn test_iso_and_millis_agree() {
        let now = Timestamp::from_millis(1_709_294_400_000).unwrap();
        let next = t("2024-03-01T14:05:00Z");
        assert_eq!(remaining_minutes(next, now), 125);
    }

    #[test]
    fn test_cooldown_display() {
        let now = t("2024-03-01T12:00:00Z");
        let status = EnrichmentActivityStatus::on_cooldown("gentle_touch", now.plus_minutes(90));
        assert_eq!(cooldown_display(&status, now).as_deref(), Some("1h 30m"));
        assert_eq!(
            cooldown_display(&EnrichmentActivityStatus::available("gentle_touch"), now),
            None
        );
    }
}
