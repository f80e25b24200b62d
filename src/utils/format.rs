// src/utils/format.rs
use chrono::{DateTime, Utc};

// Format a timestamp for display
pub fn format_time_ago(time: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds();

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else if seconds < 2592000 {
        format!("{} days ago", duration.num_days())
    } else if seconds < 31536000 {
        format!("{} months ago", duration.num_days() / 30)
    } else {
        format!("{} years ago", duration.num_days() / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn recent_times_format_in_seconds() {
        let formatted = format_time_ago(Utc::now() - Duration::seconds(5));
        assert!(formatted.ends_with("seconds ago"), "got {formatted}");
    }

    #[test]
    fn older_times_scale_up() {
        let formatted = format_time_ago(Utc::now() - Duration::hours(3));
        assert_eq!(formatted, "3 hours ago");
    }
}
