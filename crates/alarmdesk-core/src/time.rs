// ── Relative timestamps ──

use chrono::{DateTime, Utc};

/// Render `ts` relative to `now`: "Just now", "5m ago", "3h ago", or the
/// calendar date once a day has passed. Future timestamps read "Just now".
pub fn time_ago(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - ts).num_minutes();
    if minutes < 1 {
        return "Just now".into();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let rendered: Vec<String> = [
            Duration::seconds(-30),
            Duration::seconds(59),
            Duration::minutes(1),
            Duration::minutes(59),
            Duration::minutes(60),
            Duration::hours(23) + Duration::minutes(59),
            Duration::hours(24),
        ]
        .into_iter()
        .map(|ago| time_ago(now - ago, now))
        .collect();

        insta::assert_snapshot!(rendered.join("\n"), @r"
        Just now
        Just now
        1m ago
        59m ago
        1h ago
        23h ago
        2024-03-08
        ");
    }
}
