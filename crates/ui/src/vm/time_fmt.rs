use std::time::Duration;

/// Seconds with two decimals, e.g. `2.40s`.
#[must_use]
pub fn format_seconds(value: Duration) -> String {
    format!("{:.2}s", value.as_secs_f64())
}
