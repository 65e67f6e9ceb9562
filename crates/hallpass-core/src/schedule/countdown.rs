/// Format a remaining duration for the ticker.
///
/// `"1h 01m 01s"` when an hour or more remains, otherwise `"1m 05s"`.
/// Negative input is clamped to zero.
pub fn format_countdown(remaining_ms: i64) -> String {
    let total_secs = remaining_ms.max(0) / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours >= 1 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}
