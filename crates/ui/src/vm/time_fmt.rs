/// Countdown label, `m:ss`.
#[must_use]
pub fn format_countdown(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Lesson duration for the completion screen, e.g. `3m 05s` or `42s`.
#[must_use]
pub fn format_duration(minutes: u32, secs: u32) -> String {
    if minutes == 0 {
        format!("{secs}s")
    } else {
        format!("{minutes}m {secs:02}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_pads_seconds() {
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(65), "1:05");
        assert_eq!(format_countdown(300), "5:00");
    }

    #[test]
    fn short_durations_drop_minutes() {
        assert_eq!(format_duration(0, 42), "42s");
        assert_eq!(format_duration(3, 5), "3m 05s");
    }
}
