//! Time display helpers

/// Format whole seconds as `H:MM:SS`.
///
/// Hours are not padded and keep growing past 24.
pub fn format_hms(seconds: u64) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "0:00:00");
        assert_eq!(format_hms(59), "0:00:59");
        assert_eq!(format_hms(61), "0:01:01");
        assert_eq!(format_hms(1500), "0:25:00");
        assert_eq!(format_hms(3661), "1:01:01");
    }

    #[test]
    fn test_format_hms_past_one_day() {
        assert_eq!(format_hms(100_000), "27:46:40");
    }
}
