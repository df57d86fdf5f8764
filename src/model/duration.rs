//! Human-readable durations

/// Song style `mm:ss`; minutes are not wrapped into hours.
pub fn format_mm_ss(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Album style `hh:mm:ss`
pub fn format_hh_mm_ss(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_format() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(215), "03:35");
        assert_eq!(format_mm_ss(3725), "62:05");
    }

    #[test]
    fn test_album_format_wraps_minutes() {
        assert_eq!(format_hh_mm_ss(59), "00:00:59");
        assert_eq!(format_hh_mm_ss(3725), "01:02:05");
        assert_eq!(format_hh_mm_ss(2 * 3600 + 59 * 60), "02:59:00");
    }
}
