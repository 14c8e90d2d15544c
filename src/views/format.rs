use chrono::{DateTime, Utc};

/// `M/D/YYYY`, e.g. `3/7/2025`.
pub fn display_date(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_date_has_no_padding() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 18, 30, 0).unwrap();
        assert_eq!(display_date(&at), "3/7/2025");
    }

    #[test]
    fn test_display_date_two_digit_parts() {
        let at = Utc.with_ymd_and_hms(2024, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(display_date(&at), "12/25/2024");
    }
}
