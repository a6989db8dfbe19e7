/// Utilities for date formatting
///
/// Dates from the API come as "YYYY-MM-DD" or full RFC 3339 timestamps.
use chrono::{DateTime, NaiveDate, Utc};

/// Parse the date part of an API date string
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str).trim();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    parse_date(date_str)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| date_str.to_string())
}

/// Format an optional API date, "—" when absent
pub fn format_optional_date(date_str: Option<&str>) -> String {
    date_str
        .filter(|s| !s.trim().is_empty())
        .map(format_date)
        .unwrap_or_else(|| "—".to_string())
}

/// Whole days from `now` until `date`; negative when the date has passed
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (date - now.date_naive()).num_days()
}

/// Подпись дедлайна для карточки
pub fn deadline_label(date: NaiveDate, now: DateTime<Utc>) -> String {
    match days_until(date, now) {
        d if d < 0 => "Регистрация закрыта".to_string(),
        0 => "Последний день регистрации".to_string(),
        d => format!("До дедлайна {} дн.", d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional_date(None), "—");
        assert_eq!(format_optional_date(Some(" ")), "—");
    }

    #[test]
    fn test_deadline_label() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap();
        let date = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
        assert_eq!(days_until(date(20), now), 10);
        assert_eq!(deadline_label(date(10), now), "Последний день регистрации");
        assert_eq!(deadline_label(date(9), now), "Регистрация закрыта");
        assert_eq!(deadline_label(date(12), now), "До дедлайна 2 дн.");
    }
}
