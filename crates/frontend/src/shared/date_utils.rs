//! Date helpers shared by filters and tables.
//!
//! "Today" is the browser's local date.

use chrono::{Datelike, Duration, Local, NaiveDate};

pub const ISO_DATE: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    today().format(ISO_DATE).to_string()
}

/// First and last day of a month; `None` for an invalid month.
pub fn month_range(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

/// Month range as `YYYY-MM-DD` strings.
pub fn month_range_iso(year: i32, month: u32) -> Option<(String, String)> {
    month_range(year, month).map(|(from, to)| {
        (
            from.format(ISO_DATE).to_string(),
            to.format(ISO_DATE).to_string(),
        )
    })
}

/// The month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    }
}

/// ISO datetime to `DD/MM/YYYY HH:MM`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let date = contracts::shared::format::format_date(datetime_str);
    let time = contracts::shared::format::format_time(datetime_str);
    if time == datetime_str {
        date
    } else {
        format!("{} {}", date, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range() {
        let (from, to) = month_range_iso(2024, 2).unwrap();
        assert_eq!(from, "2024-02-01");
        assert_eq!(to, "2024-02-29");
        let (_, to) = month_range_iso(2024, 12).unwrap();
        assert_eq!(to, "2024-12-31");
        assert!(month_range(2024, 13).is_none());
    }

    #[test]
    fn test_previous_month() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(previous_month(jan), (2023, 12));
        let may = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(previous_month(may), (2024, 4));
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-03-15"), "15/03/2024");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, ISO_DATE).is_ok());
    }
}
