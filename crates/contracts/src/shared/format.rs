//! Number and date formatting used by tables, cards and printed documents.

/// Format a number with `,` as thousands separator and the given number of
/// decimals (`.` as decimal point).
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money with two decimals and a `$` prefix: `-$1,234.50`.
pub fn format_money(value: f64) -> String {
    let body = format_number_with_decimals(value.abs(), 2);
    if value < 0.0 && body != "0.00" {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// ISO date or datetime to `DD/MM/YYYY`.
/// Example: "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Time of day (`HH:MM`) from an ISO datetime; the input unchanged otherwise.
pub fn format_time(datetime_str: &str) -> String {
    if let Some((_, time_part)) = datetime_str.split_once('T') {
        let mut parts = time_part.split(':');
        if let (Some(h), Some(m)) = (parts.next(), parts.next()) {
            if let (2, Some(mm)) = (h.len(), m.get(..2)) {
                return format!("{}:{}", h, mm);
            }
        }
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "$1,234.56");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(-150.0), "-$150.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(-1234.567, 3), "-1,234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-03-15T14:02:26.123Z"), "14:02");
        assert_eq!(format_time("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_format_time_non_ascii_minutes() {
        assert_eq!(format_time("2024-05-01T10:5é"), "2024-05-01T10:5é");
        assert_eq!(format_time("2024-05-01T1é:30"), "2024-05-01T1é:30");
        assert_eq!(format_time("2024-05-01T10:05é"), "10:05");
    }
}
