//! Korean display formats.

use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
};

const NAIVE_FORMATS: [&[BorrowedFormatItem<'static>]; 5] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

/// Parses the backend's timestamps.
///
/// Timestamps without an offset are interpreted in `local`.
#[must_use]
pub fn parse_timestamp(s: &str, local: UtcOffset) -> Option<OffsetDateTime> {
    let s = s.trim();
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt.to_offset(local));
    }
    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|format| PrimitiveDateTime::parse(s, *format).ok())
    {
        return Some(dt.assume_offset(local));
    }
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_offset(local))
}

/// `방금 전`, `N분 전`, `N시간 전`, `N일 전`, `MM.DD` or `YYYY.MM.DD`.
///
/// Unparsable input is returned as is.
#[must_use]
pub fn relative_date(s: &str, now: OffsetDateTime) -> String {
    let Some(date) = parse_timestamp(s, now.offset()) else {
        return s.to_owned();
    };
    let elapsed = now - date;
    let minutes = elapsed.whole_minutes();
    let hours = elapsed.whole_hours();
    let days = elapsed.whole_days();
    if minutes < 1 {
        "방금 전".to_owned()
    } else if minutes < 60 {
        format!("{minutes}분 전")
    } else if hours < 24 {
        format!("{hours}시간 전")
    } else if days < 7 {
        format!("{days}일 전")
    } else if date.year() == now.year() {
        format!("{:02}.{:02}", u8::from(date.month()), date.day())
    } else {
        format!(
            "{}.{:02}.{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    }
}

/// `YYYY.MM.DD HH:MM`
#[must_use]
pub fn date_time(s: &str, local: UtcOffset) -> String {
    parse_timestamp(s, local).map_or_else(
        || s.to_owned(),
        |dt| {
            format!(
                "{}.{:02}.{:02} {:02}:{:02}",
                dt.year(),
                u8::from(dt.month()),
                dt.day(),
                dt.hour(),
                dt.minute()
            )
        },
    )
}

/// `YYYY년 M월 D일`
#[must_use]
pub fn long_date(s: &str, local: UtcOffset) -> String {
    parse_timestamp(s, local).map_or_else(
        || s.to_owned(),
        |dt| format!("{}년 {}월 {}일", dt.year(), u8::from(dt.month()), dt.day()),
    )
}

/// `500m` or `1.5km`
#[must_use]
pub fn distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round())
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

/// `N분` or `H시간 M분`
#[must_use]
pub fn duration(millis: u64) -> String {
    let minutes = millis / 1000 / 60;
    if minutes < 60 {
        format!("{minutes}분")
    } else {
        format!("{}시간 {}분", minutes / 60, minutes % 60)
    }
}

/// Groups the digits by thousands.
#[must_use]
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `12,300원`
#[must_use]
pub fn won(amount: u64) -> String {
    format!("{}원", thousands(amount))
}

/// `1.0` is shown as `1.0`, not `1`.
#[must_use]
pub fn rating(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{macros::datetime, Duration};

    const KST: UtcOffset = time::macros::offset!(+9);

    #[test]
    fn relative_dates() {
        let now = datetime!(2024-06-15 12:00 +9);
        let ago = |d: Duration| (now - d).format(&Rfc3339).unwrap();
        assert_eq!(relative_date(&ago(Duration::seconds(30)), now), "방금 전");
        assert_eq!(relative_date(&ago(Duration::minutes(5)), now), "5분 전");
        assert_eq!(relative_date(&ago(Duration::minutes(59)), now), "59분 전");
        assert_eq!(relative_date(&ago(Duration::hours(3)), now), "3시간 전");
        assert_eq!(relative_date(&ago(Duration::days(6)), now), "6일 전");
        assert_eq!(relative_date("2024-03-02T08:00:00", now), "03.02");
        assert_eq!(relative_date("2023-12-31T23:00:00", now), "2023.12.31");
        assert_eq!(relative_date("yesterday", now), "yesterday");
    }

    #[test]
    fn naive_timestamps_are_local() {
        let dt = parse_timestamp("2024-01-05T09:07:30.123", KST).unwrap();
        assert_eq!(dt.offset(), KST);
        assert_eq!(dt.hour(), 9);
        let dt = parse_timestamp("2024-01-05T00:30:00Z", KST).unwrap();
        assert_eq!(dt.hour(), 9);
        assert!(parse_timestamp("2024-01-05", KST).is_some());
        assert!(parse_timestamp("2024-01-05 10:00", KST).is_some());
    }

    #[test]
    fn full_date_time() {
        assert_eq!(date_time("2024-01-05T09:07:30", KST), "2024.01.05 09:07");
        assert_eq!(long_date("2024-01-05T09:07:30", KST), "2024년 1월 5일");
    }

    #[test]
    fn distances() {
        assert_eq!(distance(500.0), "500m");
        assert_eq!(distance(999.4), "999m");
        assert_eq!(distance(1500.0), "1.5km");
        assert_eq!(distance(12_345.0), "12.3km");
    }

    #[test]
    fn durations() {
        assert_eq!(duration(0), "0분");
        assert_eq!(duration(59 * 60_000), "59분");
        assert_eq!(duration(60 * 60_000), "1시간 0분");
        assert_eq!(duration(135 * 60_000 + 59_999), "2시간 15분");
    }

    #[test]
    fn fares() {
        assert_eq!(won(0), "0원");
        assert_eq!(won(900), "900원");
        assert_eq!(won(12_300), "12,300원");
        assert_eq!(won(1_234_567), "1,234,567원");
    }

    #[test]
    fn ratings() {
        assert_eq!(rating(4.0), "4.0");
        assert_eq!(rating(4.26), "4.3");
    }
}
