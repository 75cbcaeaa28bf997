use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

/// Current instant at millisecond precision, matching browser ISO strings.
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// `2024-05-01T09:30:00.250Z`
pub fn iso_millis(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `2024-05-01-09-30-00`: the ISO form cut to whole seconds with `:` and `T`
/// swapped for hyphens, safe for file names.
pub fn file_stamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d-%H-%M-%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso_millis_always_prints_three_fraction_digits() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        assert_eq!(iso_millis(&dt), "2024-05-01T09:30:00.000Z");
    }

    #[test]
    fn file_stamp_drops_fraction_and_separators() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 7).unwrap()
            + chrono::Duration::milliseconds(999);
        assert_eq!(file_stamp(&dt), "2024-05-01-09-30-07");
    }

    #[test]
    fn now_millis_has_no_sub_millisecond_part() {
        let now = now_millis();
        assert_eq!(now.timestamp_subsec_nanos() % 1_000_000, 0);
    }
}
