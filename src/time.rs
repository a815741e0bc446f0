//! Time-of-day helpers for log timestamps. Logs carry no date, so every value
//! here is a clock time on one implicit day.

use chrono::NaiveTime;

/// Parses `HH:MM:SS` (or `HH:MM`) into a clock time.
pub fn parse_clock(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Keeps the first two `:`-separated fields, turning `10:05:33` into `10:05`.
/// Fields are not re-padded, so `7:05:00` stays `7:05`.
pub fn short_clock(time: &str) -> String {
    time.split(':').take(2).collect::<Vec<&str>>().join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10:05:33", Some((10, 5, 33)))]
    #[case("00:00:00", Some((0, 0, 0)))]
    #[case("07:05", Some((7, 5, 0)))]
    #[case("24:00:00", None)]
    #[case("yesterday", None)]
    fn parses_clock_times(#[case] input: &str, #[case] expected: Option<(u32, u32, u32)>) {
        let expected = expected.and_then(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s));
        assert_eq!(parse_clock(input), expected);
    }

    #[rstest]
    #[case("10:05:33", "10:05")]
    #[case("7:05:00", "7:05")]
    #[case("Mon 10:05:33", "Mon 10:05")]
    #[case("10", "10")]
    fn shortens_to_first_two_fields(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(short_clock(input), expected);
    }
}
