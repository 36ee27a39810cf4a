#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate};
    use jira_timesheet::libs::dates::{generate_dates, is_weekend, DateRange};
    use jira_timesheet::libs::error::ReportError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_is_inclusive_and_contiguous() {
        let from = date(2016, 12, 1);
        let to = date(2016, 12, 31);
        let range = DateRange::generate(from, to).unwrap();

        assert_eq!(range.len(), 31);
        assert_eq!(range.from_date(), from);
        assert_eq!(range.to_date(), to);
        for pair in range.dates().windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_length_matches_day_difference() {
        let from = date(2023, 12, 20);
        for span in [0i64, 1, 11, 12, 59, 366] {
            let to = from + Duration::days(span);
            let dates = generate_dates(from, to).unwrap();
            assert_eq!(dates.len() as i64, span + 1);
        }
    }

    #[test]
    fn test_range_crosses_month_and_leap_day() {
        let range = DateRange::generate(date(2024, 2, 27), date(2024, 3, 2)).unwrap();
        let days: Vec<u32> = range.dates().iter().map(|d| d.day()).collect();
        assert_eq!(days, vec![27, 28, 29, 1, 2]);
    }

    #[test]
    fn test_single_day_range() {
        let day = date(2024, 1, 5);
        let range = DateRange::generate(day, day).unwrap();
        assert_eq!(range.dates(), &[day]);
        assert_eq!(range.label(), "05/01/24-05/01/24");
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let from = date(2024, 1, 3);
        let to = date(2024, 1, 1);
        let err = DateRange::generate(from, to).unwrap_err();
        assert_eq!(err, ReportError::InvalidRange { from, to });
    }

    #[test]
    fn test_index_of() {
        let range = DateRange::generate(date(2024, 1, 1), date(2024, 1, 10)).unwrap();
        assert_eq!(range.index_of(date(2024, 1, 1)), Some(0));
        assert_eq!(range.index_of(date(2024, 1, 10)), Some(9));
        assert_eq!(range.index_of(date(2023, 12, 31)), None);
        assert_eq!(range.index_of(date(2024, 1, 11)), None);
    }

    #[test]
    fn test_is_weekend() {
        // 2024-01-06 is a Saturday
        assert!(!is_weekend(date(2024, 1, 5)));
        assert!(is_weekend(date(2024, 1, 6)));
        assert!(is_weekend(date(2024, 1, 7)));
        assert!(!is_weekend(date(2024, 1, 8)));
    }
}
