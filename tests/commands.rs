#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use jira_timesheet::commands::report::parse_date;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2016-12-01").unwrap(), NaiveDate::from_ymd_opt(2016, 12, 1).unwrap());
        assert_eq!(parse_date(" 2016-12-31 ").unwrap(), NaiveDate::from_ymd_opt(2016, 12, 31).unwrap());
    }

    #[test]
    fn test_parse_today() {
        let today = Local::now().date_naive();
        let parsed = parse_date("Today").unwrap();
        // Tolerate a midnight rollover between the two calls
        assert!(parsed == today || parsed == today.succ_opt().unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = parse_date("2024-02-30").unwrap_err();
        assert!(err.to_string().contains("2024-02-30"));
        assert!(parse_date("01.12.2016").is_err());
    }
}
