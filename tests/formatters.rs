#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use jira_timesheet::libs::formatter::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&Duration::zero()), "");
        assert_eq!(format_cell(&Duration::minutes(150)), "2.5");
        assert_eq!(format_cell(&Duration::hours(8)), "8.0");
        assert_eq!(format_cell(&Duration::minutes(20)), "0.3");
    }

    #[test]
    fn test_tiny_cell_is_not_blank() {
        // Only an exactly-zero total renders empty
        assert_eq!(format_cell(&Duration::seconds(1)), "0.0");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(&Duration::zero()), "0.00");
        assert_eq!(format_total(&Duration::minutes(210)), "3.50");
        assert_eq!(format_total(&Duration::minutes(45)), "0.75");
        assert_eq!(format_total(&Duration::hours(160)), "160.00");
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(duration_hours(&Duration::minutes(90)), 1.5);
        assert_eq!(duration_hours(&Duration::zero()), 0.0);
    }

    #[test]
    fn test_day_label() {
        let tuesday = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(day_label(&tuesday), "05\nT");
        assert_eq!(day_label(&sunday), "10\nS");
    }

    #[test]
    fn test_issue_label() {
        assert_eq!(issue_label("A-1", "Fix bug", 50), "A-1 - Fix bug");
        assert_eq!(issue_label("A-1", "", 50), "A-1 - ");
    }

    #[test]
    fn test_wrap_label_keeps_inner_whitespace() {
        assert_eq!(issue_label("A-1", "Fix   two\tspaces", 50), "A-1 - Fix   two\tspaces");
        // A whitespace run at a break turns into the line break
        assert_eq!(wrap_label("aa   bb", 4), "aa\nbb");
    }

    #[test]
    fn test_wrap_label_breaks_at_words() {
        let wrapped = wrap_label("one two three four five", 9);
        assert_eq!(wrapped, "one two\nthree\nfour five");
    }

    #[test]
    fn test_wrap_label_splits_long_words() {
        let wrapped = wrap_label("ABCDEFGHIJ xy", 4);
        assert_eq!(wrapped, "ABCD\nEFGH\nIJ\nxy");
        assert!(wrapped.lines().all(|line| line.chars().count() <= 4));
    }

    #[test]
    fn test_wrap_label_short_text_unchanged() {
        assert_eq!(wrap_label("A-1 - Fix bug", DEFAULT_LABEL_WIDTH), "A-1 - Fix bug");
        assert_eq!(wrap_label("", 10), "");
    }
}
