#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use jira_timesheet::libs::dates::DateRange;
    use jira_timesheet::libs::timesheet::{aggregate, GridOptions};
    use jira_timesheet::libs::view::View;
    use jira_timesheet::libs::worklog::{RawWorklog, TimeSpent, Worklog};

    #[test]
    fn test_timesheet_table_layout() {
        let worklog = Worklog::try_from(RawWorklog {
            issue_key: "A-1".to_string(),
            issue_summary: "Fix bug".to_string(),
            author: "alice".to_string(),
            started: "2024-01-02".to_string(),
            time_spent: TimeSpent::Hours(2.5),
        })
        .unwrap();
        let range = DateRange::generate(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        )
        .unwrap();
        let sheet = aggregate(&[worklog], "alice", &range, &GridOptions::default());

        let table = View::timesheet_table(&sheet);
        // The header row becomes the table titles
        assert_eq!(table.len(), 1);

        let rendered = table.to_string();
        assert!(rendered.contains("A-1 - Fix bug"));
        assert!(rendered.contains("2.5"));
        assert!(rendered.contains("02"));
    }

    #[test]
    fn test_header_only_table() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let range = DateRange::generate(day, day).unwrap();
        let sheet = aggregate(&[], "alice", &range, &GridOptions::default());

        let table = View::timesheet_table(&sheet);
        assert!(table.is_empty());
        assert!(table.to_string().contains("06"));
    }
}
