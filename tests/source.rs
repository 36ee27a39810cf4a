#[cfg(test)]
mod tests {
    use jira_timesheet::libs::source::{load, read_csv, read_json};
    use jira_timesheet::libs::worklog::TimeSpent;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const JIRA_DUMP: &str = r#"{
        "issues": [
            {
                "key": "A-1",
                "fields": { "summary": "Fix bug" },
                "worklogs": [
                    {
                        "author": { "name": "alice", "displayName": "Alice" },
                        "started": "2024-01-02T09:00:00.000+0100",
                        "timeSpentSeconds": 9000
                    }
                ]
            },
            {
                "key": "A-2",
                "fields": {
                    "summary": "Write docs",
                    "worklog": {
                        "worklogs": [
                            {
                                "author": { "accountId": "5b10ac8d82e05b22cc7d4ef5" },
                                "started": "2024-01-03T10:00:00.000+0000",
                                "timeSpentSeconds": 3600
                            }
                        ]
                    }
                }
            }
        ]
    }"#;

    const CSV_DUMP: &str = "issue_key,issue_summary,author,started,hours_spent\n\
        A-1,Fix bug,alice,2024-01-02,2.5\n\
        A-1, Fix bug ,alice,2024-01-03T08:00:00,1\n\
        A-2,Write docs,bob,2024-01-02,3.0\n";

    struct SourceTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for SourceTestContext {
        fn setup() -> Self {
            SourceTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_read_json_inline_and_nested_worklogs() {
        let records = read_json(JIRA_DUMP.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].issue_key, "A-1");
        assert_eq!(records[0].issue_summary, "Fix bug");
        assert_eq!(records[0].author, "alice");
        assert_eq!(records[0].time_spent, TimeSpent::Seconds(9000));
        assert_eq!(records[1].issue_key, "A-2");
        assert_eq!(records[1].author, "5b10ac8d82e05b22cc7d4ef5");
    }

    fn paged_dump(total: usize, start_at: usize) -> String {
        format!(
            r#"{{
                "issues": [
                    {{
                        "key": "A-9",
                        "fields": {{
                            "summary": "Long running",
                            "worklog": {{
                                "startAt": {start_at},
                                "maxResults": 20,
                                "total": {total},
                                "worklogs": [
                                    {{
                                        "author": {{ "name": "alice" }},
                                        "started": "2024-01-02T09:00:00.000+0100",
                                        "timeSpentSeconds": 3600
                                    }}
                                ]
                            }}
                        }}
                    }}
                ]
            }}"#
        )
    }

    #[test]
    fn test_read_json_rejects_truncated_worklog_page() {
        let err = read_json(paged_dump(25, 0).as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("A-9"));
        assert!(message.contains("1 of 25"));
    }

    #[test]
    fn test_read_json_rejects_later_worklog_page() {
        assert!(read_json(paged_dump(1, 20).as_bytes()).is_err());
    }

    #[test]
    fn test_read_json_accepts_complete_worklog_page() {
        let records = read_json(paged_dump(1, 0).as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].issue_key, "A-9");
    }

    #[test]
    fn test_read_json_rejects_invalid_document() {
        assert!(read_json("{\"issues\": 42}".as_bytes()).is_err());
    }

    #[test]
    fn test_read_csv_trims_fields() {
        let records = read_csv(CSV_DUMP.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].issue_summary, "Fix bug");
        assert_eq!(records[1].time_spent, TimeSpent::Hours(1.0));
        assert_eq!(records[2].author, "bob");
    }

    #[test_context(SourceTestContext)]
    #[test]
    fn test_load_dispatches_on_extension(ctx: &mut SourceTestContext) {
        let json_path = ctx.temp_dir.path().join("dump.json");
        let csv_path = ctx.temp_dir.path().join("dump.CSV");
        fs::write(&json_path, JIRA_DUMP).unwrap();
        fs::write(&csv_path, CSV_DUMP).unwrap();

        assert_eq!(load(&json_path).unwrap().len(), 2);
        assert_eq!(load(&csv_path).unwrap().len(), 3);
    }

    #[test_context(SourceTestContext)]
    #[test]
    fn test_load_rejects_unknown_extension(ctx: &mut SourceTestContext) {
        let path = ctx.temp_dir.path().join("dump.xml");
        fs::write(&path, "<issues/>").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("dump.xml"));
    }

    #[test_context(SourceTestContext)]
    #[test]
    fn test_load_missing_file(ctx: &mut SourceTestContext) {
        let err = load(&ctx.temp_dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
