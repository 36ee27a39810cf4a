#[cfg(test)]
mod tests {
    use jira_timesheet::libs::config::{Config, ReportConfig, SourceConfig, DEFAULT_REPORT_TITLE};
    use jira_timesheet::libs::worklog::MalformedPolicy;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the per-user data directory at a temporary location.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.report.is_none());
        assert!(config.source.is_none());

        let report = config.report_or_default();
        assert_eq!(report.title, DEFAULT_REPORT_TITLE);
        assert_eq!(report.label_width, 50);
        assert_eq!(report.on_malformed, MalformedPolicy::Skip);
        assert_eq!(report.grid_options().label_width, 50);
    }

    #[test]
    fn test_partial_config_file_parses() {
        let config: Config = serde_json::from_str(r#"{"source": {"input": "dump.json", "assignee": "joe.doe"}}"#).unwrap();
        assert!(config.report.is_none());
        assert_eq!(config.source.unwrap().assignee, "joe.doe");

        let config: Config = serde_json::from_str(
            r#"{"report": {"title": "T", "label_width": 40, "column_width": 4.5, "on_malformed": "fail"}}"#,
        )
        .unwrap();
        assert_eq!(config.report.unwrap().on_malformed, MalformedPolicy::Fail);
    }

    // A single test drives the file lifecycle so parallel tests never share HOME
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(_ctx: &mut ConfigTestContext) {
        let missing = Config::read().unwrap();
        assert!(missing.report.is_none());
        assert!(missing.source.is_none());

        let config = Config {
            report: Some(ReportConfig {
                title: "Monthly Timesheet".to_string(),
                label_width: 40,
                column_width: 4.0,
                on_malformed: MalformedPolicy::Fail,
            }),
            source: Some(SourceConfig {
                input: "worklogs.json".to_string(),
                assignee: "joe.doe".to_string(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.report, config.report);
        assert_eq!(read_config.source, config.source);

        Config::delete().unwrap();
        assert!(Config::read().unwrap().report.is_none());
        // Deleting twice is fine
        Config::delete().unwrap();
    }
}
