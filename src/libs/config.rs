//! Configuration management for the timesheet tool.
//!
//! Settings are stored as pretty-printed JSON in the per-user data directory
//! and are entirely optional: a missing file yields [`Config::default`], and
//! each module falls back to its own defaults when absent.
//!
//! ## Configuration Structure
//!
//! - **Report**: title, label wrap width, Excel column width, malformed-record policy
//! - **Source**: default worklog dump and assignee offered by the prompts
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\jira-timesheet\config.json`
//! - **macOS**: `~/Library/Application Support/jira-timesheet/config.json`
//! - **Linux**: `~/.local/share/jira-timesheet/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use jira_timesheet::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report_or_default();
//! println!("Labels wrap at {} characters", report.label_width);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::formatter::DEFAULT_LABEL_WIDTH;
use super::timesheet::GridOptions;
use super::worklog::MalformedPolicy;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Title printed above every report, as in `Jira Tasks Report (01/12/16-31/12/16)`.
pub const DEFAULT_REPORT_TITLE: &str = "Jira Tasks Report";

/// Width of the Excel date columns, in character units.
pub const DEFAULT_COLUMN_WIDTH: f64 = 3.0;

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Report layout and validation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Prefix of the report heading; the date range is appended in parentheses.
    pub title: String,

    /// Characters per line before an issue label wraps.
    ///
    /// Labels are reflowed onto several lines rather than truncated, so
    /// long summaries stay complete.
    pub label_width: usize,

    /// Width of each date column in Excel exports.
    pub column_width: f64,

    /// What to do with worklogs whose timestamp or duration cannot be used.
    pub on_malformed: MalformedPolicy,
}

/// Defaults for the values otherwise asked for interactively.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct SourceConfig {
    /// Path of the worklog dump file.
    pub input: String,
    /// Author whose worklogs make up the report.
    pub assignee: String,
}

/// Root configuration object. Every section is optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: DEFAULT_REPORT_TITLE.to_string(),
            label_width: DEFAULT_LABEL_WIDTH,
            column_width: DEFAULT_COLUMN_WIDTH,
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl ReportConfig {
    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            label_width: self.label_width,
        }
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report".to_string(),
        }
    }

    /// Prompts for every report setting, pre-filled with `config` or the defaults.
    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);

        let policies = [MalformedPolicy::Skip, MalformedPolicy::Fail];
        let policy_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMalformedPolicy.to_string())
            .items(&["skip and warn", "fail the report"])
            .default(policies.iter().position(|p| *p == default.on_malformed).unwrap_or(0))
            .interact()?;

        Ok(Self {
            title: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptReportTitle.to_string())
                .default(default.title)
                .interact_text()?,
            label_width: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptLabelWidth.to_string())
                .default(default.label_width)
                .interact_text()?,
            column_width: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptColumnWidth.to_string())
                .default(default.column_width)
                .interact_text()?,
            on_malformed: policies[policy_index],
        })
    }
}

impl SourceConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "source".to_string(),
            name: "Worklog source".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleSource);

        Ok(Self {
            input: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptInputFile.to_string())
                .default(default.input)
                .allow_empty(true)
                .interact_text()?,
            assignee: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAssignee.to_string())
                .default(default.assignee)
                .allow_empty(true)
                .interact_text()?,
        })
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, replacing any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    pub fn report_or_default(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard over the existing configuration.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ReportConfig::module(), SourceConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                "source" => config.source = Some(SourceConfig::init(&config.source)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
