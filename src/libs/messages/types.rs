#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleReport,
    ConfigModuleSource,

    // === INPUT MESSAGES ===
    WorklogsLoaded(usize, String), // count, path
    UnsupportedInputFormat(String), // path
    InputFileUnreadable(String),    // path
    TruncatedWorklogPage(String, usize, usize), // issue key, loaded, total
    InvalidDate(String),            // raw value
    MalformedRecordSkipped(String), // error
    SkippedRecordsSummary(usize),   // count

    // === REPORT MESSAGES ===
    ReportHeader(String),          // title
    TotalHours(String),            // formatted total
    NoWorklogsFound(String, String), // author, range label

    // === EXPORT MESSAGES ===
    ExportingTimesheet(String), // format
    ExportCompleted(String),    // path

    // === PROMPTS ===
    PromptSelectModules,
    PromptReportTitle,
    PromptLabelWidth,
    PromptColumnWidth,
    PromptMalformedPolicy,
    PromptInputFile,
    PromptAssignee,
    PromptFromDate,
    PromptToDate,
}
