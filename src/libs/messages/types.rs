#[derive(Debug, Clone)]
pub enum Message {
    // === CLOCK MESSAGES ===
    ClockedIn(String),            // time
    ClockedOut(String, String),   // time, worked duration
    ClockedOutNoDuration(String), // time
    OvernightClockOut(String),    // date of the closed record
    AlreadyClockedIn,
    NoActiveEntry,
    IntervalAnomaly(String), // reason

    // === STATUS MESSAGES ===
    StatusHeader(String), // date
    StatusLine(String),   // derived status
    TotalToday(String),   // formatted duration
    NoEntriesToday,

    // === SUMMARY & HISTORY MESSAGES ===
    SummaryHeader(String, String), // start, end
    HistoryHeader(String, String), // start, end
    NoRecordsInRange,
    InvalidDateRange(String, String), // start, end

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigParseError,
    PromptStorageBackend,
    PromptSubject,
}
