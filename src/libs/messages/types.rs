#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryCreated(i64, String),  // id, date
    EntryUpdated(i64, String),  // id, date
    EntryDeleted(i64),
    EntryNotFound(i64),
    NoEntriesForPeriod(String), // period label
    EntriesHeader(String),      // period label or "All entries"
    EntriesTotal(usize, String), // count, formatted total
    ConfirmDeleteEntry(i64, String),
    DeleteCancelled,

    // === HOURS MESSAGES ===
    ShiftHours(String, String, String), // start, end, hours

    // === EXPORT MESSAGES ===
    ExportingPeriod(String, String), // period, format
    ExportCompleted(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigWizardHeader,
    PromptDatabasePath,
    PromptBindAddress,
    PromptDefaultSite,
    InvalidBindAddress(String),
    InvalidPortIgnored(String),

    // === SERVER MESSAGES ===
    ServerStarting(String),
    ServerListening(String),
    ServerExposed(String),
    ServerStopped,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),
}
