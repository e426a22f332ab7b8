//! Display implementation for shiftlog application messages.
//!
//! All user-facing text is defined here, in one match over [`Message`], so the
//! wording stays consistent between the CLI, the HTTP server logs and the
//! migration runner. Callers never format message text themselves:
//!
//! ```rust
//! use shiftlog::libs::messages::Message;
//!
//! assert_eq!(Message::EntryDeleted(3).to_string(), "Entry #3 deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryCreated(id, date) => format!("Entry #{} created for {}", id, date),
            Message::EntryUpdated(id, date) => format!("Entry #{} updated ({})", id, date),
            Message::EntryDeleted(id) => format!("Entry #{} deleted", id),
            Message::EntryNotFound(id) => format!("Entry #{} not found", id),
            Message::NoEntriesForPeriod(period) => format!("No entries for {}", period),
            Message::EntriesHeader(label) => format!("Time entries: {}", label),
            Message::EntriesTotal(count, hours) => format!("{} entries, {} hours", count, hours),
            Message::ConfirmDeleteEntry(id, date) => format!("Delete entry #{} ({})?", id, date),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === HOURS MESSAGES ===
            Message::ShiftHours(start, end, hours) => format!("{} - {}: {} hours", start, end, hours),

            // === EXPORT MESSAGES ===
            Message::ExportingPeriod(period, format) => format!("Exporting {} in {} format...", period, format),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigWizardHeader => "Shiftlog settings (leave the database empty for the default location)".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptBindAddress => "HTTP API address".to_string(),
            Message::PromptDefaultSite => "Default site location".to_string(),
            Message::InvalidBindAddress(addr) => format!("Invalid bind address: {}", addr),
            Message::InvalidPortIgnored(port) => format!("Ignoring invalid PORT value: {}", port),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Starting time tracker API on {}", addr),
            Message::ServerListening(addr) => format!("Time tracker API listening on http://{}", addr),
            Message::ServerExposed(addr) => format!(
                "API bound to non-loopback address {}. There is no authentication; restrict access with a firewall or reverse proxy.",
                addr
            ),
            Message::ServerStopped => "Time tracker API stopped".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
        };

        write!(f, "{}", text)
    }
}
