//! Display implementation for sharelist messages.
//!
//! All user-facing text lives here: the strings shown on the dashboard when an
//! action is rejected, the console output of the CLI commands and the server
//! lifecycle notices. Keeping them in one match makes it obvious when a new
//! variant has no wording yet.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::InvalidTitle => "Please enter a valid title".to_string(),
            Message::TaskAlreadyExists => "This task already exists".to_string(),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::NoTaskSelected => "Select a task first".to_string(),
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskDeleted(id) => format!("Task with ID {} deleted", id),
            Message::TasksHeader(name) => format!("Tasks shared with {}:", name),
            Message::NoTasksFound(name) => format!("No tasks found for {}", name),

            // === SUBTASK MESSAGES ===
            Message::SubtaskNotFound(id) => format!("Subtask with ID {} not found", id),
            Message::InvalidSubtaskStatus(value) => format!("Invalid subtask status: '{}'", value),

            // === SHARING MESSAGES ===
            Message::AssigneeAdded => "User added".to_string(),
            Message::AssigneeNotFound => "User does not exist".to_string(),

            // === ACCOUNT MESSAGES ===
            Message::NameTaken => "This username is already taken".to_string(),
            Message::InvalidCredentials => "Incorrect username or password".to_string(),
            Message::InvalidUserName => "Please enter a valid username (1 to 50 characters)".to_string(),
            Message::InvalidPassword => "Please enter a password".to_string(),
            Message::InvalidLoginInput => "Please enter a username and a password".to_string(),
            Message::UserNotFound(name) => format!("User '{}' not found", name),
            Message::UserRegistered(name) => format!("User '{}' registered", name),
            Message::UserLoggedIn(name) => format!("User '{}' logged in", name),
            Message::UserLoggedOut(name) => format!("User '{}' logged out", name),
            Message::UsersHeader => "Registered users:".to_string(),
            Message::NoUsersFound => "No users registered yet.".to_string(),
            Message::PasswordHashFailed(error) => format!("Failed to hash password: {}", error),

            // === FORM MESSAGES ===
            Message::MissingFormField(field) => format!("Missing form field '{}'", field),
            Message::InvalidFormField(field) => format!("Invalid value for form field '{}'", field),

            // === SERVER MESSAGES ===
            Message::ServerStarting(version) => format!("Starting sharelist {}", version),
            Message::ServerListening(address) => format!("Server running on http://{}", address),
            Message::ServerShuttingDown => "Server shutting down...".to_string(),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ServerReceivedCtrlC => "Received Ctrl+C, shutting down".to_string(),
            Message::ServerReceivedTerminate => "Received terminate signal, shutting down".to_string(),
            Message::SignalHandlerFailed(error) => format!("Failed to install signal handler: {}", error),
            Message::SoloModeEnabled(path) => format!("Solo mode: single local user, database at {}", path),
            Message::WorkerFailed(error) => format!("Request worker failed: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::ConfigParseFailed(err) => format!("Failed to parse configuration file: {}", err),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleSession => "Session settings".to_string(),
            Message::InvalidEnvValue(key, value) => format!("Invalid value '{}' for {}, ignoring it", value, key),

            // === DATABASE MESSAGES ===
            Message::DbQueryFailed => "Database query failed".to_string(),
            Message::DbOpened(path) => format!("Using database at {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptServerHost => "Listen address".to_string(),
            Message::PromptServerPort => "Listen port".to_string(),
            Message::PromptDatabasePath => "Database file".to_string(),
            Message::PromptSoloDatabasePath => "Solo mode database file".to_string(),
            Message::PromptCookieName => "Session cookie name".to_string(),
            Message::PromptSessionMaxAge => "Session lifetime in seconds".to_string(),
        };
        write!(f, "{}", text)
    }
}
