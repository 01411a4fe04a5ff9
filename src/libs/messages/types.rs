#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    InvalidTitle,
    TaskAlreadyExists,
    TaskNotFound(i64),
    NoTaskSelected,
    TaskCreated(String),
    TaskDeleted(i64),
    TasksHeader(String), // user name
    NoTasksFound(String),

    // === SUBTASK MESSAGES ===
    SubtaskNotFound(i64),
    InvalidSubtaskStatus(String),

    // === SHARING MESSAGES ===
    AssigneeAdded,
    AssigneeNotFound,

    // === ACCOUNT MESSAGES ===
    NameTaken,
    InvalidCredentials,
    InvalidUserName,
    InvalidPassword,
    InvalidLoginInput,
    UserNotFound(String),
    UserRegistered(String),
    UserLoggedIn(String),
    UserLoggedOut(String),
    UsersHeader,
    NoUsersFound,
    PasswordHashFailed(String),

    // === FORM MESSAGES ===
    MissingFormField(String),
    InvalidFormField(String),

    // === SERVER MESSAGES ===
    ServerStarting(String), // version
    ServerListening(String),
    ServerShuttingDown,
    ServerStopped,
    ServerReceivedCtrlC,
    ServerReceivedTerminate,
    SignalHandlerFailed(String),
    SoloModeEnabled(String), // database path
    WorkerFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigParseFailed(String),
    ConfigModuleServer,
    ConfigModuleDatabase,
    ConfigModuleSession,
    InvalidEnvValue(String, String), // key, value

    // === DATABASE MESSAGES ===
    DbQueryFailed,
    DbOpened(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerHost,
    PromptServerPort,
    PromptDatabasePath,
    PromptSoloDatabasePath,
    PromptCookieName,
    PromptSessionMaxAge,
}
