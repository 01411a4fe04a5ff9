//! Command-line interface.
//!
//! ```bash
//! sharelist serve --port 8080     # multi-user web app
//! sharelist serve --solo          # single-user dashboard, no login
//! sharelist init                  # configuration wizard
//! sharelist users                 # registered accounts
//! sharelist tasks alice           # tasks visible to alice
//! sharelist migrations status     # schema version
//! ```

pub mod init;
pub mod migrations;
pub mod serve;
pub mod tasks;
pub mod users;

use crate::libs::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Database selection shared by the maintenance commands.
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// Use the solo mode database
    #[arg(long)]
    solo: bool,
}

impl DatabaseArgs {
    pub fn path(&self) -> Result<PathBuf> {
        Config::read()?.with_env_overrides().database_path(self.solo)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the web application")]
    Serve(serve::ServeArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Database migration status and history")]
    Migrations(migrations::MigrationsArgs),
    #[command(about = "List registered users")]
    Users(users::UsersArgs),
    #[command(about = "List the tasks a user can see")]
    Tasks(tasks::TasksArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
            Commands::Users(args) => users::cmd(args),
            Commands::Tasks(args) => tasks::cmd(args),
        }
    }
}
