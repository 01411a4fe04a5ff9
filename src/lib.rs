//! # sharelist - shared todo lists
//!
//! A small web application for task lists that can be shared between users.
//!
//! ## Features
//!
//! - **Accounts**: registration, login and logout with argon2 password hashes
//! - **Tasks**: tasks made of subtasks with an open/done status
//! - **Paging**: subtasks are shown seven per page
//! - **Sharing**: any user can add other users to a task they can see
//! - **Solo mode**: the same dashboard for one person, without accounts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sharelist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
