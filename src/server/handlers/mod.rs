/// The task dashboard.
pub mod dash;

/// Login page, sign-in, registration and logout.
pub mod login;
