use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Arguments that don't describe a valid book or query
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<manga_manager_db::CatalogError> for CliError {
    fn from(e: manga_manager_db::CatalogError) -> Self {
        if e.is_validation() {
            Self::InvalidInput(e.to_string())
        } else {
            Self::Database(e.to_string())
        }
    }
}
