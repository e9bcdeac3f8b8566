use thiserror::Error;

/// Errors surfaced by directory operations.
///
/// The two constraint violations the schema can produce get their own
/// variants so callers can tell a duplicate email from a dangling client
/// reference; everything else passes through as the driver error.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("a client with this email already exists")]
    DuplicateEmail,

    #[error("no client with this id exists")]
    UnknownClient,

    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    // unique_violation: only the email column carries a
                    // unique constraint
                    "23505" => return DirectoryError::DuplicateEmail,
                    // foreign_key_violation: clients_phones -> clients
                    "23503" => return DirectoryError::UnknownClient,
                    _ => {}
                }
            }
        }
        DirectoryError::Database(err)
    }
}
