use thiserror::Error;

/// Errors produced by Entity Store operations.
///
/// Queries that legitimately find nothing return `Ok(None)` or an empty
/// `Vec`, never an error; this type only covers genuine storage failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
