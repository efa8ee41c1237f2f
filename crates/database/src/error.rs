use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("{entity} {id} was not found.")]
    NotFound { entity: &'static str, id: i64 },

    /// A show referenced an artist or venue that does not exist.
    #[error("{message}")]
    InvalidReference { field: &'static str, message: String },

    /// The record is still referenced by scheduled shows and cannot be removed.
    #[error("{entity} {name} still has {shows} scheduled show(s).")]
    ReferencedBy {
        entity: &'static str,
        name: String,
        shows: i64,
    },
}
