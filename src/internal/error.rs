use thiserror::Error;

/// Errors raised by the config store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Wraps all SeaORM errors
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Raised while opening the SQLite pool, before SeaORM takes over
    #[error(transparent)]
    Sqlx(#[from] sea_orm::sqlx::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A stored or requested value that cannot be represented
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
