//! Error type for `people-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A stored row holds a value the domain type cannot represent.
  #[error("corrupt row {id}: {reason}")]
  Corrupt { id: i64, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
