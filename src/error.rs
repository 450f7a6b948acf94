#[cfg(feature = "sqlx-dep")]
use std::sync::Arc;
use thiserror::Error;

/// An error from unsuccessful schema or database operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DbErr {
    /// There was a problem with the database connection
    #[error("Connection Error: {0}")]
    Conn(String),
    /// A statement did not execute successfully
    #[error("Execution Error: {0}")]
    Exec(String),
    /// The entity definitions are inconsistent, e.g. a foreign key targets an unregistered table
    #[error("Schema Error: {0}")]
    Schema(String),
    /// A required column was left unset while preparing a new row
    #[error("Missing Value: `{table}`.`{column}` is required")]
    MissingValue {
        /// Table of the row being prepared
        table: &'static str,
        /// The required column
        column: &'static str,
    },
    /// Error occurred while reading a value as the target type
    #[error("Type Error: {0}")]
    Type(String),
    /// A custom error
    #[error("Custom Error: {0}")]
    Custom(String),
    /// Error translated from Sqlx
    #[cfg(feature = "sqlx-dep")]
    #[error("Sqlx Error: {0}")]
    Sqlx(ErrFromSqlx),
}

/// A wrapper around an error raised by sqlx
#[cfg(feature = "sqlx-dep")]
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ErrFromSqlx {
    inner: Arc<sqlx::Error>,
    message: String,
}

#[cfg(feature = "sqlx-dep")]
impl ErrFromSqlx {
    /// The underlying sqlx error
    pub fn inner(&self) -> &sqlx::Error {
        &self.inner
    }
}

#[cfg(feature = "sqlx-dep")]
impl From<sqlx::Error> for ErrFromSqlx {
    fn from(e: sqlx::Error) -> Self {
        let message = e.to_string();
        Self {
            inner: Arc::new(e),
            message,
        }
    }
}

#[cfg(feature = "sqlx-dep")]
impl PartialEq for ErrFromSqlx {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

#[cfg(feature = "sqlx-dep")]
impl From<sqlx::Error> for DbErr {
    fn from(e: sqlx::Error) -> Self {
        Self::Sqlx(e.into())
    }
}

impl From<sea_query::error::Error> for DbErr {
    fn from(e: sea_query::error::Error) -> Self {
        Self::Custom(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::DbErr;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_value_message() {
        let err = DbErr::MissingValue {
            table: "address",
            column: "address",
        };
        assert_eq!(
            err.to_string(),
            "Missing Value: `address`.`address` is required"
        );
    }

    #[test]
    fn test_schema_error_message() {
        assert_eq!(
            DbErr::Schema("unknown table `film`".to_owned()).to_string(),
            "Schema Error: unknown table `film`"
        );
    }
}
