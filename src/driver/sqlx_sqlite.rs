use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteQueryResult},
    Sqlite, SqlitePool,
};
use tracing::instrument;

use crate::{debug_print, ConnectOptions, DatabaseConnection, DbErr, ExecResult, Statement};

use super::sqlx_common::*;

/// Defines the [sqlx::sqlite] connector
#[derive(Debug)]
pub struct SqlxSqliteConnector;

/// Defines a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqlxSqlitePoolConnection {
    pool: SqlitePool,
}

impl SqlxSqliteConnector {
    /// Add configuration options for the SQLite database
    #[instrument(level = "trace")]
    pub async fn connect(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
        let mut opt = options
            .url
            .parse::<SqliteConnectOptions>()
            .map_err(sqlx_error_to_conn_err)?
            .foreign_keys(true);
        use sqlx::ConnectOptions;
        if !options.sqlx_logging {
            opt = opt.disable_statement_logging();
        } else {
            opt = opt.log_statements(options.sqlx_logging_level);
        }
        // every connection to `sqlite::memory:` opens a fresh database
        let pool = options
            .sqlx_pool_options::<Sqlite>()
            .max_connections(1)
            .connect_with(opt)
            .await
            .map_err(sqlx_error_to_conn_err)?;
        Ok(Self::from_sqlx_sqlite_pool(pool))
    }

    /// Instantiate a sqlx pool connection to a [DatabaseConnection]
    pub fn from_sqlx_sqlite_pool(pool: SqlitePool) -> DatabaseConnection {
        DatabaseConnection::SqlxSqlitePoolConnection(SqlxSqlitePoolConnection { pool })
    }
}

impl SqlxSqlitePoolConnection {
    /// Execute a [Statement] on a SQLite backend
    #[instrument(level = "trace")]
    pub async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        debug_print!("{}", stmt);

        let res = sqlx::query(&stmt.sql)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_exec_err)?;
        Ok(res.into())
    }

    /// Explicitly close the SQLite connection
    pub async fn close(self) -> Result<(), DbErr> {
        self.pool.close().await;
        Ok(())
    }
}

impl From<SqliteQueryResult> for ExecResult {
    fn from(res: SqliteQueryResult) -> Self {
        ExecResult {
            rows_affected: res.rows_affected(),
            last_insert_id: res.last_insert_rowid() as u64,
        }
    }
}
