use sqlx::{
    postgres::{PgConnectOptions, PgQueryResult},
    PgPool, Postgres,
};
use tracing::instrument;

use crate::{debug_print, ConnectOptions, DatabaseConnection, DbErr, ExecResult, Statement};

use super::sqlx_common::*;

/// Defines the [sqlx::postgres] connector
#[derive(Debug)]
pub struct SqlxPostgresConnector;

/// Defines a sqlx PostgreSQL pool
#[derive(Debug, Clone)]
pub struct SqlxPostgresPoolConnection {
    pool: PgPool,
}

impl SqlxPostgresConnector {
    /// Add configuration options for the PostgreSQL database
    #[instrument(level = "trace")]
    pub async fn connect(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
        let mut opt = options
            .url
            .parse::<PgConnectOptions>()
            .map_err(sqlx_error_to_conn_err)?;
        use sqlx::ConnectOptions;
        if !options.sqlx_logging {
            opt = opt.disable_statement_logging();
        } else {
            opt = opt.log_statements(options.sqlx_logging_level);
        }
        let pool = options
            .sqlx_pool_options::<Postgres>()
            .connect_with(opt)
            .await
            .map_err(sqlx_error_to_conn_err)?;
        Ok(Self::from_sqlx_postgres_pool(pool))
    }

    /// Instantiate a sqlx pool connection to a [DatabaseConnection]
    pub fn from_sqlx_postgres_pool(pool: PgPool) -> DatabaseConnection {
        DatabaseConnection::SqlxPostgresPoolConnection(SqlxPostgresPoolConnection { pool })
    }
}

impl SqlxPostgresPoolConnection {
    /// Execute a [Statement] on a PostgreSQL backend
    #[instrument(level = "trace")]
    pub async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        debug_print!("{}", stmt);

        let res = sqlx::query(&stmt.sql)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_exec_err)?;
        Ok(res.into())
    }

    /// Explicitly close the PostgreSQL connection
    pub async fn close(self) -> Result<(), DbErr> {
        self.pool.close().await;
        Ok(())
    }
}

impl From<PgQueryResult> for ExecResult {
    fn from(res: PgQueryResult) -> Self {
        ExecResult {
            rows_affected: res.rows_affected(),
            last_insert_id: 0,
        }
    }
}
