use sqlx::{
    mysql::{MySqlConnectOptions, MySqlQueryResult},
    MySql, MySqlPool,
};
use tracing::instrument;

use crate::{debug_print, ConnectOptions, DatabaseConnection, DbErr, ExecResult, Statement};

use super::sqlx_common::*;

/// Defines the [sqlx::mysql] connector
#[derive(Debug)]
pub struct SqlxMySqlConnector;

/// Defines a sqlx MySQL pool
#[derive(Debug, Clone)]
pub struct SqlxMySqlPoolConnection {
    pool: MySqlPool,
}

impl SqlxMySqlConnector {
    /// Add configuration options for the MySQL database
    #[instrument(level = "trace")]
    pub async fn connect(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
        let mut opt = options
            .url
            .parse::<MySqlConnectOptions>()
            .map_err(sqlx_error_to_conn_err)?;
        use sqlx::ConnectOptions;
        if !options.sqlx_logging {
            opt = opt.disable_statement_logging();
        } else {
            opt = opt.log_statements(options.sqlx_logging_level);
        }
        let pool = options
            .sqlx_pool_options::<MySql>()
            .connect_with(opt)
            .await
            .map_err(sqlx_error_to_conn_err)?;
        Ok(Self::from_sqlx_mysql_pool(pool))
    }

    /// Instantiate a sqlx pool connection to a [DatabaseConnection]
    pub fn from_sqlx_mysql_pool(pool: MySqlPool) -> DatabaseConnection {
        DatabaseConnection::SqlxMySqlPoolConnection(SqlxMySqlPoolConnection { pool })
    }
}

impl SqlxMySqlPoolConnection {
    /// Execute a [Statement] on a MySQL backend
    #[instrument(level = "trace")]
    pub async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        debug_print!("{}", stmt);

        let res = sqlx::query(&stmt.sql)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_exec_err)?;
        Ok(res.into())
    }

    /// Explicitly close the MySQL connection
    pub async fn close(self) -> Result<(), DbErr> {
        self.pool.close().await;
        Ok(())
    }
}

impl From<MySqlQueryResult> for ExecResult {
    fn from(res: MySqlQueryResult) -> Self {
        ExecResult {
            rows_affected: res.rows_affected(),
            last_insert_id: res.last_insert_id(),
        }
    }
}
