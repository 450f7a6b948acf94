use crate::{
    debug_print, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, ExecResult, Statement,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tracing::instrument;

/// Defines a Mock database suitable for testing
#[derive(Debug)]
pub struct MockDatabase {
    db_backend: DbBackend,
    exec_results: Vec<Result<ExecResult, DbErr>>,
}

/// A mock connection, recording every statement it is asked to execute
#[derive(Debug)]
pub struct MockDatabaseConnection {
    db_backend: DbBackend,
    counter: AtomicUsize,
    exec_results: Vec<Result<ExecResult, DbErr>>,
    transaction_log: Mutex<Vec<Statement>>,
}

impl MockDatabase {
    /// Instantiate a mock database with a [DbBackend] to simulate real
    /// world SQL databases
    pub fn new(db_backend: DbBackend) -> Self {
        Self {
            db_backend,
            exec_results: Vec::new(),
        }
    }

    /// Queue the results of upcoming `execute` calls, in order.
    /// Once the queue runs dry every further statement succeeds with a default [ExecResult].
    pub fn append_exec_results<I>(mut self, results: I) -> Self
    where
        I: IntoIterator<Item = Result<ExecResult, DbErr>>,
    {
        self.exec_results.extend(results);
        self
    }

    /// Create a database connection
    pub fn into_connection(self) -> DatabaseConnection {
        DatabaseConnection::MockDatabaseConnection(Arc::new(MockDatabaseConnection {
            db_backend: self.db_backend,
            counter: AtomicUsize::new(0),
            exec_results: self.exec_results,
            transaction_log: Mutex::new(Vec::new()),
        }))
    }
}

impl MockDatabaseConnection {
    /// Get the [DbBackend] being simulated
    pub fn get_database_backend(&self) -> DbBackend {
        self.db_backend
    }

    /// Record the statement and hand back the next queued result
    #[instrument(level = "trace")]
    pub fn execute(&self, statement: Statement) -> Result<ExecResult, DbErr> {
        debug_print!("{}", statement);
        let counter = self.counter.fetch_add(1, Ordering::SeqCst);
        self.transaction_log
            .lock()
            .map_err(|e| DbErr::Conn(format!("Mock transaction log poisoned: {e}")))?
            .push(statement);
        match self.exec_results.get(counter) {
            Some(result) => result.clone(),
            None => Ok(ExecResult::default()),
        }
    }

    /// Take the statements recorded so far, leaving the log empty
    pub fn drain_transaction_log(&self) -> Vec<Statement> {
        match self.transaction_log.lock() {
            Ok(mut log) => std::mem::take(&mut *log),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

#[async_trait::async_trait]
impl ConnectionTrait for MockDatabaseConnection {
    fn get_database_backend(&self) -> DbBackend {
        self.db_backend
    }

    async fn execute(&self, stmt: Statement) -> Result<ExecResult, DbErr> {
        MockDatabaseConnection::execute(self, stmt)
    }

    fn is_mock_connection(&self) -> bool {
        true
    }
}
