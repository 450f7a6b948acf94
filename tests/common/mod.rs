use tracing_subscriber::EnvFilter;

/// Install a subscriber printing through the test harness, honouring `RUST_LOG`
pub fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `DATABASE_URL` from the environment or `.env`, an in-memory SQLite database otherwise
pub fn database_url() -> String {
    dotenv::dotenv().ok();
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_owned())
}
