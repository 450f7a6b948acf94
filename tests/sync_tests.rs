#![allow(unused_imports, dead_code)]

pub mod common;

use pretty_assertions::assert_eq;
use sakila_schema::{
    sakila, ConnectionTrait, DbBackend, DbErr, EntityTrait, ExecResult, MockDatabase, Schema,
    SchemaBuilder, Statement,
};

#[tokio::test]
async fn sync_postgres_defers_cyclic_foreign_keys() -> Result<(), DbErr> {
    common::setup();

    let db = MockDatabase::new(DbBackend::Postgres).into_connection();
    sakila::schema(DbBackend::Postgres).sync(&db).await?;

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 17);
    assert_eq!(log, sakila::schema(DbBackend::Postgres).statements()?);
    assert!(log[0]
        .sql
        .starts_with(r#"CREATE TABLE IF NOT EXISTS "category" ("#));
    assert!(log[..15]
        .iter()
        .all(|stmt| stmt.sql.starts_with("CREATE TABLE IF NOT EXISTS")));
    assert_eq!(
        log[15..].to_vec(),
        [
            Statement::from_string(
                DbBackend::Postgres,
                r#"ALTER TABLE "staff" ADD CONSTRAINT "fk-staff-store_id" FOREIGN KEY ("store_id") REFERENCES "store" ("store_id")"#
            ),
            Statement::from_string(
                DbBackend::Postgres,
                r#"ALTER TABLE "rental" ADD CONSTRAINT "fk-rental-customer_id" FOREIGN KEY ("customer_id") REFERENCES "customer" ("customer_id")"#
            ),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn sync_sqlite_inlines_every_foreign_key() -> Result<(), DbErr> {
    let db = MockDatabase::new(DbBackend::Sqlite).into_connection();
    sakila::schema(DbBackend::Sqlite).sync(&db).await?;

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 15);
    assert!(log.iter().all(|stmt| stmt.db_backend == DbBackend::Sqlite));
    let staff = log
        .iter()
        .find(|stmt| stmt.sql.starts_with(r#"CREATE TABLE IF NOT EXISTS "staff""#))
        .ok_or_else(|| DbErr::Custom("staff was not created".to_owned()))?;
    assert!(staff
        .sql
        .contains(r#"FOREIGN KEY ("store_id") REFERENCES "store" ("store_id")"#));
    Ok(())
}

#[tokio::test]
async fn sync_stops_at_first_failure() {
    let db = MockDatabase::new(DbBackend::MySql)
        .append_exec_results([
            Ok(ExecResult::default()),
            Ok(ExecResult::default()),
            Err(DbErr::Exec("table `film` is locked".to_owned())),
        ])
        .into_connection();

    assert_eq!(
        sakila::schema(DbBackend::MySql).sync(&db).await,
        Err(DbErr::Exec("table `film` is locked".to_owned()))
    );
    let log = db.into_transaction_log();
    assert_eq!(log.len(), 3);
    assert!(log[2].sql.starts_with("CREATE TABLE IF NOT EXISTS `film`"));
}

#[tokio::test]
async fn invalid_schema_executes_nothing() {
    let db = MockDatabase::new(DbBackend::Postgres).into_connection();
    let schema = SchemaBuilder::new(Schema::new(DbBackend::Postgres))
        .register(sakila::Address)
        .register(sakila::City);

    assert!(matches!(schema.sync(&db).await, Err(DbErr::Schema(_))));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn backend_must_match_connection() {
    let db = MockDatabase::new(DbBackend::Postgres).into_connection();
    assert!(matches!(
        sakila::schema(DbBackend::Sqlite).sync(&db).await,
        Err(DbErr::Schema(_))
    ));
    assert!(db.into_transaction_log().is_empty());
}
