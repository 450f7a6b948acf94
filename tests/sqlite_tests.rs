#![cfg(all(feature = "sqlx-sqlite", feature = "runtime-tokio"))]
#![allow(unused_imports, dead_code)]

pub mod common;

use pretty_assertions::assert_eq;
use sakila_schema::{
    sakila::{self, city, country, film_category},
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, EntityTrait,
};

async fn connect() -> Result<Option<DatabaseConnection>, DbErr> {
    common::setup();
    let url = common::database_url();
    if !DbBackend::Sqlite.is_prefix_of(&url) {
        return Ok(None);
    }
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);
    Ok(Some(Database::connect(opt).await?))
}

#[tokio::test]
async fn create_and_fill_sakila() -> Result<(), DbErr> {
    let Some(db) = connect().await? else {
        return Ok(());
    };
    let backend = db.get_database_backend();
    sakila::schema(backend).sync(&db).await?;

    let canada = country::Entity::insert().set(country::Column::Country, "Canada");
    let res = db
        .execute(backend.build(&canada.clone().into_insert_statement()?))
        .await?;
    assert_eq!(res.rows_affected, 1);
    let canada = canada.into_model(Some(res.last_insert_id as i32))?;
    assert_eq!(canada.to_string(), "Canada");

    let toronto = city::Entity::insert()
        .set(city::Column::City, "Toronto")
        .set(city::Column::CountryId, canada.country_id);
    let res = db
        .execute(backend.build(&toronto.clone().into_insert_statement()?))
        .await?;
    let toronto = toronto.into_model(Some(res.last_insert_id as i32))?;
    assert_eq!(toronto.country_id, Some(canada.country_id));
    assert_eq!(toronto.to_string(), "Toronto");

    // the store enforces references
    let nowhere = city::Entity::insert()
        .set(city::Column::City, "Nowhere")
        .set(city::Column::CountryId, canada.country_id + 100);
    assert!(db
        .execute(backend.build(&nowhere.into_insert_statement()?))
        .await
        .is_err());

    db.close().await
}

#[tokio::test]
async fn sync_twice_is_harmless() -> Result<(), DbErr> {
    let Some(db) = connect().await? else {
        return Ok(());
    };
    sakila::schema(DbBackend::Sqlite).sync(&db).await?;
    sakila::schema(DbBackend::Sqlite).sync(&db).await?;
    db.close().await
}

#[tokio::test]
async fn associative_rows_are_unique() -> Result<(), DbErr> {
    let Some(db) = connect().await? else {
        return Ok(());
    };
    sakila::schema(DbBackend::Sqlite).sync(&db).await?;
    db.execute_unprepared(r#"INSERT INTO "category" ("name") VALUES ('Horror')"#)
        .await?;
    db.execute_unprepared(r#"INSERT INTO "language" ("name") VALUES ('English')"#)
        .await?;
    db.execute_unprepared(
        r#"INSERT INTO "film" ("title", "release_year", "language_id", "rental_rate", "length", "replacement_cost", "rating", "special_features", "full_text")
        VALUES ('ACADEMY DINOSAUR', 2006, 1, 0.99, 86, 20.99, 1.0, 'Deleted Scenes', 'academy dinosaur')"#,
    )
    .await?;

    let link = film_category::Entity::insert()
        .set(film_category::Column::FilmId, 1)
        .set(film_category::Column::CategoryId, 1);
    let stmt = DbBackend::Sqlite.build(&link.clone().into_insert_statement()?);
    db.execute(stmt.clone()).await?;
    assert!(db.execute(stmt).await.is_err());
    assert_eq!(link.into_model(None)?.to_string(), "1, 1");

    db.close().await
}
