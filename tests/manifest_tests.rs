#![allow(unused_imports, dead_code)]

pub mod common;

use pretty_assertions::assert_eq;
use sakila_schema::{sakila, DbBackend, DbErr, SchemaManifest};

const GOLDEN: &str = include_str!("golden/sakila_manifest.json");

#[test]
fn manifest_matches_golden_file() -> Result<(), DbErr> {
    common::setup();

    let golden = SchemaManifest::from_json(GOLDEN)?;
    for backend in [DbBackend::MySql, DbBackend::Postgres, DbBackend::Sqlite] {
        assert_eq!(sakila::schema(backend).manifest(), golden);
    }
    Ok(())
}

#[test]
fn every_entity_but_payment_tracks_last_update() -> Result<(), DbErr> {
    let manifest = SchemaManifest::from_json(GOLDEN)?;
    let without: Vec<_> = manifest
        .tables
        .iter()
        .filter(|table| table.column("last_update").is_none())
        .map(|table| table.name.as_str())
        .collect();
    assert_eq!(without, ["payment"]);

    for table in manifest.tables.iter() {
        if let Some(col) = table.column("last_update") {
            assert_eq!(col.column_type, "timestamp");
            assert!(col.nullable);
        }
    }
    Ok(())
}

#[test]
fn associative_tables_are_keyed_by_their_references() -> Result<(), DbErr> {
    let manifest = sakila::schema(DbBackend::Sqlite).manifest();
    for name in ["film_actor", "film_category"] {
        let table = manifest.table(name).ok_or_else(|| DbErr::Custom(name.to_owned()))?;
        let keys: Vec<_> = table.columns.iter().filter(|col| col.primary_key).collect();
        assert_eq!(keys.len(), 2);
        for key in keys {
            assert!(key.references.is_some());
            assert!(!key.auto_increment);
        }
    }
    Ok(())
}

#[test]
fn manifest_survives_json() -> Result<(), DbErr> {
    let manifest = sakila::schema(DbBackend::Postgres).manifest();
    assert_eq!(SchemaManifest::from_json(&manifest.to_json()?)?, manifest);
    Ok(())
}
