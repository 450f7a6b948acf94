#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! <div align="center">
//!
//!   <h1>sakila-schema</h1>
//!
//!   <p>
//!     <strong>🐚 The Sakila DVD-rental schema, declared as entities</strong>
//!   </p>
//!
//! </div>
//!
//! # sakila-schema
//!
//! Fifteen entities describing a DVD-rental business: the film catalogue and its cast,
//! stores and their stock, customers, rentals and payments. Each entity binds a table,
//! declares its columns with types, nullability, identity and foreign keys, and knows
//! how to render a row of its own for humans.
//!
//! Statements are built with [SeaQuery](https://github.com/SeaQL/sea-query), so the same
//! definitions create the schema on SQLite, PostgreSQL and MySQL.
//!
//! ## Entity
//!
//! ```
//! use sakila_schema::{sakila::country, EntityTrait};
//! use sakila_schema::sea_query::{QueryStatementWriter, SqliteQueryBuilder};
//!
//! let row = country::Entity::insert().set(country::Column::Country, "Canada");
//! assert_eq!(
//!     row.into_insert_statement()?.to_string(SqliteQueryBuilder),
//!     r#"INSERT INTO "country" ("country") VALUES ('Canada')"#
//! );
//! # Ok::<(), sakila_schema::DbErr>(())
//! ```
//!
//! ## Schema
//!
//! ```
//! use sakila_schema::{sakila, DbBackend};
//!
//! let schema = sakila::schema(DbBackend::Postgres);
//! let plan = schema.creation_plan();
//! assert_eq!(plan.order.first(), Some(&"category"));
//! assert_eq!(plan.deferred.len(), 2);
//! ```
//!
//! ## Sync
//!
//! ```ignore
//! let db = Database::connect("sqlite::memory:").await?;
//! sakila::schema(db.get_database_backend()).sync(&db).await?;
//! ```
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/SeaQL/sea-query/master/docs/SeaQL icon dark.png"
)]

mod database;
mod driver;
/// Entity definitions and the traits they implement
pub mod entity;
/// Error types for all database and schema operations
pub mod error;
/// The Sakila entities
pub mod sakila;
/// Turning entities into tables
pub mod schema;
#[doc(hidden)]
pub mod util;

pub use database::*;
pub use driver::*;
pub use entity::*;
pub use error::*;
pub use schema::*;

pub use sea_query;
pub use strum;
