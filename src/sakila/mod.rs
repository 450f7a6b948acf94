//! The Sakila DVD-rental schema: films and their cast, stores and their stock,
//! customers, rentals and payments, and the address geography they share.
//!
//! ```
//! use sakila_schema::{sakila, DbBackend, EntityTrait};
//!
//! let schema = sakila::schema(DbBackend::Sqlite);
//! assert!(schema.validate().is_ok());
//!
//! let country = sakila::Country::insert()
//!     .set(sakila::country::Column::Country, "Canada")
//!     .into_model(Some(1))
//!     .unwrap();
//! assert_eq!(country.to_string(), "Canada");
//! ```

pub mod actor;
pub mod address;
pub mod category;
pub mod city;
pub mod country;
pub mod customer;
pub mod film;
pub mod film_actor;
pub mod film_category;
pub mod inventory;
pub mod language;
pub mod payment;
pub mod rental;
pub mod staff;
pub mod store;

pub use actor::Entity as Actor;
pub use address::Entity as Address;
pub use category::Entity as Category;
pub use city::Entity as City;
pub use country::Entity as Country;
pub use customer::Entity as Customer;
pub use film::Entity as Film;
pub use film_actor::Entity as FilmActor;
pub use film_category::Entity as FilmCategory;
pub use inventory::Entity as Inventory;
pub use language::Entity as Language;
pub use payment::Entity as Payment;
pub use rental::Entity as Rental;
pub use staff::Entity as Staff;
pub use store::Entity as Store;

use crate::{DbBackend, Schema, SchemaBuilder};

/// Collect every Sakila entity into a [SchemaBuilder] for the given backend.
///
/// Registration order does not need to respect foreign keys,
/// [`SchemaBuilder::sync`] sorts the tables before creating them.
pub fn schema(db_backend: DbBackend) -> SchemaBuilder {
    SchemaBuilder::new(Schema::new(db_backend))
        .register(Category)
        .register(FilmCategory)
        .register(Film)
        .register(Language)
        .register(FilmActor)
        .register(Actor)
        .register(Inventory)
        .register(Rental)
        .register(Customer)
        .register(Payment)
        .register(Address)
        .register(Staff)
        .register(Store)
        .register(City)
        .register(Country)
}
