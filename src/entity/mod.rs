mod active_row;
mod base_entity;
mod column;
mod model;
/// Re-export common types from the entity
pub mod prelude;
mod relation;

pub use active_row::*;
pub use base_entity::*;
pub use column::*;
pub use model::{ModelTrait, Nullable, Row};
pub use relation::*;

pub use strum::EnumIter;
pub use strum::IntoEnumIterator as Iterable;

/// A date and time without time zone, the Rust side of [`ColumnType::DateTime`]
pub type DateTime = chrono::NaiveDateTime;
