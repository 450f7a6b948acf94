//! A title in the rental catalogue.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "film"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub language_id: i32,
    pub rental_duration: Option<i32>,
    pub rental_rate: f64,
    pub length: f64,
    pub replacement_cost: f64,
    pub rating: f64,
    pub last_update: Option<DateTime>,
    pub special_features: String,
    pub full_text: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    Id,
    Title,
    Description,
    ReleaseYear,
    LanguageId,
    RentalDuration,
    RentalRate,
    Length,
    ReplacementCost,
    Rating,
    LastUpdate,
    SpecialFeatures,
    FullText,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Description => "description",
            Self::ReleaseYear => "release_year",
            Self::LanguageId => "language_id",
            Self::RentalDuration => "rental_duration",
            Self::RentalRate => "rental_rate",
            Self::Length => "length",
            Self::ReplacementCost => "replacement_cost",
            Self::Rating => "rating",
            Self::LastUpdate => "last_update",
            Self::SpecialFeatures => "special_features",
            Self::FullText => "full_text",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::Id => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::Title => ColumnType::String(50).def().not_null(),
            Self::Description => ColumnType::String(62).def(),
            Self::ReleaseYear => ColumnType::Integer.def().not_null(),
            Self::LanguageId => ColumnType::Integer
                .def()
                .not_null()
                .references(super::language::Column::LanguageId),
            Self::RentalDuration => ColumnType::Integer.def(),
            Self::RentalRate => ColumnType::Float.def().not_null(),
            Self::Length => ColumnType::Float.def().not_null(),
            Self::ReplacementCost => ColumnType::Float.def().not_null(),
            Self::Rating => ColumnType::Float.def().not_null(),
            Self::LastUpdate => ColumnType::DateTime.def(),
            Self::SpecialFeatures => ColumnType::String(50).def().not_null(),
            Self::FullText => ColumnType::String(400).def().not_null(),
        }
    }
}

impl EntityTrait for Entity {
    type Model = Model;

    type Column = Column;
}

impl ModelTrait for Model {
    type Entity = Entity;

    fn from_row(row: &Row) -> Result<Self, DbErr> {
        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            release_year: row.try_get("release_year")?,
            language_id: row.try_get("language_id")?,
            rental_duration: row.try_get("rental_duration")?,
            rental_rate: row.try_get("rental_rate")?,
            length: row.try_get("length")?,
            replacement_cost: row.try_get("replacement_cost")?,
            rating: row.try_get("rating")?,
            last_update: row.try_get("last_update")?,
            special_features: row.try_get("special_features")?,
            full_text: row.try_get("full_text")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
