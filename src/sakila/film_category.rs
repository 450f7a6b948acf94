//! Associates films with categories.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "film_category"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub film_id: i32,
    pub category_id: i32,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    FilmId,
    CategoryId,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::FilmId => "film_id",
            Self::CategoryId => "category_id",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::FilmId => ColumnType::Integer
                .def()
                .primary_key()
                .references(super::film::Column::Id),
            Self::CategoryId => ColumnType::Integer
                .def()
                .primary_key()
                .references(super::category::Column::Id),
            Self::LastUpdate => ColumnType::DateTime.def(),
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
            film_id: row.try_get("film_id")?,
            category_id: row.try_get("category_id")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.film_id, self.category_id)
    }
}
