//! Associates actors with the films they appear in.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "film_actor"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub actor_id: i32,
    pub film_id: i32,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    ActorId,
    FilmId,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::ActorId => "actor_id",
            Self::FilmId => "film_id",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::ActorId => ColumnType::Integer
                .def()
                .primary_key()
                .references(super::actor::Column::ActorId),
            Self::FilmId => ColumnType::Integer
                .def()
                .primary_key()
                .references(super::film::Column::Id),
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
            actor_id: row.try_get("actor_id")?,
            film_id: row.try_get("film_id")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.film_id)
    }
}
