//! A performer credited in films.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "actor"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub actor_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    ActorId,
    FirstName,
    LastName,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::ActorId => "actor_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::ActorId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::FirstName => ColumnType::String(50).def().not_null(),
            Self::LastName => ColumnType::String(50).def().not_null(),
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
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first_name, self.last_name)
    }
}
