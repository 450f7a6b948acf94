//! A category films are filed under.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "category"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i32,
    pub name: String,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    Id,
    Name,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::Id => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::Name => ColumnType::String(50).def().not_null(),
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
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
