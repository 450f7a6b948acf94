//! A copy of a film held by a store.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "inventory"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub inventory_id: i32,
    pub film_id: Option<i32>,
    pub store_id: Option<i32>,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    InventoryId,
    FilmId,
    StoreId,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::InventoryId => "inventory_id",
            Self::FilmId => "film_id",
            Self::StoreId => "store_id",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::InventoryId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::FilmId => ColumnType::Integer.def().references(super::film::Column::Id),
            Self::StoreId => ColumnType::Integer.def().references(super::store::Column::StoreId),
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
            inventory_id: row.try_get("inventory_id")?,
            film_id: row.try_get("film_id")?,
            store_id: row.try_get("store_id")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", Nullable(&self.film_id), Nullable(&self.store_id))
    }
}
