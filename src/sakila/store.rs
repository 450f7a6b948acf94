//! A rental store and its manager.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "store"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub store_id: i32,
    pub manager_staff_id: Option<i32>,
    pub address_id: Option<i32>,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    StoreId,
    ManagerStaffId,
    AddressId,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::StoreId => "store_id",
            Self::ManagerStaffId => "manager_staff_id",
            Self::AddressId => "address_id",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::StoreId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::ManagerStaffId => ColumnType::Integer
                .def()
                .references(super::staff::Column::StaffId),
            Self::AddressId => ColumnType::Integer
                .def()
                .references(super::address::Column::AddressId),
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
            store_id: row.try_get("store_id")?,
            manager_staff_id: row.try_get("manager_staff_id")?,
            address_id: row.try_get("address_id")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.store_id, Nullable(&self.manager_staff_id))
    }
}
