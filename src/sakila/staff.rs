//! A member of staff working at a store.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "staff"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address_id: Option<i32>,
    pub store_id: Option<i32>,
    pub active: Option<bool>,
    pub username: String,
    pub password: String,
    pub last_update: Option<DateTime>,
    pub picture: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    StaffId,
    FirstName,
    LastName,
    AddressId,
    StoreId,
    Active,
    Username,
    Password,
    LastUpdate,
    Picture,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::StaffId => "staff_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::AddressId => "address_id",
            Self::StoreId => "store_id",
            Self::Active => "active",
            Self::Username => "username",
            Self::Password => "password",
            Self::LastUpdate => "last_update",
            Self::Picture => "picture",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::StaffId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::FirstName => ColumnType::String(50).def().not_null(),
            Self::LastName => ColumnType::String(50).def().not_null(),
            Self::AddressId => ColumnType::Integer
                .def()
                .references(super::address::Column::AddressId),
            Self::StoreId => ColumnType::Integer.def().references(super::store::Column::StoreId),
            Self::Active => ColumnType::Boolean.def(),
            Self::Username => ColumnType::String(50).def().not_null(),
            Self::Password => ColumnType::String(50).def().not_null(),
            Self::LastUpdate => ColumnType::DateTime.def(),
            Self::Picture => ColumnType::String(50).def().not_null(),
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
            staff_id: row.try_get("staff_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            address_id: row.try_get("address_id")?,
            store_id: row.try_get("store_id")?,
            active: row.try_get("active")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            last_update: row.try_get("last_update")?,
            picture: row.try_get("picture")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
