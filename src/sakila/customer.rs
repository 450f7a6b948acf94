//! A customer registered at a store.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "customer"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub customer_id: i32,
    pub store_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address_id: Option<i32>,
    pub is_active: Option<bool>,
    pub create_date: DateTime,
    pub last_update: Option<DateTime>,
    pub rental_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    CustomerId,
    StoreId,
    FirstName,
    LastName,
    Email,
    AddressId,
    IsActive,
    CreateDate,
    LastUpdate,
    RentalId,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::CustomerId => "customer_id",
            Self::StoreId => "store_id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::AddressId => "address_id",
            Self::IsActive => "is_active",
            Self::CreateDate => "create_date",
            Self::LastUpdate => "last_update",
            Self::RentalId => "rental_id",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::CustomerId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::StoreId => ColumnType::Integer.def().references(super::store::Column::StoreId),
            Self::FirstName => ColumnType::String(50).def().not_null(),
            Self::LastName => ColumnType::String(50).def().not_null(),
            Self::Email => ColumnType::String(50).def().not_null(),
            Self::AddressId => ColumnType::Integer
                .def()
                .references(super::address::Column::AddressId),
            Self::IsActive => ColumnType::Boolean.def(),
            Self::CreateDate => ColumnType::DateTime.def().not_null(),
            Self::LastUpdate => ColumnType::DateTime.def(),
            Self::RentalId => ColumnType::Integer.def().references(super::rental::Column::RentalId),
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
            customer_id: row.try_get("customer_id")?,
            store_id: row.try_get("store_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            address_id: row.try_get("address_id")?,
            is_active: row.try_get("is_active")?,
            create_date: row.try_get("create_date")?,
            last_update: row.try_get("last_update")?,
            rental_id: row.try_get("rental_id")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first_name, self.last_name)
    }
}
