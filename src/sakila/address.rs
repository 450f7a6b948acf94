//! A postal address shared by customers, staff and stores.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "address"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub address_id: i32,
    pub address: String,
    pub address2: String,
    pub district: String,
    pub city_id: Option<i32>,
    pub postal_code: String,
    pub phone: String,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    AddressId,
    Address,
    Address2,
    District,
    CityId,
    PostalCode,
    Phone,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::AddressId => "address_id",
            Self::Address => "address",
            Self::Address2 => "address2",
            Self::District => "district",
            Self::CityId => "city_id",
            Self::PostalCode => "postal_code",
            Self::Phone => "phone",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::AddressId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::Address => ColumnType::String(100).def().not_null(),
            Self::Address2 => ColumnType::String(100).def().not_null(),
            Self::District => ColumnType::String(50).def().not_null(),
            Self::CityId => ColumnType::Integer.def().references(super::city::Column::CityId),
            Self::PostalCode => ColumnType::String(50).def().not_null(),
            Self::Phone => ColumnType::String(50).def().not_null(),
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
            address_id: row.try_get("address_id")?,
            address: row.try_get("address")?,
            address2: row.try_get("address2")?,
            district: row.try_get("district")?,
            city_id: row.try_get("city_id")?,
            postal_code: row.try_get("postal_code")?,
            phone: row.try_get("phone")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.address, self.postal_code)
    }
}
