//! A city within a country.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "city"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub city_id: i32,
    pub city: String,
    pub country_id: Option<i32>,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    CityId,
    City,
    CountryId,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::CityId => "city_id",
            Self::City => "city",
            Self::CountryId => "country_id",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::CityId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::City => ColumnType::String(50).def().not_null(),
            Self::CountryId => ColumnType::Integer
                .def()
                .references(super::country::Column::CountryId),
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
            city_id: row.try_get("city_id")?,
            city: row.try_get("city")?,
            country_id: row.try_get("country_id")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.city)
    }
}
