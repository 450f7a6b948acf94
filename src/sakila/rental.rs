//! The rental of one inventory item to a customer.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "rental"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub rental_id: i32,
    pub rental_date: Option<DateTime>,
    pub inventory_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub return_date: Option<DateTime>,
    pub staff_id: Option<i32>,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    RentalId,
    RentalDate,
    InventoryId,
    CustomerId,
    ReturnDate,
    StaffId,
    LastUpdate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::RentalId => "rental_id",
            Self::RentalDate => "rental_date",
            Self::InventoryId => "inventory_id",
            Self::CustomerId => "customer_id",
            Self::ReturnDate => "return_date",
            Self::StaffId => "staff_id",
            Self::LastUpdate => "last_update",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::RentalId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::RentalDate => ColumnType::DateTime.def(),
            Self::InventoryId => ColumnType::Integer
                .def()
                .references(super::inventory::Column::InventoryId),
            Self::CustomerId => ColumnType::Integer
                .def()
                .references(super::customer::Column::CustomerId),
            Self::ReturnDate => ColumnType::DateTime.def(),
            Self::StaffId => ColumnType::Integer.def().references(super::staff::Column::StaffId),
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
            rental_id: row.try_get("rental_id")?,
            rental_date: row.try_get("rental_date")?,
            inventory_id: row.try_get("inventory_id")?,
            customer_id: row.try_get("customer_id")?,
            return_date: row.try_get("return_date")?,
            staff_id: row.try_get("staff_id")?,
            last_update: row.try_get("last_update")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            Nullable(&self.rental_date),
            Nullable(&self.return_date)
        )
    }
}
