//! A payment received for a rental.

use crate::entity::prelude::*;
use std::fmt;

#[derive(Copy, Clone, Default, Debug)]
pub struct Entity;

impl EntityName for Entity {
    fn table_name(&self) -> &'static str {
        "payment"
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub payment_id: i32,
    pub customer_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub rental_id: Option<i32>,
    pub amount: f64,
    pub payment_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Column {
    PaymentId,
    CustomerId,
    StaffId,
    RentalId,
    Amount,
    PaymentDate,
}

impl ColumnTrait for Column {
    type EntityName = Entity;

    fn as_str(&self) -> &'static str {
        match self {
            Self::PaymentId => "payment_id",
            Self::CustomerId => "customer_id",
            Self::StaffId => "staff_id",
            Self::RentalId => "rental_id",
            Self::Amount => "amount",
            Self::PaymentDate => "payment_date",
        }
    }

    fn def(&self) -> ColumnDef {
        match self {
            Self::PaymentId => ColumnType::Integer.def().primary_key().auto_increment(),
            Self::CustomerId => ColumnType::Integer
                .def()
                .references(super::customer::Column::CustomerId),
            Self::StaffId => ColumnType::Integer.def().references(super::staff::Column::StaffId),
            Self::RentalId => ColumnType::Integer.def().references(super::rental::Column::RentalId),
            Self::Amount => ColumnType::Float.def().not_null(),
            Self::PaymentDate => ColumnType::DateTime.def(),
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
            payment_id: row.try_get("payment_id")?,
            customer_id: row.try_get("customer_id")?,
            staff_id: row.try_get("staff_id")?,
            rental_id: row.try_get("rental_id")?,
            amount: row.try_get("amount")?,
            payment_date: row.try_get("payment_date")?,
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.amount, Nullable(&self.payment_date))
    }
}
