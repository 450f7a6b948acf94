use crate::{DbErr, EntityTrait};
use sea_query::{Value, ValueType};
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};

/// A Model is a row instance of an Entity, with a human-readable [Display] used for logging
pub trait ModelTrait: Clone + Debug + Display {
    #[allow(missing_docs)]
    type Entity: EntityTrait;

    /// Read the Model out of a [Row]
    fn from_row(row: &Row) -> Result<Self, DbErr>;
}

/// The values of one row, keyed by column name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: BTreeMap<String, Value>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the value of a column, replacing any previous value
    pub fn insert<C, V>(&mut self, col: C, value: V)
    where
        C: Into<String>,
        V: Into<Value>,
    {
        self.values.insert(col.into(), value.into());
    }

    /// Get the raw value of a column
    pub fn get(&self, col: &str) -> Option<&Value> {
        self.values.get(col)
    }

    /// Get the value of a column as the target type.
    /// A missing column, or a value not convertible to `T`, is a [DbErr::Type]
    pub fn try_get<T>(&self, col: &str) -> Result<T, DbErr>
    where
        T: ValueType,
    {
        let value = self
            .values
            .get(col)
            .ok_or_else(|| DbErr::Type(format!("column `{col}` is not in the row")))?;
        <T as ValueType>::try_from(value.clone()).map_err(|_| {
            DbErr::Type(format!(
                "column `{col}` cannot be read as `{}`",
                T::type_name()
            ))
        })
    }

    /// Iterate over column names and values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<C, V> FromIterator<(C, V)> for Row
where
    C: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(col, value)| (col.into(), value.into()))
                .collect(),
        }
    }
}

/// Displays a nullable field, rendering `None` as `NULL`
#[derive(Debug, Clone, Copy)]
pub struct Nullable<'a, T>(pub &'a Option<T>);

impl<T> Display for Nullable<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("NULL"),
        }
    }
}

pub(crate) fn is_null(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::TinyUnsigned(None)
            | Value::SmallUnsigned(None)
            | Value::Unsigned(None)
            | Value::BigUnsigned(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::String(None)
            | Value::Char(None)
            | Value::Bytes(None)
            | Value::ChronoDate(None)
            | Value::ChronoTime(None)
            | Value::ChronoDateTime(None)
            | Value::ChronoDateTimeUtc(None)
            | Value::ChronoDateTimeLocal(None)
            | Value::ChronoDateTimeWithTimeZone(None)
    )
}
