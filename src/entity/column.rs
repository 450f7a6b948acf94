use crate::EntityName;
use sea_query::Value;
use std::fmt::{self, Debug};
use strum::IntoEnumIterator;

/// The semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// A 32-bit signed integer
    Integer,
    /// A double precision floating-point number
    Float,
    /// Text bounded by a maximum length
    String(u32),
    /// A date and time without time zone
    DateTime,
    /// A boolean
    Boolean,
}

impl ColumnType {
    /// Start a nullable [ColumnDef] of this type
    pub fn def(self) -> ColumnDef {
        ColumnDef {
            col_type: self,
            null: true,
            primary_key: false,
            auto_increment: false,
            references: None,
        }
    }

    /// The `NULL` of this type, as understood by SeaQuery
    pub fn null_value(&self) -> Value {
        match self {
            Self::Integer => Value::Int(None),
            Self::Float => Value::Double(None),
            Self::String(_) => Value::String(None),
            Self::DateTime => Value::ChronoDateTime(None),
            Self::Boolean => Value::Bool(None),
        }
    }

    /// Widen a numeric value to the representation of this type.
    /// Integers become `Int` (or `Double` for a float column); anything else is returned as is.
    pub fn coerce(&self, value: Value) -> Value {
        match (self, value) {
            (Self::Integer, Value::TinyInt(v)) => Value::Int(v.map(i32::from)),
            (Self::Integer, Value::SmallInt(v)) => Value::Int(v.map(i32::from)),
            (Self::Integer, Value::TinyUnsigned(v)) => Value::Int(v.map(i32::from)),
            (Self::Integer, Value::SmallUnsigned(v)) => Value::Int(v.map(i32::from)),
            (Self::Float, Value::TinyInt(v)) => Value::Double(v.map(f64::from)),
            (Self::Float, Value::SmallInt(v)) => Value::Double(v.map(f64::from)),
            (Self::Float, Value::Int(v)) => Value::Double(v.map(f64::from)),
            (Self::Float, Value::TinyUnsigned(v)) => Value::Double(v.map(f64::from)),
            (Self::Float, Value::SmallUnsigned(v)) => Value::Double(v.map(f64::from)),
            (Self::Float, Value::Unsigned(v)) => Value::Double(v.map(f64::from)),
            (Self::Float, Value::Float(v)) => Value::Double(v.map(f64::from)),
            (_, value) => value,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::String(len) => write!(f, "string({len})"),
            Self::DateTime => write!(f, "timestamp"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// The identity column of another entity that a column points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Table of the referenced entity
    pub table: &'static str,
    /// The referenced column
    pub column: &'static str,
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// Defines a Column for an Entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub(crate) col_type: ColumnType,
    pub(crate) null: bool,
    pub(crate) primary_key: bool,
    pub(crate) auto_increment: bool,
    pub(crate) references: Option<ColumnRef>,
}

impl ColumnDef {
    /// Mark the column as `NOT NULL`
    pub fn not_null(mut self) -> Self {
        self.null = false;
        self
    }

    /// Mark the column as part of the primary key. Key columns are never nullable
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.null = false;
        self
    }

    /// Let the database assign the column's value on insert
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Declare the column a foreign key to the given column of another entity
    pub fn references<C>(mut self, column: C) -> Self
    where
        C: ColumnTrait,
    {
        self.references = Some(ColumnRef {
            table: column.entity_name(),
            column: column.as_str(),
        });
        self
    }

    /// Get [ColumnType] as reference
    pub fn get_column_type(&self) -> &ColumnType {
        &self.col_type
    }

    /// Returns true if the column is nullable
    pub fn is_null(&self) -> bool {
        self.null
    }

    /// Returns true if the column is (part of) the primary key
    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    /// Returns true if the database assigns the column's value
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// The referenced identity column, if this is a foreign key
    pub fn get_references(&self) -> Option<&ColumnRef> {
        self.references.as_ref()
    }
}

/// API for the columns of an Entity, usually a fieldless enum with one variant per column
pub trait ColumnTrait: Copy + Debug + IntoEnumIterator + 'static {
    #[allow(missing_docs)]
    type EntityName: EntityName;

    /// The column name as stored in the database
    fn as_str(&self) -> &'static str;

    /// Define a column for an Entity
    fn def(&self) -> ColumnDef;

    /// Get the name of the entity the column belongs to
    fn entity_name(&self) -> &'static str {
        Self::EntityName::default().table_name()
    }
}
