use crate::{ActiveRow, ColumnDef, ColumnTrait, DbErr, Iterable, ModelTrait, RelationDef, Row};
use std::fmt::Debug;

/// The name of the table an Entity is bound to. Binding is by exact name
pub trait EntityName: Copy + Default + Debug + 'static {
    /// Get the name of the table
    fn table_name(&self) -> &'static str;
}

/// An abstract base class for defining Entities.
///
/// This trait provides an API for you to inspect its properties
/// - Column (implemented [`ColumnTrait`])
/// - Model (implemented [`ModelTrait`])
///
/// Everything else (primary key, relations, the schema record handed to a
/// [`SchemaBuilder`](crate::SchemaBuilder)) is derived from the column definitions.
pub trait EntityTrait: EntityName {
    #[allow(missing_docs)]
    type Model: ModelTrait<Entity = Self>;

    #[allow(missing_docs)]
    type Column: ColumnTrait<EntityName = Self>;

    /// Columns forming the primary key, in declaration order
    fn primary_key() -> Vec<Self::Column> {
        Self::Column::iter()
            .filter(|col| col.def().is_primary_key())
            .collect()
    }

    /// The foreign keys declared on this Entity, in declaration order
    fn relations() -> Vec<RelationDef> {
        let from_tbl = Self::default().table_name();
        Self::Column::iter()
            .filter_map(|col| {
                col.def()
                    .get_references()
                    .map(|to| RelationDef::new(from_tbl, col.as_str(), *to))
            })
            .collect()
    }

    /// Type-erased description of this Entity, as consumed by the schema registry
    fn schema_info() -> EntitySchemaInfo {
        EntitySchemaInfo {
            table_name: Self::default().table_name(),
            columns: Self::Column::iter()
                .map(|col| ColumnInfo {
                    name: col.as_str(),
                    def: col.def(),
                })
                .collect(),
            describe: Self::describe,
        }
    }

    /// Render a stored row the way the Entity's [`Model`](EntityTrait::Model) displays itself
    fn describe(row: &Row) -> Result<String, DbErr> {
        Ok(Self::Model::from_row(row)?.to_string())
    }

    /// Start preparing a new row for this Entity
    fn insert() -> ActiveRow<Self> {
        ActiveRow::new()
    }
}

/// A named column of an [`EntitySchemaInfo`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name
    pub name: &'static str,
    /// Column definition
    pub def: ColumnDef,
}

/// Everything the schema layer needs to know about an Entity, with the Rust types erased
#[derive(Debug, Clone)]
pub struct EntitySchemaInfo {
    /// The table the Entity is bound to
    pub table_name: &'static str,
    /// Columns in declaration order
    pub columns: Vec<ColumnInfo>,
    /// The Entity's display formatting, see [`EntityTrait::describe`]
    pub describe: fn(&Row) -> Result<String, DbErr>,
}

impl EntitySchemaInfo {
    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|col| col.name == name)
    }

    /// Columns forming the primary key, in declaration order
    pub fn primary_key(&self) -> Vec<&ColumnInfo> {
        self.columns
            .iter()
            .filter(|col| col.def.is_primary_key())
            .collect()
    }

    /// The single auto-generated identity column, if the Entity has one
    pub fn identity(&self) -> Option<&ColumnInfo> {
        match self.primary_key().as_slice() {
            [col] if col.def.is_auto_increment() => Some(*col),
            _ => None,
        }
    }

    /// The foreign keys declared on this Entity, in declaration order
    pub fn relations(&self) -> Vec<RelationDef> {
        self.columns
            .iter()
            .filter_map(|col| {
                col.def
                    .get_references()
                    .map(|to| RelationDef::new(self.table_name, col.name, *to))
            })
            .collect()
    }
}
