use crate::{DbErr, EntitySchemaInfo};
use serde::{Deserialize, Serialize};

/// A serializable summary of a schema: every table with its columns, in registration order.
///
/// The table and column names are the persisted layout, so a manifest checked in
/// alongside the code pins it against accidental renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaManifest {
    /// Tables in registration order
    pub tables: Vec<TableManifest>,
}

/// A table of a [SchemaManifest]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableManifest {
    /// Table name
    pub name: String,
    /// Columns in declaration order
    pub columns: Vec<ColumnManifest>,
}

/// A column of a [TableManifest]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnManifest {
    /// Column name
    pub name: String,
    /// Semantic type, e.g. `integer` or `string(50)`
    #[serde(rename = "type")]
    pub column_type: String,
    #[allow(missing_docs)]
    pub nullable: bool,
    #[allow(missing_docs)]
    pub primary_key: bool,
    #[allow(missing_docs)]
    pub auto_increment: bool,
    /// The referenced column as `table.column`
    pub references: Option<String>,
}

impl SchemaManifest {
    pub(crate) fn new(entities: &[EntitySchemaInfo]) -> Self {
        Self {
            tables: entities.iter().map(TableManifest::from).collect(),
        }
    }

    /// Find a table by name
    pub fn table(&self, name: &str) -> Option<&TableManifest> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Serialize as pretty printed JSON
    pub fn to_json(&self) -> Result<String, DbErr> {
        serde_json::to_string_pretty(self).map_err(|e| DbErr::Custom(e.to_string()))
    }

    /// Parse a manifest previously written by [`SchemaManifest::to_json`]
    pub fn from_json(json: &str) -> Result<Self, DbErr> {
        serde_json::from_str(json).map_err(|e| DbErr::Custom(e.to_string()))
    }
}

impl TableManifest {
    /// Find a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnManifest> {
        self.columns.iter().find(|col| col.name == name)
    }
}

impl From<&EntitySchemaInfo> for TableManifest {
    fn from(entity: &EntitySchemaInfo) -> Self {
        Self {
            name: entity.table_name.to_owned(),
            columns: entity
                .columns
                .iter()
                .map(|col| ColumnManifest {
                    name: col.name.to_owned(),
                    column_type: col.def.get_column_type().to_string(),
                    nullable: col.def.is_null(),
                    primary_key: col.def.is_primary_key(),
                    auto_increment: col.def.is_auto_increment(),
                    references: col.def.get_references().map(ToString::to_string),
                })
                .collect(),
        }
    }
}
