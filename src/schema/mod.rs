use crate::{DbBackend, EntitySchemaInfo, RelationDef};
use sea_query::{
    Alias, ColumnDef, ForeignKey, ForeignKeyCreateStatement, Index, Table, TableCreateStatement,
};

mod builder;
mod manifest;
mod topology;

pub use builder::*;
pub use manifest::*;
pub use topology::*;

/// This is a helper struct to convert [`EntitySchemaInfo`]
/// into different [`sea_query`](crate::sea_query) statements.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    backend: DbBackend,
}

impl Schema {
    /// Create a helper for a specific database backend
    pub fn new(backend: DbBackend) -> Self {
        Self { backend }
    }

    /// The backend statements are built for
    pub fn backend(&self) -> DbBackend {
        self.backend
    }

    /// Creates a table from an Entity, with every foreign key inlined.
    /// See [TableCreateStatement] for more details.
    pub fn create_table_from_entity(&self, entity: &EntitySchemaInfo) -> TableCreateStatement {
        self.create_table(entity, |_| true)
    }

    /// Creates a table from an Entity, inlining only the foreign keys accepted by `inline_fk`
    pub fn create_table<F>(&self, entity: &EntitySchemaInfo, inline_fk: F) -> TableCreateStatement
    where
        F: Fn(&RelationDef) -> bool,
    {
        let mut stmt = Table::create();
        stmt.table(Alias::new(entity.table_name)).if_not_exists();

        let primary_key = entity.primary_key();
        let composite = primary_key.len() > 1;

        for column in entity.columns.iter() {
            let orm_column_def = &column.def;
            let mut column_def = ColumnDef::new(Alias::new(column.name));
            match orm_column_def.get_column_type() {
                crate::ColumnType::Integer => column_def.integer(),
                crate::ColumnType::Float => column_def.double(),
                crate::ColumnType::String(len) => column_def.string_len(*len),
                crate::ColumnType::DateTime => column_def.date_time(),
                crate::ColumnType::Boolean => column_def.boolean(),
            };
            if !orm_column_def.is_null() {
                column_def.not_null();
            }
            if orm_column_def.is_primary_key() && !composite {
                column_def.primary_key();
                if orm_column_def.is_auto_increment() {
                    column_def.auto_increment();
                }
            }
            stmt.col(&mut column_def);
        }

        if composite {
            let mut idx_pk = Index::create();
            for column in primary_key {
                idx_pk.col(Alias::new(column.name));
            }
            stmt.primary_key(
                idx_pk
                    .name(format!("pk-{}", entity.table_name))
                    .primary(),
            );
        }

        for relation in entity.relations() {
            if inline_fk(&relation) {
                stmt.foreign_key(&mut self.create_foreign_key(&relation));
            }
        }

        stmt
    }

    /// Creates a foreign key constraint on its own.
    ///
    /// Built as an `ALTER TABLE`, which SQLite does not support for existing tables;
    /// check [`DbBackend::support_alter_foreign_key`] first.
    pub fn create_foreign_key(&self, relation: &RelationDef) -> ForeignKeyCreateStatement {
        ForeignKey::create()
            .name(relation.fk_name())
            .from(Alias::new(relation.from_tbl), Alias::new(relation.from_col))
            .to(Alias::new(relation.to_tbl), Alias::new(relation.to_col))
            .to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crate::{sakila, sea_query::*, DbBackend, EntityTrait, Schema};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_table_from_entity() {
        for backend in [DbBackend::MySql, DbBackend::Postgres, DbBackend::Sqlite] {
            let schema = Schema::new(backend);
            assert_eq!(
                backend.build(&schema.create_table_from_entity(&sakila::City::schema_info())),
                backend.build(&get_city_stmt())
            );
        }
    }

    #[test]
    fn test_create_table_composite_primary_key() {
        for backend in [DbBackend::MySql, DbBackend::Postgres, DbBackend::Sqlite] {
            let schema = Schema::new(backend);
            assert_eq!(
                backend.build(
                    &schema.create_table_from_entity(&sakila::FilmCategory::schema_info())
                ),
                backend.build(&get_film_category_stmt())
            );
        }
    }

    #[test]
    fn test_create_table_without_foreign_keys() {
        let schema = Schema::new(DbBackend::Postgres);
        let stmt = schema.create_table(&sakila::City::schema_info(), |_| false);
        assert!(stmt.get_foreign_key_create_stmts().is_empty());
        assert_eq!(stmt.get_columns().len(), 4);
    }

    fn get_city_stmt() -> TableCreateStatement {
        Table::create()
            .table(Alias::new("city"))
            .if_not_exists()
            .col(
                ColumnDef::new(Alias::new("city_id"))
                    .integer()
                    .not_null()
                    .primary_key()
                    .auto_increment(),
            )
            .col(ColumnDef::new(Alias::new("city")).string_len(50).not_null())
            .col(ColumnDef::new(Alias::new("country_id")).integer())
            .col(ColumnDef::new(Alias::new("last_update")).date_time())
            .foreign_key(
                ForeignKey::create()
                    .name("fk-city-country_id")
                    .from(Alias::new("city"), Alias::new("country_id"))
                    .to(Alias::new("country"), Alias::new("country_id")),
            )
            .to_owned()
    }

    fn get_film_category_stmt() -> TableCreateStatement {
        Table::create()
            .table(Alias::new("film_category"))
            .if_not_exists()
            .col(ColumnDef::new(Alias::new("film_id")).integer().not_null())
            .col(ColumnDef::new(Alias::new("category_id")).integer().not_null())
            .col(ColumnDef::new(Alias::new("last_update")).date_time())
            .primary_key(
                Index::create()
                    .name("pk-film_category")
                    .col(Alias::new("film_id"))
                    .col(Alias::new("category_id"))
                    .primary(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-film_category-film_id")
                    .from(Alias::new("film_category"), Alias::new("film_id"))
                    .to(Alias::new("film"), Alias::new("id")),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk-film_category-category_id")
                    .from(Alias::new("film_category"), Alias::new("category_id"))
                    .to(Alias::new("category"), Alias::new("id")),
            )
            .to_owned()
    }
}
