use super::{CreationPlan, Schema, SchemaManifest};
use crate::{ConnectionTrait, DbErr, EntitySchemaInfo, EntityTrait, Statement};
use itertools::Itertools;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// A registry of Entities that can be validated as a whole and created in a database.
///
/// Built once during startup and handed to [`SchemaBuilder::sync`]; there is no
/// global registry.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    helper: Schema,
    entities: Vec<EntitySchemaInfo>,
}

impl SchemaBuilder {
    /// Creates a new schema builder
    pub fn new(schema: Schema) -> Self {
        Self {
            helper: schema,
            entities: Default::default(),
        }
    }

    /// Register an entity to this schema
    pub fn register<E: EntityTrait>(self, _: E) -> Self {
        self.register_entity(E::schema_info())
    }

    /// Register an entity to this schema, from its type-erased description
    pub fn register_entity(mut self, entity: EntitySchemaInfo) -> Self {
        debug!("Registered {}", entity.table_name);
        self.entities.push(entity);
        self
    }

    /// The registered entities, in registration order
    pub fn entities(&self) -> &[EntitySchemaInfo] {
        &self.entities
    }

    /// Find a registered entity by table name
    pub fn entity(&self, table_name: &str) -> Option<&EntitySchemaInfo> {
        self.entities.iter().find(|e| e.table_name == table_name)
    }

    /// The helper statements are built with
    pub fn helper(&self) -> &Schema {
        &self.helper
    }

    /// Check the definitions against each other: table names are unique, and every
    /// foreign key targets the identity column of a registered entity, with the same type
    pub fn validate(&self) -> Result<(), DbErr> {
        let mut seen = HashSet::new();
        for entity in self.entities.iter() {
            if !seen.insert(entity.table_name) {
                return Err(DbErr::Schema(format!(
                    "table `{}` is registered more than once",
                    entity.table_name
                )));
            }
            let mut columns = HashSet::new();
            for column in entity.columns.iter() {
                if !columns.insert(column.name) {
                    return Err(DbErr::Schema(format!(
                        "column `{}`.`{}` is declared more than once",
                        entity.table_name, column.name
                    )));
                }
            }
            if entity.primary_key().is_empty() {
                return Err(DbErr::Schema(format!(
                    "table `{}` has no primary key",
                    entity.table_name
                )));
            }
        }

        for entity in self.entities.iter() {
            for rel in entity.relations() {
                let target = self.entity(rel.to_tbl).ok_or_else(|| {
                    DbErr::Schema(format!("{rel}: table `{}` is not registered", rel.to_tbl))
                })?;
                let to_col = target.column(rel.to_col).ok_or_else(|| {
                    DbErr::Schema(format!(
                        "{rel}: table `{}` has no column `{}`",
                        rel.to_tbl, rel.to_col
                    ))
                })?;
                if target.identity().map(|col| col.name) != Some(rel.to_col) {
                    return Err(DbErr::Schema(format!(
                        "{rel}: `{}`.`{}` is not the identity column of `{}`",
                        rel.to_tbl, rel.to_col, rel.to_tbl
                    )));
                }
                // presence is guaranteed by `relations()`
                let from_col = entity.column(rel.from_col).ok_or_else(|| {
                    DbErr::Schema(format!("{rel}: unknown column `{}`", rel.from_col))
                })?;
                if from_col.def.get_column_type() != to_col.def.get_column_type() {
                    return Err(DbErr::Schema(format!(
                        "{rel}: column types differ ({} vs {})",
                        from_col.def.get_column_type(),
                        to_col.def.get_column_type()
                    )));
                }
            }
        }
        Ok(())
    }

    /// The order tables are created in, see [`CreationPlan::new`]
    pub fn creation_plan(&self) -> CreationPlan {
        CreationPlan::new(&self.entities)
    }

    /// Validate the schema and build every statement needed to create it, in execution order.
    ///
    /// Deferred foreign keys are added with `ALTER TABLE` once all tables exist. SQLite
    /// can't alter foreign keys, but doesn't need their targets to exist either, so
    /// there every foreign key is inlined.
    pub fn statements(&self) -> Result<Vec<Statement>, DbErr> {
        self.validate()?;
        let backend = self.helper.backend();
        let plan = self.creation_plan();
        debug!("Creation order: {}", plan.order.iter().join(", "));
        let inline_all = !backend.support_alter_foreign_key();

        let mut stmts = Vec::with_capacity(self.entities.len() + plan.deferred.len());
        for table_name in plan.order.iter() {
            let entity = self.entity(table_name).ok_or_else(|| {
                DbErr::Schema(format!("table `{table_name}` is not registered"))
            })?;
            let stmt = self
                .helper
                .create_table(entity, |rel| inline_all || !plan.deferred.contains(rel));
            stmts.push(backend.build(&stmt));
        }
        if !inline_all {
            for rel in plan.deferred.iter() {
                stmts.push(backend.build(&self.helper.create_foreign_key(rel)));
            }
        }
        Ok(stmts)
    }

    /// Create every registered table in the database.
    ///
    /// A schema failing [`SchemaBuilder::validate`] is rejected before anything is executed.
    /// Otherwise statements run in order and the first failure aborts the sync.
    /// Tables are created `IF NOT EXISTS`; foreign keys added by `ALTER TABLE` are not,
    /// so on PostgreSQL and MySQL a schema with reference cycles syncs into an empty database only.
    #[instrument(level = "debug", skip_all)]
    pub async fn sync<C>(self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let db_backend = db.get_database_backend();
        if db_backend != self.helper.backend() {
            return Err(DbErr::Schema(format!(
                "schema is built for {:?} but the connection is {:?}",
                self.helper.backend(),
                db_backend
            )));
        }
        for stmt in self.statements()? {
            debug!("{}", stmt);
            db.execute(stmt).await?;
        }
        Ok(())
    }

    /// A serializable summary of every registered table, see [`SchemaManifest`]
    pub fn manifest(&self) -> SchemaManifest {
        SchemaManifest::new(&self.entities)
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaBuilder;
    use crate::sakila::{self, city, country};
    use crate::{
        ColumnDef, ColumnInfo, ColumnType, DbBackend, DbErr, EntitySchemaInfo, EntityTrait,
        RelationDef, Schema,
    };
    use pretty_assertions::assert_eq;

    fn builder() -> SchemaBuilder {
        SchemaBuilder::new(Schema::new(DbBackend::Postgres))
    }

    #[test]
    fn test_sakila_is_consistent() {
        for backend in [DbBackend::MySql, DbBackend::Postgres, DbBackend::Sqlite] {
            assert_eq!(sakila::schema(backend).validate(), Ok(()));
        }
    }

    #[test]
    fn test_unregistered_target() {
        let schema = builder().register(sakila::City);
        assert_eq!(
            schema.validate(),
            Err(DbErr::Schema(
                "city.country_id -> country.country_id: table `country` is not registered"
                    .to_owned()
            ))
        );
        assert!(schema.statements().is_err());
    }

    #[test]
    fn test_duplicate_table() {
        let schema = builder().register(sakila::Country).register(sakila::Country);
        assert_eq!(
            schema.validate(),
            Err(DbErr::Schema(
                "table `country` is registered more than once".to_owned()
            ))
        );
    }

    #[test]
    fn test_target_must_be_identity() {
        let mut info = city::Entity::schema_info();
        info.columns[2].def = ColumnType::Integer.def().references(country::Column::Country);
        let schema = builder().register(sakila::Country).register_entity(info);
        assert_eq!(
            schema.validate(),
            Err(DbErr::Schema(
                "city.country_id -> country.country: `country`.`country` is not the identity column of `country`"
                    .to_owned()
            ))
        );
    }

    #[test]
    fn test_target_column_missing() {
        let info = EntitySchemaInfo {
            table_name: "film_text",
            columns: vec![
                ColumnInfo {
                    name: "film_id",
                    def: ColumnType::Integer.def().primary_key(),
                },
                ColumnInfo {
                    name: "language_id",
                    def: ColumnDef {
                        references: Some(crate::ColumnRef {
                            table: "language",
                            column: "id",
                        }),
                        ..ColumnType::Integer.def()
                    },
                },
            ],
            describe: sakila::Language::describe,
        };
        let schema = builder().register(sakila::Language).register_entity(info);
        assert_eq!(
            schema.validate(),
            Err(DbErr::Schema(
                "film_text.language_id -> language.id: table `language` has no column `id`"
                    .to_owned()
            ))
        );
    }

    #[test]
    fn test_type_mismatch() {
        let mut info = city::Entity::schema_info();
        info.columns[2].def = ColumnType::String(50)
            .def()
            .references(country::Column::CountryId);
        let schema = builder().register(sakila::Country).register_entity(info);
        assert_eq!(
            schema.validate(),
            Err(DbErr::Schema(
                "city.country_id -> country.country_id: column types differ (string(50) vs integer)"
                    .to_owned()
            ))
        );
    }

    #[test]
    fn test_sakila_creation_plan() {
        let plan = sakila::schema(DbBackend::Postgres).creation_plan();
        assert_eq!(
            plan.order,
            [
                "category",
                "language",
                "film",
                "film_category",
                "actor",
                "film_actor",
                "country",
                "city",
                "address",
                "staff",
                "store",
                "inventory",
                "rental",
                "customer",
                "payment",
            ]
        );
        assert_eq!(
            plan.deferred,
            [
                RelationDef::from_parts("staff", "store_id", "store", "store_id"),
                RelationDef::from_parts("rental", "customer_id", "customer", "customer_id"),
            ]
        );
    }

    #[test]
    fn test_statements_postgres() -> Result<(), DbErr> {
        let schema = sakila::schema(DbBackend::Postgres);
        let helper = *schema.helper();
        let stmts = schema.statements()?;
        assert_eq!(stmts.len(), 17);

        assert_eq!(
            stmts[9],
            DbBackend::Postgres.build(&helper.create_table(
                &sakila::Staff::schema_info(),
                |rel| rel.to_tbl != "store"
            ))
        );
        assert_eq!(
            stmts[15],
            DbBackend::Postgres.build(&helper.create_foreign_key(&RelationDef::from_parts(
                "staff", "store_id", "store", "store_id"
            )))
        );
        assert!(stmts[15].sql.starts_with("ALTER TABLE"));
        assert!(stmts[16].sql.contains("fk-rental-customer_id"));
        Ok(())
    }

    #[test]
    fn test_statements_sqlite_inline_every_foreign_key() -> Result<(), DbErr> {
        let schema = sakila::schema(DbBackend::Sqlite);
        let helper = *schema.helper();
        let stmts = schema.statements()?;
        assert_eq!(stmts.len(), 15);
        assert!(stmts.iter().all(|stmt| stmt.sql.starts_with("CREATE TABLE")));
        assert_eq!(
            stmts[9],
            DbBackend::Sqlite.build(&helper.create_table_from_entity(&sakila::Staff::schema_info()))
        );
        Ok(())
    }
}
