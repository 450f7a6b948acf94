use super::model::is_null;
use crate::{ColumnTrait, DbErr, EntityName, EntityTrait, Iterable, ModelTrait, Row};
use sea_query::{Alias, InsertStatement, Query, SimpleExpr, Value};

/// A new row of an Entity being prepared for insertion.
///
/// Only the values the caller sets are carried. Required columns are checked
/// by [`ActiveRow::validate`] before any statement is produced; everything else
/// (types, lengths, referential integrity) is left to the database.
#[derive(Debug, Clone)]
pub struct ActiveRow<E>
where
    E: EntityTrait,
{
    entity: E,
    values: Vec<(E::Column, Value)>,
}

impl<E> Default for ActiveRow<E>
where
    E: EntityTrait,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ActiveRow<E>
where
    E: EntityTrait,
{
    /// Create a row with no values set
    pub fn new() -> Self {
        Self {
            entity: E::default(),
            values: Vec::new(),
        }
    }

    /// Set the value of a column, replacing any previous value.
    /// Numbers are widened to the column's type, see [`ColumnType::coerce`](crate::ColumnType::coerce)
    pub fn set<V>(mut self, col: E::Column, value: V) -> Self
    where
        V: Into<Value>,
    {
        let value = col.def().get_column_type().coerce(value.into());
        match self
            .values
            .iter_mut()
            .find(|(c, _)| c.as_str() == col.as_str())
        {
            Some((_, v)) => *v = value,
            None => self.values.push((col, value)),
        }
        self
    }

    /// Get the value set for a column
    pub fn get(&self, col: E::Column) -> Option<&Value> {
        self.values
            .iter()
            .find(|(c, _)| c.as_str() == col.as_str())
            .map(|(_, v)| v)
    }

    /// Check that every `NOT NULL` column not assigned by the database carries a value
    pub fn validate(&self) -> Result<(), DbErr> {
        for col in E::Column::iter() {
            let def = col.def();
            if def.is_null() || def.is_auto_increment() {
                continue;
            }
            match self.get(col) {
                Some(value) if !is_null(value) => {}
                _ => {
                    return Err(DbErr::MissingValue {
                        table: self.entity.table_name(),
                        column: col.as_str(),
                    })
                }
            }
        }
        Ok(())
    }

    /// Validate the row and build the `INSERT` statement for it
    pub fn into_insert_statement(self) -> Result<InsertStatement, DbErr> {
        self.validate()?;
        let mut columns = Vec::with_capacity(self.values.len());
        let mut values = Vec::with_capacity(self.values.len());
        // keep declaration order so the statement is deterministic
        for col in E::Column::iter() {
            if let Some(value) = self.get(col) {
                columns.push(Alias::new(col.as_str()));
                values.push(SimpleExpr::Value(value.clone()));
            }
        }
        let mut stmt = Query::insert();
        stmt.into_table(Alias::new(self.entity.table_name()))
            .columns(columns)
            .values(values)?;
        Ok(stmt)
    }

    /// Materialize the Model once the row is stored, given the identity the database assigned.
    ///
    /// Unset nullable columns read as `None`.
    pub fn into_model(self, identity: Option<i32>) -> Result<E::Model, DbErr> {
        self.validate()?;
        let mut row = Row::new();
        for col in E::Column::iter() {
            let def = col.def();
            let value = match (self.get(col), identity) {
                (Some(value), _) => value.clone(),
                (None, Some(id)) if def.is_auto_increment() => Value::Int(Some(id)),
                (None, None) if def.is_auto_increment() => {
                    return Err(DbErr::MissingValue {
                        table: self.entity.table_name(),
                        column: col.as_str(),
                    })
                }
                (None, _) => def.get_column_type().null_value(),
            };
            row.insert(col.as_str(), value);
        }
        <E::Model as ModelTrait>::from_row(&row)
    }
}

#[cfg(test)]
mod tests {
    use crate::sakila::{address, country, film_category, payment};
    use crate::{DbBackend, DbErr, EntityTrait};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_country_display_after_identity_assigned() -> Result<(), DbErr> {
        let country = country::Entity::insert()
            .set(country::Column::Country, "Canada")
            .into_model(Some(1))?;

        assert_eq!(country.country_id, 1);
        assert_eq!(country.last_update, None);
        assert_eq!(country.to_string(), "Canada");
        Ok(())
    }

    #[test]
    fn test_identity_not_assigned() {
        assert_eq!(
            country::Entity::insert()
                .set(country::Column::Country, "Canada")
                .into_model(None)
                .err(),
            Some(DbErr::MissingValue {
                table: "country",
                column: "country_id",
            })
        );
    }

    #[test]
    fn test_address_requires_address() {
        let row = address::Entity::insert()
            .set(address::Column::Address2, "")
            .set(address::Column::District, "Alberta")
            .set(address::Column::CityId, 300)
            .set(address::Column::PostalCode, "T2P 1J9")
            .set(address::Column::Phone, "403-555-0100");

        assert_eq!(
            row.clone().into_insert_statement().err(),
            Some(DbErr::MissingValue {
                table: "address",
                column: "address",
            })
        );

        let stmt = row
            .set(address::Column::Address, "47 MySakila Drive")
            .into_insert_statement();
        assert!(stmt.is_ok());
    }

    #[test]
    fn test_explicit_null_is_rejected() {
        assert_eq!(
            country::Entity::insert()
                .set(country::Column::Country, Option::<String>::None)
                .validate(),
            Err(DbErr::MissingValue {
                table: "country",
                column: "country",
            })
        );
    }

    #[test]
    fn test_set_replaces_value() {
        let row = country::Entity::insert()
            .set(country::Column::Country, "Canda")
            .set(country::Column::Country, "Canada");
        assert_eq!(
            row.get(country::Column::Country),
            Some(&sea_query::Value::from("Canada"))
        );
    }

    #[test]
    fn test_insert_statement() -> Result<(), DbErr> {
        let stmt = film_category::Entity::insert()
            .set(film_category::Column::CategoryId, 6)
            .set(film_category::Column::FilmId, 1)
            .into_insert_statement()?;

        assert_eq!(
            DbBackend::Sqlite.build(&stmt).to_string(),
            r#"INSERT INTO "film_category" ("film_id", "category_id") VALUES (1, 6)"#
        );
        assert_eq!(
            DbBackend::MySql.build(&stmt).to_string(),
            "INSERT INTO `film_category` (`film_id`, `category_id`) VALUES (1, 6)"
        );
        Ok(())
    }

    #[test]
    fn test_numbers_widen_to_column_type() -> Result<(), DbErr> {
        let amount = payment::Entity::insert()
            .set(payment::Column::Amount, 3)
            .into_model(Some(1))?;
        assert_eq!(amount.amount, 3.0);
        assert_eq!(amount.to_string(), "3, NULL");

        let amount = payment::Entity::insert()
            .set(payment::Column::Amount, 2.5f32)
            .into_model(Some(2))?;
        assert_eq!(amount.to_string(), "2.5, NULL");
        Ok(())
    }
}
