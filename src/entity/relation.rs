use crate::ColumnRef;
use std::fmt;

/// A foreign key from one Entity's column to another Entity's identity column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationDef {
    /// The table holding the foreign key
    pub from_tbl: &'static str,
    /// The foreign key column
    pub from_col: &'static str,
    /// The referenced table
    pub to_tbl: &'static str,
    /// The referenced column
    pub to_col: &'static str,
}

impl RelationDef {
    pub(crate) fn new(from_tbl: &'static str, from_col: &'static str, to: ColumnRef) -> Self {
        Self::from_parts(from_tbl, from_col, to.table, to.column)
    }

    /// Construct a relation from table and column names
    pub fn from_parts(
        from_tbl: &'static str,
        from_col: &'static str,
        to_tbl: &'static str,
        to_col: &'static str,
    ) -> Self {
        Self {
            from_tbl,
            from_col,
            to_tbl,
            to_col,
        }
    }

    /// Name of the foreign key constraint
    pub fn fk_name(&self) -> String {
        format!("fk-{}-{}", self.from_tbl, self.from_col)
    }

    /// Returns true if the table references itself
    pub fn is_self_referencing(&self) -> bool {
        self.from_tbl == self.to_tbl
    }
}

impl fmt::Display for RelationDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.from_tbl, self.from_col, self.to_tbl, self.to_col
        )
    }
}

#[cfg(test)]
mod tests {
    use super::RelationDef;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fk_name() {
        let rel = RelationDef::from_parts("film_category", "film_id", "film", "id");
        assert_eq!(rel.fk_name(), "fk-film_category-film_id");
        assert_eq!(rel.to_string(), "film_category.film_id -> film.id");
        assert!(!rel.is_self_referencing());
    }
}
