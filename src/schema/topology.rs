//! Orders tables so that every table is created after the tables it references.

use crate::{EntitySchemaInfo, RelationDef};
use std::collections::HashSet;
use tracing::warn;

/// The order in which tables are created, and the foreign keys that must wait until all exist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationPlan {
    /// Table names, in creation order
    pub order: Vec<&'static str>,
    /// Foreign keys whose target is created after their table, because the two
    /// sit on a reference cycle
    pub deferred: Vec<RelationDef>,
}

impl CreationPlan {
    /// Sort `entities` by their foreign keys.
    ///
    /// Ties are broken by registration order. When every remaining table waits on
    /// another, the cycle is broken at the table (on a cycle) with the fewest unmet
    /// references, and those references are deferred. Self references and
    /// references to unregistered tables never hold a table back.
    pub fn new(entities: &[EntitySchemaInfo]) -> Self {
        let registered: HashSet<&str> = entities.iter().map(|e| e.table_name).collect();
        let dependencies: Vec<Vec<&'static str>> = entities
            .iter()
            .map(|entity| {
                let mut deps = Vec::new();
                for rel in entity.relations() {
                    if !rel.is_self_referencing()
                        && registered.contains(rel.to_tbl)
                        && !deps.contains(&rel.to_tbl)
                    {
                        deps.push(rel.to_tbl);
                    }
                }
                deps
            })
            .collect();

        let mut plan = CreationPlan::default();
        let mut created: HashSet<&str> = HashSet::new();
        let mut remaining: Vec<usize> = (0..entities.len()).collect();

        while !remaining.is_empty() {
            let unmet = |i: usize| -> Vec<&'static str> {
                dependencies[i]
                    .iter()
                    .copied()
                    .filter(|dep| !created.contains(dep))
                    .collect()
            };

            let next = match remaining.iter().position(|&i| unmet(i).is_empty()) {
                Some(pos) => pos,
                None => {
                    let pending: HashSet<&str> =
                        remaining.iter().map(|&i| entities[i].table_name).collect();
                    let on_cycle = |i: usize| {
                        let table = entities[i].table_name;
                        reaches(table, table, entities, &dependencies, &pending)
                    };
                    remaining
                        .iter()
                        .enumerate()
                        .filter(|&(_, &i)| on_cycle(i))
                        .min_by_key(|&(_, &i)| unmet(i).len())
                        .or_else(|| {
                            remaining
                                .iter()
                                .enumerate()
                                .min_by_key(|&(_, &i)| unmet(i).len())
                        })
                        .map(|(pos, _)| pos)
                        .unwrap_or(0)
                }
            };

            let i = remaining.remove(next);
            let entity = &entities[i];
            for rel in entity.relations() {
                if !rel.is_self_referencing()
                    && registered.contains(rel.to_tbl)
                    && !created.contains(rel.to_tbl)
                {
                    warn!("Deferring foreign key {} until all tables exist", rel);
                    plan.deferred.push(rel);
                }
            }
            created.insert(entity.table_name);
            plan.order.push(entity.table_name);
        }

        plan
    }
}

/// Whether `to` is reachable from `from` over references among the `pending` tables
fn reaches(
    from: &str,
    to: &str,
    entities: &[EntitySchemaInfo],
    dependencies: &[Vec<&'static str>],
    pending: &HashSet<&str>,
) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![from];
    while let Some(table) = stack.pop() {
        let Some(i) = entities.iter().position(|e| e.table_name == table) else {
            continue;
        };
        for &dep in dependencies[i].iter() {
            if !pending.contains(dep) {
                continue;
            }
            if dep == to {
                return true;
            }
            if visited.insert(dep) {
                stack.push(dep);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::CreationPlan;
    use crate::{sakila, EntityTrait, RelationDef};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_acyclic_order() {
        let entities = [
            sakila::Address::schema_info(),
            sakila::City::schema_info(),
            sakila::Country::schema_info(),
        ];
        assert_eq!(
            CreationPlan::new(&entities),
            CreationPlan {
                order: vec!["country", "city", "address"],
                deferred: vec![],
            }
        );
    }

    #[test]
    fn test_independent_tables_keep_registration_order() {
        let entities = [
            sakila::Language::schema_info(),
            sakila::Category::schema_info(),
            sakila::Actor::schema_info(),
        ];
        assert_eq!(
            CreationPlan::new(&entities).order,
            ["language", "category", "actor"]
        );
    }

    #[test]
    fn test_cycle_is_deferred() {
        let entities = [
            sakila::Store::schema_info(),
            sakila::Staff::schema_info(),
            sakila::Address::schema_info(),
        ];
        // city is not registered, so address is free to go first
        assert_eq!(
            CreationPlan::new(&entities),
            CreationPlan {
                order: vec!["address", "store", "staff"],
                deferred: vec![RelationDef::from_parts(
                    "store",
                    "manager_staff_id",
                    "staff",
                    "staff_id"
                )],
            }
        );
    }

    #[test]
    fn test_blocked_table_is_not_mistaken_for_cycle() {
        // inventory waits on store, but only store and staff reference each other
        let entities = [
            sakila::Inventory::schema_info(),
            sakila::Film::schema_info(),
            sakila::Staff::schema_info(),
            sakila::Store::schema_info(),
        ];
        let plan = CreationPlan::new(&entities);
        assert_eq!(plan.order, ["film", "staff", "store", "inventory"]);
        assert_eq!(
            plan.deferred,
            [RelationDef::from_parts("staff", "store_id", "store", "store_id")]
        );
    }
}
