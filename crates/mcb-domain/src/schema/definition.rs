//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md)
//!
use super::types::{ForeignKeyDef, FtsDef, IndexDef, Schema, TableDef, UniqueConstraintDef};

use super::{collections, observations, session_summaries};

struct SchemaEntry {
    table: fn() -> TableDef,
    indexes: fn() -> Vec<IndexDef>,
    foreign_keys: fn() -> Vec<ForeignKeyDef>,
    unique_constraints: fn() -> Vec<UniqueConstraintDef>,
}

/// Build a [`SchemaEntry`] from a legacy schema module (4 free functions).
macro_rules! from_module {
    ($module:ident) => {
        SchemaEntry {
            table: $module::table,
            indexes: $module::indexes,
            foreign_keys: $module::foreign_keys,
            unique_constraints: $module::unique_constraints,
        }
    };
}

const SCHEMA_ENTRIES: &[SchemaEntry] = &[
    from_module!(observations),
    from_module!(collections),
    from_module!(session_summaries),
];

impl Schema {
    /// Build the canonical full schema definition.
    #[must_use]
    pub fn definition() -> Self {
        Self {
            tables: Self::tables(),
            fts: Self::fts_def(),
            indexes: Self::indexes(),
            foreign_keys: Self::foreign_keys(),
            unique_constraints: Self::unique_constraints(),
        }
    }

    fn tables() -> Vec<TableDef> {
        SCHEMA_ENTRIES.iter().map(|entry| (entry.table)()).collect()
    }

    fn fts_def() -> Option<FtsDef> {
        Some(FtsDef {
            virtual_table_name: "observations_fts".to_owned(),
            content_table: "observations".to_owned(),
            content_columns: vec!["content".to_owned()],
            id_column: "id".to_owned(),
        })
    }

    fn indexes() -> Vec<IndexDef> {
        SCHEMA_ENTRIES
            .iter()
            .flat_map(|entry| (entry.indexes)().into_iter())
            .collect()
    }

    fn foreign_keys() -> Vec<ForeignKeyDef> {
        SCHEMA_ENTRIES
            .iter()
            .flat_map(|entry| (entry.foreign_keys)().into_iter())
            .collect()
    }

    fn unique_constraints() -> Vec<UniqueConstraintDef> {
        SCHEMA_ENTRIES
            .iter()
            .flat_map(|entry| (entry.unique_constraints)().into_iter())
            .collect()
    }
}
