//!
//! SeaORM entities for SQLite tables, generated from domain schema.
//!
//! Column lists stay in sync with `mcb_domain::schema::*::table()`; tests enforce it.

#[allow(dead_code)]
pub mod organization;
