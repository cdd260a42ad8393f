//! Configurations entity
//!
//! Append-only history of configuration documents. At most one row holds
//! `Active = TRUE`; every other row holds `NULL`, and the unique constraint on
//! the column enforces that at the storage layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Configurations")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "Id",
        column_type = "String(StringLen::N(32))"
    )]
    pub id: String,
    /// Serialized configuration document
    #[sea_orm(column_name = "Value", column_type = "Text")]
    pub value: String,
    /// Epoch milliseconds
    #[sea_orm(column_name = "CreateAt")]
    pub create_at: i64,
    #[sea_orm(column_name = "Active", unique)]
    pub active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
