//! ConfigurationFiles entity
//!
//! Named configuration files, upserted by name.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ConfigurationFiles")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "Name",
        column_type = "String(StringLen::N(64))"
    )]
    pub name: String,
    #[sea_orm(column_name = "Data", column_type = "Text")]
    pub data: String,
    #[sea_orm(column_name = "CreateAt")]
    pub create_at: i64,
    #[sea_orm(column_name = "UpdateAt")]
    pub update_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
