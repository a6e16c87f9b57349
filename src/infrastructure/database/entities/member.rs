//! Member entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Member account row.
///
/// Roles are stored as a JSON array string (e.g. `["USER","ADMIN"]`);
/// the survey lives in three nullable columns that are set together.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
    /// Unique member ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Login email, unique across members
    #[sea_orm(unique)]
    pub email: String,

    /// Display name
    pub name: String,

    /// Bcrypt password hash
    pub password_hash: String,

    /// JSON array of role strings
    pub roles: String,

    /// Soft-delete flag
    pub deleted: bool,

    /// Survey: preferred season
    pub survey_season: Option<String>,

    /// Survey: preferred theme
    pub survey_theme: Option<String>,

    /// Survey: travel companion
    pub survey_companion: Option<String>,

    /// When the member registered
    pub created_at: DateTime<Utc>,

    /// When the member was last updated
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlist::Entity")]
    Wishlist,
    #[sea_orm(has_many = "super::order::Entity")]
    Order,
}

impl Related<super::wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
