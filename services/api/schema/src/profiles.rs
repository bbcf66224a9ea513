use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Site-owner profile. Effectively a singleton: the service upserts one row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "profiles")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub description: Option<String>,
    pub resume_url: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub working_hour: Option<String>,
    pub avatar_url: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
