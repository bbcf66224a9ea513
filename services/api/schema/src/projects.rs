use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Portfolio project. Tech lists are JSON arrays of strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub frontend_techs: Json,
    pub backend_techs: Json,
    pub devops_techs: Json,
    pub others_techs: Json,
    pub is_featured: bool,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub image_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
