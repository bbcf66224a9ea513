use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "experiences")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub starting_date: chrono::DateTime<chrono::Utc>,
    /// None means a current position.
    pub ending_date: Option<chrono::DateTime<chrono::Utc>>,
    pub description: Option<String>,
    pub key_achievements: Json,
    pub technologies: Json,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
