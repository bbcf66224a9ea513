use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Hire inquiry. Starts in `inprocess` while the client fills the form;
/// the first full update flips it to `unread` and triggers the emails.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "hire_requests")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub linkedin_url: Option<String>,
    pub notes: Option<String>,
    pub project_desc: Option<String>,
    pub estimate_budget: Option<String>,
    pub timeline: Option<String>,
    pub core_features: Json,
    pub tech_suggestion: Json,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::file_documents::Entity")]
    FileDocuments,
}

impl Related<super::file_documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FileDocuments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
