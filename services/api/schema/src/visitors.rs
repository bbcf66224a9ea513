use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Unique site visitor, keyed by the id stored in the visitor cookie.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "visitors")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub first_visit_at: chrono::DateTime<chrono::Utc>,
    pub last_visit_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::page_views::Entity")]
    PageViews,
}

impl Related<super::page_views::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageViews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
