use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Tracked page, upserted by slug on the first view.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "pages")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
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
